//! Element tree building blocks.
//!
//! - [`Element`] - The single capability every node shares: render to text
//! - [`ElementContainer`] - Ordered, joinable list of child elements
//! - [`CommentElement`] - Verbatim text
//! - [`IndentValue`] - Immutable indentation depth for statement bodies

mod container;
mod element;
mod indent;

pub use container::ElementContainer;
pub use element::{CommentElement, Element};
pub use indent::IndentValue;
