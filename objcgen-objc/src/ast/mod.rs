//! Objective-C element nodes.
//!
//! Every node implements [`objcgen_codegen::Element`]. Containers that only
//! accept certain kinds of children say so in their types: a class body holds
//! [`ClassBodyMember`]s, an implementation holds
//! [`MethodImplementationElement`]s, a method body holds
//! [`StatementElement`]s.

mod class;
mod forward;
mod imports;
mod methods;
mod property;
mod protocol;
mod statements;
mod types;

pub use class::{ClassBodyMember, ClassDeclarationElement, ClassImplementationElement, ROOT_CLASS};
pub use forward::{ForwardDeclarationElement, ForwardKind};
pub use imports::{ImportElement, ImportKind};
pub use methods::{MethodDeclarationElement, MethodImplementationElement, MethodSelectorFragment};
pub use objcgen_codegen::CommentElement;
pub use property::{MemoryManagement, PropertyElement};
pub use protocol::{ProtocolElement, ROOT_PROTOCOL};
pub use statements::{Expr, MethodCall, StatementElement};
pub use types::TypeRef;
