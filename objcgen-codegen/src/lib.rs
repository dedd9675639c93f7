//! Shared code generation building blocks for objcgen.
//!
//! This crate is independent of the target language. It provides the
//! pieces every element tree is built from.
//!
//! # Module Organization
//!
//! - [`builder`] - Element trait, ordered containers, comments, indentation
//! - [`pipeline`] - Diagnostics collected while processing artifacts
//! - [`error`] - Errors raised when an element tree is built incorrectly

pub mod builder;
pub mod error;
pub mod pipeline;

pub use builder::{CommentElement, Element, ElementContainer, IndentValue};
pub use error::{Error, Result};
