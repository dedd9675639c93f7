//! Core utilities and types for objcgen.
//!
//! This crate provides the pieces shared by every other crate in the
//! workspace: optional-value combinators, the [`Artifact`] unit of work and
//! writing generated files to disk.

mod artifact;
mod file;
pub mod maybe;
mod source;

// Units of work
pub use artifact::{Artifact, DecodeError};
// File operations
pub use file::GeneratedFile;
pub use source::read_artifacts;
