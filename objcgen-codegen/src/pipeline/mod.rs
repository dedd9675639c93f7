//! Diagnostics for the artifact pipeline.
//!
//! Stages record non-fatal issues (an undecodable input, an artifact that
//! produced no files) as [`Diagnostic`]s instead of failing the run. The
//! caller decides how to surface them.

mod diagnostic;

pub use diagnostic::{Diagnostic, Severity};
