//! Core operations.
//!
//! This module contains the business logic for objcgen commands,
//! separated from CLI argument parsing and output rendering.

pub mod check;
pub mod generate;

pub use check::check;
pub use generate::{GenerateOptions, generate};

use objcgen_codegen::pipeline::{Diagnostic, Severity};

/// Diagnostic messages split by severity.
#[derive(Debug, Default)]
struct Messages {
    errors: Vec<String>,
    warnings: Vec<String>,
    infos: Vec<String>,
}

impl Messages {
    fn collect(diagnostics: &[Diagnostic]) -> Self {
        let mut messages = Self::default();
        for diag in diagnostics {
            let msg = match &diag.location {
                Some(loc) => format!("{} (at {})", diag.message, loc),
                None => diag.message.clone(),
            };

            match diag.severity {
                Severity::Error => messages.errors.push(msg),
                Severity::Warning => messages.warnings.push(msg),
                Severity::Info => messages.infos.push(msg),
            }
        }
        messages
    }
}
