//! Diagnostic types for the artifact pipeline.

use serde::Serialize;

/// Severity level for a diagnostic message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    /// The artifact was abandoned.
    Error,
    /// Processing continued with a substitute.
    Warning,
    /// Informational message about the run.
    Info,
}

impl Severity {
    pub fn is_error(&self) -> bool {
        matches!(self, Severity::Error)
    }

    pub fn is_warning(&self) -> bool {
        matches!(self, Severity::Warning)
    }
}

impl std::fmt::Display for Severity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Severity::Error => write!(f, "error"),
            Severity::Warning => write!(f, "warning"),
            Severity::Info => write!(f, "info"),
        }
    }
}

/// A diagnostic message from a pipeline stage.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Diagnostic {
    pub severity: Severity,
    /// The stage that produced this diagnostic (e.g. "parse").
    pub stage: String,
    pub message: String,
    /// The artifact the diagnostic is about, if any.
    pub location: Option<String>,
}

impl Diagnostic {
    pub fn error(stage: impl Into<String>, message: impl Into<String>) -> Self {
        Self::new(Severity::Error, stage, message)
    }

    pub fn warning(stage: impl Into<String>, message: impl Into<String>) -> Self {
        Self::new(Severity::Warning, stage, message)
    }

    pub fn info(stage: impl Into<String>, message: impl Into<String>) -> Self {
        Self::new(Severity::Info, stage, message)
    }

    fn new(severity: Severity, stage: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            severity,
            stage: stage.into(),
            message: message.into(),
            location: None,
        }
    }

    /// Add a location to this diagnostic.
    pub fn at(mut self, location: impl Into<String>) -> Self {
        self.location = Some(location.into());
        self
    }
}

impl std::fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.severity, self.message)?;
        if let Some(loc) = &self.location {
            write!(f, " (at {})", loc)?;
        }
        Ok(())
    }
}
