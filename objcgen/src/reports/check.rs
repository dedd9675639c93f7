//! Check command report data structures.

use std::path::PathBuf;

use serde::Serialize;

use super::output::{Output, Report};

/// Report data from parsing inputs without generating.
#[derive(Debug, Serialize)]
pub struct CheckReport {
    /// Input directory.
    pub input_dir: PathBuf,
    /// Config file in effect, if any.
    pub config_path: Option<PathBuf>,
    /// Parser used.
    pub parser: String,
    /// Number of input files read.
    pub inputs: usize,
    /// Files that would be generated.
    pub files: Vec<FileSummary>,
    /// Error messages.
    pub errors: Vec<String>,
    /// Warning messages.
    pub warnings: Vec<String>,
    /// Info messages.
    pub infos: Vec<String>,
}

/// One file that would be generated, with its top-level elements.
#[derive(Debug, Serialize)]
pub struct FileSummary {
    pub path: String,
    pub elements: Vec<String>,
}

impl CheckReport {
    /// Whether the check passed (no errors).
    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }
}

impl Report for CheckReport {
    fn render(&self, out: &mut dyn Output) {
        for error in &self.errors {
            out.warning(&format!("error: {}", error));
        }

        for warning in &self.warnings {
            out.warning(&format!("warning: {}", warning));
        }

        for info in &self.infos {
            out.preformatted(&format!("info: {}", info));
        }

        if !self.warnings.is_empty() || !self.errors.is_empty() || !self.infos.is_empty() {
            out.newline();
        }

        if self.is_valid() {
            out.preformatted(&format!(
                "✓ {} inputs in {} parse with the {} parser",
                self.inputs,
                self.input_dir.display(),
                self.parser
            ));
        }
        if let Some(path) = &self.config_path {
            out.key_value("Config", &path.display().to_string());
        }

        for file in &self.files {
            out.newline();
            out.section(&file.path);
            for element in &file.elements {
                out.list_item(element);
            }
        }
    }
}
