//! Generate command report data structures.

use std::path::PathBuf;

use super::output::{Output, Report};

/// Report data from a generate run.
#[derive(Debug)]
pub struct GenerateReport {
    /// Parser that produced the files.
    pub parser: String,
    /// Number of input files read.
    pub inputs: usize,
    /// Inputs that were abandoned.
    pub errors: Vec<String>,
    /// Inputs processed with a substitute.
    pub warnings: Vec<String>,
    /// Generation result (files written or preview).
    pub result: GenerationResult,
}

impl GenerateReport {
    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }
}

/// Result of code generation.
#[derive(Debug)]
pub enum GenerationResult {
    /// Files were written to disk.
    Written(WrittenResult),
    /// Dry-run preview.
    Preview(PreviewResult),
}

/// Result when files were written to disk.
#[derive(Debug)]
pub struct WrittenResult {
    /// Output directory.
    pub output_dir: PathBuf,
    /// Files written, relative to the output directory.
    pub written: Vec<String>,
}

/// Result of a dry-run preview.
#[derive(Debug)]
pub struct PreviewResult {
    /// Files that would be generated.
    pub files: Vec<PreviewFile>,
}

/// A file in preview mode.
#[derive(Debug)]
pub struct PreviewFile {
    pub path: String,
    pub content: String,
}

impl Report for GenerateReport {
    fn render(&self, out: &mut dyn Output) {
        for error in &self.errors {
            out.warning(&format!("error: {}", error));
        }
        for warning in &self.warnings {
            out.warning(&format!("warning: {}", warning));
        }

        match &self.result {
            GenerationResult::Written(written) => self.render_written(out, written),
            GenerationResult::Preview(preview) => self.render_preview(out, preview),
        }
    }
}

impl GenerateReport {
    fn render_written(&self, out: &mut dyn Output, written: &WrittenResult) {
        out.key_value("Parser", &self.parser);
        out.key_value("Inputs", &self.inputs.to_string());
        out.key_value("Output", &written.output_dir.display().to_string());

        if written.written.is_empty() {
            out.newline();
            out.preformatted("Nothing to generate");
            return;
        }

        out.newline();
        out.section(&format!("Generated ({})", written.written.len()));
        for file in &written.written {
            out.added_item(file);
        }
    }

    fn render_preview(&self, out: &mut dyn Output, preview: &PreviewResult) {
        for file in &preview.files {
            out.divider(&file.path);
            out.preformatted(&file.content);
        }

        out.divider("Summary");
        out.preformatted(&format!(
            "{} files would be generated from {} inputs",
            preview.files.len(),
            self.inputs
        ));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::reports::output::RecordingOutput;

    fn report(result: GenerationResult) -> GenerateReport {
        GenerateReport {
            parser: "simple".to_string(),
            inputs: 1,
            errors: Vec::new(),
            warnings: vec!["could not decode (at a.bin)".to_string()],
            result,
        }
    }

    #[test]
    fn test_written_lists_files() {
        let report = report(GenerationResult::Written(WrittenResult {
            output_dir: PathBuf::from("out"),
            written: vec!["widgets.h".to_string(), "widgets.m".to_string()],
        }));
        let mut out = RecordingOutput::default();
        report.render(&mut out);

        assert_eq!(
            out.lines,
            vec![
                "warning: could not decode (at a.bin)",
                "Parser: simple",
                "Inputs: 1",
                "Output: out",
                "",
                "Generated (2):",
                "  + widgets.h",
                "  + widgets.m",
            ]
        );
    }

    #[test]
    fn test_preview_shows_contents() {
        let report = report(GenerationResult::Preview(PreviewResult {
            files: vec![PreviewFile {
                path: "widgets.h".to_string(),
                content: "// header".to_string(),
            }],
        }));
        let mut out = RecordingOutput::default();
        report.render(&mut out);

        assert_eq!(
            &out.lines[1..],
            &[
                "── widgets.h ──",
                "// header",
                "── Summary ──",
                "1 files would be generated from 1 inputs",
            ]
        );
    }
}
