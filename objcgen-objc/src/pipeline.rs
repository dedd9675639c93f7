//! Per-artifact driver: decode, parse, generate.

use chrono::{Local, NaiveDateTime};
use objcgen_codegen::pipeline::Diagnostic;
use objcgen_core::Artifact;

use crate::{Generator, ObjcFile, parser::Parser};

const DECODE_STAGE: &str = "decode";
const PARSE_STAGE: &str = "parse";

/// Everything a run produced.
#[derive(Debug, Default)]
pub struct PipelineOutput {
    /// Generated artifacts in input order, header before implementation.
    pub artifacts: Vec<Artifact>,
    /// Non-fatal issues. Errors mark inputs that were abandoned.
    pub diagnostics: Vec<Diagnostic>,
}

/// Element outline of one parsed file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileOutline {
    pub path: String,
    pub elements: Vec<String>,
}

/// Result of parsing without generating.
#[derive(Debug, Default)]
pub struct CheckOutput {
    pub files: Vec<FileOutline>,
    pub diagnostics: Vec<Diagnostic>,
}

/// Runs each input artifact through a parser and then a generator.
///
/// Artifacts are processed one at a time in the order given. A model error
/// while parsing one artifact is recorded and the run moves on to the next.
pub struct Pipeline {
    parser: Box<dyn Parser>,
    generator: Generator,
}

impl Pipeline {
    pub fn new(parser: impl Parser + 'static, generator: Generator) -> Self {
        Self {
            parser: Box::new(parser),
            generator,
        }
    }

    pub fn parser_name(&self) -> &'static str {
        self.parser.name()
    }

    pub fn generator(&self) -> &Generator {
        &self.generator
    }

    /// Decode and parse one artifact, recording problems in `diagnostics`.
    pub fn parse(&self, source: &Artifact, diagnostics: &mut Vec<Diagnostic>) -> Vec<ObjcFile> {
        let location = source.path().display().to_string();

        let content = match source.decode() {
            Ok(text) => Some(text),
            Err(err) => {
                tracing::warn!(path = %location, error = %err, "could not decode input, parsing without content");
                diagnostics.push(Diagnostic::warning(DECODE_STAGE, err.to_string()).at(&location));
                None
            }
        };

        match self.parser.parse(source, content) {
            Ok(files) => {
                tracing::debug!(
                    path = %location,
                    parser = self.parser.name(),
                    files = files.len(),
                    "parsed input"
                );
                if files.is_empty() {
                    diagnostics.push(Diagnostic::info(PARSE_STAGE, "no files produced").at(&location));
                }
                files
            }
            Err(err) => {
                tracing::warn!(path = %location, error = %err, "skipping input");
                diagnostics.push(Diagnostic::error(PARSE_STAGE, err.to_string()).at(&location));
                Vec::new()
            }
        }
    }

    /// Parse one artifact and generate every resulting file.
    pub fn process_artifact(
        &self,
        source: &Artifact,
        time: NaiveDateTime,
        diagnostics: &mut Vec<Diagnostic>,
    ) -> Vec<Artifact> {
        self.parse(source, diagnostics)
            .into_iter()
            .map(|file| self.generator.generate_at(file, time))
            .collect()
    }

    /// Process every artifact, stamping output with the current local time.
    pub fn run(&self, sources: impl IntoIterator<Item = Artifact>) -> PipelineOutput {
        self.run_at(sources, Local::now().naive_local())
    }

    /// Process every artifact with a fixed timestamp.
    pub fn run_at(
        &self,
        sources: impl IntoIterator<Item = Artifact>,
        time: NaiveDateTime,
    ) -> PipelineOutput {
        let mut output = PipelineOutput::default();
        for source in sources {
            let artifacts = self.process_artifact(&source, time, &mut output.diagnostics);
            output.artifacts.extend(artifacts);
        }
        output
    }

    /// Parse every artifact and report what would be generated.
    pub fn check(&self, sources: impl IntoIterator<Item = Artifact>) -> CheckOutput {
        let mut output = CheckOutput::default();
        for source in sources {
            let files = self.parse(&source, &mut output.diagnostics);
            output.files.extend(files.into_iter().map(|file| FileOutline {
                path: file.path().display().to_string(),
                elements: file.outline(),
            }));
        }
        output
    }
}

impl std::fmt::Debug for Pipeline {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Pipeline")
            .field("parser", &self.parser.name())
            .field("generator", &self.generator)
            .finish()
    }
}
