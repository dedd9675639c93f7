//! Generate operation - input directory to Objective-C files.

use std::path::Path;

use eyre::{Context, Result};
use objcgen_config::{CONFIG_FILE, Config, ParserKind};
use objcgen_core::GeneratedFile;
use objcgen_objc::{ProcessOptions, process};

use super::Messages;
use crate::{
    parsers,
    reports::{GenerateReport, GenerationResult, PreviewFile, PreviewResult, WrittenResult},
};

/// Options for the generate operation.
pub struct GenerateOptions<'a> {
    /// Directory holding the input files.
    pub input_dir: &'a Path,
    /// Output directory for generated code.
    pub output_dir: &'a Path,
    /// Parser override from the command line.
    pub parser: Option<ParserKind>,
    /// Whether to preview without writing files.
    pub dry_run: bool,
}

/// Execute the generate operation.
pub fn generate(config: &Config, opts: GenerateOptions) -> Result<GenerateReport> {
    let pipeline = parsers::pipeline(config, opts.parser);
    let output = process(
        opts.input_dir,
        opts.output_dir,
        &pipeline,
        ProcessOptions {
            extensions: &config.generate.extensions,
            exclude: &[CONFIG_FILE],
            dry_run: opts.dry_run,
        },
    )
    .wrap_err("Failed to generate code")?;

    let messages = Messages::collect(&output.diagnostics);
    let relative = |path: &Path| {
        path.strip_prefix(opts.output_dir)
            .unwrap_or(path)
            .display()
            .to_string()
    };

    let result = if opts.dry_run {
        let files = output
            .artifacts
            .iter()
            .map(|artifact| PreviewFile {
                path: artifact.path().display().to_string(),
                content: artifact.render(),
            })
            .collect();
        GenerationResult::Preview(PreviewResult { files })
    } else {
        GenerationResult::Written(WrittenResult {
            output_dir: opts.output_dir.to_path_buf(),
            written: output.written.iter().map(|p| relative(p.as_path())).collect(),
        })
    };

    Ok(GenerateReport {
        parser: pipeline.parser_name().to_string(),
        inputs: output.inputs,
        errors: messages.errors,
        warnings: messages.warnings,
        result,
    })
}

#[cfg(test)]
mod tests {
    use std::fs;

    use tempfile::TempDir;

    use super::*;

    fn options<'a>(input: &'a TempDir, output: &'a TempDir, dry_run: bool) -> GenerateOptions<'a> {
        GenerateOptions {
            input_dir: input.path(),
            output_dir: output.path(),
            parser: None,
            dry_run,
        }
    }

    #[test]
    fn test_generate_writes_and_reports_relative_paths() {
        let input = TempDir::new().unwrap();
        let output = TempDir::new().unwrap();
        fs::write(input.path().join("widgets.txt"), "Widget").unwrap();
        fs::write(input.path().join(CONFIG_FILE), "[generate]\ntimestamp = false\n").unwrap();

        let (config, path) = Config::load(input.path(), None).unwrap();
        assert_eq!(path, Some(input.path().join(CONFIG_FILE)));
        let report = generate(&config, options(&input, &output, false)).unwrap();

        assert_eq!(report.inputs, 1);
        assert!(!report.has_errors());
        match report.result {
            GenerationResult::Written(written) => {
                assert_eq!(written.written, vec!["widgets.h", "widgets.m"]);
            }
            GenerationResult::Preview(_) => panic!("expected written result"),
        }
        let header = fs::read_to_string(output.path().join("widgets.h")).unwrap();
        assert!(!header.contains("// time:"));
    }

    #[test]
    fn test_dry_run_previews() {
        let input = TempDir::new().unwrap();
        let output = TempDir::new().unwrap();
        fs::write(input.path().join("widgets.txt"), "Widget").unwrap();

        let mut config = Config::default();
        config.generate.timestamp = false;
        let report = generate(&config, options(&input, &output, true)).unwrap();

        match report.result {
            GenerationResult::Preview(preview) => {
                assert_eq!(preview.files.len(), 2);
                assert_eq!(preview.files[1].path, "widgets.m");
                assert!(preview.files[1].content.contains("@implementation Widget"));
            }
            GenerationResult::Written(_) => panic!("expected preview"),
        }
        assert!(!output.path().join("widgets.m").exists());
    }

    #[test]
    fn test_parser_override() {
        let input = TempDir::new().unwrap();
        let output = TempDir::new().unwrap();
        fs::write(input.path().join("Widget.txt"), "").unwrap();

        let mut opts = options(&input, &output, false);
        opts.parser = Some(ParserKind::Dummy);
        let report = generate(&Config::default(), opts).unwrap();

        assert_eq!(report.parser, "dummy");
        let header = fs::read_to_string(output.path().join("Widget.h")).unwrap();
        assert!(header.contains("@protocol WidgetDelegate <NSObject>"));
    }
}
