//! Check operation - parse inputs without generating.

use std::path::{Path, PathBuf};

use eyre::{Context, Result};
use objcgen_config::{CONFIG_FILE, Config, ParserKind};
use objcgen_core::read_artifacts;

use super::Messages;
use crate::{
    parsers,
    reports::{CheckReport, FileSummary},
};

/// Execute the check operation.
///
/// Parses every input and returns the diagnostics and the outline of each
/// file that would be generated.
pub fn check(
    config: &Config,
    config_path: Option<PathBuf>,
    input_dir: &Path,
    parser: Option<ParserKind>,
) -> Result<CheckReport> {
    let sources = read_artifacts(input_dir, &config.generate.extensions, &[CONFIG_FILE])
        .wrap_err("Failed to read inputs")?;
    let inputs = sources.len();

    let pipeline = parsers::pipeline(config, parser);
    let output = pipeline.check(sources);
    let messages = Messages::collect(&output.diagnostics);

    Ok(CheckReport {
        input_dir: input_dir.to_path_buf(),
        config_path,
        parser: pipeline.parser_name().to_string(),
        inputs,
        files: output
            .files
            .into_iter()
            .map(|file| FileSummary {
                path: file.path,
                elements: file.elements,
            })
            .collect(),
        errors: messages.errors,
        warnings: messages.warnings,
        infos: messages.infos,
    })
}
