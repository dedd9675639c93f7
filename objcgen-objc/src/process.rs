//! Directory-to-directory entry point.

use std::{
    collections::HashSet,
    path::{Path, PathBuf},
};

use eyre::{Context, Result};
use objcgen_codegen::pipeline::Diagnostic;
use objcgen_core::{Artifact, GeneratedFile, read_artifacts};

use crate::Pipeline;

const WRITE_STAGE: &str = "write";

/// Options for [`process`].
#[derive(Debug, Default)]
pub struct ProcessOptions<'a> {
    /// Input extensions to pick up. Empty means every file.
    pub extensions: &'a [String],
    /// File names in the input directory that are never treated as input.
    pub exclude: &'a [&'a str],
    /// Generate without writing anything.
    pub dry_run: bool,
}

/// What [`process`] did.
#[derive(Debug, Default)]
pub struct ProcessOutput {
    /// Number of input artifacts read.
    pub inputs: usize,
    /// Every generated artifact, written or not.
    pub artifacts: Vec<Artifact>,
    /// Paths written to disk, each listed once.
    pub written: Vec<PathBuf>,
    pub diagnostics: Vec<Diagnostic>,
}

/// Read every input in `input_dir`, run it through `pipeline` and write the
/// results to `output_dir`.
///
/// Output files are named after their input with a `.h` or `.m` extension.
/// When two inputs share a stem the later one wins and a warning is recorded.
///
/// # Errors
///
/// Returns an error if the input directory cannot be read or an output file
/// cannot be written. Problems with individual inputs are reported as
/// diagnostics instead.
pub fn process(
    input_dir: &Path,
    output_dir: &Path,
    pipeline: &Pipeline,
    options: ProcessOptions<'_>,
) -> Result<ProcessOutput> {
    let sources = read_artifacts(input_dir, options.extensions, options.exclude)?;
    tracing::debug!(
        input = %input_dir.display(),
        count = sources.len(),
        parser = pipeline.parser_name(),
        "read inputs"
    );

    let inputs = sources.len();
    let generated = pipeline.run(sources);
    let mut output = ProcessOutput {
        inputs,
        diagnostics: generated.diagnostics,
        ..Default::default()
    };

    let mut seen = HashSet::new();
    for artifact in &generated.artifacts {
        if !seen.insert(artifact.path()) {
            let location = artifact.path().display().to_string();
            tracing::warn!(path = %location, "output generated more than once, keeping the last one");
            output.diagnostics.push(
                Diagnostic::warning(WRITE_STAGE, "output path generated by more than one input")
                    .at(location),
            );
            continue;
        }
        if !options.dry_run {
            output.written.push(GeneratedFile::path(artifact, output_dir));
        }
    }

    if !options.dry_run {
        for artifact in &generated.artifacts {
            artifact
                .write(output_dir)
                .wrap_err_with(|| format!("failed to write generated file for '{}'", artifact.path().display()))?;
        }
    }

    output.artifacts = generated.artifacts;
    Ok(output)
}

#[cfg(test)]
mod tests {
    use std::fs;

    use tempfile::TempDir;

    use objcgen_codegen::pipeline::Severity;

    use super::*;
    use crate::{Generator, parser::SimpleParser};

    fn pipeline() -> Pipeline {
        Pipeline::new(SimpleParser, Generator::new("// test", false))
    }

    #[test]
    fn test_process_writes_pairs() {
        let input = TempDir::new().unwrap();
        let output = TempDir::new().unwrap();
        fs::write(input.path().join("widgets.txt"), "Widget").unwrap();

        let result = process(input.path(), output.path(), &pipeline(), ProcessOptions::default()).unwrap();

        assert_eq!(result.inputs, 1);
        assert_eq!(
            result.written,
            vec![output.path().join("widgets.h"), output.path().join("widgets.m")]
        );
        let header = fs::read_to_string(output.path().join("widgets.h")).unwrap();
        assert_eq!(
            header,
            "// test\n#import <Foundation/Foundation.h>\n\n@interface Widget : NSObject\n\n@end\n"
        );
    }

    #[test]
    fn test_dry_run_writes_nothing() {
        let input = TempDir::new().unwrap();
        let output = TempDir::new().unwrap();
        fs::write(input.path().join("widgets.txt"), "Widget").unwrap();

        let options = ProcessOptions {
            dry_run: true,
            ..Default::default()
        };
        let result = process(input.path(), output.path(), &pipeline(), options).unwrap();

        assert_eq!(result.artifacts.len(), 2);
        assert!(result.written.is_empty());
        assert!(!output.path().join("widgets.h").exists());
    }

    #[test]
    fn test_excluded_and_filtered_inputs() {
        let input = TempDir::new().unwrap();
        let output = TempDir::new().unwrap();
        fs::write(input.path().join("objcgen.toml"), "[generate]").unwrap();
        fs::write(input.path().join("classes.txt"), "A").unwrap();
        fs::write(input.path().join("notes.md"), "B").unwrap();

        let extensions = vec!["txt".to_string()];
        let options = ProcessOptions {
            extensions: &extensions,
            exclude: &["objcgen.toml"],
            dry_run: false,
        };
        let result = process(input.path(), output.path(), &pipeline(), options).unwrap();

        assert_eq!(result.inputs, 1);
        assert!(output.path().join("classes.m").exists());
        assert!(!output.path().join("notes.h").exists());
    }

    #[test]
    fn test_shared_stem_is_a_warning() {
        let input = TempDir::new().unwrap();
        let output = TempDir::new().unwrap();
        fs::write(input.path().join("a.md"), "First").unwrap();
        fs::write(input.path().join("a.txt"), "Second").unwrap();

        let result = process(input.path(), output.path(), &pipeline(), ProcessOptions::default()).unwrap();

        assert_eq!(result.inputs, 2);
        assert_eq!(
            result.written,
            vec![output.path().join("a.h"), output.path().join("a.m")]
        );
        let locations: Vec<_> = result
            .diagnostics
            .iter()
            .filter(|d| d.severity == Severity::Warning)
            .filter_map(|d| d.location.as_deref())
            .collect();
        assert_eq!(locations, vec!["a.h", "a.m"]);
        let header = fs::read_to_string(output.path().join("a.h")).unwrap();
        assert!(header.contains("@interface Second : NSObject"));
    }

    #[test]
    fn test_missing_input_dir_fails() {
        let output = TempDir::new().unwrap();
        let missing = output.path().join("nope");
        assert!(process(&missing, output.path(), &pipeline(), ProcessOptions::default()).is_err());
    }
}
