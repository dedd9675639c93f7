use std::path::Path;

use eyre::{Context, Result};

use crate::Artifact;

/// Read every regular file directly inside `dir` as an input artifact.
///
/// Artifact paths are relative to `dir` and sorted by name. When
/// `extensions` is non-empty only files with one of those extensions are
/// picked up. Hidden files and anything listed in `exclude` are skipped.
pub fn read_artifacts(dir: &Path, extensions: &[String], exclude: &[&str]) -> Result<Vec<Artifact>> {
    let entries =
        std::fs::read_dir(dir).wrap_err_with(|| format!("failed to read '{}'", dir.display()))?;

    let mut artifacts = Vec::new();
    for entry in entries {
        let entry = entry?;
        if !entry.file_type()?.is_file() {
            continue;
        }

        let file_name = entry.file_name();
        let name = file_name.to_string_lossy();
        if name.starts_with('.') || exclude.iter().any(|e| *e == name) {
            continue;
        }

        let path = entry.path();
        if !extensions.is_empty() {
            let matches = path
                .extension()
                .map(|ext| extensions.iter().any(|e| ext == e.as_str()))
                .unwrap_or(false);
            if !matches {
                continue;
            }
        }

        let contents = std::fs::read(&path)
            .wrap_err_with(|| format!("failed to read '{}'", path.display()))?;
        artifacts.push(Artifact::new(name.into_owned(), Some(contents)));
    }

    artifacts.sort_by(|a, b| a.path().cmp(b.path()));
    Ok(artifacts)
}
