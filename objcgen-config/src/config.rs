use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::{Error, ParserKind, Result};

/// Name of the configuration file looked up in the input directory.
pub const CONFIG_FILE: &str = "objcgen.toml";

const DEFAULT_BANNER: &str = "// this file is generated by objcgen";
const DEFAULT_INDENT: usize = 4;

/// Root of `objcgen.toml`. Every key is optional.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    pub generate: GenerateConfig,
    pub format: FormatConfig,
}

/// `[generate]`
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default, deny_unknown_fields)]
pub struct GenerateConfig {
    pub parser: ParserKind,
    /// First line of every generated file.
    pub banner: String,
    /// Emit the `// time: ...` comment.
    pub timestamp: bool,
    /// Input extensions to pick up, without the dot. Empty means every file.
    pub extensions: Vec<String>,
}

impl Default for GenerateConfig {
    fn default() -> Self {
        Self {
            parser: ParserKind::default(),
            banner: DEFAULT_BANNER.to_string(),
            timestamp: true,
            extensions: Vec::new(),
        }
    }
}

/// `[format]`
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default, deny_unknown_fields)]
pub struct FormatConfig {
    /// Spaces per indentation step in method bodies.
    pub indent: usize,
}

impl Default for FormatConfig {
    fn default() -> Self {
        Self {
            indent: DEFAULT_INDENT,
        }
    }
}

impl Config {
    /// Read and validate a configuration file.
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| {
            Box::new(Error::Io {
                path: path.to_path_buf(),
                source: e,
            })
        })?;
        Self::from_str_with_filename(&content, &path.display().to_string())
    }

    /// Parse a configuration with a custom filename for error reporting
    pub fn from_str_with_filename(content: &str, filename: &str) -> Result<Self> {
        let config: Self =
            toml::from_str(content).map_err(|e| Error::parse(e, content, filename))?;
        config.validate(content, filename)?;
        Ok(config)
    }

    /// Load the configuration for a run.
    ///
    /// An explicit path must exist. Otherwise `<input_dir>/objcgen.toml` is
    /// used when present and defaults apply when it is not.
    pub fn load(input_dir: &Path, explicit: Option<&Path>) -> Result<(Self, Option<PathBuf>)> {
        if let Some(path) = explicit {
            return Ok((Self::open(path)?, Some(path.to_path_buf())));
        }

        let path = input_dir.join(CONFIG_FILE);
        if path.is_file() {
            Ok((Self::open(&path)?, Some(path)))
        } else {
            Ok((Self::default(), None))
        }
    }

    fn validate(&self, src: &str, filename: &str) -> Result<()> {
        if self.format.indent == 0 {
            return Err(Error::validation(
                "indent must be at least 1",
                "indent",
                src,
                filename,
            ));
        }

        for ext in &self.generate.extensions {
            if ext.is_empty() || ext.starts_with('.') {
                return Err(Error::validation(
                    format!("extension '{}' must be non-empty and written without a leading dot", ext),
                    "extensions",
                    src,
                    filename,
                ));
            }
        }

        Ok(())
    }
}

impl std::str::FromStr for Config {
    type Err = Box<Error>;

    fn from_str(s: &str) -> Result<Self> {
        Self::from_str_with_filename(s, CONFIG_FILE)
    }
}
