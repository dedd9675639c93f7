use std::{
    path::{Path, PathBuf},
    str::Utf8Error,
};

use thiserror::Error;

use crate::file::GeneratedFile;

/// Why an artifact's payload could not be read as text.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DecodeError {
    #[error("artifact has no payload")]
    Missing,
    #[error("payload is not valid UTF-8")]
    InvalidUtf8(#[from] Utf8Error),
}

/// A unit of work flowing through the pipeline: a path plus an optional payload.
///
/// The path is relative to whichever directory the artifact was read from or
/// will be written to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Artifact {
    path: PathBuf,
    contents: Option<Vec<u8>>,
}

impl Artifact {
    /// Create an artifact with the given path and payload.
    pub fn new(path: impl Into<PathBuf>, contents: Option<Vec<u8>>) -> Self {
        Self {
            path: path.into(),
            contents,
        }
    }

    /// Create an artifact whose payload is the UTF-8 bytes of `text`.
    pub fn from_text(path: impl Into<PathBuf>, text: impl Into<String>) -> Self {
        Self::new(path, Some(text.into().into_bytes()))
    }

    /// Create an artifact without a payload.
    pub fn empty(path: impl Into<PathBuf>) -> Self {
        Self::new(path, None)
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn contents(&self) -> Option<&[u8]> {
        self.contents.as_deref()
    }

    /// Replace the payload.
    pub fn set_contents(&mut self, contents: Vec<u8>) {
        self.contents = Some(contents);
    }

    /// File name without its extension (e.g. `widgets` for `in/widgets.txt`).
    pub fn stem(&self) -> String {
        self.path
            .file_stem()
            .map(|s| s.to_string_lossy().into_owned())
            .unwrap_or_default()
    }

    /// Decode the payload as UTF-8 text.
    pub fn decode(&self) -> Result<&str, DecodeError> {
        let bytes = self.contents.as_deref().ok_or(DecodeError::Missing)?;
        Ok(std::str::from_utf8(bytes)?)
    }

    /// A payload-less copy of this artifact with its extension replaced.
    pub fn with_extension(&self, extension: &str) -> Self {
        Self {
            path: self.path.with_extension(extension),
            contents: None,
        }
    }
}

impl GeneratedFile for Artifact {
    fn path(&self, base: &Path) -> PathBuf {
        base.join(&self.path)
    }

    fn render(&self) -> String {
        self.contents
            .as_deref()
            .map(|bytes| String::from_utf8_lossy(bytes).into_owned())
            .unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stem() {
        assert_eq!(Artifact::empty("in/widgets.txt").stem(), "widgets");
        assert_eq!(Artifact::empty("widgets").stem(), "widgets");
    }

    #[test]
    fn test_with_extension_drops_payload() {
        let source = Artifact::from_text("widgets.txt", "Foo");
        let header = source.with_extension("h");
        assert_eq!(header.path(), Path::new("widgets.h"));
        assert!(header.contents().is_none());
        // original untouched
        assert_eq!(source.decode(), Ok("Foo"));
    }

    #[test]
    fn test_with_extension_adds_missing_extension() {
        let header = Artifact::empty("widgets").with_extension("m");
        assert_eq!(header.path(), Path::new("widgets.m"));
    }

    #[test]
    fn test_decode_missing() {
        assert_eq!(Artifact::empty("a").decode(), Err(DecodeError::Missing));
    }

    #[test]
    fn test_decode_invalid_utf8() {
        let artifact = Artifact::new("a", Some(vec![0xff, 0xfe, 0x41]));
        assert!(matches!(
            artifact.decode(),
            Err(DecodeError::InvalidUtf8(_))
        ));
    }

    #[test]
    fn test_render_is_payload_text() {
        let artifact = Artifact::from_text("a.h", "#import <Foundation/Foundation.h>");
        assert_eq!(artifact.render(), "#import <Foundation/Foundation.h>");
        assert_eq!(Artifact::empty("a.h").render(), "");
    }
}
