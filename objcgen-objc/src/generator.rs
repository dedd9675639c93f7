//! Generator stage: file node to output artifact.

use chrono::{Local, NaiveDateTime};
use objcgen_codegen::{CommentElement, Element};
use objcgen_core::Artifact;

use crate::ObjcFile;

/// First line of every generated file unless configured otherwise.
pub const DEFAULT_BANNER: &str = "// this file is generated by objcgen";

const TIME_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Prepends the banner and timestamp comments, renders the file and stores
/// the text as the artifact payload.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Generator {
    banner: String,
    timestamp: bool,
}

impl Generator {
    pub fn new(banner: impl Into<String>, timestamp: bool) -> Self {
        Self {
            banner: banner.into(),
            timestamp,
        }
    }

    pub fn banner(&self) -> &str {
        &self.banner
    }

    /// Generate using the current local time.
    pub fn generate(&self, file: ObjcFile) -> Artifact {
        self.generate_at(file, Local::now().naive_local())
    }

    /// Generate with an explicit timestamp.
    pub fn generate_at(&self, mut file: ObjcFile, time: NaiveDateTime) -> Artifact {
        // Front inserts: the banner goes in last so it ends up first.
        if self.timestamp {
            file.add(
                CommentElement::new(format!("// time: {}\n", time.format(TIME_FORMAT))),
                true,
            );
        }
        file.add(CommentElement::new(self.banner.as_str()), true);

        let mut contents = file.render();
        if !contents.ends_with('\n') {
            contents.push('\n');
        }

        tracing::debug!(path = %file.path().display(), bytes = contents.len(), "generated file");
        file.into_artifact(contents)
    }
}

impl Default for Generator {
    fn default() -> Self {
        Self::new(DEFAULT_BANNER, true)
    }
}
