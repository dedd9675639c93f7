//! `#import` directives.

use objcgen_codegen::Element;
use objcgen_core::maybe;

/// How the imported file is delimited.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ImportKind {
    /// Project header, rendered as `"…"`.
    #[default]
    User,
    /// System or framework header, rendered as `<…>`.
    System,
}

/// An `#import` directive.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImportElement {
    file: String,
    library: Option<String>,
    kind: ImportKind,
}

impl ImportElement {
    /// A user import of `file` (`#import "file.h"`).
    pub fn new(file: impl Into<String>) -> Self {
        Self {
            file: file.into(),
            library: maybe::absent(),
            kind: ImportKind::User,
        }
    }

    /// A system import of `library/file` (`#import <library/file.h>`).
    pub fn system(file: impl Into<String>, library: impl Into<String>) -> Self {
        Self::new(file).library(library).kind(ImportKind::System)
    }

    /// Prefix the file with `library/`.
    pub fn library(mut self, library: impl Into<String>) -> Self {
        self.library = maybe::present(library.into());
        self
    }

    pub fn kind(mut self, kind: ImportKind) -> Self {
        self.kind = kind;
        self
    }

    /// The path between the delimiters, e.g. `Foundation/Foundation.h`.
    fn target(&self) -> String {
        let file = if self.file.ends_with(".h") || self.file.ends_with(".hpp") {
            self.file.clone()
        } else {
            format!("{}.h", self.file)
        };

        maybe::match_with(
            |library: &String| format!("{}/{}", library, file),
            || file.clone(),
            self.library.as_ref(),
        )
    }
}

impl Element for ImportElement {
    fn label(&self) -> &'static str {
        "Import"
    }

    fn render(&self) -> String {
        match self.kind {
            ImportKind::User => format!("#import \"{}\"", self.target()),
            ImportKind::System => format!("#import <{}>", self.target()),
        }
    }

    fn description(&self) -> String {
        format!("{} {}", self.label(), self.target())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_simple_import() {
        assert_eq!(ImportElement::new("fileName").render(), "#import \"fileName.h\"");
        assert_eq!(
            ImportElement::new("fileName.h").render(),
            ImportElement::new("fileName").render()
        );
        assert_eq!(
            ImportElement::new("fileName.hpp").render(),
            "#import \"fileName.hpp\""
        );
    }

    #[test]
    fn test_unknown_extension_gets_header_suffix() {
        assert_eq!(
            ImportElement::new("fileName.abc").render(),
            "#import \"fileName.abc.h\""
        );
    }

    #[test]
    fn test_library_import() {
        assert_eq!(
            ImportElement::new("fileName").library("libName").render(),
            "#import \"libName/fileName.h\""
        );
    }

    #[test]
    fn test_system_import() {
        assert_eq!(
            ImportElement::new("fileName").kind(ImportKind::System).render(),
            "#import <fileName.h>"
        );
        assert_eq!(
            ImportElement::system("Foundation", "Foundation").render(),
            "#import <Foundation/Foundation.h>"
        );
    }

    #[test]
    fn test_description() {
        assert_eq!(
            ImportElement::system("Foundation", "Foundation").description(),
            "Import Foundation/Foundation.h"
        );
    }
}
