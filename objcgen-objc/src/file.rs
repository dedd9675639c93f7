//! Objective-C source files.

use std::path::Path;

use objcgen_codegen::{Element, ElementContainer};
use objcgen_core::Artifact;

/// Which half of a class pair a file holds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileKind {
    /// `.h` declarations.
    Header,
    /// `.m` implementations.
    Implementation,
}

impl FileKind {
    pub fn extension(&self) -> &'static str {
        match self {
            FileKind::Header => "h",
            FileKind::Implementation => "m",
        }
    }
}

/// An ordered list of top-level elements bound to one output artifact.
///
/// The artifact is copied from the input when the file is created, with its
/// extension forced to `.h` or `.m` and its payload dropped; the file never
/// aliases the input's contents.
///
/// # Example
///
/// ```
/// use objcgen_codegen::Element;
/// use objcgen_core::Artifact;
/// use objcgen_objc::{ObjcFile, ast::{ClassDeclarationElement, ImportElement}};
///
/// let mut file = ObjcFile::header(&Artifact::from_text("widgets.txt", "Widget"));
/// file.push(ImportElement::system("Foundation", "Foundation"))
///     .push(ClassDeclarationElement::new("Widget"));
///
/// assert_eq!(file.path().to_str(), Some("widgets.h"));
/// assert_eq!(
///     file.render(),
///     "#import <Foundation/Foundation.h>\n\n@interface Widget : NSObject\n\n@end"
/// );
/// ```
#[derive(Debug)]
pub struct ObjcFile {
    artifact: Artifact,
    kind: FileKind,
    elements: ElementContainer<Box<dyn Element>>,
}

impl ObjcFile {
    pub fn new(source: &Artifact, kind: FileKind) -> Self {
        Self {
            artifact: source.with_extension(kind.extension()),
            kind,
            elements: ElementContainer::new(),
        }
    }

    /// A `.h` file named after `source`.
    pub fn header(source: &Artifact) -> Self {
        Self::new(source, FileKind::Header)
    }

    /// A `.m` file named after `source`.
    pub fn implementation(source: &Artifact) -> Self {
        Self::new(source, FileKind::Implementation)
    }

    /// Append or prepend a top-level element.
    pub fn add(&mut self, element: impl Element + 'static, at_front: bool) -> &mut Self {
        self.elements.add(Box::new(element), at_front);
        self
    }

    /// Append a top-level element.
    pub fn push(&mut self, element: impl Element + 'static) -> &mut Self {
        self.add(element, false)
    }

    pub fn kind(&self) -> FileKind {
        self.kind
    }

    pub fn path(&self) -> &Path {
        self.artifact.path()
    }

    pub fn elements(&self) -> &[Box<dyn Element>] {
        self.elements.elements()
    }

    /// Descriptions of every top-level element, in order.
    pub fn outline(&self) -> Vec<String> {
        self.elements.iter().map(|e| e.description()).collect()
    }

    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    /// Consume the file, returning its artifact with `contents` as payload.
    pub fn into_artifact(self, contents: String) -> Artifact {
        let mut artifact = self.artifact;
        artifact.set_contents(contents.into_bytes());
        artifact
    }
}

impl Element for ObjcFile {
    fn label(&self) -> &'static str {
        "File"
    }

    fn render(&self) -> String {
        self.elements.render()
    }

    fn description(&self) -> String {
        format!("{} {}", self.label(), self.path().display())
    }
}
