//! The element capability shared by every node of a generated-source tree.

use std::fmt;

/// A node in a generated-source tree.
///
/// Implementors render themselves to their final textual form. Nodes are
/// plain values; rendering never fails and never has side effects.
pub trait Element: fmt::Debug {
    /// Short diagnostic label for the kind of node (e.g. `"Import"`).
    fn label(&self) -> &'static str;

    /// Render this node to text.
    fn render(&self) -> String;

    /// Human-readable description used in logs and test assertions.
    ///
    /// Defaults to the label; nodes with an identity append it.
    fn description(&self) -> String {
        self.label().to_string()
    }
}

/// Blanket implementation for references.
impl<T: Element + ?Sized> Element for &T {
    fn label(&self) -> &'static str {
        (**self).label()
    }

    fn render(&self) -> String {
        (**self).render()
    }

    fn description(&self) -> String {
        (**self).description()
    }
}

/// Blanket implementation for Box.
impl<T: Element + ?Sized> Element for Box<T> {
    fn label(&self) -> &'static str {
        self.as_ref().label()
    }

    fn render(&self) -> String {
        self.as_ref().render()
    }

    fn description(&self) -> String {
        self.as_ref().description()
    }
}

/// Raw text, rendered verbatim.
///
/// The caller supplies the comment markers (`//` or `/* */`).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommentElement {
    content: String,
}

impl CommentElement {
    pub fn new(content: impl Into<String>) -> Self {
        Self {
            content: content.into(),
        }
    }
}

impl Element for CommentElement {
    fn label(&self) -> &'static str {
        "Comment"
    }

    fn render(&self) -> String {
        self.content.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_line_comment_is_verbatim() {
        let line = "// this is a line comment";
        assert_eq!(CommentElement::new(line).render(), line);
    }

    #[test]
    fn test_block_comment_is_verbatim() {
        let block = "/* this is\nblock comment */";
        assert_eq!(CommentElement::new(block).render(), block);
    }

    #[test]
    fn test_boxed_element_delegates() {
        let boxed: Box<dyn Element> = Box::new(CommentElement::new("// hi"));
        assert_eq!(boxed.label(), "Comment");
        assert_eq!(boxed.description(), "Comment");
        assert_eq!(boxed.render(), "// hi");
    }
}
