//! `@class` and `@protocol` forward declarations.

use objcgen_codegen::Element;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ForwardKind {
    Class,
    Protocol,
}

impl ForwardKind {
    fn keyword(&self) -> &'static str {
        match self {
            ForwardKind::Class => "@class",
            ForwardKind::Protocol => "@protocol",
        }
    }
}

/// Announces one or more class or protocol names without defining them.
///
/// Renders on a single line, e.g. `@class Foo, Bar;`. An empty name list
/// still renders (as `@class ;`).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ForwardDeclarationElement {
    kind: ForwardKind,
    names: Vec<String>,
}

impl ForwardDeclarationElement {
    pub fn new(kind: ForwardKind, names: impl IntoIterator<Item = impl Into<String>>) -> Self {
        Self {
            kind,
            names: names.into_iter().map(Into::into).collect(),
        }
    }

    /// `@class name;`
    pub fn class(name: impl Into<String>) -> Self {
        Self::new(ForwardKind::Class, [name])
    }

    /// `@protocol name;`
    pub fn protocol(name: impl Into<String>) -> Self {
        Self::new(ForwardKind::Protocol, [name])
    }

    /// Declare one more name.
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.names.push(name.into());
        self
    }

    pub fn kind(&self) -> ForwardKind {
        self.kind
    }
}

impl Element for ForwardDeclarationElement {
    fn label(&self) -> &'static str {
        "ForwardDeclaration"
    }

    fn render(&self) -> String {
        format!("{} {};", self.kind.keyword(), self.names.join(", "))
    }

    fn description(&self) -> String {
        format!("{} {}", self.label(), self.names.join(","))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_class_forward_declaration() {
        assert_eq!(
            ForwardDeclarationElement::class("OtherClass").render(),
            "@class OtherClass;"
        );
    }

    #[test]
    fn test_protocol_forward_declaration() {
        assert_eq!(
            ForwardDeclarationElement::protocol("Delegate").render(),
            "@protocol Delegate;"
        );
    }

    #[test]
    fn test_names_are_comma_joined() {
        let decl = ForwardDeclarationElement::class("A").name("B").name("C");
        assert_eq!(decl.render(), "@class A, B, C;");
    }

    #[test]
    fn test_zero_names_is_degenerate_but_renders() {
        let decl = ForwardDeclarationElement::new(ForwardKind::Protocol, Vec::<String>::new());
        assert_eq!(decl.render(), "@protocol ;");
    }
}
