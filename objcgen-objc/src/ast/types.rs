//! Objective-C type references.

use std::fmt;

/// A reference to an Objective-C type as it appears in a declaration.
///
/// Renders as `<name>[<P1, P2>][ *]`, e.g. `NSInteger`, `NSString *` or
/// `id<WidgetDelegate>`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TypeRef {
    name: String,
    pointer: bool,
    protocols: Vec<String>,
}

impl TypeRef {
    pub fn new(name: impl Into<String>, pointer: bool, protocols: Vec<String>) -> Self {
        Self {
            name: name.into(),
            pointer,
            protocols,
        }
    }

    /// A plain value type (`NSInteger`, `void`, `BOOL`).
    pub fn value(name: impl Into<String>) -> Self {
        Self::new(name, false, Vec::new())
    }

    /// An object pointer type (`NSString *`).
    pub fn pointer(name: impl Into<String>) -> Self {
        Self::new(name, true, Vec::new())
    }

    /// Any object conforming to `protocol` (`id<Protocol>`).
    pub fn protocol(protocol: impl Into<String>) -> Self {
        Self::new("id", false, vec![protocol.into()])
    }

    /// Shorthand for `void`.
    pub fn void() -> Self {
        Self::value("void")
    }

    /// Adopt one more protocol.
    pub fn conforming_to(mut self, protocol: impl Into<String>) -> Self {
        self.protocols.push(protocol.into());
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn is_pointer(&self) -> bool {
        self.pointer
    }

    pub fn protocols(&self) -> &[String] {
        &self.protocols
    }

    pub fn render(&self) -> String {
        let mut out = self.name.clone();
        if !self.protocols.is_empty() {
            out.push('<');
            out.push_str(&self.protocols.join(", "));
            out.push('>');
        }
        if self.pointer {
            out.push_str(" *");
        }
        out
    }

    /// Render a declaration of `identifier` with this type, e.g.
    /// `NSString *title` or `NSInteger count`.
    pub fn declare(&self, identifier: &str) -> String {
        if self.pointer {
            format!("{}{}", self.render(), identifier)
        } else {
            format!("{} {}", self.render(), identifier)
        }
    }
}

impl fmt::Display for TypeRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_value_type() {
        assert_eq!(TypeRef::value("NSInteger").render(), "NSInteger");
        assert_eq!(TypeRef::void().render(), "void");
    }

    #[test]
    fn test_pointer_type() {
        assert_eq!(TypeRef::pointer("NSString").render(), "NSString *");
    }

    #[test]
    fn test_protocol_type() {
        assert_eq!(TypeRef::protocol("Delegate").render(), "id<Delegate>");
    }

    #[test]
    fn test_pointer_with_protocols() {
        let ty = TypeRef::pointer("UIView")
            .conforming_to("Themeable")
            .conforming_to("Sizable");
        assert_eq!(ty.render(), "UIView<Themeable, Sizable> *");
    }

    #[test]
    fn test_declare() {
        assert_eq!(TypeRef::pointer("NSString").declare("title"), "NSString *title");
        assert_eq!(TypeRef::value("BOOL").declare("enabled"), "BOOL enabled");
        assert_eq!(TypeRef::protocol("P").declare("delegate"), "id<P> delegate");
    }
}
