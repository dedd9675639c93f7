//! `@protocol` definitions.

use objcgen_codegen::{Element, ElementContainer};

use super::{ClassBodyMember, class::body_block};

/// Base protocol adopted when none is given.
pub const ROOT_PROTOCOL: &str = "NSObject";

/// A `@protocol Name <Bases>` block.
///
/// The base list is always rendered, including the default `<NSObject>`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProtocolElement {
    name: String,
    bases: Vec<String>,
    body: ElementContainer<ClassBodyMember>,
}

impl ProtocolElement {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            bases: vec![ROOT_PROTOCOL.to_string()],
            body: ElementContainer::new(),
        }
    }

    /// Replace the base protocol list.
    pub fn bases(mut self, bases: impl IntoIterator<Item = impl Into<String>>) -> Self {
        self.bases = bases.into_iter().map(Into::into).collect();
        self
    }

    /// Add a required property or method (builder style).
    pub fn member(mut self, member: impl Into<ClassBodyMember>) -> Self {
        self.body.push(member.into());
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }
}

impl Element for ProtocolElement {
    fn label(&self) -> &'static str {
        "Protocol"
    }

    fn render(&self) -> String {
        format!(
            "\n@protocol {} <{}>\n{}\n@end",
            self.name,
            self.bases.join(", "),
            body_block(&self.body)
        )
    }

    fn description(&self) -> String {
        format!("{} {}", self.label(), self.name)
    }
}
