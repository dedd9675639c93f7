//! `@interface` and `@implementation` blocks.

use objcgen_codegen::{Element, ElementContainer, Error, Result};

use super::{MethodDeclarationElement, MethodImplementationElement, PropertyElement};

/// Root class used when no superclass is given.
pub const ROOT_CLASS: &str = "NSObject";

/// What may appear between `@interface` and `@end`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ClassBodyMember {
    Property(PropertyElement),
    Method(MethodDeclarationElement),
}

impl Element for ClassBodyMember {
    fn label(&self) -> &'static str {
        match self {
            ClassBodyMember::Property(p) => p.label(),
            ClassBodyMember::Method(m) => m.label(),
        }
    }

    fn render(&self) -> String {
        match self {
            ClassBodyMember::Property(p) => p.render(),
            ClassBodyMember::Method(m) => m.render(),
        }
    }

    fn description(&self) -> String {
        match self {
            ClassBodyMember::Property(p) => p.description(),
            ClassBodyMember::Method(m) => m.description(),
        }
    }
}

impl From<PropertyElement> for ClassBodyMember {
    fn from(property: PropertyElement) -> Self {
        Self::Property(property)
    }
}

impl From<MethodDeclarationElement> for ClassBodyMember {
    fn from(method: MethodDeclarationElement) -> Self {
        Self::Method(method)
    }
}

/// Body text followed by a newline, or nothing when the body is empty.
pub(crate) fn body_block<E: Element>(body: &ElementContainer<E>) -> String {
    if body.is_empty() {
        String::new()
    } else {
        format!("{}\n", body.render())
    }
}

/// An `@interface` block for a class or a category.
///
/// With a category the block renders as `@interface Name (Category)` and the
/// superclass is omitted. Adopted protocols are rendered in both forms.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClassDeclarationElement {
    name: String,
    superclass: String,
    category: Option<String>,
    protocols: Vec<String>,
    body: ElementContainer<ClassBodyMember>,
}

impl ClassDeclarationElement {
    /// A class inheriting from [`ROOT_CLASS`].
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            superclass: ROOT_CLASS.to_string(),
            category: None,
            protocols: Vec::new(),
            body: ElementContainer::new(),
        }
    }

    pub fn superclass(mut self, superclass: impl Into<String>) -> Self {
        self.superclass = superclass.into();
        self
    }

    pub fn category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(category.into());
        self
    }

    /// Adopt a protocol (builder style).
    pub fn protocol(mut self, protocol: impl Into<String>) -> Self {
        self.implement_protocol(protocol);
        self
    }

    /// Adopt a protocol.
    pub fn implement_protocol(&mut self, protocol: impl Into<String>) -> &mut Self {
        self.protocols.push(protocol.into());
        self
    }

    /// Add a property or method declaration (builder style).
    pub fn member(mut self, member: impl Into<ClassBodyMember>) -> Self {
        self.body.push(member.into());
        self
    }

    /// Append or prepend a property or method declaration.
    pub fn add(&mut self, member: impl Into<ClassBodyMember>, at_front: bool) -> &mut Self {
        self.body.add(member.into(), at_front);
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn members(&self) -> &[ClassBodyMember] {
        self.body.elements()
    }

    fn protocol_suffix(&self) -> String {
        if self.protocols.is_empty() {
            String::new()
        } else {
            format!(" <{}>", self.protocols.join(", "))
        }
    }
}

impl Element for ClassDeclarationElement {
    fn label(&self) -> &'static str {
        "ClassDeclaration"
    }

    fn render(&self) -> String {
        let head = match &self.category {
            Some(category) => format!("{} ({})", self.name, category),
            None => format!("{} : {}", self.name, self.superclass),
        };
        format!(
            "\n@interface {}{}\n{}\n@end",
            head,
            self.protocol_suffix(),
            body_block(&self.body)
        )
    }

    fn description(&self) -> String {
        match &self.category {
            Some(category) => format!("{} {}({})", self.label(), self.name, category),
            None => format!("{} {}@{}", self.label(), self.name, self.superclass),
        }
    }
}

/// An `@implementation` block for a class or a category.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClassImplementationElement {
    name: String,
    category: Option<String>,
    body: ElementContainer<MethodImplementationElement>,
}

impl ClassImplementationElement {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            category: None,
            body: ElementContainer::new(),
        }
    }

    /// Implementation of a category. The category name must not be empty;
    /// use [`ClassImplementationElement::new`] for the class itself.
    pub fn with_category(name: impl Into<String>, category: impl Into<String>) -> Result<Self> {
        let category = category.into();
        if category.is_empty() {
            return Err(Error::invalid(
                "category name",
                "must not be empty, omit it to implement the class itself",
            ));
        }
        Ok(Self {
            category: Some(category),
            ..Self::new(name)
        })
    }

    /// Add a method implementation (builder style).
    pub fn method(mut self, method: MethodImplementationElement) -> Self {
        self.body.push(method);
        self
    }

    /// Append or prepend a method implementation.
    pub fn add(&mut self, method: MethodImplementationElement, at_front: bool) -> &mut Self {
        self.body.add(method, at_front);
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }
}

impl Element for ClassImplementationElement {
    fn label(&self) -> &'static str {
        "ClassImplementation"
    }

    fn render(&self) -> String {
        let category = self
            .category
            .as_ref()
            .map(|c| format!(" ({})", c))
            .unwrap_or_default();
        format!(
            "\n@implementation {}{}\n{}\n@end",
            self.name,
            category,
            body_block(&self.body)
        )
    }

    fn description(&self) -> String {
        match &self.category {
            Some(category) => format!("{} {}({})", self.label(), self.name, category),
            None => format!("{} {}", self.label(), self.name),
        }
    }
}
