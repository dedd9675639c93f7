//! `@property` declarations.

use std::fmt;

use objcgen_codegen::Element;

use super::TypeRef;

/// Memory management attribute of a property.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MemoryManagement {
    Assign,
    Copy,
    Strong,
    Weak,
}

impl MemoryManagement {
    pub fn as_str(&self) -> &'static str {
        match self {
            MemoryManagement::Assign => "assign",
            MemoryManagement::Copy => "copy",
            MemoryManagement::Strong => "strong",
            MemoryManagement::Weak => "weak",
        }
    }
}

impl fmt::Display for MemoryManagement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A `@property (nonatomic, <memory>) <type> <name>;` declaration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PropertyElement {
    name: String,
    ty: TypeRef,
    memory: MemoryManagement,
}

impl PropertyElement {
    pub fn new(name: impl Into<String>, ty: TypeRef, memory: MemoryManagement) -> Self {
        Self {
            name: name.into(),
            ty,
            memory,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }
}

impl Element for PropertyElement {
    fn label(&self) -> &'static str {
        "Property"
    }

    fn render(&self) -> String {
        format!(
            "@property (nonatomic, {}) {};",
            self.memory,
            self.ty.declare(&self.name)
        )
    }

    fn description(&self) -> String {
        format!("{} {}", self.label(), self.name)
    }
}
