use objcgen_codegen::Result;
use objcgen_core::{Artifact, maybe};

use super::Parser;
use crate::{
    ObjcFile,
    ast::{ClassDeclarationElement, ClassImplementationElement, ImportElement},
};

/// One class named in the input: `Name` or `Name: Superclass`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClassRecord {
    pub name: String,
    pub superclass: Option<String>,
}

impl ClassRecord {
    fn from_line(line: &str) -> Option<Self> {
        if line.trim().is_empty() {
            return None;
        }

        let mut parts = line.split(':');
        let name = parts.next().unwrap_or_default().trim().to_string();
        // Anything after a second colon is ignored; an empty superclass means none.
        let superclass = maybe::bind(
            |s: &str| {
                let s = s.trim();
                (!s.is_empty()).then(|| s.to_string())
            },
            parts.next(),
        );

        Some(Self { name, superclass })
    }
}

/// Read one [`ClassRecord`] per non-blank line.
pub fn parse_records(content: &str) -> Vec<ClassRecord> {
    maybe::compact(content.lines().map(ClassRecord::from_line))
}

/// Emits an empty class pair for every name in the input.
///
/// ```text
/// Foo
/// Bar: Foo
/// ```
///
/// produces a header with `@interface Foo : NSObject` and
/// `@interface Bar : Foo`, and an implementation with matching
/// `@implementation` blocks. An input without names produces no files.
#[derive(Debug, Clone, Copy, Default)]
pub struct SimpleParser;

impl Parser for SimpleParser {
    fn name(&self) -> &'static str {
        "simple"
    }

    fn parse(&self, source: &Artifact, content: Option<&str>) -> Result<Vec<ObjcFile>> {
        let records = content.map(parse_records).unwrap_or_default();
        if records.is_empty() {
            return Ok(Vec::new());
        }

        let mut header = ObjcFile::header(source);
        let mut implementation = ObjcFile::implementation(source);
        header.push(ImportElement::system("Foundation", "Foundation"));
        implementation.push(ImportElement::new(source.stem()));

        for record in records {
            let declaration = match record.superclass {
                Some(superclass) => ClassDeclarationElement::new(&record.name).superclass(superclass),
                None => ClassDeclarationElement::new(&record.name),
            };
            header.push(declaration);
            implementation.push(ClassImplementationElement::new(record.name));
        }

        Ok(vec![header, implementation])
    }
}
