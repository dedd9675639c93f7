//! Parser stage: input artifact text to Objective-C files.
//!
//! A parser is a pure function of one artifact. It never touches the
//! filesystem and never sees other artifacts.

mod dummy;
mod simple;

pub use dummy::DummyParser;
use objcgen_codegen::Result;
use objcgen_core::Artifact;
pub use simple::{ClassRecord, SimpleParser, parse_records};

use crate::ObjcFile;

/// Turns the decoded text of one input artifact into zero or more files.
pub trait Parser {
    /// The name of this parser (used in diagnostics).
    fn name(&self) -> &'static str;

    /// Parse `source`.
    ///
    /// `content` is `None` when the payload is missing or not valid text; the
    /// parser still runs and decides what that means for its output.
    ///
    /// # Errors
    ///
    /// Returns an error if building the element tree fails. The caller
    /// abandons this artifact and moves on to the next one.
    fn parse(&self, source: &Artifact, content: Option<&str>) -> Result<Vec<ObjcFile>>;
}

impl<P: Parser + ?Sized> Parser for Box<P> {
    fn name(&self) -> &'static str {
        self.as_ref().name()
    }

    fn parse(&self, source: &Artifact, content: Option<&str>) -> Result<Vec<ObjcFile>> {
        self.as_ref().parse(source, content)
    }
}
