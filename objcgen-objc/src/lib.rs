//! Objective-C code generation for objcgen.
//!
//! Input artifacts flow through two stages:
//!
//! 1. a [`Parser`](parser::Parser) turns the text of one artifact into
//!    [`ObjcFile`]s built from [`ast`] elements;
//! 2. the [`Generator`] prepends banner comments, renders each file and stores
//!    the text in an output artifact.
//!
//! [`Pipeline`] drives both stages per artifact and [`process`] wires it to
//! input and output directories.

pub mod ast;
mod file;
mod generator;
pub mod parser;
mod pipeline;
mod process;

pub use file::{FileKind, ObjcFile};
pub use generator::{DEFAULT_BANNER, Generator};
pub use pipeline::{CheckOutput, FileOutline, Pipeline, PipelineOutput};
pub use process::{ProcessOptions, ProcessOutput, process};
