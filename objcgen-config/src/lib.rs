//! Configuration for objcgen runs.
//!
//! Settings live in an optional `objcgen.toml` next to the inputs. Every key
//! has a default, so a missing file is the same as an empty one.

// Miette's derive macro generates code that triggers these warnings
#![allow(unused_assignments)]

mod config;
mod error;
mod parser_kind;

pub use config::{CONFIG_FILE, Config, FormatConfig, GenerateConfig};
pub use error::{Error, Result};
pub use parser_kind::ParserKind;
