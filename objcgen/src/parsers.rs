//! Parser dispatch.
//!
//! Maps the configured [`ParserKind`] to a parser and builds the pipeline
//! used by every command.

use objcgen_config::{Config, ParserKind};
use objcgen_objc::{
    Generator, Pipeline,
    parser::{DummyParser, Parser, SimpleParser},
};

/// Create the parser for `kind`, honouring the `[format]` settings.
pub fn parser(kind: ParserKind, config: &Config) -> Box<dyn Parser> {
    match kind {
        ParserKind::Simple => Box::new(SimpleParser),
        ParserKind::Dummy => Box::new(DummyParser::new(config.format.indent)),
    }
}

/// Build the pipeline for a run. `kind` overrides `generate.parser`.
pub fn pipeline(config: &Config, kind: Option<ParserKind>) -> Pipeline {
    let kind = kind.unwrap_or(config.generate.parser);
    let generator = Generator::new(&config.generate.banner, config.generate.timestamp);
    Pipeline::new(parser(kind, config), generator)
}
