use std::path::PathBuf;

use clap::Args;
use eyre::Result;
use objcgen_config::{Config, ParserKind};

use super::UnwrapOrExit;
use crate::{
    ops::{self, GenerateOptions},
    reports::{Report, TerminalOutput},
};

#[derive(Args)]
pub struct GenerateCommand {
    /// Directory containing the input files (defaults to current directory)
    #[arg(short, long, default_value = ".")]
    pub input: PathBuf,

    /// Directory to write generated files to
    #[arg(short, long)]
    pub output: PathBuf,

    /// Path to objcgen.toml (defaults to <input>/objcgen.toml)
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Parser to use (overrides objcgen.toml setting)
    #[arg(short, long)]
    pub parser: Option<ParserKind>,

    /// Preview generated code without writing to disk
    #[arg(long)]
    pub dry_run: bool,
}

impl GenerateCommand {
    /// Run the generate command
    pub fn run(&self) -> Result<()> {
        let (config, config_path) =
            Config::load(&self.input, self.config.as_deref()).unwrap_or_exit();
        tracing::debug!(config = ?config_path, "loaded configuration");

        let report = ops::generate(
            &config,
            GenerateOptions {
                input_dir: &self.input,
                output_dir: &self.output,
                parser: self.parser,
                dry_run: self.dry_run,
            },
        )?;
        report.render(&mut TerminalOutput::new());

        if report.has_errors() {
            std::process::exit(1);
        }
        Ok(())
    }
}
