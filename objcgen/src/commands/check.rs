use std::path::PathBuf;

use clap::Args;
use eyre::Result;
use objcgen_config::{Config, ParserKind};

use super::UnwrapOrExit;
use crate::{
    ops,
    reports::{Report, TerminalOutput},
};

#[derive(Args)]
pub struct CheckCommand {
    /// Directory containing the input files (defaults to current directory)
    #[arg(short, long, default_value = ".")]
    pub input: PathBuf,

    /// Path to objcgen.toml (defaults to <input>/objcgen.toml)
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Parser to use (overrides objcgen.toml setting)
    #[arg(short, long)]
    pub parser: Option<ParserKind>,

    /// Print the report as JSON
    #[arg(long)]
    pub json: bool,
}

impl CheckCommand {
    /// Run the check command
    pub fn run(&self) -> Result<()> {
        let (config, config_path) =
            Config::load(&self.input, self.config.as_deref()).unwrap_or_exit();
        tracing::debug!(config = ?config_path, "loaded configuration");

        let report = ops::check(&config, config_path, &self.input, self.parser)?;
        if self.json {
            println!("{}", serde_json::to_string_pretty(&report)?);
        } else {
            report.render(&mut TerminalOutput::new());
        }

        if !report.is_valid() {
            std::process::exit(1);
        }
        Ok(())
    }
}
