//! Command line surface. Running with no subcommand starts the chat shell.

use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand};

#[derive(Debug, Parser)]
#[command(
    name = "teamchat",
    version,
    about = "Terminal team chat client with a mock backend"
)]
pub struct Cli {
    /// Path to the config file (defaults to ./config.toml)
    #[arg(short, long, global = true, value_name = "FILE")]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Debug, Clone, Copy, Subcommand)]
pub enum Command {
    /// Start the chat shell
    Run,
}

impl Cli {
    pub fn command(&self) -> Command {
        self.command.unwrap_or(Command::Run)
    }

    pub fn config_path(&self) -> Option<&Path> {
        self.config.as_deref()
    }
}
