use std::path::PathBuf;

use clap::Parser;

pub mod global;
pub mod root_commands;
pub mod subcommands;

pub use global::{GlobalFlags, OutputFormat};
pub use root_commands::Commands;

/// Top-level CLI parser for the `rota` binary.
#[derive(Debug, Parser)]
#[command(name = "rota", version, about = "Rota - meeting role assignments")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Output format: json, table, raw
    #[arg(short, long, global = true, default_value = "table")]
    pub format: OutputFormat,

    /// Quiet mode (errors only)
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Verbose mode (debug logging)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Profile store path (overrides `storage.profiles_path`)
    #[arg(long, global = true)]
    pub store: Option<PathBuf>,

    /// Seed for default generation (overrides `schedule.seed`)
    #[arg(long, global = true)]
    pub seed: Option<u64>,
}

impl Cli {
    #[must_use]
    pub fn global_flags(&self) -> GlobalFlags {
        GlobalFlags {
            format: self.format,
            quiet: self.quiet,
            verbose: self.verbose,
            store: self.store.clone(),
            seed: self.seed,
        }
    }
}
