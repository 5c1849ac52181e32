//! Command-line interface for statue_swap.

use clap::{Parser, Subcommand};

/// Statue Swap - match the called shapes by swapping statue components
#[derive(Parser, Debug)]
#[command(name = "statue_swap")]
#[command(about = "Shape-swapping statue puzzle", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to a TOML config file (defaults to ./statue_swap.toml if present)
    #[arg(short, long, global = true)]
    pub config: Option<std::path::PathBuf>,

    /// Seed for reproducible sessions (overrides the config file)
    #[arg(long, global = true)]
    pub seed: Option<u64>,

    /// Subcommand to run
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Play in the full-screen terminal UI
    Play {
        /// Show composite codes (e.g. CS) next to statue names
        #[arg(long)]
        show_codes: bool,
    },

    /// Read commands from stdin and print the session after each one
    Script {
        /// Emit one JSON snapshot per line instead of plain text
        #[arg(long)]
        json: bool,
    },
}
