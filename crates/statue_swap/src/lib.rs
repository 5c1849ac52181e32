//! Statue Swap - terminal front ends for the statue puzzle.
//!
//! # Architecture
//!
//! - **Config**: TOML settings shared by every front end
//! - **Script**: line-oriented play on stdin/stdout
//! - **TUI**: full-screen play with ratatui
//! - **Render**: text and JSON views of a session
//!
//! The rules live in [`statue_swap_core`].

#![warn(missing_docs)]
#![forbid(unsafe_code)]

pub mod cli;
mod config;
mod logging;
mod render;
mod script;
pub mod tui;

// Crate-level exports - Configuration
pub use config::{ConfigError, DEFAULT_CONFIG_FILE, StatueSwapConfig};

// Crate-level exports - Logging
pub use logging::{init_file_logging, init_stderr_logging};

// Crate-level exports - Views
pub use render::{Snapshot, StatueView, describe_outcome, plain_board, statue_label};

// Crate-level exports - Script mode
pub use script::{OutputFormat, ScriptCommand, ScriptError, ScriptSummary, run_script};
