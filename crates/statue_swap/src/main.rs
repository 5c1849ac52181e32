//! Statue Swap - unified CLI
//!
//! Shape-swapping statue puzzle with a terminal UI and a script mode.

use anyhow::Result;
use clap::Parser;
use statue_swap::cli::{Cli, Command};
use statue_swap::tui::{self, App};
use statue_swap::{OutputFormat, StatueSwapConfig, init_file_logging, init_stderr_logging, run_script};
use statue_swap_core::GameController;
use tracing::info;

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    let config = StatueSwapConfig::load(cli.config.as_deref())?.with_seed(cli.seed);

    match cli.command {
        Command::Play { show_codes } => run_play(config.with_show_codes(show_codes)),
        Command::Script { json } => run_script_mode(config, json),
    }
}

/// Run the full-screen terminal UI
fn run_play(config: StatueSwapConfig) -> Result<()> {
    init_file_logging(&config)?;
    info!(seed = ?config.seed(), "Starting play mode");

    let game = GameController::new(*config.seed());
    tui::run_tui(App::new(game, *config.show_codes()))
}

/// Run the stdin/stdout script mode
fn run_script_mode(config: StatueSwapConfig, json: bool) -> Result<()> {
    init_stderr_logging(&config);
    info!(seed = ?config.seed(), json, "Starting script mode");

    let format = if json {
        OutputFormat::Json
    } else {
        OutputFormat::Plain
    };

    let mut game = GameController::new(*config.seed());
    let stdin = std::io::stdin();
    let summary = run_script(
        &mut game,
        stdin.lock(),
        std::io::stdout(),
        std::io::stderr(),
        format,
        *config.show_codes(),
    )?;
    info!(?summary, "Done");
    Ok(())
}
