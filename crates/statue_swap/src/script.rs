//! Line-oriented front end: one command per line on stdin.
//!
//! ```text
//! start            # new session
//! pick 1 circle    # pick a shape on a statue
//! 2 S              # short form of pick
//! show             # print the board again
//! quit
//! ```

use crate::render::{self, Snapshot};
use anyhow::Result;
use statue_swap_core::{GameController, ParseError, Shape, StatueId};
use std::io::{BufRead, Write};
use std::str::FromStr;
use tracing::{debug, info, instrument, warn};

/// A parsed script line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScriptCommand {
    /// Start a new session.
    Start,
    /// Pick a shape on a statue.
    Pick(StatueId, Shape),
    /// Print the current board.
    Show,
    /// Stop reading input.
    Quit,
}

/// Error parsing a script line.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display, derive_more::From)]
pub enum ScriptError {
    /// The first word is not a command.
    #[display("Unknown command '{}'", _0)]
    UnknownCommand(String),

    /// `pick` needs a statue and a shape.
    #[display("Usage: pick <1|2|3> <C|S|T>")]
    MissingArgument,

    /// Extra words after a complete command.
    #[display("Unexpected '{}' after command", _0)]
    TrailingInput(String),

    /// A statue or shape failed to parse.
    #[display("{}", _0)]
    #[from]
    Parse(ParseError),
}

impl std::error::Error for ScriptError {}

impl FromStr for ScriptCommand {
    type Err = ScriptError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let words: Vec<&str> = s.split_whitespace().collect();
        let Some((head, args)) = words.split_first() else {
            return Err(ScriptError::UnknownCommand(String::new()));
        };

        let command = match head.to_ascii_lowercase().as_str() {
            "start" | "new" => ScriptCommand::Start,
            "show" => ScriptCommand::Show,
            "quit" | "exit" => ScriptCommand::Quit,
            "pick" => return parse_pick(args),
            _ if head.parse::<StatueId>().is_ok() => return parse_pick(&words),
            _ => return Err(ScriptError::UnknownCommand((*head).to_string())),
        };

        match args.first() {
            Some(extra) => Err(ScriptError::TrailingInput((*extra).to_string())),
            None => Ok(command),
        }
    }
}

fn parse_pick(args: &[&str]) -> Result<ScriptCommand, ScriptError> {
    match args {
        [statue, shape] => Ok(ScriptCommand::Pick(statue.parse()?, shape.parse()?)),
        [_, _, extra, ..] => Err(ScriptError::TrailingInput((*extra).to_string())),
        _ => Err(ScriptError::MissingArgument),
    }
}

/// How the board is printed after each command.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    /// Multi-line text.
    #[default]
    Plain,
    /// One JSON object per line.
    Json,
}

/// Totals reported when a script ends.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ScriptSummary {
    /// Commands executed.
    pub commands: usize,
    /// Lines that failed to parse.
    pub errors: usize,
    /// Whether the final session was solved.
    pub solved: bool,
}

/// Runs commands from `input` until end of input or `quit`.
///
/// The board goes to `output` after every command; malformed lines are
/// reported on `errors` and skipped.
#[instrument(skip(game, input, output, errors))]
pub fn run_script<R: BufRead, W: Write, E: Write>(
    game: &mut GameController,
    input: R,
    mut output: W,
    mut errors: E,
    format: OutputFormat,
    show_codes: bool,
) -> Result<ScriptSummary> {
    let mut summary = ScriptSummary::default();
    emit(&mut output, game, format, show_codes, "Session started")?;

    for (number, bytes) in input.split(b'\n').enumerate() {
        let line = match String::from_utf8(bytes?) {
            Ok(line) => line,
            Err(e) => {
                warn!(line = number + 1, error = %e, "Skipping line that is not UTF-8");
                writeln!(errors, "error: line {}: {}", number + 1, e)?;
                summary.errors += 1;
                continue;
            }
        };
        let text = line.split('#').next().unwrap_or_default().trim();
        if text.is_empty() {
            continue;
        }

        let command = match text.parse::<ScriptCommand>() {
            Ok(command) => command,
            Err(e) => {
                warn!(line = number + 1, error = %e, "Skipping malformed line");
                writeln!(errors, "error: line {}: {}", number + 1, e)?;
                summary.errors += 1;
                continue;
            }
        };

        debug!(?command, "Executing command");
        summary.commands += 1;
        let event = match command {
            ScriptCommand::Quit => break,
            ScriptCommand::Start => {
                game.on_start();
                "Session started".to_string()
            }
            ScriptCommand::Show => "Board".to_string(),
            ScriptCommand::Pick(statue, shape) => {
                render::describe_outcome(&game.on_pick(statue, shape))
            }
        };
        emit(&mut output, game, format, show_codes, &event)?;
    }

    summary.solved = game.session().solved();
    info!(?summary, "Script finished");
    Ok(summary)
}

fn emit<W: Write>(
    output: &mut W,
    game: &GameController,
    format: OutputFormat,
    show_codes: bool,
    event: &str,
) -> Result<()> {
    match format {
        OutputFormat::Plain => {
            writeln!(output, "> {}", event)?;
            writeln!(output, "{}", render::plain_board(game, show_codes))?;
        }
        OutputFormat::Json => {
            let snapshot = Snapshot::capture(game, event);
            writeln!(output, "{}", serde_json::to_string(&snapshot)?)?;
        }
    }
    output.flush()?;
    Ok(())
}
