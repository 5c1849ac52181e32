//! Application state and key handling.

use crate::render;
use crossterm::event::KeyCode;
use statue_swap_core::{GameController, Shape, StatueId};
use tracing::debug;

/// Main application state.
pub struct App {
    game: GameController,
    focus: StatueId,
    status_message: String,
    show_codes: bool,
    should_quit: bool,
}

impl App {
    /// Creates an application around a started controller.
    pub fn new(game: GameController, show_codes: bool) -> Self {
        Self {
            game,
            focus: StatueId::One,
            status_message: "Pick a shape on one statue, then on another.".to_string(),
            show_codes,
            should_quit: false,
        }
    }

    /// Gets the controller.
    pub fn game(&self) -> &GameController {
        &self.game
    }

    /// Statue the next pick applies to.
    pub fn focus(&self) -> StatueId {
        self.focus
    }

    /// Gets the current status message.
    pub fn status_message(&self) -> &str {
        &self.status_message
    }

    /// Whether statue codes are shown next to names.
    pub fn show_codes(&self) -> bool {
        self.show_codes
    }

    /// Whether the user asked to quit.
    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// Handles one key press.
    pub fn handle_key(&mut self, key: KeyCode) {
        debug!(?key, focus = %self.focus, "Handling key");

        match key {
            KeyCode::Char('q') | KeyCode::Esc => self.should_quit = true,
            KeyCode::Char('n') => self.restart(),
            KeyCode::Left => self.focus = self.focus.previous(),
            KeyCode::Right | KeyCode::Tab => self.focus = self.focus.next(),
            KeyCode::Char(c) if c.is_ascii_digit() => {
                if let Some(statue) = c
                    .to_digit(10)
                    .and_then(|d| u8::try_from(d).ok())
                    .and_then(StatueId::from_number)
                {
                    self.focus = statue;
                }
            }
            KeyCode::Char(c) => {
                if let Some(shape) = Shape::from_letter(c) {
                    self.pick(shape);
                }
            }
            _ => {}
        }
    }

    fn pick(&mut self, shape: Shape) {
        let outcome = self.game.on_pick(self.focus, shape);
        self.status_message = render::describe_outcome(&outcome);
    }

    /// Starts a new session.
    pub fn restart(&mut self) {
        debug!("Restarting game");
        self.game.on_start();
        self.focus = StatueId::One;
        self.status_message = "New game. Pick a shape on one statue, then on another.".to_string();
    }
}
