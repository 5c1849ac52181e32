//! Text and JSON views of a session, shared by both front ends.

use serde::Serialize;
use statue_swap_core::{
    CompositeCode, GameController, PickOutcome, Selection, Shape, StatueId, SwapKind,
};

/// One statue as shown to the player.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StatueView {
    /// Statue number (1-3).
    pub statue: u8,
    /// Canonical code, e.g. `CS`.
    pub code: CompositeCode,
    /// Display name, e.g. `Cylinder`.
    pub name: &'static str,
}

/// Everything a front end needs to draw the board.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Snapshot {
    /// Statues left to right.
    pub statues: Vec<StatueView>,
    /// Called shapes in call order.
    pub called: Vec<Shape>,
    /// Called shapes as spaced first letters.
    pub called_display: String,
    /// Pick waiting for a partner.
    pub pending: Option<Selection>,
    /// Whether the win banner is shown.
    pub solved: bool,
    /// Message describing the last action.
    pub event: String,
}

impl Snapshot {
    /// Captures the controller's current state.
    pub fn capture(game: &GameController, event: impl Into<String>) -> Self {
        let session = game.session();
        Self {
            statues: session
                .statues()
                .iter()
                .map(|statue| StatueView {
                    statue: statue.id.number(),
                    code: statue.code,
                    name: statue.name(),
                })
                .collect(),
            called: session.called().shapes().to_vec(),
            called_display: session.called().abbreviations(),
            pending: game.pending(),
            solved: session.solved(),
            event: event.into(),
        }
    }
}

/// Label for a statue, with the code when requested.
pub fn statue_label(code: CompositeCode, show_codes: bool) -> String {
    if show_codes {
        format!("{} ({})", code.display_name(), code)
    } else {
        code.display_name().to_string()
    }
}

/// Human-readable description of a pick outcome.
pub fn describe_outcome(outcome: &PickOutcome) -> String {
    match outcome {
        PickOutcome::Pending(selection) => {
            format!("Picked {}; choose a shape on another statue", selection)
        }
        PickOutcome::Reselected(selection) => format!("Changed pick to {}", selection),
        PickOutcome::Swapped { result, solved } => {
            let rule = match result.kind {
                SwapKind::DoubleDouble => "double/double",
                SwapKind::DoubleSingle => "double/single",
                SwapKind::SingleSingle => "single/single",
            };
            let mut text = format!(
                "Swapped ({}): statue {} is now {}, statue {} is now {}",
                rule,
                result.first.0,
                result.first.1.display_name(),
                result.second.0,
                result.second.1.display_name()
            );
            if *solved {
                text.push_str(" - solved!");
            }
            text
        }
        PickOutcome::Rejected(e) => format!("Swap ignored: {}", e),
    }
}

/// Multi-line plain-text board.
pub fn plain_board(game: &GameController, show_codes: bool) -> String {
    let session = game.session();
    let statues = session
        .statues()
        .iter()
        .map(|statue| format!("{}: {}", statue.id, statue_label(statue.code, show_codes)))
        .collect::<Vec<_>>()
        .join(" | ");

    let mut text = format!(
        "statues: {}\ncalled:  {}",
        statues,
        session.called().abbreviations()
    );
    if let Some(pending) = game.pending() {
        text.push_str(&format!("\npending: {}", pending));
    }
    if session.solved() {
        text.push_str("\n*** SOLVED ***");
    }
    text
}

/// Marker shown on a statue holding the pending pick.
pub fn pending_marker(game: &GameController, statue: StatueId) -> Option<Shape> {
    game.pending()
        .filter(|selection| selection.statue == statue)
        .map(|selection| selection.shape)
}

#[cfg(test)]
mod tests {
    use super::*;
    use statue_swap_core::{CalledSet, Randomizer, Session, Statues};

    fn game() -> GameController {
        let session = Session::new(
            Statues::new([
                CompositeCode::SPHERE,
                CompositeCode::PRISM,
                CompositeCode::PYRAMID,
            ]),
            CalledSet::new([Shape::Triangle, Shape::Circle, Shape::Square]).unwrap(),
        );
        GameController::with_session(Randomizer::seeded(1), session)
    }

    #[test]
    fn test_plain_board() {
        let text = plain_board(&game(), false);
        assert_eq!(
            text,
            "statues: 1: Sphere | 2: Prism | 3: Pyramid\ncalled:  T      C      S"
        );
    }

    #[test]
    fn test_plain_board_with_codes_and_pending() {
        let mut g = game();
        g.on_pick(StatueId::Two, Shape::Square);
        let text = plain_board(&g, true);
        assert!(text.contains("2: Prism (ST)"));
        assert!(text.contains("pending: statue 2 -> Square"));
    }

    #[test]
    fn test_snapshot_json() {
        let json = serde_json::to_value(Snapshot::capture(&game(), "start")).unwrap();
        assert_eq!(json["statues"][0]["code"], "CC");
        assert_eq!(json["statues"][2]["name"], "Pyramid");
        assert_eq!(json["called_display"], "T      C      S");
        assert_eq!(json["solved"], false);
        assert!(json["pending"].is_null());
    }

    #[test]
    fn test_pending_marker() {
        let mut g = game();
        g.on_pick(StatueId::Three, Shape::Triangle);
        assert_eq!(pending_marker(&g, StatueId::Three), Some(Shape::Triangle));
        assert_eq!(pending_marker(&g, StatueId::One), None);
    }
}
