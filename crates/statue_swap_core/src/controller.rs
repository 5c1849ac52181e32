//! Game controller: owns the session and turns picks into swaps.

use crate::action::{Selection, Swap, SwapError};
use crate::contracts::{Contract, SwapContract};
use crate::randomizer::Randomizer;
use crate::rules::{self, SwapResult};
use crate::shape::Shape;
use crate::types::{Session, StatueId};
use rand::Rng;
use rand::rngs::StdRng;
use tracing::{debug, info, instrument, warn};

/// What happened in response to a pick.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PickOutcome {
    /// First pick recorded; waiting for a second statue.
    Pending(Selection),
    /// The pending pick was on the same statue and has been replaced.
    Reselected(Selection),
    /// The pair resolved and both statues changed.
    Swapped {
        /// New codes for the two statues.
        result: SwapResult,
        /// Whether the session is now solved.
        solved: bool,
    },
    /// The pair was discarded without changing any statue.
    Rejected(SwapError),
}

/// Single-player controller holding the session, its random source and
/// at most one pending pick.
#[derive(Debug, Clone)]
pub struct GameController<R = StdRng> {
    randomizer: Randomizer<R>,
    session: Session,
    pending: Option<Selection>,
}

impl GameController<StdRng> {
    /// Creates a controller and starts the first session.
    ///
    /// With a seed every session sequence is reproducible.
    #[instrument]
    pub fn new(seed: Option<u64>) -> Self {
        Self::with_randomizer(Randomizer::from_seed(seed))
    }
}

impl<R: Rng> GameController<R> {
    /// Creates a controller from a randomizer and starts the first session.
    pub fn with_randomizer(mut randomizer: Randomizer<R>) -> Self {
        let session = Self::fresh_session(&mut randomizer);
        Self {
            randomizer,
            session,
            pending: None,
        }
    }

    /// Creates a controller resuming an existing session.
    pub fn with_session(randomizer: Randomizer<R>, session: Session) -> Self {
        Self {
            randomizer,
            session,
            pending: None,
        }
    }

    fn fresh_session(randomizer: &mut Randomizer<R>) -> Session {
        let statues = randomizer.initial_statues();
        let called = randomizer.called_shapes();
        Session::new(statues, called)
    }

    /// Returns the current session.
    pub fn session(&self) -> &Session {
        &self.session
    }

    /// Returns the pick waiting for a partner, if any.
    pub fn pending(&self) -> Option<Selection> {
        self.pending
    }

    /// Starts a new session, discarding the old one and any pending pick.
    #[instrument(skip(self))]
    pub fn on_start(&mut self) {
        self.session = Self::fresh_session(&mut self.randomizer);
        self.pending = None;
        info!(
            statues = ?self.session.statues().codes(),
            called = %self.session.called().abbreviations(),
            "Session started"
        );
    }

    /// Records a pick; the second pick on a different statue fires the swap.
    #[instrument(skip(self))]
    pub fn on_pick(&mut self, statue: StatueId, shape: Shape) -> PickOutcome {
        let selection = Selection::new(statue, shape);

        let Some(first) = self.pending.take() else {
            debug!(%selection, "Pick pending");
            self.pending = Some(selection);
            return PickOutcome::Pending(selection);
        };

        if first.statue == statue {
            debug!(%selection, "Pick replaced on same statue");
            self.pending = Some(selection);
            return PickOutcome::Reselected(selection);
        }

        match self.perform_swap(Swap::new(first, selection)) {
            Ok(result) => {
                let solved = self.check_for_win();
                PickOutcome::Swapped { result, solved }
            }
            Err(e) => {
                warn!(error = %e, "Swap discarded");
                PickOutcome::Rejected(e)
            }
        }
    }

    /// Resolves and applies a swap. Statues are untouched on error.
    #[instrument(skip(self))]
    fn perform_swap(&mut self, swap: Swap) -> Result<SwapResult, SwapError> {
        let before = *self.session.statues();

        SwapContract::pre(&before, &swap)?;

        let result = rules::resolve(&before, &swap)?;
        let mut after = before;
        rules::apply(&mut after, &result);

        #[cfg(debug_assertions)]
        SwapContract::post(&before, &after, &swap)?;

        *self.session.statues_mut() = after;
        info!(%swap, kind = ?result.kind, statues = ?after.codes(), "Swap applied");
        Ok(result)
    }

    /// Marks the session solved when every target code is present.
    ///
    /// Returns the session's solved flag, which stays set until the next start.
    #[instrument(skip(self))]
    pub fn check_for_win(&mut self) -> bool {
        if rules::is_solved(self.session.statues(), self.session.called()) {
            if !self.session.solved() {
                info!(targets = ?self.session.targets(), "Session solved");
            }
            self.session.mark_solved();
        }
        self.session.solved()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shape::CompositeCode;
    use crate::types::{CalledSet, Statues};

    fn controller(codes: [&str; 3]) -> GameController {
        let session = Session::new(
            Statues::new(codes.map(|c| c.parse().unwrap())),
            CalledSet::new([Shape::Circle, Shape::Square, Shape::Triangle]).unwrap(),
        );
        GameController::with_session(Randomizer::seeded(0), session)
    }

    #[test]
    fn test_first_pick_is_pending() {
        let mut game = controller(["CS", "CT", "ST"]);
        let outcome = game.on_pick(StatueId::One, Shape::Circle);
        assert_eq!(
            outcome,
            PickOutcome::Pending(Selection::new(StatueId::One, Shape::Circle))
        );
        assert!(game.pending().is_some());
    }

    #[test]
    fn test_same_statue_replaces_pending() {
        let mut game = controller(["CS", "CT", "ST"]);
        game.on_pick(StatueId::One, Shape::Circle);
        let outcome = game.on_pick(StatueId::One, Shape::Square);
        assert_eq!(
            outcome,
            PickOutcome::Reselected(Selection::new(StatueId::One, Shape::Square))
        );
        assert_eq!(
            game.pending(),
            Some(Selection::new(StatueId::One, Shape::Square))
        );
    }

    #[test]
    fn test_rejected_swap_clears_pending() {
        let mut game = controller(["CS", "CS", "TT"]);
        game.on_pick(StatueId::One, Shape::Circle);
        let outcome = game.on_pick(StatueId::Two, Shape::Square);
        assert_eq!(
            outcome,
            PickOutcome::Rejected(SwapError::IdenticalCodes(CompositeCode::CYLINDER))
        );
        assert_eq!(game.pending(), None);
        assert_eq!(
            game.session().statues().codes(),
            &[CompositeCode::CYLINDER, CompositeCode::CYLINDER, CompositeCode::PYRAMID]
        );
    }

    #[test]
    fn test_swap_reaching_targets_solves() {
        // CC + ST with S offered -> CS + CT; with ST on statue 3 that's a win.
        let mut game = controller(["CC", "ST", "ST"]);
        game.on_pick(StatueId::One, Shape::Circle);
        let outcome = game.on_pick(StatueId::Two, Shape::Square);
        assert!(matches!(outcome, PickOutcome::Swapped { solved: true, .. }));
        assert!(game.session().solved());
    }

    #[test]
    fn test_start_clears_solved_and_pending() {
        let mut game = controller(["CC", "ST", "ST"]);
        game.on_pick(StatueId::One, Shape::Circle);
        game.on_pick(StatueId::Two, Shape::Square);
        game.on_pick(StatueId::Three, Shape::Square);
        assert!(game.pending().is_some());

        game.on_start();
        assert!(!game.session().solved());
        assert_eq!(game.pending(), None);
    }
}
