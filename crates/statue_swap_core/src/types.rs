//! Core domain types: statues, the called set and the session.

use crate::rules::win;
use crate::shape::{CompositeCode, ParseError, Shape};
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use tracing::instrument;

/// Identity of one of the three statues (1-3).
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, strum::EnumIter,
)]
pub enum StatueId {
    /// Statue 1 (left).
    One,
    /// Statue 2 (middle).
    Two,
    /// Statue 3 (right).
    Three,
}

impl StatueId {
    /// All statues, left to right.
    pub const ALL: [StatueId; 3] = [StatueId::One, StatueId::Two, StatueId::Three];

    /// Zero-based slot index (0-2).
    pub fn index(self) -> usize {
        match self {
            StatueId::One => 0,
            StatueId::Two => 1,
            StatueId::Three => 2,
        }
    }

    /// One-based statue number (1-3).
    pub fn number(self) -> u8 {
        self.index() as u8 + 1
    }

    /// Creates an identity from its one-based number.
    pub fn from_number(number: u8) -> Option<Self> {
        match number {
            1 => Some(StatueId::One),
            2 => Some(StatueId::Two),
            3 => Some(StatueId::Three),
            _ => None,
        }
    }

    /// Next statue to the right, wrapping around.
    pub fn next(self) -> Self {
        match self {
            StatueId::One => StatueId::Two,
            StatueId::Two => StatueId::Three,
            StatueId::Three => StatueId::One,
        }
    }

    /// Next statue to the left, wrapping around.
    pub fn previous(self) -> Self {
        match self {
            StatueId::One => StatueId::Three,
            StatueId::Two => StatueId::One,
            StatueId::Three => StatueId::Two,
        }
    }
}

impl std::fmt::Display for StatueId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.number())
    }
}

impl FromStr for StatueId {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        trimmed
            .parse::<u8>()
            .ok()
            .and_then(StatueId::from_number)
            .ok_or_else(|| ParseError::InvalidStatue(trimmed.to_string()))
    }
}

/// A statue and the code it currently holds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Statue {
    /// Which statue this is.
    pub id: StatueId,
    /// The shapes it holds.
    pub code: CompositeCode,
}

impl Statue {
    /// Display name of the held solid.
    pub fn name(&self) -> &'static str {
        self.code.display_name()
    }
}

/// The three statues' codes, indexed by [`StatueId`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Statues {
    codes: [CompositeCode; 3],
}

impl Statues {
    /// Creates statues 1-3 from codes in order.
    pub fn new(codes: [CompositeCode; 3]) -> Self {
        Self { codes }
    }

    /// Code held by a statue.
    pub fn get(&self, id: StatueId) -> CompositeCode {
        self.codes[id.index()]
    }

    /// Overwrites a statue's code.
    pub(crate) fn set(&mut self, id: StatueId, code: CompositeCode) {
        self.codes[id.index()] = code;
    }

    /// All codes in statue order.
    pub fn codes(&self) -> &[CompositeCode; 3] {
        &self.codes
    }

    /// True when any statue holds `code`.
    pub fn contains(&self, code: CompositeCode) -> bool {
        self.codes.contains(&code)
    }

    /// Iterates statues left to right.
    pub fn iter(&self) -> impl Iterator<Item = Statue> + '_ {
        StatueId::ALL.into_iter().map(|id| Statue {
            id,
            code: self.get(id),
        })
    }
}

/// Separator between called-shape letters on the board.
pub const CALLED_SEPARATOR: &str = "      ";

/// The three distinct shapes called for this session, in call order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CalledSet {
    shapes: [Shape; 3],
}

impl CalledSet {
    /// Creates a called set, or `None` if any shape repeats.
    pub fn new(shapes: [Shape; 3]) -> Option<Self> {
        let [a, b, c] = shapes;
        if a == b || b == c || a == c {
            None
        } else {
            Some(Self { shapes })
        }
    }

    /// Caller guarantees the shapes are distinct.
    pub(crate) fn from_distinct(shapes: [Shape; 3]) -> Self {
        debug_assert!(Self::new(shapes).is_some(), "called shapes repeat");
        Self { shapes }
    }

    /// The called shapes in call order.
    pub fn shapes(&self) -> &[Shape; 3] {
        &self.shapes
    }

    /// First-letter abbreviations in call order, e.g. `C      T      S`.
    pub fn abbreviations(&self) -> String {
        self.shapes
            .iter()
            .map(|shape| shape.letter().to_string())
            .collect::<Vec<_>>()
            .join(CALLED_SEPARATOR)
    }
}

/// One game: three statues, the called set and whether it has been solved.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    statues: Statues,
    called: CalledSet,
    solved: bool,
}

impl Session {
    /// Creates an unsolved session.
    #[instrument]
    pub fn new(statues: Statues, called: CalledSet) -> Self {
        Self {
            statues,
            called,
            solved: false,
        }
    }

    /// Returns the statues.
    pub fn statues(&self) -> &Statues {
        &self.statues
    }

    /// Returns the called set.
    pub fn called(&self) -> &CalledSet {
        &self.called
    }

    /// Whether the win banner should be shown.
    pub fn solved(&self) -> bool {
        self.solved
    }

    /// Display names of statues 1-3.
    pub fn statue_names(&self) -> [&'static str; 3] {
        let codes = *self.statues.codes();
        codes.map(CompositeCode::display_name)
    }

    /// Codes the statues must hold for the session to be won.
    pub fn targets(&self) -> [CompositeCode; 3] {
        win::targets(&self.called)
    }

    pub(crate) fn statues_mut(&mut self) -> &mut Statues {
        &mut self.statues
    }

    pub(crate) fn mark_solved(&mut self) {
        self.solved = true;
    }
}
