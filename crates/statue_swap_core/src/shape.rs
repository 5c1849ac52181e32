//! Shape letters and the canonical two-letter composite code.

use serde::{Deserialize, Serialize};
use std::str::FromStr;
use tracing::instrument;

/// One of the three primitive shapes a statue can hold.
///
/// The declaration order (Circle < Square < Triangle) is the canonical
/// letter order used by [`CompositeCode`].
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Serialize,
    Deserialize,
    strum::EnumIter,
)]
pub enum Shape {
    /// Circle (`C`).
    Circle,
    /// Square (`S`).
    Square,
    /// Triangle (`T`).
    Triangle,
}

impl Shape {
    /// All shapes in canonical order.
    pub const ALL: [Shape; 3] = [Shape::Circle, Shape::Square, Shape::Triangle];

    /// Single-letter abbreviation.
    pub const fn letter(self) -> char {
        match self {
            Shape::Circle => 'C',
            Shape::Square => 'S',
            Shape::Triangle => 'T',
        }
    }

    /// Full display name.
    pub const fn name(self) -> &'static str {
        match self {
            Shape::Circle => "Circle",
            Shape::Square => "Square",
            Shape::Triangle => "Triangle",
        }
    }

    /// Looks up a shape by its letter (case-insensitive).
    pub fn from_letter(letter: char) -> Option<Self> {
        let letter = letter.to_ascii_uppercase();
        <Shape as strum::IntoEnumIterator>::iter().find(|shape| shape.letter() == letter)
    }

    const fn rank(self) -> u8 {
        self as u8
    }
}

impl std::fmt::Display for Shape {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// Parses a shape from a letter or a full name.
///
/// Only the first character is significant, so `"C"`, `"c"` and `"Circle"`
/// all yield [`Shape::Circle`].
impl FromStr for Shape {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let first = s.trim().chars().next().ok_or(ParseError::Empty)?;
        Shape::from_letter(first).ok_or(ParseError::UnknownShape(first))
    }
}

/// Builds the canonical code for an unordered pair of shapes.
///
/// The lower-ranked shape always comes first, so `make_code(a, b)` and
/// `make_code(b, a)` are equal.
pub const fn make_code(a: Shape, b: Shape) -> CompositeCode {
    if a.rank() <= b.rank() {
        CompositeCode { low: a, high: b }
    } else {
        CompositeCode { low: b, high: a }
    }
}

/// An unordered pair of shapes held by a statue, stored sorted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct CompositeCode {
    low: Shape,
    high: Shape,
}

impl CompositeCode {
    /// `CC`
    pub const SPHERE: CompositeCode = make_code(Shape::Circle, Shape::Circle);
    /// `SS`
    pub const CUBE: CompositeCode = make_code(Shape::Square, Shape::Square);
    /// `TT`
    pub const PYRAMID: CompositeCode = make_code(Shape::Triangle, Shape::Triangle);
    /// `CS`
    pub const CYLINDER: CompositeCode = make_code(Shape::Circle, Shape::Square);
    /// `CT`
    pub const CONE: CompositeCode = make_code(Shape::Circle, Shape::Triangle);
    /// `ST`
    pub const PRISM: CompositeCode = make_code(Shape::Square, Shape::Triangle);

    /// Every two-letter combination (with repetition) over three shapes.
    pub const ALL: [CompositeCode; 6] = [
        Self::SPHERE,
        Self::CYLINDER,
        Self::CONE,
        Self::CUBE,
        Self::PRISM,
        Self::PYRAMID,
    ];

    /// The lower-ranked letter.
    pub fn low(self) -> Shape {
        self.low
    }

    /// True when either letter is `shape`.
    #[cfg(test)]
    pub fn contains(self, shape: Shape) -> bool {
        self.low == shape || self.high == shape
    }

    /// True when both letters are the same shape.
    pub fn is_double(self) -> bool {
        self.low == self.high
    }

    /// The letter kept when `offered` leaves the pair.
    ///
    /// Returns the high letter if `offered` is the low one, otherwise the low
    /// letter (including when `offered` is not in the code at all).
    pub fn other_than(self, offered: Shape) -> Shape {
        if self.low == offered { self.high } else { self.low }
    }

    /// Replaces every occurrence of `from` with `to`, re-canonicalising.
    #[instrument]
    pub fn substitute(self, from: Shape, to: Shape) -> Self {
        let swap = |s: Shape| if s == from { to } else { s };
        make_code(swap(self.low), swap(self.high))
    }
}

impl std::fmt::Display for CompositeCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}{}", self.low.letter(), self.high.letter())
    }
}

impl FromStr for CompositeCode {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        let letters: Vec<char> = trimmed.chars().collect();
        let [a, b] = letters.as_slice() else {
            return Err(ParseError::InvalidCode(trimmed.to_string()));
        };
        let a = Shape::from_letter(*a).ok_or(ParseError::UnknownShape(*a))?;
        let b = Shape::from_letter(*b).ok_or(ParseError::UnknownShape(*b))?;
        Ok(make_code(a, b))
    }
}

impl TryFrom<String> for CompositeCode {
    type Error = ParseError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<CompositeCode> for String {
    fn from(code: CompositeCode) -> Self {
        code.to_string()
    }
}

/// Error parsing a shape, code or statue identity from text.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
pub enum ParseError {
    /// Nothing was selected.
    #[display("Empty shape selection")]
    Empty,

    /// The letter does not name a shape.
    #[display("Unknown shape '{}' (expected C, S or T)", _0)]
    UnknownShape(char),

    /// A composite code must be exactly two shape letters.
    #[display("Invalid composite code '{}' (expected two letters)", _0)]
    InvalidCode(String),

    /// Statues are numbered 1 to 3.
    #[display("Invalid statue '{}' (expected 1, 2 or 3)", _0)]
    InvalidStatue(String),
}

impl std::error::Error for ParseError {}
