//! First-class action types: picks and the swaps they pair into.
//!
//! A pick is a player's intent, not a side effect. Two picks make a
//! [`Swap`], which can be validated before any statue changes.

use crate::shape::{CompositeCode, Shape};
use crate::types::StatueId;
use serde::{Deserialize, Serialize};

/// One player pick: a statue and the shape chosen on it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, derive_new::new)]
pub struct Selection {
    /// The statue picked.
    pub statue: StatueId,
    /// The shape chosen on that statue.
    pub shape: Shape,
}

impl std::fmt::Display for Selection {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "statue {} -> {}", self.statue, self.shape)
    }
}

/// Two picks, in the order they were made.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, derive_new::new)]
pub struct Swap {
    /// The first pick.
    pub first: Selection,
    /// The second pick.
    pub second: Selection,
}

impl Swap {
    /// The statue neither pick touches, if the picks are on different statues.
    pub fn bystander(&self) -> Option<StatueId> {
        if self.first.statue == self.second.statue {
            return None;
        }
        <StatueId as strum::IntoEnumIterator>::iter()
            .find(|id| *id != self.first.statue && *id != self.second.statue)
    }
}

impl std::fmt::Display for Swap {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}] <-> [{}]", self.first, self.second)
    }
}

/// Why a swap was not applied.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
pub enum SwapError {
    /// Both statues hold the same code.
    #[display("Both statues already hold {}", _0)]
    IdenticalCodes(CompositeCode),

    /// Both picks were made on the same statue.
    #[display("Statue {} cannot swap with itself", _0)]
    SameStatue(StatueId),

    /// A postcondition failed after resolution.
    #[display("Invariant violation: {}", _0)]
    InvariantViolation(String),
}

impl std::error::Error for SwapError {}
