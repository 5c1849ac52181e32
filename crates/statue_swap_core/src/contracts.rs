//! Contract-based validation for swaps.
//!
//! Contracts state what must hold around a state transition:
//! {P(state, action)} action {Q(before, after)}.

use crate::action::{Swap, SwapError};
use crate::types::Statues;
use tracing::{instrument, warn};

// ─────────────────────────────────────────────────────────────
//  Contract Trait
// ─────────────────────────────────────────────────────────────

/// Preconditions and postconditions for a state transition.
pub trait Contract<S, A> {
    /// Checks preconditions before applying the action.
    fn pre(state: &S, action: &A) -> Result<(), SwapError>;

    /// Checks postconditions after applying the action.
    fn post(before: &S, after: &S, action: &A) -> Result<(), SwapError>;
}

// ─────────────────────────────────────────────────────────────
//  Swap Preconditions
// ─────────────────────────────────────────────────────────────

/// Precondition: the two picks name different statues.
pub struct DistinctStatues;

impl DistinctStatues {
    /// Fails with [`SwapError::SameStatue`] when both picks share a statue.
    #[instrument]
    pub fn check(swap: &Swap) -> Result<(), SwapError> {
        if swap.first.statue == swap.second.statue {
            Err(SwapError::SameStatue(swap.first.statue))
        } else {
            Ok(())
        }
    }
}

/// Precondition: the two statues hold different codes.
pub struct DistinctCodes;

impl DistinctCodes {
    /// Fails with [`SwapError::IdenticalCodes`] when both statues match.
    #[instrument(skip(statues))]
    pub fn check(swap: &Swap, statues: &Statues) -> Result<(), SwapError> {
        let code = statues.get(swap.first.statue);
        if code == statues.get(swap.second.statue) {
            Err(SwapError::IdenticalCodes(code))
        } else {
            Ok(())
        }
    }
}

/// Composite precondition: a swap is legal if both of the above hold.
pub struct LegalSwap;

impl LegalSwap {
    /// Validates all preconditions for a swap.
    #[instrument(skip(statues))]
    pub fn check(swap: &Swap, statues: &Statues) -> Result<(), SwapError> {
        DistinctStatues::check(swap)?;
        DistinctCodes::check(swap, statues)?;
        Ok(())
    }
}

// ─────────────────────────────────────────────────────────────
//  Swap Contract (Pre + Post)
// ─────────────────────────────────────────────────────────────

/// Contract for swap actions.
///
/// Preconditions:
/// - Picks are on different statues
/// - The picked statues hold different codes
///
/// Postconditions:
/// - The statue that was not picked is unchanged
pub struct SwapContract;

impl Contract<Statues, Swap> for SwapContract {
    fn pre(statues: &Statues, swap: &Swap) -> Result<(), SwapError> {
        LegalSwap::check(swap, statues)
    }

    fn post(before: &Statues, after: &Statues, swap: &Swap) -> Result<(), SwapError> {
        let Some(bystander) = swap.bystander() else {
            return Err(SwapError::InvariantViolation(
                "Swap has no bystander statue".to_string(),
            ));
        };
        if before.get(bystander) != after.get(bystander) {
            warn!(
                statue = %bystander,
                before = %before.get(bystander),
                after = %after.get(bystander),
                "Bystander statue changed"
            );
            return Err(SwapError::InvariantViolation(format!(
                "Postcondition failed: statue {} changed",
                bystander
            )));
        }
        Ok(())
    }
}
