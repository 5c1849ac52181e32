//! Swap resolution: how two picks rewrite two statues.

use crate::action::{Swap, SwapError};
use crate::shape::{CompositeCode, Shape, make_code};
use crate::types::{StatueId, Statues};
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

/// Which rule resolved a swap.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SwapKind {
    /// Both statues held doubles.
    DoubleDouble,
    /// One double, one mixed.
    DoubleSingle,
    /// Both statues held mixed codes.
    SingleSingle,
}

/// New codes for the two statues involved in a swap.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SwapResult {
    /// Rule that produced the result.
    pub kind: SwapKind,
    /// First picked statue and its new code.
    pub first: (StatueId, CompositeCode),
    /// Second picked statue and its new code.
    pub second: (StatueId, CompositeCode),
}

/// Computes the outcome of a swap without touching the statues.
///
/// Rules, in priority order:
/// 1. identical codes are rejected;
/// 2. double with double: both become the mix of the two letters;
/// 3. double with single: the double statue takes the letter picked on the
///    single side, and the single statue keeps its other letter paired with
///    the double's letter;
/// 4. single with single: each statue's picked letter is replaced by the
///    other statue's picked letter.
#[instrument]
pub fn resolve(statues: &Statues, swap: &Swap) -> Result<SwapResult, SwapError> {
    let (a, b) = (swap.first, swap.second);
    if a.statue == b.statue {
        return Err(SwapError::SameStatue(a.statue));
    }

    let a_code = statues.get(a.statue);
    let b_code = statues.get(b.statue);

    if a_code == b_code {
        return Err(SwapError::IdenticalCodes(a_code));
    }

    let result = match (a_code.is_double(), b_code.is_double()) {
        (true, true) => {
            let mixed = make_code(a_code.low(), b_code.low());
            SwapResult {
                kind: SwapKind::DoubleDouble,
                first: (a.statue, mixed),
                second: (b.statue, mixed),
            }
        }
        (true, false) => {
            let (double, single) = double_single(a_code, b_code, b.shape);
            SwapResult {
                kind: SwapKind::DoubleSingle,
                first: (a.statue, double),
                second: (b.statue, single),
            }
        }
        (false, true) => {
            let (double, single) = double_single(b_code, a_code, a.shape);
            SwapResult {
                kind: SwapKind::DoubleSingle,
                first: (a.statue, single),
                second: (b.statue, double),
            }
        }
        (false, false) => SwapResult {
            kind: SwapKind::SingleSingle,
            first: (a.statue, a_code.substitute(a.shape, b.shape)),
            second: (b.statue, b_code.substitute(b.shape, a.shape)),
        },
    };

    debug!(
        kind = ?result.kind,
        first = %result.first.1,
        second = %result.second.1,
        "Swap resolved"
    );
    Ok(result)
}

/// Returns (new double-side code, new single-side code).
fn double_single(
    double: CompositeCode,
    single: CompositeCode,
    offered: Shape,
) -> (CompositeCode, CompositeCode) {
    let letter = double.low();
    let kept = single.other_than(offered);
    (make_code(letter, offered), make_code(letter, kept))
}

/// Writes a resolved swap into the statues. Both codes change together.
#[instrument(skip(statues))]
pub fn apply(statues: &mut Statues, result: &SwapResult) {
    statues.set(result.first.0, result.first.1);
    statues.set(result.second.0, result.second.1);
}
