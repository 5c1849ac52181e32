//! Win detection.

use crate::shape::{CompositeCode, Shape, make_code};
use crate::types::{CalledSet, Statues};
use tracing::instrument;

/// Target code per excluded shape, indexed in [`Shape::ALL`] order.
const TARGETS: [CompositeCode; 3] = [
    make_code(Shape::Square, Shape::Triangle),
    make_code(Shape::Circle, Shape::Triangle),
    make_code(Shape::Circle, Shape::Square),
];

/// The mixed code made of the two shapes other than `called`.
pub fn target_for(called: Shape) -> CompositeCode {
    TARGETS[called as usize]
}

/// Target codes for a called set, in call order.
pub fn targets(called: &CalledSet) -> [CompositeCode; 3] {
    let shapes = *called.shapes();
    shapes.map(target_for)
}

/// True when every target code is held by some statue.
#[instrument]
pub fn is_solved(statues: &Statues, called: &CalledSet) -> bool {
    targets(called)
        .iter()
        .all(|target| statues.contains(*target))
}
