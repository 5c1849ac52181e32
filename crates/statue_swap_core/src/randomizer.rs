//! Random session setup: starting statues and called shapes.

use crate::shape::{CompositeCode, Shape};
use crate::types::{CalledSet, Statues};
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use tracing::{debug, instrument};

/// The two starting triples a session may begin from.
pub const STARTING_TRIPLES: [[CompositeCode; 3]; 2] = [
    [
        CompositeCode::CYLINDER,
        CompositeCode::CONE,
        CompositeCode::PRISM,
    ],
    [
        CompositeCode::SPHERE,
        CompositeCode::PRISM,
        CompositeCode::PYRAMID,
    ],
];

/// Draws starting statues and called shapes from a random source.
///
/// Deterministic for a given seeded source.
#[derive(Debug, Clone)]
pub struct Randomizer<R = StdRng> {
    rng: R,
}

impl Randomizer<StdRng> {
    /// Creates a randomizer with a fixed seed.
    #[instrument]
    pub fn seeded(seed: u64) -> Self {
        Self::new(StdRng::seed_from_u64(seed))
    }

    /// Creates a randomizer seeded from the operating system.
    #[instrument]
    pub fn from_os() -> Self {
        Self::new(StdRng::from_os_rng())
    }

    /// Seeded when `seed` is given, otherwise from the operating system.
    pub fn from_seed(seed: Option<u64>) -> Self {
        match seed {
            Some(seed) => Self::seeded(seed),
            None => Self::from_os(),
        }
    }
}

impl<R: Rng> Randomizer<R> {
    /// Wraps an existing random source.
    pub fn new(rng: R) -> Self {
        Self { rng }
    }

    /// Picks one starting triple and shuffles it onto statues 1-3.
    #[instrument(skip(self))]
    pub fn initial_statues(&mut self) -> Statues {
        let mut codes = STARTING_TRIPLES[self.rng.random_range(0..STARTING_TRIPLES.len())];
        codes.shuffle(&mut self.rng);
        debug!(?codes, "Initial statues drawn");
        Statues::new(codes)
    }

    /// Draws the three shapes in a uniformly random order.
    ///
    /// Each draw picks among the shapes not yet called, so exactly three
    /// draws are made whatever the random source returns.
    #[instrument(skip(self))]
    pub fn called_shapes(&mut self) -> CalledSet {
        let mut remaining = Shape::ALL.to_vec();
        let mut drawn = [Shape::Circle; 3];
        for slot in drawn.iter_mut() {
            let index = self.rng.random_range(0..remaining.len());
            *slot = remaining.remove(index);
        }
        debug!(?drawn, "Called shapes drawn");
        CalledSet::from_distinct(drawn)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_initial_statues_come_from_a_starting_triple() {
        let mut randomizer = Randomizer::seeded(7);
        for _ in 0..100 {
            let statues = randomizer.initial_statues();
            let drawn: HashSet<_> = statues.codes().iter().copied().collect();
            assert_eq!(drawn.len(), 3);
            assert!(
                STARTING_TRIPLES
                    .iter()
                    .any(|triple| drawn == triple.iter().copied().collect()),
                "{:?} is not a starting triple",
                statues.codes()
            );
        }
    }

    #[test]
    fn test_both_triples_and_several_orders_occur() {
        let mut randomizer = Randomizer::seeded(42);
        let mut triples = HashSet::new();
        let mut orders = HashSet::new();
        for _ in 0..200 {
            let statues = randomizer.initial_statues();
            let mut sorted = *statues.codes();
            sorted.sort();
            triples.insert(sorted);
            orders.insert(*statues.codes());
        }
        assert_eq!(triples.len(), 2);
        assert!(orders.len() > 2);
    }

    #[test]
    fn test_called_shapes_are_distinct() {
        for seed in 0..50 {
            let called = Randomizer::seeded(seed).called_shapes();
            let distinct: HashSet<_> = called.shapes().iter().collect();
            assert_eq!(distinct.len(), 3);
        }
    }

    /// Random source that always yields zero.
    struct ZeroRng;

    impl rand::RngCore for ZeroRng {
        fn next_u32(&mut self) -> u32 {
            0
        }

        fn next_u64(&mut self) -> u64 {
            0
        }

        fn fill_bytes(&mut self, dest: &mut [u8]) {
            dest.fill(0);
        }
    }

    #[test]
    fn test_called_shapes_terminate_on_constant_source() {
        let mut randomizer = Randomizer::new(ZeroRng);
        let called = randomizer.called_shapes();
        assert_eq!(
            called.shapes(),
            &[Shape::Circle, Shape::Square, Shape::Triangle]
        );
        let statues = randomizer.initial_statues();
        assert!(
            STARTING_TRIPLES
                .iter()
                .any(|triple| triple.iter().all(|code| statues.contains(*code)))
        );
    }

    #[test]
    fn test_same_seed_same_session() {
        let mut a = Randomizer::seeded(1234);
        let mut b = Randomizer::seeded(1234);
        for _ in 0..10 {
            assert_eq!(a.initial_statues(), b.initial_statues());
            assert_eq!(a.called_shapes(), b.called_shapes());
        }
    }
}
