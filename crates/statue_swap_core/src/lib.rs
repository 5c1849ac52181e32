//! Statue Swap core - pure puzzle logic.
//!
//! Three statues each hold a pair of shapes. The player picks a shape on
//! one statue, then a shape on another, and the pair is swapped according
//! to fixed rules. The puzzle is solved when, for every called shape, some
//! statue holds the mix of the two other shapes.
//!
//! # Architecture
//!
//! - **Shapes**: [`Shape`] letters and the canonical [`CompositeCode`]
//! - **Catalog**: display names for the six codes
//! - **Randomizer**: seeded session setup
//! - **Rules**: swap resolution and win detection
//! - **Controller**: [`GameController`] owning the [`Session`]
//!
//! # Example
//!
//! ```
//! use statue_swap_core::{GameController, PickOutcome, Shape, StatueId};
//!
//! let mut game = GameController::new(Some(7));
//! let outcome = game.on_pick(StatueId::One, Shape::Circle);
//! assert!(matches!(outcome, PickOutcome::Pending(_)));
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod action;
mod catalog;
mod contracts;
mod controller;
mod randomizer;
pub mod rules;
mod shape;
mod types;

// Crate-level exports - Shapes
pub use shape::{CompositeCode, ParseError, Shape, make_code};

// Crate-level exports - Catalog
pub use catalog::{CATALOG, display_name};

// Crate-level exports - Domain types
pub use types::{CALLED_SEPARATOR, CalledSet, Session, Statue, StatueId, Statues};

// Crate-level exports - Actions
pub use action::{Selection, Swap, SwapError};

// Crate-level exports - Contracts
pub use contracts::{Contract, DistinctCodes, DistinctStatues, LegalSwap, SwapContract};

// Crate-level exports - Randomizer
pub use randomizer::{Randomizer, STARTING_TRIPLES};

// Crate-level exports - Controller
pub use controller::{GameController, PickOutcome};

// Crate-level exports - Rule results
pub use rules::{SwapKind, SwapResult};
