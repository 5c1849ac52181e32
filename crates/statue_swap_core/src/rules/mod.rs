//! Rule modules for the statue puzzle.

pub mod swap;
pub mod win;

pub use swap::{SwapKind, SwapResult, apply, resolve};
pub use win::{is_solved, target_for, targets};
