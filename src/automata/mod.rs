//! Finite automata and the transformations between them.

pub mod graph;
pub mod nfa;

mod complete;
mod construct;
mod determinize;
mod eliminate;
mod epsilon;
mod minimize;
mod util;

#[cfg(feature = "serde")]
pub mod snapshot;

pub use determinize::{FULL_POWERSET_LIMIT, MAX_BITMASK_STATES};
