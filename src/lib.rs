//! Budget-constrained random trip planning.
//!
//! `adventure-core` picks destinations and entertainment at random from a
//! catalog so that everything chosen fits a fixed total budget. Randomness is
//! injected through [`selection::RandomSource`], so a seeded run is fully
//! reproducible and tests can drive the picker in a fixed order.

pub mod catalog;
pub mod logging;
pub mod planner;
pub mod selection;
pub mod types;

pub use logging::init_tracing;
