pub mod config;
pub mod planner;

use std::path::Path;

pub use config::{CatalogFile, ConfigError, DestinationEntry, TripConfig};
pub use planner::TripPlanner;

use crate::selection::RngSource;

/// ChaCha stream used to sample option lists. Planning uses stream 0, so the
/// sampled catalog and the trip drawn from it stay uncorrelated.
pub const SAMPLING_STREAM: u64 = 1;

/// Read a catalog file and build a planner from it.
///
/// Option lists left out of the file are sampled with the trip's seed when
/// one is set, so a seeded catalog always resolves the same way.
pub fn load_planner(path: &Path) -> Result<TripPlanner, ConfigError> {
    let catalog = CatalogFile::from_path(path)?;
    let seed = catalog.trip.seed.unwrap_or_else(rand::random);
    catalog.into_planner(&mut RngSource::from_seed_stream(seed, SAMPLING_STREAM))
}
