use std::fs;
use std::io::BufReader;
use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::catalog::destination::sample_options;
use crate::catalog::{Destination, Entertainment};
use crate::planner::TripPlanner;
use crate::selection::RandomSource;
use crate::types::PlanError;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
    #[error("Invalid catalog: {0}")]
    Invalid(#[from] PlanError),
}

fn default_total_budget() -> f64 {
    10_000.0
}

fn default_return_cost() -> f64 {
    800.0
}

fn default_max_destinations() -> Option<usize> {
    Some(5)
}

// Serializable
// Comparable
// Explicit defaults
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TripConfig {
    #[serde(default = "default_total_budget")]
    pub total_budget: f64,
    /// Reserved up front for getting home; never available for spending.
    #[serde(default = "default_return_cost")]
    pub return_cost: f64,
    /// `None` removes the cap on the number of destinations.
    #[serde(default = "default_max_destinations")]
    pub max_destinations: Option<usize>,
    #[serde(default)]
    pub seed: Option<u64>,
}

impl TripConfig {
    pub fn v0() -> Self {
        Self {
            total_budget: default_total_budget(),
            return_cost: default_return_cost(),
            max_destinations: default_max_destinations(),
            seed: None,
        }
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// What is left for destinations and entertainment. Negative when the
    /// return journey alone exceeds the budget.
    pub fn available_budget(&self) -> f64 {
        self.total_budget - self.return_cost
    }

    pub fn validate(&self) -> Result<(), PlanError> {
        for (field, value) in [
            ("total_budget", self.total_budget),
            ("return_cost", self.return_cost),
        ] {
            if !value.is_finite() {
                return Err(PlanError::InvalidBudget { field, value });
            }
        }
        if self.return_cost < 0.0 {
            return Err(PlanError::InvalidCost {
                item: "return journey".to_string(),
                cost: self.return_cost,
            });
        }
        Ok(())
    }
}

impl Default for TripConfig {
    fn default() -> Self {
        Self::v0()
    }
}

/// A destination as written in a catalog file.
///
/// Without `entertainment_options` the destination gets a random subset of
/// the catalog's `general_options` when the planner is built.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DestinationEntry {
    pub name: String,
    pub cost: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub entertainment_options: Option<Vec<Entertainment>>,
}

/// On-disk catalog: trip settings plus everything that can be chosen.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CatalogFile {
    #[serde(default)]
    pub trip: TripConfig,
    #[serde(default)]
    pub general_options: Vec<Entertainment>,
    pub destinations: Vec<DestinationEntry>,
}

impl CatalogFile {
    pub fn from_path(path: &Path) -> Result<Self, ConfigError> {
        let f = fs::File::open(path)?;
        let catalog = serde_json::from_reader(BufReader::new(f))?;
        Ok(catalog)
    }

    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Resolve every destination's option list, sampling from
    /// `general_options` where none was given.
    pub fn into_destinations<R>(self, source: &mut R) -> (TripConfig, Vec<Destination>)
    where
        R: RandomSource + ?Sized,
    {
        let CatalogFile {
            trip,
            general_options,
            destinations,
        } = self;

        let destinations = destinations
            .into_iter()
            .map(|entry| {
                let options = match entry.entertainment_options {
                    Some(options) => options,
                    None => sample_options(&general_options, &mut *source),
                };
                Destination::new(entry.name, entry.cost, options)
            })
            .collect();

        (trip, destinations)
    }

    pub fn into_planner<R>(self, source: &mut R) -> Result<TripPlanner, ConfigError>
    where
        R: RandomSource + ?Sized,
    {
        let (trip, destinations) = self.into_destinations(source);
        Ok(TripPlanner::new(trip, destinations)?)
    }
}
