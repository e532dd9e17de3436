use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::catalog::Entertainment;

/// One destination visited on the trip, with what was done there.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Visit {
    pub destination: String,
    pub cost: f64,

    pub accomplishments: Vec<Entertainment>,
    pub entertainment_cost: f64,
}

impl Visit {
    /// Destination cost plus everything done there.
    pub fn total_cost(&self) -> f64 {
        self.cost + self.entertainment_cost
    }
}

/// Metadata describing the outcome of a planning run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlanSummary {
    pub total_budget: f64,
    pub return_cost: f64,
    pub max_destinations: Option<usize>,

    /// Destinations and entertainment together; excludes the return cost.
    pub amount_spent: f64,
    /// Budget left once the return journey and all spending are paid.
    /// Negative only when the return journey alone exceeds the budget.
    pub amount_remaining: f64,

    pub destinations_considered: usize,
    pub destinations_visited: usize,

    /// Seed of the random stream, when the planner created it.
    pub seed: Option<u64>,
    pub catalog_version: String,
    pub planned_at: DateTime<Utc>, // informational only
}

/// The final result of a planning run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TripPlan {
    pub visits: Vec<Visit>,
    pub summary: PlanSummary,
}

impl TripPlan {
    pub fn destination_names(&self) -> Vec<&str> {
        self.visits.iter().map(|visit| visit.destination.as_str()).collect()
    }

    /// Everything paid for, return journey included.
    pub fn total_cost(&self) -> f64 {
        self.summary.total_budget - self.summary.amount_remaining
    }
}

#[derive(Debug, thiserror::Error)]
pub enum PlanError {
    #[error("Invalid cost {cost} for {item}: costs must be finite and non-negative")]
    InvalidCost { item: String, cost: f64 },

    #[error("Invalid {field}: {value} is not a finite amount")]
    InvalidBudget { field: &'static str, value: f64 },
}
