use std::fmt::Write;

use chrono::Utc;

use crate::catalog::{CostedItem, Destination};
use crate::planner::TripConfig;
use crate::selection::{BudgetLedger, BudgetPicker, RandomSource, RngSource};
use crate::types::{CatalogVersion, PlanError, PlanSummary, TripPlan, Visit};

/// Plans trips over a validated, immutable catalog.
#[derive(Debug, Clone)]
pub struct TripPlanner {
    config: TripConfig,
    destinations: Vec<Destination>,
    catalog_version: CatalogVersion,
}

impl TripPlanner {
    pub fn new(config: TripConfig, destinations: Vec<Destination>) -> Result<Self, PlanError> {
        config.validate()?;
        for destination in &destinations {
            check_cost(destination)?;
            for option in &destination.entertainment_options {
                check_cost(option)?;
            }
        }

        let catalog_version = catalog_version(&config, &destinations);

        Ok(Self {
            config,
            destinations,
            catalog_version,
        })
    }

    pub fn config(&self) -> &TripConfig {
        &self.config
    }

    pub fn destinations(&self) -> &[Destination] {
        &self.destinations
    }

    pub fn catalog_version(&self) -> &CatalogVersion {
        &self.catalog_version
    }

    /// Plan with the configured seed, or a fresh one when none is set. The
    /// seed used is reported in the summary either way.
    pub fn plan(&self) -> TripPlan {
        let seed = self.config.seed.unwrap_or_else(rand::random);
        self.plan_from(RngSource::from_seed(seed), Some(seed))
    }

    /// Plan with a caller-supplied random source.
    pub fn plan_with<R: RandomSource>(&self, source: R) -> TripPlan {
        self.plan_from(source, None)
    }

    fn plan_from<R: RandomSource>(&self, source: R, seed: Option<u64>) -> TripPlan {
        let mut picker = BudgetPicker::new(source);
        let mut visits = Vec::new();

        // The return journey is paid first. Each destination then draws from
        // its own option list, spending from the same trip ledger.
        let opening = BudgetLedger::with_reserved(self.config.total_budget, self.config.return_cost);
        let trip = picker.run_selection_from(
            &self.destinations,
            self.config.max_destinations,
            opening,
            |picker, destination, ledger| {
                let fun = picker.continue_selection(&destination.entertainment_options, None, ledger);
                let entertainment_cost = fun.items_cost();

                for option in &fun.chosen {
                    tracing::debug!(
                        destination = %destination.name,
                        option = %option.name,
                        kind = option.kind.label(),
                        "entertainment chosen"
                    );
                }

                visits.push(Visit {
                    destination: destination.name.clone(),
                    cost: destination.cost,
                    accomplishments: fun.chosen.into_iter().cloned().collect(),
                    entertainment_cost,
                });

                fun.ledger
            },
        );

        let summary = PlanSummary {
            total_budget: self.config.total_budget,
            return_cost: self.config.return_cost,
            max_destinations: self.config.max_destinations,
            amount_spent: trip.amount_spent,
            amount_remaining: trip.ledger.remaining(),
            destinations_considered: self.destinations.len(),
            destinations_visited: visits.len(),
            seed,
            catalog_version: self.catalog_version.as_str().to_string(),
            planned_at: Utc::now(),
        };

        tracing::info!(
            visited = summary.destinations_visited,
            spent = summary.amount_spent,
            remaining = summary.amount_remaining,
            seed = ?summary.seed,
            "trip planned"
        );

        TripPlan { visits, summary }
    }
}

fn check_cost<T: CostedItem>(item: &T) -> Result<(), PlanError> {
    let cost = item.cost();
    if cost.is_finite() && cost >= 0.0 {
        Ok(())
    } else {
        Err(PlanError::InvalidCost {
            item: item.name().to_string(),
            cost,
        })
    }
}

/// Hash the budget settings and every destination and option, one line each.
/// Names are length-prefixed and costs written as raw bits so that distinct
/// catalogs never share a canonical form. The seed is not part of it.
fn catalog_version(config: &TripConfig, destinations: &[Destination]) -> CatalogVersion {
    let mut canonical = String::new();

    // Writing into a String cannot fail.
    let _ = writeln!(
        canonical,
        "trip:{}:{}:{:?}",
        config.total_budget.to_bits(),
        config.return_cost.to_bits(),
        config.max_destinations
    );
    for destination in destinations {
        let _ = writeln!(
            canonical,
            "destination:{}:{}:{}",
            destination.name.len(),
            destination.name,
            destination.cost.to_bits()
        );
        for option in &destination.entertainment_options {
            let _ = writeln!(
                canonical,
                "option:{}:{}:{}:{}:{}:{:?}",
                option.name.len(),
                option.name,
                option.cost.to_bits(),
                option.location.len(),
                option.location,
                option.kind
            );
        }
    }

    CatalogVersion::from_content(canonical.as_bytes())
}
