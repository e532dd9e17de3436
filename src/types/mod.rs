pub mod identifiers;
pub mod trip_plan;

pub use identifiers::CatalogVersion;
pub use trip_plan::{PlanError, PlanSummary, TripPlan, Visit};
