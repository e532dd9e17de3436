pub mod destination;
pub mod entertainment;

pub use destination::Destination;
pub use entertainment::{Difficulty, DressCode, Entertainment, EntertainmentKind, Genre};

/// Anything the picker can select: a name used as identity, and a cost.
pub trait CostedItem {
    fn name(&self) -> &str;
    fn cost(&self) -> f64;
}

