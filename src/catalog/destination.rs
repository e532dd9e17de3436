use serde::{Deserialize, Serialize};

use super::{CostedItem, Entertainment};
use crate::selection::RandomSource;

/// A place the trip may visit, together with what can be done there.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Destination {
    pub name: String,
    pub cost: f64,
    #[serde(default)]
    pub entertainment_options: Vec<Entertainment>,
}

impl Destination {
    pub fn new(name: impl Into<String>, cost: f64, entertainment_options: Vec<Entertainment>) -> Self {
        Self {
            name: name.into(),
            cost,
            entertainment_options,
        }
    }

    /// Build a destination whose options are a random subset of `general`.
    ///
    /// The subset holds between 1 and `general.len()` distinct entries, each
    /// count equally likely. An empty `general` yields no options.
    pub fn with_sampled_options<R>(
        name: impl Into<String>,
        cost: f64,
        general: &[Entertainment],
        source: &mut R,
    ) -> Self
    where
        R: RandomSource + ?Sized,
    {
        Self::new(name, cost, sample_options(general, source))
    }
}

impl CostedItem for Destination {
    fn name(&self) -> &str {
        &self.name
    }

    fn cost(&self) -> f64 {
        self.cost
    }
}

pub(crate) fn sample_options<R>(general: &[Entertainment], source: &mut R) -> Vec<Entertainment>
where
    R: RandomSource + ?Sized,
{
    if general.is_empty() {
        return Vec::new();
    }

    let count = source.index_below(general.len()) + 1;
    let mut order: Vec<usize> = (0..general.len()).collect();
    source.shuffle_indices(&mut order);

    order
        .into_iter()
        .filter_map(|idx| general.get(idx))
        .take(count)
        .cloned()
        .collect()
}
