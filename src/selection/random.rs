use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha20Rng;

/// Source of every random decision the picker makes.
pub trait RandomSource {
    /// Permute `indices` in place.
    fn shuffle_indices(&mut self, indices: &mut [usize]);

    /// Draw an index in `0..upper`. `upper` is never zero.
    fn index_below(&mut self, upper: usize) -> usize;
}

impl<R: RandomSource + ?Sized> RandomSource for &mut R {
    fn shuffle_indices(&mut self, indices: &mut [usize]) {
        (**self).shuffle_indices(indices)
    }

    fn index_below(&mut self, upper: usize) -> usize {
        (**self).index_below(upper)
    }
}

/// Adapts any `rand` generator.
#[derive(Debug, Clone)]
pub struct RngSource<R> {
    rng: R,
}

impl<R: Rng> RngSource<R> {
    pub fn new(rng: R) -> Self {
        Self { rng }
    }

    pub fn into_inner(self) -> R {
        self.rng
    }
}

impl RngSource<ChaCha20Rng> {
    /// Reproducible stream: the same seed always yields the same decisions.
    pub fn from_seed(seed: u64) -> Self {
        Self::from_seed_stream(seed, 0)
    }

    /// Independent stream under the same seed. Stream 0 is [`from_seed`](Self::from_seed).
    pub fn from_seed_stream(seed: u64, stream: u64) -> Self {
        let mut rng = ChaCha20Rng::seed_from_u64(seed);
        rng.set_stream(stream);
        Self::new(rng)
    }
}

impl<R: Rng> RandomSource for RngSource<R> {
    fn shuffle_indices(&mut self, indices: &mut [usize]) {
        indices.shuffle(&mut self.rng);
    }

    fn index_below(&mut self, upper: usize) -> usize {
        self.rng.gen_range(0..upper)
    }
}

/// Deterministic source: leaves every permutation untouched and always
/// draws the largest index.
///
/// Turns the picker into a greedy in-order scan.
#[derive(Debug, Clone, Copy, Default)]
pub struct FixedOrder;

impl RandomSource for FixedOrder {
    fn shuffle_indices(&mut self, _indices: &mut [usize]) {}

    fn index_below(&mut self, upper: usize) -> usize {
        upper.saturating_sub(1)
    }
}
