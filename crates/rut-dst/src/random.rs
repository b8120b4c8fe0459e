//! Seeded random number generation for fixtures.
//!
//! Uses Xoshiro256** so a seed always yields the same fixture stream, which
//! is what makes a failing `RUT_SEED` reproducible.

use rand::{Rng, SeedableRng};
use rand_xoshiro::Xoshiro256StarStar;

/// Seeded RNG driving every fixture draw.
///
/// # Example
///
/// ```rust
/// use rut_dst::DeterministicRng;
///
/// let mut rng = DeterministicRng::new(12345);
/// let digit: u32 = rng.gen_range(0..10);
///
/// let mut rng2 = DeterministicRng::new(12345);
/// assert_eq!(rng2.gen_range(0..10), digit);
/// ```
pub struct DeterministicRng {
    seed: u64,
    rng: Xoshiro256StarStar,
    calls_count: u64,
}

/// Draws after which a runaway generator loop is assumed.
const RNG_CALLS_WARNING_THRESHOLD: u64 = 1_000_000_000;

impl DeterministicRng {
    /// Create a new RNG with the given seed.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            seed,
            rng: Xoshiro256StarStar::seed_from_u64(seed),
            calls_count: 0,
        }
    }

    /// Get the seed used to create this RNG.
    #[must_use]
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Get number of random values generated.
    #[must_use]
    pub fn calls_count(&self) -> u64 {
        self.calls_count
    }

    fn record_call(&mut self) {
        self.calls_count += 1;
        debug_assert!(
            self.calls_count < RNG_CALLS_WARNING_THRESHOLD,
            "Very high number of RNG calls - possible infinite loop"
        );
    }

    /// Generate a random value of type T.
    pub fn gen<T>(&mut self) -> T
    where
        rand::distributions::Standard: rand::distributions::Distribution<T>,
    {
        self.record_call();
        self.rng.gen()
    }

    /// Generate a random value in the given range.
    pub fn gen_range<T, R>(&mut self, range: R) -> T
    where
        T: rand::distributions::uniform::SampleUniform,
        R: rand::distributions::uniform::SampleRange<T>,
    {
        self.record_call();
        self.rng.gen_range(range)
    }

    /// Generate a boolean with the given probability of true.
    pub fn gen_bool(&mut self, probability: f64) -> bool {
        debug_assert!(
            (0.0..=1.0).contains(&probability),
            "Probability must be in [0.0, 1.0]"
        );
        self.record_call();
        self.rng.gen_bool(probability)
    }

    /// Choose a random element from a slice.
    pub fn choose<'a, T>(&mut self, slice: &'a [T]) -> Option<&'a T> {
        use rand::seq::SliceRandom;
        self.record_call();
        slice.choose(&mut self.rng)
    }

    /// Fork this RNG into a new one with a derived seed.
    ///
    /// Gives each fixture stream its own sequence so adding draws to one
    /// does not shift the others.
    #[must_use]
    pub fn fork(&mut self) -> Self {
        let new_seed = self.gen::<u64>();
        Self::new(new_seed)
    }
}
