//! Generator handles.
//!
//! A [`Faker`] owns its random source, so independent fakers never disturb
//! each other's sequence. The free functions in this module share one
//! process-wide faker behind a mutex; each call holds the lock for its whole
//! draw sequence.

use std::sync::{LazyLock, Mutex, MutexGuard, PoisonError};

use crate::pass::{self, PassConfig};
use crate::rng::{self, RandomSource, SeededRng};
use crate::username;
use crate::weighted::{self, WeightedError};

#[derive(Debug, Clone)]
pub struct Faker<R = SeededRng> {
    rng: R,
}

impl Faker<SeededRng> {
    /// Reproducible faker.
    pub fn new(seed: u64) -> Self {
        Self {
            rng: rng::seeded(seed),
        }
    }

    pub fn from_entropy() -> Self {
        Self {
            rng: rng::from_entropy(),
        }
    }
}

impl<R: RandomSource> Faker<R> {
    pub fn with_source(rng: R) -> Self {
        Self { rng }
    }

    pub fn source(&mut self) -> &mut R {
        &mut self.rng
    }

    pub fn password(&mut self, config: &PassConfig) -> String {
        pass::generate(&mut self.rng, config)
    }

    pub fn username(&mut self) -> String {
        username::username(&mut self.rng)
    }

    pub fn weighted<'a, T>(
        &mut self,
        options: &'a [T],
        weights: &[f64],
    ) -> Result<&'a T, WeightedError> {
        weighted::weighted(&mut self.rng, options, weights)
    }
}

static GLOBAL: LazyLock<Mutex<Faker>> = LazyLock::new(|| Mutex::new(Faker::from_entropy()));

/// Lock the process-wide faker.
pub fn global() -> MutexGuard<'static, Faker> {
    GLOBAL.lock().unwrap_or_else(PoisonError::into_inner)
}

/// Reseed the process-wide faker.
pub fn seed(seed: u64) {
    *global() = Faker::new(seed);
}

pub fn password(config: &PassConfig) -> String {
    global().password(config)
}

pub fn username() -> String {
    global().username()
}

pub fn weighted<'a, T>(options: &'a [T], weights: &[f64]) -> Result<&'a T, WeightedError> {
    global().weighted(options, weights)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn instances_are_independent() {
        let mut a = Faker::new(11);
        let mut b = Faker::new(11);
        let config = PassConfig::default();

        let first = a.password(&config);
        // draws on another faker leave `b` untouched
        let mut other = Faker::new(99);
        other.username();

        assert_eq!(first, b.password(&config));
        assert_eq!(a.username(), b.username());
    }

    #[test]
    fn custom_source() {
        let mut faker = Faker::with_source(rng::seeded(5));
        let mut reference = Faker::new(5);
        assert_eq!(
            faker.weighted(&[1, 2, 3], &[1.0, 1.0, 1.0]),
            reference.weighted(&[1, 2, 3], &[1.0, 1.0, 1.0])
        );
    }
}
