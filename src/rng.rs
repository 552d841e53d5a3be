//! Random source abstraction.
//!
//! Every generator in this crate draws through [`RandomSource`]. Any
//! `rand::RngCore` is a source, so callers choose between a seeded
//! [`SeededRng`] for reproducible output and an OS-seeded one otherwise.

use rand::{Rng, RngCore, SeedableRng};
use rand_chacha::ChaCha12Rng;

/// ChaCha12 stream behind [`seeded`] and [`from_entropy`].
///
/// Seeded outputs are pinned to this exact stream; it must not follow
/// `rand::rngs::StdRng` across `rand` releases.
pub type SeededRng = ChaCha12Rng;

/// Uniform random draws consumed by the generators.
///
/// Each method counts as exactly one logical draw. Generators rely on the
/// order of draws for reproducible output under a fixed seed.
pub trait RandomSource {
    /// Uniform integer in `[0, n)`. `n` must be non-zero.
    fn below(&mut self, n: usize) -> usize;

    /// Uniform float in `[0, 1)`.
    fn unit(&mut self) -> f64;
}

impl<R: RngCore> RandomSource for R {
    #[inline]
    fn below(&mut self, n: usize) -> usize {
        debug_assert!(n > 0, "below() called with empty range");
        self.random_range(0..n)
    }

    #[inline]
    fn unit(&mut self) -> f64 {
        self.random::<f64>()
    }
}

/// Reproducible source for the given seed.
#[inline]
pub fn seeded(seed: u64) -> SeededRng {
    SeededRng::seed_from_u64(seed)
}

/// Non-reproducible source seeded from the operating system.
#[inline]
pub fn from_entropy() -> SeededRng {
    SeededRng::from_os_rng()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn same_seed_same_sequence() {
        let mut a = seeded(11);
        let mut b = seeded(11);
        for _ in 0..64 {
            assert_eq!(a.below(1000), b.below(1000));
            assert_eq!(a.unit().to_bits(), b.unit().to_bits());
        }
    }

    #[test]
    fn seed_eleven_stream_is_pinned() {
        assert_eq!(seeded(11).next_u64(), 5090576535054473091);

        let mut rng = seeded(11);
        let drawn: Vec<usize> = (0..4).map(|_| rng.below(1000)).collect();
        assert_eq!(drawn, [226, 275, 558, 761]);

        assert_eq!(seeded(11).unit(), 0.27596070692548946);
    }

    #[test]
    fn below_stays_in_range() {
        let mut rng = seeded(3);
        for n in 1..50 {
            for _ in 0..20 {
                assert!(rng.below(n) < n);
            }
        }
        assert_eq!(rng.below(1), 0);
    }

    #[test]
    fn unit_stays_in_range() {
        let mut rng = seeded(5);
        for _ in 0..1000 {
            let u = rng.unit();
            assert!((0.0..1.0).contains(&u));
        }
    }

    #[test]
    fn works_through_trait_object() {
        let mut rng = seeded(9);
        let source: &mut dyn RandomSource = &mut rng;
        assert!(source.below(10) < 10);
    }
}
