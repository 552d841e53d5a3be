//! Weighted discrete sampling.
//!
//! Weights are turned into prefix sums that split `[0, total)` into one
//! half-open interval per option, in input order. A single uniform draw
//! scaled by the total picks the option whose interval contains it.

use std::fmt;

use crate::rng::RandomSource;

/// Reasons an option set cannot be sampled.
#[derive(Debug, Clone, PartialEq)]
pub enum WeightedError {
    /// Options and weights differ in length.
    LengthMismatch { options: usize, weights: usize },
    /// No options were given.
    Empty,
    /// Weight at this index is negative, NaN or infinite.
    InvalidWeight { index: usize },
    /// Weights sum to zero.
    ZeroTotal,
}

impl fmt::Display for WeightedError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            WeightedError::LengthMismatch { options, weights } => write!(
                f,
                "options and weights must be the same length ({} options, {} weights)",
                options, weights
            ),
            WeightedError::Empty => write!(f, "options and weights must not be empty"),
            WeightedError::InvalidWeight { index } => {
                write!(f, "weight at index {} must be finite and non-negative", index)
            }
            WeightedError::ZeroTotal => write!(f, "weights must have a positive total"),
        }
    }
}

impl std::error::Error for WeightedError {}

/// A validated option set, ready to be sampled any number of times.
#[derive(Debug, Clone)]
pub struct Weighted<'a, T> {
    options: &'a [T],
    cumulative: Vec<f64>,
}

impl<'a, T> Weighted<'a, T> {
    pub fn new(options: &'a [T], weights: &[f64]) -> Result<Self, WeightedError> {
        if options.len() != weights.len() {
            return Err(WeightedError::LengthMismatch {
                options: options.len(),
                weights: weights.len(),
            });
        }
        if options.is_empty() {
            return Err(WeightedError::Empty);
        }

        let mut cumulative = Vec::with_capacity(weights.len());
        let mut total = 0.0_f64;
        for (index, &w) in weights.iter().enumerate() {
            if !w.is_finite() || w < 0.0 {
                return Err(WeightedError::InvalidWeight { index });
            }
            total += w;
            cumulative.push(total);
        }

        if !total.is_finite() {
            return Err(WeightedError::InvalidWeight {
                index: weights.len() - 1,
            });
        }
        if total <= 0.0 {
            return Err(WeightedError::ZeroTotal);
        }

        Ok(Self {
            options,
            cumulative,
        })
    }

    /// Sum of all weights.
    pub fn total(&self) -> f64 {
        self.cumulative.last().copied().unwrap_or(0.0)
    }

    pub fn len(&self) -> usize {
        self.options.len()
    }

    pub fn is_empty(&self) -> bool {
        self.options.is_empty()
    }

    /// Index of the option whose interval contains `r`, for `r` in `[0, total)`.
    ///
    /// Scans for the first bound strictly greater than `r`. Values at or past
    /// the total (float round-off) land on the last option with a non-zero
    /// weight.
    pub fn index_at(&self, r: f64) -> usize {
        if let Some(i) = self.cumulative.iter().position(|&bound| bound > r) {
            return i;
        }

        let total = self.total();
        let mut i = self.cumulative.len() - 1;
        while i > 0 && self.cumulative[i - 1] >= total {
            i -= 1;
        }
        i
    }

    /// Draw one option. Consumes exactly one draw from `rng`.
    pub fn sample<R: RandomSource + ?Sized>(&self, rng: &mut R) -> &'a T {
        let r = rng.unit() * self.total();
        &self.options[self.index_at(r)]
    }
}

/// Validate `options`/`weights` and draw one option.
///
/// ```
/// use fakepass::rng;
/// use fakepass::weighted::weighted;
///
/// let mut rng = rng::seeded(11);
/// let pick = weighted(&mut rng, &["a", "b", "c"], &[1.0, 2.0, 3.0]).unwrap();
/// assert!(["a", "b", "c"].contains(pick));
/// ```
pub fn weighted<'a, T, R>(
    rng: &mut R,
    options: &'a [T],
    weights: &[f64],
) -> Result<&'a T, WeightedError>
where
    R: RandomSource + ?Sized,
{
    Ok(Weighted::new(options, weights)?.sample(rng))
}
