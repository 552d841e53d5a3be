//! Password generation.

use super::charset::{self, CharClass};
use super::{PassConfig, PassType};
use crate::rng::RandomSource;
use crate::weighted::Weighted;

/// Weighted class table built once per password.
struct ClassTable<'a> {
    table: Weighted<'a, CharClass>,
}

impl<'a> ClassTable<'a> {
    fn new(classes: &'a [CharClass], weights: &[f64]) -> Self {
        // Resolved sets are never empty and carry constant positive weights.
        let table = Weighted::new(classes, weights)
            .expect("character class table must be non-empty with positive weights");
        Self { table }
    }

    /// Class draw, then character draw.
    #[inline]
    fn draw<R: RandomSource + ?Sized>(&self, rng: &mut R) -> u8 {
        let alphabet = self.table.sample(rng).alphabet();
        alphabet[rng.below(alphabet.len())]
    }
}

fn weights(classes: &[CharClass]) -> Vec<f64> {
    classes.iter().map(|c| c.weight()).collect()
}

/// Generate a single password.
///
/// Never fails: short lengths are raised to the minimum and an empty class
/// selection falls back to lower, upper and numeric.
pub fn generate<R: RandomSource + ?Sized>(rng: &mut R, config: &PassConfig) -> String {
    match config.kind {
        PassType::Simple => simple(rng, config),
    }
}

fn simple<R: RandomSource + ?Sized>(rng: &mut R, config: &PassConfig) -> String {
    let length = config.effective_length();

    let classes = charset::resolve(config);
    let class_weights = weights(&classes);
    let body = ClassTable::new(&classes, &class_weights);

    let edge_classes = charset::resolve_boundary(config);
    let edge_weights = weights(&edge_classes);
    let edge = ClassTable::new(&edge_classes, &edge_weights);

    let mut buf: Vec<u8> = (0..length).map(|_| body.draw(rng)).collect();

    shuffle(rng, &mut buf);
    repair_boundaries(rng, &mut buf, &edge);

    // Safety: every alphabet is ASCII
    unsafe { String::from_utf8_unchecked(buf) }
}

/// Forward shuffle with inclusive bound: swap `i` with a uniform `j` in `[0, i]`.
#[inline]
fn shuffle<R: RandomSource + ?Sized>(rng: &mut R, buf: &mut [u8]) {
    for i in 0..buf.len() {
        let j = rng.below(i + 1);
        buf.swap(i, j);
    }
}

/// First position, then last: a space is redrawn from the boundary table.
fn repair_boundaries<R: RandomSource + ?Sized>(
    rng: &mut R,
    buf: &mut [u8],
    edge: &ClassTable<'_>,
) {
    let Some(last) = buf.len().checked_sub(1) else {
        return;
    };

    if CharClass::Space.contains(buf[0]) {
        buf[0] = edge.draw(rng);
    }
    if CharClass::Space.contains(buf[last]) {
        buf[last] = edge.draw(rng);
    }
}
