//! Username generation: a surname followed by a numeric suffix.

use crate::data::LAST_NAMES;
use crate::rng::RandomSource;

/// Pattern appended to the surname; each `#` becomes a digit.
pub const SUFFIX_PATTERN: &str = "####";

pub fn username<R: RandomSource + ?Sized>(rng: &mut R) -> String {
    let name = LAST_NAMES[rng.below(LAST_NAMES.len())];
    let mut out = String::with_capacity(name.len() + SUFFIX_PATTERN.len());
    out.push_str(name);
    out.push_str(&replace_with_numbers(rng, SUFFIX_PATTERN));
    out
}

/// Replace every `#` in `pattern` with a random digit. A leading `#` never
/// becomes `0`.
pub fn replace_with_numbers<R: RandomSource + ?Sized>(rng: &mut R, pattern: &str) -> String {
    pattern
        .chars()
        .enumerate()
        .map(|(i, c)| match c {
            '#' if i == 0 => char::from(b'1' + rng.below(9) as u8),
            '#' => char::from(b'0' + rng.below(10) as u8),
            other => other,
        })
        .collect()
}
