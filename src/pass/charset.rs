//! Character classes and class-set resolution for password generation.

use super::PassConfig;

const LOWERCASE: &[u8] = b"abcdefghijklmnopqrstuvwxyz";
const UPPERCASE: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZ";
const DIGITS: &[u8] = b"0123456789";
const SPECIAL_SAFE: &[u8] = b"!@.-_*";
const SPACE: &[u8] = b" ";

/// A named alphabet with a fixed nominal weight.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CharClass {
    Lower,
    Upper,
    Numeric,
    Special,
    Space,
}

impl CharClass {
    /// Every class, in resolution order.
    pub const ALL: [CharClass; 5] = [
        CharClass::Lower,
        CharClass::Upper,
        CharClass::Numeric,
        CharClass::Special,
        CharClass::Space,
    ];

    /// Used when a config enables no class at all.
    pub const DEFAULT: [CharClass; 3] = [CharClass::Lower, CharClass::Upper, CharClass::Numeric];

    pub const fn alphabet(self) -> &'static [u8] {
        match self {
            CharClass::Lower => LOWERCASE,
            CharClass::Upper => UPPERCASE,
            CharClass::Numeric => DIGITS,
            CharClass::Special => SPECIAL_SAFE,
            CharClass::Space => SPACE,
        }
    }

    pub const fn weight(self) -> f64 {
        match self {
            CharClass::Lower => 4.0,
            CharClass::Upper => 4.0,
            CharClass::Numeric => 3.0,
            CharClass::Special => 2.0,
            CharClass::Space => 1.0,
        }
    }

    pub fn contains(self, byte: u8) -> bool {
        self.alphabet().contains(&byte)
    }

    fn enabled_in(self, config: &PassConfig) -> bool {
        match self {
            CharClass::Lower => config.lower,
            CharClass::Upper => config.upper,
            CharClass::Numeric => config.numeric,
            CharClass::Special => config.special,
            CharClass::Space => config.space,
        }
    }
}

/// Classes a config enables, or [`CharClass::DEFAULT`] when it enables none.
pub fn resolve(config: &PassConfig) -> Vec<CharClass> {
    let classes: Vec<CharClass> = CharClass::ALL
        .into_iter()
        .filter(|c| c.enabled_in(config))
        .collect();

    if classes.is_empty() {
        CharClass::DEFAULT.to_vec()
    } else {
        classes
    }
}

/// Classes allowed at the first and last position: the resolved set without
/// space, or the default set when space was the only class.
pub fn resolve_boundary(config: &PassConfig) -> Vec<CharClass> {
    let classes: Vec<CharClass> = resolve(config)
        .into_iter()
        .filter(|c| *c != CharClass::Space)
        .collect();

    if classes.is_empty() {
        CharClass::DEFAULT.to_vec()
    } else {
        classes
    }
}

/// Number of distinct characters a config can produce.
pub fn pool_size(config: &PassConfig) -> usize {
    resolve(config).iter().map(|c| c.alphabet().len()).sum()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn only(class: CharClass) -> PassConfig {
        PassConfig {
            lower: class == CharClass::Lower,
            upper: class == CharClass::Upper,
            numeric: class == CharClass::Numeric,
            special: class == CharClass::Special,
            space: class == CharClass::Space,
            ..PassConfig::default()
        }
    }

    #[test]
    fn empty_selection_falls_back_to_default() {
        assert_eq!(resolve(&PassConfig::none()), CharClass::DEFAULT.to_vec());
    }

    #[test]
    fn resolution_keeps_table_order() {
        let config = PassConfig {
            space: true,
            ..PassConfig::default()
        };
        assert_eq!(resolve(&config), CharClass::ALL.to_vec());
    }

    #[test]
    fn boundary_set_drops_space() {
        let config = PassConfig {
            space: true,
            ..PassConfig::default()
        };
        assert!(!resolve_boundary(&config).contains(&CharClass::Space));
        assert_eq!(
            resolve_boundary(&only(CharClass::Space)),
            CharClass::DEFAULT.to_vec()
        );
        assert_eq!(
            resolve_boundary(&only(CharClass::Special)),
            vec![CharClass::Special]
        );
    }

    #[test]
    fn weights_are_fixed() {
        let weights: Vec<f64> = CharClass::ALL.iter().map(|c| c.weight()).collect();
        assert_eq!(weights, vec![4.0, 4.0, 3.0, 2.0, 1.0]);
    }

    #[test]
    fn pool_sizes() {
        assert_eq!(pool_size(&PassConfig::default()), 26 + 26 + 10 + 6);
        assert_eq!(pool_size(&PassConfig::none()), 62);
        assert_eq!(pool_size(&only(CharClass::Space)), 1);
    }
}
