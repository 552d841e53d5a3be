//! Password generation and output.

pub mod charset;
mod config;
mod generate;
pub mod output;

pub use config::{MIN_LENGTH, ParsePassTypeError, PassConfig, PassType};
pub use generate::generate;

/// Estimated entropy in bits for passwords produced by `config`.
pub fn entropy_bits(config: &PassConfig) -> f64 {
    let pool = charset::pool_size(config);
    if pool == 0 {
        return 0.0;
    }
    config.effective_length() as f64 * (pool as f64).log2()
}

/// Strength label for an entropy estimate.
pub fn strength(bits: f64) -> &'static str {
    match bits as u32 {
        0..=35 => "Weak",
        36..=59 => "Fair",
        60..=127 => "Strong",
        _ => "Very Strong",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn entropy_scales_with_length() {
        let short = PassConfig {
            length: 8,
            ..PassConfig::default()
        };
        let long = PassConfig {
            length: 16,
            ..PassConfig::default()
        };
        let ratio = entropy_bits(&long) / entropy_bits(&short);
        assert!((ratio - 2.0).abs() < 1e-9);
    }

    #[test]
    fn space_only_has_no_entropy() {
        let config = PassConfig {
            space: true,
            ..PassConfig::none()
        };
        assert_eq!(entropy_bits(&config), 0.0);
        assert_eq!(strength(0.0), "Weak");
        assert_eq!(strength(80.0), "Strong");
    }
}
