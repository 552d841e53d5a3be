//! Password configuration.

use std::fmt;
use std::str::FromStr;

/// Shortest password ever produced; shorter requests are raised to this.
pub const MIN_LENGTH: usize = 5;

/// Generation strategy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PassType {
    /// Per-character weighted class sampling.
    #[default]
    Simple,
}

impl PassType {
    pub fn as_str(self) -> &'static str {
        match self {
            PassType::Simple => "simple",
        }
    }
}

impl fmt::Display for PassType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParsePassTypeError {
    /// A known strategy this crate does not implement.
    Unsupported(String),
    Unknown(String),
}

impl fmt::Display for ParsePassTypeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParsePassTypeError::Unsupported(s) => {
                write!(f, "password type '{}' is not supported", s)
            }
            ParsePassTypeError::Unknown(s) => write!(f, "unknown password type '{}'", s),
        }
    }
}

impl std::error::Error for ParsePassTypeError {}

impl FromStr for PassType {
    type Err = ParsePassTypeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "simple" => Ok(PassType::Simple),
            "words" | "pin" => Err(ParsePassTypeError::Unsupported(s.to_string())),
            _ => Err(ParsePassTypeError::Unknown(s.to_string())),
        }
    }
}

/// Which character classes a password may use, and how long it is.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PassConfig {
    pub kind: PassType,
    pub length: usize,
    pub lower: bool,
    pub upper: bool,
    pub numeric: bool,
    pub special: bool,
    pub space: bool,
}

impl PassConfig {
    /// Config with every class disabled.
    pub fn none() -> Self {
        Self {
            kind: PassType::Simple,
            length: 0,
            lower: false,
            upper: false,
            numeric: false,
            special: false,
            space: false,
        }
    }

    /// Length actually generated.
    pub fn effective_length(&self) -> usize {
        self.length.max(MIN_LENGTH)
    }
}

impl Default for PassConfig {
    fn default() -> Self {
        Self {
            kind: PassType::Simple,
            length: 12,
            lower: true,
            upper: true,
            numeric: true,
            special: true,
            space: false,
        }
    }
}
