//! Generator registry.
//!
//! Describes each generator by name with typed parameter metadata, and maps
//! untyped parameters onto the typed core calls. Parameter extraction errors
//! belong here; the core generators themselves do not fail.

mod funcs;
mod params;

use std::collections::BTreeMap;
use std::fmt;

pub use funcs::pass_config;
pub use params::MapParams;

use crate::pass::ParsePassTypeError;
use crate::rng::RandomSource;
use crate::weighted::WeightedError;

#[derive(Debug, Clone, PartialEq)]
pub enum LookupError {
    UnknownFunction(String),
    MissingParam(String),
    MalformedParam(String),
    InvalidParam {
        field: String,
        value: String,
        expected: &'static str,
    },
    PassType(ParsePassTypeError),
    Weighted(WeightedError),
}

impl fmt::Display for LookupError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LookupError::UnknownFunction(name) => write!(f, "Unknown function: {}", name),
            LookupError::MissingParam(field) => write!(f, "Missing parameter: {}", field),
            LookupError::MalformedParam(raw) => {
                write!(f, "Malformed parameter (expected KEY=VALUE): {}", raw)
            }
            LookupError::InvalidParam {
                field,
                value,
                expected,
            } => write!(f, "Invalid {} for {}: {}", expected, field, value),
            LookupError::PassType(e) => write!(f, "{}", e),
            LookupError::Weighted(e) => write!(f, "{}", e),
        }
    }
}

impl std::error::Error for LookupError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            LookupError::PassType(e) => Some(e),
            LookupError::Weighted(e) => Some(e),
            _ => None,
        }
    }
}

impl From<WeightedError> for LookupError {
    fn from(e: WeightedError) -> Self {
        LookupError::Weighted(e)
    }
}

impl From<ParsePassTypeError> for LookupError {
    fn from(e: ParsePassTypeError) -> Self {
        LookupError::PassType(e)
    }
}

/// Declared parameter of a generator.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Param {
    pub field: &'static str,
    pub display: &'static str,
    pub kind: &'static str,
    /// Comma separated for array kinds. Empty means required.
    pub default: &'static str,
    pub description: &'static str,
}

pub type GenerateFn =
    fn(&mut dyn RandomSource, &MapParams, &Info) -> Result<String, LookupError>;

/// Metadata and entry point for one generator.
#[derive(Clone)]
pub struct Info {
    pub display: &'static str,
    pub category: &'static str,
    pub description: &'static str,
    pub example: &'static str,
    pub output: &'static str,
    pub params: Vec<Param>,
    pub generate: GenerateFn,
}

impl Info {
    pub fn param(&self, field: &str) -> Option<&Param> {
        self.params.iter().find(|p| p.field == field)
    }
}

impl fmt::Debug for Info {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Info")
            .field("display", &self.display)
            .field("category", &self.category)
            .field("params", &self.params)
            .finish_non_exhaustive()
    }
}

/// Generators by name.
#[derive(Debug, Clone, Default)]
pub struct Registry {
    funcs: BTreeMap<String, Info>,
}

impl Registry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registry with `password`, `username` and `weighted`.
    pub fn builtin() -> Self {
        let mut registry = Self::new();
        funcs::add_auth(&mut registry);
        funcs::add_weighted(&mut registry);
        registry
    }

    /// Register `info` under `name`, replacing any previous entry.
    pub fn add(&mut self, name: impl Into<String>, info: Info) {
        self.funcs.insert(name.into(), info);
    }

    pub fn remove(&mut self, name: &str) -> Option<Info> {
        self.funcs.remove(name)
    }

    pub fn get(&self, name: &str) -> Option<&Info> {
        self.funcs.get(name)
    }

    /// Entries sorted by name.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Info)> {
        self.funcs.iter().map(|(k, v)| (k.as_str(), v))
    }

    pub fn generate(
        &self,
        name: &str,
        rng: &mut dyn RandomSource,
        params: &MapParams,
    ) -> Result<String, LookupError> {
        let info = self
            .get(name)
            .ok_or_else(|| LookupError::UnknownFunction(name.to_string()))?;
        (info.generate)(rng, params, info)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rng;

    #[test]
    fn builtin_names() {
        let registry = Registry::builtin();
        let names: Vec<&str> = registry.iter().map(|(name, _)| name).collect();
        assert_eq!(names, vec!["password", "username", "weighted"]);
    }

    #[test]
    fn unknown_function() {
        let registry = Registry::builtin();
        let mut rng = rng::seeded(1);
        assert_eq!(
            registry.generate("nope", &mut rng, &MapParams::new()),
            Err(LookupError::UnknownFunction("nope".into()))
        );
    }

    #[test]
    fn custom_functions_can_be_added_and_removed() {
        fn constant(
            _: &mut dyn RandomSource,
            _: &MapParams,
            _: &Info,
        ) -> Result<String, LookupError> {
            Ok("fixed".to_string())
        }

        let mut registry = Registry::builtin();
        registry.add(
            "constant",
            Info {
                display: "Constant",
                category: "misc",
                description: "Always the same value",
                example: "fixed",
                output: "string",
                params: Vec::new(),
                generate: constant,
            },
        );

        let mut rng = rng::seeded(1);
        assert_eq!(
            registry.generate("constant", &mut rng, &MapParams::new()),
            Ok("fixed".to_string())
        );
        assert!(registry.remove("constant").is_some());
        assert!(registry.get("constant").is_none());
    }

    #[test]
    fn error_display() {
        let e = LookupError::InvalidParam {
            field: "length".into(),
            value: "-1".into(),
            expected: "non-negative int",
        };
        assert_eq!(e.to_string(), "Invalid non-negative int for length: -1");
        assert_eq!(
            LookupError::from(WeightedError::Empty).to_string(),
            "options and weights must not be empty"
        );
    }
}
