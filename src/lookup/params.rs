//! Untyped parameters and typed extraction.

use std::collections::BTreeMap;

use super::{Info, LookupError};

/// Multimap of parameter name to raw string values.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MapParams(BTreeMap<String, Vec<String>>);

impl MapParams {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a value under `key`.
    pub fn add(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.0.entry(key.into()).or_default().push(value.into());
    }

    /// Replace all values under `key`.
    pub fn set(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.0.insert(key.into(), vec![value.into()]);
    }

    pub fn get(&self, key: &str) -> Option<&[String]> {
        self.0.get(key).map(Vec::as_slice)
    }

    pub fn contains(&self, key: &str) -> bool {
        self.0.contains_key(key)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Parse `key=value`. Comma separated values become separate entries.
    pub fn parse_pair(&mut self, pair: &str) -> Result<(), LookupError> {
        let (key, value) = pair
            .split_once('=')
            .ok_or_else(|| LookupError::MalformedParam(pair.to_string()))?;
        let key = key.trim();
        if key.is_empty() {
            return Err(LookupError::MalformedParam(pair.to_string()));
        }
        for part in value.split(',') {
            self.add(key, part.trim());
        }
        Ok(())
    }
}

impl Info {
    /// Raw values for `field`: the caller's values, else the declared default.
    fn values(&self, m: &MapParams, field: &str) -> Result<Vec<String>, LookupError> {
        if let Some(values) = m.get(field) {
            return Ok(values.to_vec());
        }

        let param = self
            .param(field)
            .ok_or_else(|| LookupError::MissingParam(field.to_string()))?;
        if param.default.is_empty() {
            return Err(LookupError::MissingParam(field.to_string()));
        }
        Ok(param.default.split(',').map(|s| s.trim().to_string()).collect())
    }

    fn single(&self, m: &MapParams, field: &str) -> Result<String, LookupError> {
        let mut values = self.values(m, field)?;
        match values.len() {
            1 => Ok(values.remove(0)),
            _ => Err(invalid(field, &values.join(","), "a single value")),
        }
    }

    pub fn get_string(&self, m: &MapParams, field: &str) -> Result<String, LookupError> {
        self.single(m, field)
    }

    pub fn get_bool(&self, m: &MapParams, field: &str) -> Result<bool, LookupError> {
        let value = self.single(m, field)?;
        match value.to_ascii_lowercase().as_str() {
            "true" | "1" | "yes" => Ok(true),
            "false" | "0" | "no" => Ok(false),
            _ => Err(invalid(field, &value, "bool")),
        }
    }

    pub fn get_int(&self, m: &MapParams, field: &str) -> Result<i64, LookupError> {
        let value = self.single(m, field)?;
        value.parse().map_err(|_| invalid(field, &value, "int"))
    }

    pub fn get_string_array(&self, m: &MapParams, field: &str) -> Result<Vec<String>, LookupError> {
        self.values(m, field)
    }

    pub fn get_float_array(&self, m: &MapParams, field: &str) -> Result<Vec<f64>, LookupError> {
        self.values(m, field)?
            .iter()
            .map(|v| v.parse().map_err(|_| invalid(field, v, "float")))
            .collect()
    }
}

fn invalid(field: &str, value: &str, expected: &'static str) -> LookupError {
    LookupError::InvalidParam {
        field: field.to_string(),
        value: value.to_string(),
        expected,
    }
}
