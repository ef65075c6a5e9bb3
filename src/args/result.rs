//! Parse result table with typed, checked getters.

use std::collections::HashMap;
use std::path::Path;

use serde_json::Value;

use crate::args::error::ArgError;
use crate::args::value::{ArgEnum, ArgValue};

/// Result of a successful [`parse`](crate::args::parse).
///
/// Typed getters return `Ok(None)` for absent names and
/// [`ArgError::TypeMismatch`] when the stored value has another type.
#[derive(Debug, Clone, Default)]
pub struct ParseResult {
    values: HashMap<String, ArgValue>,
}

fn mismatch(name: &str, expected: &'static str, actual: &ArgValue) -> ArgError {
    ArgError::TypeMismatch {
        name: name.to_string(),
        expected,
        actual: actual.type_name(),
    }
}

impl ParseResult {
    pub(crate) fn new(values: HashMap<String, ArgValue>) -> Self {
        Self { values }
    }

    /// Raw tagged entry.
    pub fn get(&self, name: &str) -> Option<&ArgValue> {
        self.values.get(name)
    }

    /// True if `name` is present at all, whatever its type.
    pub fn get_flag(&self, name: &str) -> bool {
        self.values.contains_key(name)
    }

    pub fn get_string(&self, name: &str) -> Result<Option<&str>, ArgError> {
        match self.values.get(name) {
            None => Ok(None),
            Some(ArgValue::String(s)) => Ok(Some(s.as_str())),
            Some(other) => Err(mismatch(name, "string", other)),
        }
    }

    pub fn get_integer(&self, name: &str) -> Result<Option<i64>, ArgError> {
        match self.values.get(name) {
            None => Ok(None),
            Some(ArgValue::Integer(i)) => Ok(Some(*i)),
            Some(other) => Err(mismatch(name, "integer", other)),
        }
    }

    pub fn get_double(&self, name: &str) -> Result<Option<f64>, ArgError> {
        match self.values.get(name) {
            None => Ok(None),
            Some(ArgValue::Double(d)) => Ok(Some(*d)),
            Some(other) => Err(mismatch(name, "double", other)),
        }
    }

    pub fn get_file(&self, name: &str) -> Result<Option<&Path>, ArgError> {
        match self.values.get(name) {
            None => Ok(None),
            Some(ArgValue::File(p)) => Ok(Some(p.as_path())),
            Some(other) => Err(mismatch(name, "file", other)),
        }
    }

    /// Enum constant for `name`.
    ///
    /// `Ok(None)` covers both an absent name and a token that matched no
    /// constant; use [`get_flag`](Self::get_flag) to tell them apart.
    pub fn get_enum<T: ArgEnum>(&self, name: &str) -> Result<Option<T>, ArgError> {
        let expected = std::any::type_name::<T>();
        match self.values.get(name) {
            None => Ok(None),
            Some(ArgValue::Enum(value)) => value.resolve::<T>().ok_or_else(|| ArgError::TypeMismatch {
                name: name.to_string(),
                expected,
                actual: value.type_name(),
            }),
            Some(other) => Err(mismatch(name, expected, other)),
        }
    }

    /// Matched token of any enumeration, typed or schema-declared.
    pub fn get_choice(&self, name: &str) -> Result<Option<&str>, ArgError> {
        match self.values.get(name) {
            None => Ok(None),
            Some(ArgValue::Enum(value)) => Ok(value.choice()),
            Some(other) => Err(mismatch(name, "enum", other)),
        }
    }

    pub fn get_custom<T: 'static>(&self, name: &str) -> Result<Option<&T>, ArgError> {
        match self.values.get(name) {
            None => Ok(None),
            Some(ArgValue::Custom(value)) => value
                .downcast_ref::<T>()
                .map(Some)
                .ok_or_else(|| ArgError::TypeMismatch {
                    name: name.to_string(),
                    expected: std::any::type_name::<T>(),
                    actual: value.type_name(),
                }),
            Some(other) => Err(mismatch(name, std::any::type_name::<T>(), other)),
        }
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Render as a JSON object keyed by name.
    pub fn to_json(&self) -> Value {
        let entries: serde_json::Map<String, Value> = self
            .values
            .iter()
            .map(|(name, value)| (name.clone(), value_to_json(value)))
            .collect();
        Value::Object(entries)
    }
}

fn value_to_json(value: &ArgValue) -> Value {
    match value {
        ArgValue::Flag => Value::Bool(true),
        ArgValue::String(s) => Value::String(s.clone()),
        ArgValue::Integer(i) => Value::from(*i),
        // JSON has no infinities or NaN, so those keep their literal spelling.
        ArgValue::Double(d) => serde_json::Number::from_f64(*d)
            .map(Value::Number)
            .unwrap_or_else(|| Value::String(non_finite_literal(*d).to_string())),
        ArgValue::File(p) => Value::String(p.display().to_string()),
        ArgValue::Enum(e) => e
            .choice()
            .map(|c| Value::String(c.to_string()))
            .unwrap_or(Value::Null),
        ArgValue::Custom(_) => Value::String("<custom>".to_string()),
    }
}

fn non_finite_literal(d: f64) -> &'static str {
    if d.is_nan() {
        "NaN"
    } else if d > 0.0 {
        "Infinity"
    } else {
        "-Infinity"
    }
}
