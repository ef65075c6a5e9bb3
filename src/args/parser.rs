//! Parser — walks the token vector and builds the result table.

use std::collections::HashMap;

use crate::args::error::ArgError;
use crate::args::registry::Registry;
use crate::args::result::ParseResult;
use crate::args::tokenizer::{classify_token, embedded_value};
use crate::args::value::ArgValue;

/// Parse raw command-line tokens against `registry`.
///
/// Accepts `-name`, `-name=value` and `-name value`. A value-bearing
/// argument without `=` consumes the following token whole, even if it
/// starts with `-`. After the walk, defaults are filled in and required
/// arguments are checked; every missing name is reported at once.
pub fn parse<S: AsRef<str>>(tokens: &[S], registry: &Registry) -> Result<ParseResult, ArgError> {
    let mut values: HashMap<String, ArgValue> = HashMap::new();
    let mut cursor = 0;

    while cursor < tokens.len() {
        let raw = tokens[cursor].as_ref();
        let token = classify_token(raw)?;

        let spec = registry
            .get(token.name)
            .ok_or_else(|| ArgError::UnknownArgument {
                name: token.name.to_string(),
            })?;

        let value = if spec.is_flag() {
            if token.has_value {
                return Err(ArgError::FlagWithValue {
                    name: token.name.to_string(),
                });
            }
            ArgValue::Flag
        } else {
            let raw_value = if token.has_value {
                embedded_value(raw).ok_or_else(|| ArgError::MalformedValue {
                    token: raw.to_string(),
                })?
            } else if let Some(next) = tokens.get(cursor + 1) {
                cursor += 1;
                next.as_ref()
            } else {
                return Err(ArgError::MissingValue {
                    name: token.name.to_string(),
                    token: raw.to_string(),
                });
            };

            spec.convert(raw_value)
                .map_err(|message| ArgError::Conversion {
                    name: token.name.to_string(),
                    value: raw_value.to_string(),
                    message,
                })?
        };

        tracing::debug!(name = %token.name, value = ?value, "Parsed argument");
        if values.insert(token.name.to_string(), value).is_some() {
            tracing::debug!(name = %token.name, "Argument repeated, keeping last value");
        }
        cursor += 1;
    }

    for def in registry.iter() {
        if values.contains_key(&def.name) {
            continue;
        }
        if let Some(default) = def.spec.default_value() {
            tracing::debug!(name = %def.name, value = ?default, "Applied default");
            values.insert(def.name.clone(), default.clone());
        }
    }

    let missing: Vec<String> = registry
        .iter()
        .filter(|d| d.spec.is_required() && !values.contains_key(&d.name))
        .map(|d| d.name.clone())
        .collect();
    if !missing.is_empty() {
        return Err(ArgError::MissingRequired { names: missing });
    }

    Ok(ParseResult::new(values))
}
