//! Argument specs — one typed handler per registered name.

use std::any::{Any, TypeId};
use std::fmt;
use std::path::PathBuf;
use std::sync::Arc;

use crate::args::value::{ArgEnum, ArgValue, CustomValue, EnumValue};

/// User-supplied conversion for [`ArgKind::Custom`].
pub type Converter = Arc<dyn Fn(&str) -> Result<CustomValue, String> + Send + Sync>;

/// Token → constant table for an enumeration argument.
#[derive(Debug, Clone)]
pub struct EnumTable {
    type_id: Option<TypeId>,
    type_name: &'static str,
    choices: Vec<String>,
}

impl EnumTable {
    /// Build the table from the constants of `T`.
    pub fn of<T: ArgEnum>() -> Self {
        Self {
            type_id: Some(TypeId::of::<T>()),
            type_name: std::any::type_name::<T>(),
            choices: T::variants()
                .iter()
                .map(|constant| constant.arg_name().to_string())
                .collect(),
        }
    }

    /// A table with no backing Rust type (schema-declared enums).
    pub fn dynamic(choices: Vec<String>) -> Self {
        Self {
            type_id: None,
            type_name: "choice",
            choices,
        }
    }

    pub fn choices(&self) -> &[String] {
        &self.choices
    }

    /// Unknown tokens produce a value with no constant rather than an error.
    pub fn lookup(&self, raw: &str) -> EnumValue {
        let choice = self.choices.iter().find(|c| c.as_str() == raw).cloned();
        EnumValue::new(self.type_id, self.type_name, choice)
    }
}

/// The handler variant behind an [`ArgSpec`].
#[derive(Clone)]
pub enum ArgKind {
    /// Presence only, never takes a value.
    Flag,
    String,
    Integer,
    Double,
    File,
    Enum(EnumTable),
    Custom {
        type_name: &'static str,
        convert: Converter,
    },
}

impl fmt::Debug for ArgKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ArgKind::Flag => f.write_str("Flag"),
            ArgKind::String => f.write_str("String"),
            ArgKind::Integer => f.write_str("Integer"),
            ArgKind::Double => f.write_str("Double"),
            ArgKind::File => f.write_str("File"),
            ArgKind::Enum(table) => f.debug_tuple("Enum").field(table).finish(),
            ArgKind::Custom { type_name, .. } => f
                .debug_struct("Custom")
                .field("type_name", type_name)
                .finish_non_exhaustive(),
        }
    }
}

/// A typed argument handler: conversion plus default/required policy.
#[derive(Debug, Clone)]
pub struct ArgSpec {
    kind: ArgKind,
    default: Option<ArgValue>,
    required: bool,
}

impl ArgSpec {
    pub fn flag() -> Self {
        Self {
            kind: ArgKind::Flag,
            default: None,
            required: false,
        }
    }

    /// An empty default string counts as no default.
    pub fn string(default: Option<&str>, required: bool) -> Self {
        Self {
            kind: ArgKind::String,
            default: default
                .filter(|s| !s.is_empty())
                .map(|s| ArgValue::String(s.to_string())),
            required,
        }
    }

    pub fn integer(default: Option<i64>, required: bool) -> Self {
        Self {
            kind: ArgKind::Integer,
            default: default.map(ArgValue::Integer),
            required,
        }
    }

    pub fn double(default: Option<f64>, required: bool) -> Self {
        Self {
            kind: ArgKind::Double,
            default: default.map(ArgValue::Double),
            required,
        }
    }

    pub fn file(default: Option<PathBuf>, required: bool) -> Self {
        Self {
            kind: ArgKind::File,
            default: default.map(ArgValue::File),
            required,
        }
    }

    pub fn enumeration<T: ArgEnum>(default: Option<T>, required: bool) -> Self {
        let table = EnumTable::of::<T>();
        let default = default.map(|constant| ArgValue::Enum(table.lookup(constant.arg_name())));
        Self {
            kind: ArgKind::Enum(table),
            default,
            required,
        }
    }

    /// Enumeration over plain tokens. A default outside `choices` is dropped.
    pub fn choice(choices: Vec<String>, default: Option<&str>, required: bool) -> Self {
        let table = EnumTable::dynamic(choices);
        let default = default
            .filter(|d| table.choices().iter().any(|c| c == d))
            .map(|d| ArgValue::Enum(table.lookup(d)));
        Self {
            kind: ArgKind::Enum(table),
            default,
            required,
        }
    }

    /// Extension point: convert with a user function.
    pub fn custom<T, E, F>(convert: F, default: Option<T>, required: bool) -> Self
    where
        T: Any + Send + Sync,
        E: fmt::Display,
        F: Fn(&str) -> Result<T, E> + Send + Sync + 'static,
    {
        let converter: Converter = Arc::new(move |raw: &str| {
            convert(raw).map(CustomValue::new).map_err(|e| e.to_string())
        });
        Self {
            kind: ArgKind::Custom {
                type_name: std::any::type_name::<T>(),
                convert: converter,
            },
            default: default.map(|value| ArgValue::Custom(CustomValue::new(value))),
            required,
        }
    }

    pub fn kind(&self) -> &ArgKind {
        &self.kind
    }

    pub fn default_value(&self) -> Option<&ArgValue> {
        self.default.as_ref()
    }

    pub fn is_required(&self) -> bool {
        self.required
    }

    pub fn is_flag(&self) -> bool {
        matches!(self.kind, ArgKind::Flag)
    }

    /// Convert a raw token into this spec's value type.
    pub fn convert(&self, raw: &str) -> Result<ArgValue, String> {
        match &self.kind {
            ArgKind::Flag => Ok(ArgValue::Flag),
            ArgKind::String => Ok(ArgValue::String(raw.trim().to_string())),
            ArgKind::Integer => raw
                .parse::<i64>()
                .map(ArgValue::Integer)
                .map_err(|e| e.to_string()),
            ArgKind::Double => parse_double(raw).map(ArgValue::Double),
            ArgKind::File => Ok(ArgValue::File(PathBuf::from(raw))),
            ArgKind::Enum(table) => Ok(ArgValue::Enum(table.lookup(raw))),
            ArgKind::Custom { convert, .. } => convert(raw).map(ArgValue::Custom),
        }
    }
}

/// Decimal text with an optional `d`/`f` suffix, or a signed `Infinity`/`NaN`.
///
/// `f64::from_str` alone would also take `inf` and `nan` in any case.
fn parse_double(raw: &str) -> Result<f64, String> {
    let trimmed = raw.trim();
    let unsigned = trimmed.strip_prefix(['+', '-']).unwrap_or(trimmed);
    if unsigned == "Infinity" || unsigned == "NaN" {
        return trimmed.parse::<f64>().map_err(|e| e.to_string());
    }

    let body = trimmed
        .strip_suffix(['d', 'D', 'f', 'F'])
        .unwrap_or(trimmed);
    if !body
        .chars()
        .all(|c| c.is_ascii_digit() || matches!(c, '+' | '-' | '.' | 'e' | 'E'))
    {
        return Err(format!("invalid float literal: {}", trimmed));
    }
    body.parse::<f64>().map_err(|e| e.to_string())
}
