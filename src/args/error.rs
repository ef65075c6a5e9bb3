//! Error types for registration, parsing and result retrieval.

use thiserror::Error;

/// Errors produced while building a registry, parsing tokens, or reading
/// typed values back out of a [`ParseResult`](crate::args::ParseResult).
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ArgError {
    /// A name was registered twice.
    #[error("Argument \"{name}\" was already registered")]
    DuplicateName { name: String },

    /// A name that the token grammar could never match.
    #[error("Invalid argument name \"{name}\": expected one or more of [A-Za-z0-9]")]
    InvalidName { name: String },

    /// Token is not of the form `-name...`.
    #[error("Illegal argument: {token}")]
    MalformedToken { token: String },

    /// Embedded `-name=value` form whose value falls outside the allowed characters.
    #[error("Malformed param: {token}")]
    MalformedValue { token: String },

    /// A flag was given a value with `=`.
    #[error("{name} can not have a value")]
    FlagWithValue { name: String },

    /// A value-bearing argument was the last token.
    #[error("Malformed param: {token} expects a value")]
    MissingValue { name: String, token: String },

    /// No handler registered under this name.
    #[error("Unknown argument \"{name}\"")]
    UnknownArgument { name: String },

    /// The raw value could not be converted to the argument's type.
    #[error("Invalid value \"{value}\" for {name}: {message}")]
    Conversion {
        name: String,
        value: String,
        message: String,
    },

    /// One or more required arguments were neither supplied nor defaulted.
    #[error("Required param is missing: {}", .names.join(", "))]
    MissingRequired { names: Vec<String> },

    /// A typed getter was used on a value of another type.
    #[error("Argument \"{name}\" holds {actual}, not {expected}")]
    TypeMismatch {
        name: String,
        expected: &'static str,
        actual: &'static str,
    },
}

/// Coarse error classification, stable across message changes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    DuplicateName,
    UnknownArgument,
    Malformed,
    Conversion,
    MissingRequired,
    TypeMismatch,
}

impl ErrorKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorKind::DuplicateName => "duplicate_name",
            ErrorKind::UnknownArgument => "unknown_argument",
            ErrorKind::Malformed => "malformed_argument",
            ErrorKind::Conversion => "conversion_error",
            ErrorKind::MissingRequired => "missing_required",
            ErrorKind::TypeMismatch => "type_mismatch",
        }
    }
}

impl ArgError {
    /// Map the error variant to its [`ErrorKind`].
    pub fn kind(&self) -> ErrorKind {
        match self {
            ArgError::DuplicateName { .. } => ErrorKind::DuplicateName,
            ArgError::InvalidName { .. }
            | ArgError::MalformedToken { .. }
            | ArgError::MalformedValue { .. }
            | ArgError::FlagWithValue { .. }
            | ArgError::MissingValue { .. } => ErrorKind::Malformed,
            ArgError::UnknownArgument { .. } => ErrorKind::UnknownArgument,
            ArgError::Conversion { .. } => ErrorKind::Conversion,
            ArgError::MissingRequired { .. } => ErrorKind::MissingRequired,
            ArgError::TypeMismatch { .. } => ErrorKind::TypeMismatch,
        }
    }
}
