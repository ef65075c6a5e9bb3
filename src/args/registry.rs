//! Argument registry — single source of truth for accepted arguments.

use std::path::PathBuf;

use crate::args::error::ArgError;
use crate::args::parser::parse;
use crate::args::result::ParseResult;
use crate::args::spec::ArgSpec;
use crate::args::tokenizer::is_valid_name;
use crate::args::value::ArgEnum;

/// A single registered argument.
#[derive(Debug, Clone)]
pub struct ArgDef {
    /// Name as matched on the command line, without dashes.
    pub name: String,
    pub spec: ArgSpec,
}

/// Ordered, caller-owned set of argument definitions.
///
/// Registration consumes and returns the registry so definitions chain:
///
/// ```
/// use argkit::Registry;
///
/// let registry = Registry::new()
///     .flag("v")?
///     .integer("count", Some(0), false)?
///     .string("name", None, true)?;
///
/// let result = registry.parse(&["-v", "-count=5", "-name", "Ada"])?;
/// assert!(result.get_flag("v"));
/// assert_eq!(result.get_integer("count")?, Some(5));
/// # Ok::<(), argkit::ArgError>(())
/// ```
#[derive(Debug, Clone, Default)]
pub struct Registry {
    defs: Vec<ArgDef>,
}

impl Registry {
    pub fn new() -> Self {
        Self { defs: Vec::new() }
    }

    /// Register `spec` under `name`.
    ///
    /// Fails if the name is taken or could never be matched by a token.
    pub fn register(mut self, name: impl Into<String>, spec: ArgSpec) -> Result<Self, ArgError> {
        let name = name.into();
        if !is_valid_name(&name) {
            return Err(ArgError::InvalidName { name });
        }
        if self.contains(&name) {
            return Err(ArgError::DuplicateName { name });
        }
        tracing::trace!(name = %name, kind = ?spec.kind(), required = spec.is_required(), "Registered argument");
        self.defs.push(ArgDef { name, spec });
        Ok(self)
    }

    pub fn flag(self, name: impl Into<String>) -> Result<Self, ArgError> {
        self.register(name, ArgSpec::flag())
    }

    pub fn string(
        self,
        name: impl Into<String>,
        default: Option<&str>,
        required: bool,
    ) -> Result<Self, ArgError> {
        self.register(name, ArgSpec::string(default, required))
    }

    pub fn integer(
        self,
        name: impl Into<String>,
        default: Option<i64>,
        required: bool,
    ) -> Result<Self, ArgError> {
        self.register(name, ArgSpec::integer(default, required))
    }

    pub fn double(
        self,
        name: impl Into<String>,
        default: Option<f64>,
        required: bool,
    ) -> Result<Self, ArgError> {
        self.register(name, ArgSpec::double(default, required))
    }

    pub fn file(
        self,
        name: impl Into<String>,
        default: Option<PathBuf>,
        required: bool,
    ) -> Result<Self, ArgError> {
        self.register(name, ArgSpec::file(default, required))
    }

    pub fn enumeration<T: ArgEnum>(
        self,
        name: impl Into<String>,
        default: Option<T>,
        required: bool,
    ) -> Result<Self, ArgError> {
        self.register(name, ArgSpec::enumeration(default, required))
    }

    /// Look up a definition by name.
    pub fn get(&self, name: &str) -> Option<&ArgSpec> {
        self.defs.iter().find(|d| d.name == name).map(|d| &d.spec)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    /// Definitions in registration order.
    pub fn iter(&self) -> impl Iterator<Item = &ArgDef> {
        self.defs.iter()
    }

    pub fn len(&self) -> usize {
        self.defs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.defs.is_empty()
    }

    /// Parse `tokens` against this registry. See [`parse`].
    pub fn parse<S: AsRef<str>>(&self, tokens: &[S]) -> Result<ParseResult, ArgError> {
        parse(tokens, self)
    }
}
