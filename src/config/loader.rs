use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::args::{is_valid_name, ArgError, ArgSpec, Registry};
use crate::config::types::{ArgumentDecl, ArgumentKind, Schema};

/// Errors that can occur when loading a schema.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read schema file '{path}': {source}")]
    ReadError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse schema file '{path}': {source}")]
    ParseError {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("Schema validation failed: {message}")]
    ValidationError { message: String },

    #[error("Failed to register argument: {0}")]
    Registry(#[from] ArgError),
}

/// Largest integer magnitude an `f64` holds exactly (2^53).
const MAX_EXACT_INTEGER: u64 = 1 << 53;

impl Schema {
    /// Returns the path to the default schema file.
    ///
    /// Uses `~/.config/argkit/schema.toml` on Unix/macOS,
    /// or equivalent on other platforms via `dirs::config_dir()`.
    /// Falls back to current directory if config_dir is unavailable.
    pub fn config_path() -> PathBuf {
        let config_dir = dirs::config_dir().unwrap_or_else(|| PathBuf::from("."));
        config_dir.join("argkit").join("schema.toml")
    }

    /// Loads the schema from the default file.
    ///
    /// - If the file doesn't exist, returns an empty schema.
    /// - Otherwise behaves like [`Schema::load_from`].
    pub fn load() -> Result<Self, ConfigError> {
        let path = Self::config_path();

        if !path.exists() {
            tracing::debug!(path = %path.display(), "No schema file, using empty schema");
            return Ok(Schema::default());
        }

        Self::load_from(&path)
    }

    /// Loads and validates a schema from `path`.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path).map_err(|e| ConfigError::ReadError {
            path: path.to_path_buf(),
            source: e,
        })?;

        let schema = Self::parse_at(&content, path)?;
        tracing::debug!(
            path = %path.display(),
            arguments = schema.arguments.len(),
            "Loaded schema"
        );
        Ok(schema)
    }

    /// Parses and validates a schema from TOML text.
    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        Self::parse_at(content, Path::new("<inline>"))
    }

    fn parse_at(content: &str, path: &Path) -> Result<Self, ConfigError> {
        let schema: Schema = toml::from_str(content).map_err(|e| ConfigError::ParseError {
            path: path.to_path_buf(),
            source: e,
        })?;

        schema.validate()?;
        Ok(schema)
    }

    /// Validates the schema.
    ///
    /// Checks:
    /// - Every name is one or more of `[A-Za-z0-9]`
    /// - Names are unique
    /// - Defaults fit their kind; flags have none
    /// - Enums list at least one choice and their default is one of them
    /// - Only enums declare choices
    pub fn validate(&self) -> Result<(), ConfigError> {
        let mut seen = HashSet::new();

        for decl in &self.arguments {
            if !is_valid_name(&decl.name) {
                return Err(ConfigError::ValidationError {
                    message: format!(
                        "Argument name '{}' must be one or more of [A-Za-z0-9]",
                        decl.name
                    ),
                });
            }

            if !seen.insert(decl.name.as_str()) {
                return Err(ConfigError::ValidationError {
                    message: format!("Argument '{}' is declared more than once", decl.name),
                });
            }

            decl.to_spec()?;
        }

        Ok(())
    }

    /// Builds a [`Registry`] with one definition per declared argument.
    ///
    /// Bad or repeated names surface as [`ConfigError::Registry`].
    pub fn into_registry(self) -> Result<Registry, ConfigError> {
        let mut registry = Registry::new();
        for decl in &self.arguments {
            registry = registry.register(decl.name.clone(), decl.to_spec()?)?;
        }
        Ok(registry)
    }
}

impl ArgumentDecl {
    fn invalid(&self, message: &str) -> ConfigError {
        ConfigError::ValidationError {
            message: format!("Argument '{}': {}", self.name, message),
        }
    }

    fn wrong_default(&self, expected: &str) -> ConfigError {
        self.invalid(&format!(
            "default for kind \"{}\" must be {}",
            self.kind.as_str(),
            expected
        ))
    }

    /// Converts the declaration into a typed spec, checking the default against the kind.
    pub fn to_spec(&self) -> Result<ArgSpec, ConfigError> {
        if self.kind != ArgumentKind::Enum && !self.choices.is_empty() {
            return Err(self.invalid(&format!(
                "choices are only allowed for kind \"enum\", not \"{}\"",
                self.kind.as_str()
            )));
        }

        let default = self.default.as_ref();
        let spec = match self.kind {
            ArgumentKind::Flag => {
                if default.is_some() {
                    return Err(self.invalid("a flag cannot have a default"));
                }
                if self.required {
                    return Err(self.invalid("a flag cannot be required"));
                }
                ArgSpec::flag()
            }
            ArgumentKind::String => {
                let default = match default {
                    None => None,
                    Some(toml::Value::String(s)) => Some(s.as_str()),
                    Some(_) => return Err(self.wrong_default("a string")),
                };
                ArgSpec::string(default, self.required)
            }
            ArgumentKind::Integer => {
                let default = match default {
                    None => None,
                    Some(toml::Value::Integer(i)) => Some(*i),
                    Some(_) => return Err(self.wrong_default("an integer")),
                };
                ArgSpec::integer(default, self.required)
            }
            ArgumentKind::Double => {
                let default = match default {
                    None => None,
                    Some(toml::Value::Float(f)) => Some(*f),
                    Some(toml::Value::Integer(i)) if i.unsigned_abs() <= MAX_EXACT_INTEGER => {
                        Some(*i as f64)
                    }
                    Some(toml::Value::Integer(_)) => {
                        return Err(self.invalid("integer default is too large to be exact as a double"))
                    }
                    Some(_) => return Err(self.wrong_default("a number")),
                };
                ArgSpec::double(default, self.required)
            }
            ArgumentKind::File => {
                let default = match default {
                    None => None,
                    Some(toml::Value::String(s)) => Some(PathBuf::from(s)),
                    Some(_) => return Err(self.wrong_default("a path string")),
                };
                ArgSpec::file(default, self.required)
            }
            ArgumentKind::Enum => {
                if self.choices.is_empty() {
                    return Err(self.invalid("an enum must list at least one choice"));
                }
                let default = match default {
                    None => None,
                    Some(toml::Value::String(s)) if self.choices.contains(s) => Some(s.as_str()),
                    Some(toml::Value::String(s)) => {
                        return Err(self.invalid(&format!("default '{}' is not one of the choices", s)))
                    }
                    Some(_) => return Err(self.wrong_default("a string")),
                };
                ArgSpec::choice(self.choices.clone(), default, self.required)
            }
        };

        Ok(spec)
    }
}
