//! Declarative argument schemas loaded from TOML.

mod loader;
mod types;

pub use loader::ConfigError;
pub use types::{ArgumentDecl, ArgumentKind, Schema};
