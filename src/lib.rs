//! `argkit` parses `-name`, `-name=value` and `-name value` command-line
//! tokens into a typed lookup table.
//!
//! Arguments are declared on a caller-owned [`Registry`], either in code or
//! from a TOML [`Schema`](config::Schema), and read back through the checked
//! getters of [`ParseResult`].

pub mod args;
pub mod config;

pub use args::{parse, ArgEnum, ArgError, ArgSpec, ArgValue, ErrorKind, ParseResult, Registry};
