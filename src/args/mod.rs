//! Typed argument registry and parser.
//!
//! ```text
//! Register → Tokenize → Look up → Convert → Fill defaults → Check required → ParseResult
//! ```
//!
//! The [`Registry`] is built once by the caller and only borrowed by [`parse`];
//! each call produces a fresh, read-only [`ParseResult`].

mod error;
mod parser;
mod registry;
mod result;
mod spec;
mod tokenizer;
mod value;

pub use error::{ArgError, ErrorKind};
pub use parser::parse;
pub use registry::{ArgDef, Registry};
pub use result::ParseResult;
pub use spec::{ArgKind, ArgSpec, Converter, EnumTable};
pub use tokenizer::{classify_token, embedded_value, is_valid_name, Token};
pub use value::{ArgEnum, ArgValue, CustomValue, EnumValue};
