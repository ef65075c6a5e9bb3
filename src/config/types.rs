use serde::{Deserialize, Serialize};

/// Root schema container: the arguments a program accepts.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Schema {
    #[serde(default, rename = "argument")]
    pub arguments: Vec<ArgumentDecl>,
}

/// One `[[argument]]` table.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ArgumentDecl {
    /// Name matched on the command line, without dashes (e.g., "count").
    pub name: String,
    /// Value type of the argument.
    pub kind: ArgumentKind,
    /// Whether parsing fails when the argument is absent (default: false).
    #[serde(default)]
    pub required: bool,
    /// Default value; its TOML type must fit `kind`. Flags take none.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default: Option<toml::Value>,
    /// Accepted tokens for `kind = "enum"`.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub choices: Vec<String>,
}

/// Argument kind as written in the schema.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ArgumentKind {
    Flag,
    String,
    Integer,
    Double,
    File,
    Enum,
}

impl ArgumentKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ArgumentKind::Flag => "flag",
            ArgumentKind::String => "string",
            ArgumentKind::Integer => "integer",
            ArgumentKind::Double => "double",
            ArgumentKind::File => "file",
            ArgumentKind::Enum => "enum",
        }
    }
}
