//! Token classifier — raw token → argument name and value position.

use std::sync::LazyLock;

use regex::Regex;

use crate::args::error::ArgError;

static NAME_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^-+([A-Za-z0-9]+)").expect("name pattern compiles"));

static VALUE_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"^-+[A-Za-z0-9]+=([A-Za-z0-9 /\\_"'.]+)$"#).expect("value pattern compiles")
});

/// A token that names an argument.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Token<'a> {
    /// The token as given.
    pub raw: &'a str,
    /// Name without the leading dashes.
    pub name: &'a str,
    /// Whether the token carries an `=`.
    pub has_value: bool,
}

/// Split a raw token into its argument name and value marker.
pub fn classify_token(raw: &str) -> Result<Token<'_>, ArgError> {
    if !raw.starts_with('-') {
        return Err(ArgError::MalformedToken {
            token: raw.to_string(),
        });
    }

    let name = NAME_PATTERN
        .captures(raw)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str())
        .ok_or_else(|| ArgError::MalformedToken {
            token: raw.to_string(),
        })?;

    let token = Token {
        raw,
        name,
        has_value: raw.contains('='),
    };
    tracing::trace!(token = %raw, name = %name, has_value = token.has_value, "Classified token");
    Ok(token)
}

/// Extract the value of an embedded `-name=value` token.
///
/// The value is restricted to `[A-Za-z0-9 /\_"'.]`; anything else yields `None`.
pub fn embedded_value(raw: &str) -> Option<&str> {
    VALUE_PATTERN
        .captures(raw)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str())
}

/// Whether `name` can be matched by the token grammar.
pub fn is_valid_name(name: &str) -> bool {
    !name.is_empty() && name.chars().all(|c| c.is_ascii_alphanumeric())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_and_double_dash() {
        let token = classify_token("-v").unwrap();
        assert_eq!(token.name, "v");
        assert!(!token.has_value);

        let token = classify_token("--verbose").unwrap();
        assert_eq!(token.name, "verbose");
    }

    #[test]
    fn test_name_stops_at_first_non_alphanumeric() {
        let token = classify_token("-count=5").unwrap();
        assert_eq!(token.name, "count");
        assert!(token.has_value);

        let token = classify_token("-out-dir").unwrap();
        assert_eq!(token.name, "out");
    }

    #[test]
    fn test_positional_is_rejected() {
        assert!(matches!(
            classify_token("badtoken"),
            Err(ArgError::MalformedToken { token }) if token == "badtoken"
        ));
    }

    #[test]
    fn test_dashes_without_name_are_rejected() {
        assert!(classify_token("-").is_err());
        assert!(classify_token("---").is_err());
        assert!(classify_token("-=5").is_err());
    }

    #[test]
    fn test_embedded_value_charset() {
        assert_eq!(embedded_value("-name=John Smith"), Some("John Smith"));
        assert_eq!(embedded_value("-path=/tmp/a_b.txt"), Some("/tmp/a_b.txt"));
        assert_eq!(embedded_value(r#"-q="quoted's""#), Some(r#""quoted's""#));
        assert_eq!(embedded_value(r"-p=C:\dir"), None);
        assert_eq!(embedded_value(r"-p=a\b"), Some(r"a\b"));
        assert_eq!(embedded_value("-n=-5"), None);
        assert_eq!(embedded_value("-n="), None);
        assert_eq!(embedded_value("-n=a=b"), None);
    }

    #[test]
    fn test_valid_names() {
        assert!(is_valid_name("count"));
        assert!(is_valid_name("x2"));
        assert!(!is_valid_name(""));
        assert!(!is_valid_name("out-dir"));
        assert!(!is_valid_name("-v"));
    }
}
