mod common;

use argkit::config::{ArgumentKind, ConfigError, Schema};
use argkit::ErrorKind;
use common::{raw_args, temp_schema};

const SAMPLE: &str = r#"
[[argument]]
name = "v"
kind = "flag"

[[argument]]
name = "count"
kind = "integer"
default = 0

[[argument]]
name = "ratio"
kind = "double"
default = 0.5

[[argument]]
name = "out"
kind = "file"
required = true

[[argument]]
name = "mode"
kind = "enum"
choices = ["fast", "slow"]
default = "fast"
"#;

/// Test that Schema::config_path() returns a path ending with the expected filename.
#[test]
fn test_config_path_ends_with_expected() {
    let path = Schema::config_path();
    assert!(path.ends_with("argkit/schema.toml"));
}

/// Test that a schema file loads with every declared argument in order.
#[test]
fn test_load_from_file() {
    let (_dir, path) = temp_schema(SAMPLE);
    let schema = Schema::load_from(&path).unwrap();

    let names: Vec<&str> = schema.arguments.iter().map(|a| a.name.as_str()).collect();
    assert_eq!(names, vec!["v", "count", "ratio", "out", "mode"]);
    assert_eq!(schema.arguments[4].kind, ArgumentKind::Enum);
    assert!(schema.arguments[3].required);
    assert!(!schema.arguments[0].required);
}

/// Test that a loaded schema drives parsing end to end.
#[test]
fn test_registry_from_schema_parses_tokens() {
    let (_dir, path) = temp_schema(SAMPLE);
    let registry = Schema::load_from(&path).unwrap().into_registry().unwrap();
    assert_eq!(registry.len(), 5);

    let result = registry
        .parse(&raw_args(vec!["-v", "-out", "report.txt", "-mode=slow"]))
        .unwrap();
    assert!(result.get_flag("v"));
    assert_eq!(result.get_integer("count").unwrap(), Some(0));
    assert_eq!(result.get_double("ratio").unwrap(), Some(0.5));
    assert_eq!(
        result.get_file("out").unwrap(),
        Some(std::path::Path::new("report.txt"))
    );
    assert_eq!(result.get_choice("mode").unwrap(), Some("slow"));
}

/// Test that required schema arguments are enforced.
#[test]
fn test_schema_required_argument_enforced() {
    let registry = Schema::from_toml(SAMPLE).unwrap().into_registry().unwrap();
    let err = registry.parse(&raw_args(vec!["-v"])).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::MissingRequired);
}

/// Test that an empty schema file is valid and accepts no arguments.
#[test]
fn test_empty_schema() {
    let (_dir, path) = temp_schema("");
    let registry = Schema::load_from(&path).unwrap().into_registry().unwrap();
    assert!(registry.is_empty());
    assert_eq!(
        registry.parse(&raw_args(vec!["-v"])).unwrap_err().kind(),
        ErrorKind::UnknownArgument
    );
}

/// Test that a missing file is a read error.
#[test]
fn test_missing_file_is_read_error() {
    let dir = tempfile::tempdir().unwrap();
    let result = Schema::load_from(&dir.path().join("nope.toml"));
    assert!(matches!(result, Err(ConfigError::ReadError { .. })));
}

/// Test that invalid TOML is a parse error carrying the path.
#[test]
fn test_invalid_toml_is_parse_error() {
    let (_dir, path) = temp_schema("[[argument]\nname = ");
    match Schema::load_from(&path) {
        Err(ConfigError::ParseError { path: reported, .. }) => assert_eq!(reported, path),
        other => panic!("Expected ParseError, got {:?}", other),
    }
}

/// Test that an unknown kind is rejected at parse time.
#[test]
fn test_unknown_kind_is_parse_error() {
    let result = Schema::from_toml(
        r#"
        [[argument]]
        name = "x"
        kind = "uuid"
        "#,
    );
    assert!(matches!(result, Err(ConfigError::ParseError { .. })));
}

fn validation_message(content: &str) -> String {
    match Schema::from_toml(content) {
        Err(ConfigError::ValidationError { message }) => message,
        other => panic!("Expected ValidationError, got {:?}", other),
    }
}

/// Test validation fails on names the token grammar cannot match.
#[test]
fn test_validation_fails_bad_name() {
    let message = validation_message(
        r#"
        [[argument]]
        name = "dry-run"
        kind = "flag"
        "#,
    );
    assert!(message.contains("dry-run"));
}

/// Test validation fails on duplicate names.
#[test]
fn test_validation_fails_duplicate_name() {
    let message = validation_message(
        r#"
        [[argument]]
        name = "n"
        kind = "flag"

        [[argument]]
        name = "n"
        kind = "integer"
        "#,
    );
    assert!(message.contains("more than once"));
}

/// Test validation fails when a default does not fit the kind.
#[test]
fn test_validation_fails_default_type() {
    let message = validation_message(
        r#"
        [[argument]]
        name = "count"
        kind = "integer"
        default = "three"
        "#,
    );
    assert!(message.contains("must be an integer"));

    let message = validation_message(
        r#"
        [[argument]]
        name = "v"
        kind = "flag"
        default = true
        "#,
    );
    assert!(message.contains("cannot have a default"));
}

/// Test validation of enum declarations.
#[test]
fn test_validation_fails_enum_rules() {
    let message = validation_message(
        r#"
        [[argument]]
        name = "mode"
        kind = "enum"
        "#,
    );
    assert!(message.contains("at least one choice"));

    let message = validation_message(
        r#"
        [[argument]]
        name = "mode"
        kind = "enum"
        choices = ["fast"]
        default = "slow"
        "#,
    );
    assert!(message.contains("not one of the choices"));

    let message = validation_message(
        r#"
        [[argument]]
        name = "name"
        kind = "string"
        choices = ["a"]
        "#,
    );
    assert!(message.contains("only allowed"));
}
