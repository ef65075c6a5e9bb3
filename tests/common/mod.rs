//! Shared test utilities.

#![allow(dead_code)]

use argkit::ArgEnum;
use std::path::PathBuf;
use tempfile::TempDir;

/// Owned token vector from string literals.
pub fn raw_args(args: Vec<&str>) -> Vec<String> {
    args.into_iter().map(String::from).collect()
}

/// Write `content` to a `schema.toml` inside a fresh temp dir.
pub fn temp_schema(content: &str) -> (TempDir, PathBuf) {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let schema_path = temp_dir.path().join("schema.toml");
    std::fs::write(&schema_path, content).expect("Failed to write schema");
    (temp_dir, schema_path)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    Fast,
    Slow,
}

impl ArgEnum for Mode {
    fn variants() -> &'static [Self] {
        &[Mode::Fast, Mode::Slow]
    }

    fn arg_name(&self) -> &'static str {
        match self {
            Mode::Fast => "fast",
            Mode::Slow => "slow",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Color {
    Red,
    Blue,
}

impl ArgEnum for Color {
    fn variants() -> &'static [Self] {
        &[Color::Red, Color::Blue]
    }

    fn arg_name(&self) -> &'static str {
        match self {
            Color::Red => "red",
            Color::Blue => "blue",
        }
    }
}
