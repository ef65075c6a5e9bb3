use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::Context;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use argkit::config::Schema;

/// Parse argument tokens against a declared schema and print the result as JSON.
#[derive(Parser, Debug)]
#[command(name = "argkit", version, about)]
struct Cli {
    /// Schema file declaring the accepted arguments (default: ~/.config/argkit/schema.toml)
    #[arg(short, long, value_name = "PATH")]
    schema: Option<PathBuf>,

    /// Tokens to parse, given after `--`
    #[arg(last = true, allow_hyphen_values = true, value_name = "TOKENS")]
    tokens: Vec<String>,
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_level(true)
        .with_timer(tracing_subscriber::fmt::time::UtcTime::rfc_3339())
        .with_writer(std::io::stderr)
        .init();
}

fn run(cli: &Cli) -> anyhow::Result<String> {
    let schema = match &cli.schema {
        Some(path) => Schema::load_from(path)?,
        None => Schema::load()?,
    };
    let registry = schema
        .into_registry()
        .context("Failed to build registry from schema")?;

    let result = registry.parse(cli.tokens.as_slice())?;
    tracing::info!(arguments = result.len(), "Parsed tokens");

    Ok(serde_json::to_string_pretty(&result.to_json())?)
}

fn main() -> ExitCode {
    init_tracing();
    let cli = Cli::parse();

    match run(&cli) {
        Ok(output) => {
            println!("{}", output);
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("Error: {:#}", e);
            ExitCode::from(1)
        }
    }
}
