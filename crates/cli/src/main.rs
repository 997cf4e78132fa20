//! AppSettings CLI - print the merged layered configuration.
//!
//! Responsibilities:
//! - Capture the process environment and override tokens for the loader.
//! - Load `.env` before parsing so it can feed clap env defaults and `--with-env`.
//! - Print the merged configuration as JSON on stdout.
//!
//! Does NOT handle:
//! - Merge rules or value inference (see the `appsettings` crate).
//!
//! Invariants:
//! - Logs go to stderr; stdout carries only the JSON document.
//! - The subscriber is installed before `.env` loading so its events are visible.
//! - Exit codes follow `error::ExitCode`.

mod args;
mod dotenv;
mod error;

use anyhow::anyhow;
use appsettings::ConfigLoader;
use args::Cli;
use clap::Parser;
use error::{ExitCode, ExitCodeExt};
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

fn main() {
    // RUST_LOG is read here, so a value set only in .env does not change the filter
    tracing_subscriber::registry()
        .with(EnvFilter::from_default_env())
        .with(fmt::layer().with_writer(std::io::stderr))
        .init();

    // Load .env file BEFORE CLI parsing so clap env defaults can read .env values
    if let Err(e) = dotenv::load_dotenv() {
        eprintln!("Failed to load environment: {e}");
        std::process::exit(ExitCode::GeneralError.as_i32());
    }

    let cli = Cli::parse();

    if let Err(e) = run(&cli) {
        eprintln!("Error: {e}");
        std::process::exit(e.exit_code().as_i32());
    }
}

fn run(cli: &Cli) -> anyhow::Result<()> {
    let loader = build_loader(cli, process_env_entries());
    let overlay = loader.load_overlay()?;

    let output = if cli.compact {
        serde_json::to_string(&overlay)
    } else {
        serde_json::to_string_pretty(&overlay)
    }
    .map_err(|e| anyhow!("Failed to serialize configuration: {e}"))?;

    println!("{output}");
    Ok(())
}

fn build_loader(cli: &Cli, env_entries: Vec<String>) -> ConfigLoader {
    let mut loader = ConfigLoader::new().with_args(cli.overrides.iter().cloned());

    if let Some(dir) = cli.config_dir() {
        loader = loader.with_config_dir(dir);
    }
    if let Some(environment) = cli.environment() {
        loader = loader.with_environment(environment);
    }
    if cli.with_env {
        loader = loader.with_env_vars(env_entries);
    }
    loader
}

/// The process environment as `NAME=VALUE` entries, skipping non-UTF-8 ones.
fn process_env_entries() -> Vec<String> {
    std::env::vars_os()
        .filter_map(|(name, value)| {
            let name = name.into_string().ok()?;
            let value = value.into_string().ok()?;
            Some(format!("{name}={value}"))
        })
        .collect()
}
