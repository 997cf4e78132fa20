//! CLI argument definitions and parsing.
//!
//! Responsibilities:
//! - Define the CLI structure using clap derive macros.
//! - Collect the trailing override tokens passed after `--`.
//!
//! Non-responsibilities:
//! - Does not interpret the override tokens (the loader's argument overlay does).
//! - Does not load configuration (see `main`).

use clap::Parser;
use std::path::{Path, PathBuf};

#[derive(Parser, Debug)]
#[command(name = "appsettings")]
#[command(about = "Merge layered configuration files, environment variables and arguments into JSON", long_about = None)]
#[command(version)]
#[command(
    after_help = "Examples:\n  appsettings --config-dir ./config\n  appsettings --config-dir ./config --environment prod --with-env\n  appsettings --config-dir ./config -- --port 3000 --debug\n"
)]
pub struct Cli {
    /// Directory holding config.json and config.<environment>.json (defaults to the executable's directory)
    #[arg(long, env = "APPSETTINGS_CONFIG_DIR")]
    pub config_dir: Option<PathBuf>,

    /// Environment name selecting config.<environment>.json
    #[arg(short, long, env = "APPSETTINGS_ENVIRONMENT")]
    pub environment: Option<String>,

    /// Overlay the process environment variables after the config files
    #[arg(long)]
    pub with_env: bool,

    /// Print the merged configuration on a single line
    #[arg(long)]
    pub compact: bool,

    /// Override tokens in `--key value` / `--flag` form, overlaid last
    #[arg(last = true, allow_hyphen_values = true, value_name = "OVERRIDES")]
    pub overrides: Vec<String>,
}

impl Cli {
    /// The config directory, ignoring blank values so the default applies.
    pub fn config_dir(&self) -> Option<&Path> {
        self.config_dir
            .as_deref()
            .filter(|path| !path.as_os_str().to_string_lossy().trim().is_empty())
    }

    /// The environment name, ignoring blank values.
    pub fn environment(&self) -> Option<&str> {
        self.environment
            .as_deref()
            .map(str::trim)
            .filter(|name| !name.is_empty())
    }
}
