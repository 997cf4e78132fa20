//! `.env` file loading for the host process.
//!
//! Responsibilities:
//! - Load a `.env` file into the process environment before arguments are parsed.
//! - Enforce the `DOTENV_DISABLED` gate so tests stay hermetic.
//!
//! Invariants:
//! - A missing `.env` file is not an error.
//! - Errors never include raw `.env` line contents.

use anyhow::bail;

/// Check if dotenv loading is disabled via environment variable.
fn dotenv_disabled() -> bool {
    matches!(
        std::env::var("DOTENV_DISABLED").ok().as_deref(),
        Some("true") | Some("1")
    )
}

/// Check if a dotenv error indicates the file was not found.
fn is_not_found(err: &dotenvy::Error) -> bool {
    matches!(
        err,
        dotenvy::Error::Io(io_err) if io_err.kind() == std::io::ErrorKind::NotFound
    )
}

/// Load environment variables from a `.env` file if present.
///
/// # Errors
///
/// Returns an error if the `.env` file exists but has invalid syntax or cannot be read.
pub fn load_dotenv() -> anyhow::Result<()> {
    if dotenv_disabled() {
        return Ok(());
    }

    match dotenvy::dotenv() {
        Ok(path) => {
            tracing::debug!(path = %path.display(), "Loaded .env file");
            Ok(())
        }
        Err(e) if is_not_found(&e) => Ok(()),
        Err(dotenvy::Error::LineParse(_, idx)) => bail!(
            "Failed to parse .env file at position {idx}. Hint: set DOTENV_DISABLED=1 to skip .env loading"
        ),
        Err(dotenvy::Error::Io(io_err)) => bail!("Failed to read .env file: {}", io_err.kind()),
        Err(_) => bail!("Failed to load .env file. Hint: set DOTENV_DISABLED=1 to skip .env loading"),
    }
}
