//! CLI exit codes for scripting and automation.
//!
//! Responsibilities:
//! - Define structured exit codes that scripts can use to distinguish failures.
//! - Map loader errors to exit codes.
//!
//! Does NOT handle:
//! - Error message formatting (handled by the error's Display).
//!
//! Invariants:
//! - Exit codes 1-5 are reserved for specific error categories.

use appsettings::{ConfigError, LoadError};

/// Structured exit codes for the `appsettings` binary.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum ExitCode {
    /// Success - configuration merged and printed.
    #[allow(dead_code)]
    Success = 0,

    /// General error - unhandled or generic failure.
    GeneralError = 1,

    /// The config directory could not be determined.
    ConfigDirectory = 2,

    /// A config file exists but could not be read.
    FileRead = 3,

    /// A config file is not a JSON object.
    ParseError = 4,

    /// The merged configuration does not fit the requested shape.
    ///
    /// The binary prints the unprojected overlay, so it never exits with this code;
    /// it keeps the mapping from `LoadError` total.
    #[allow(dead_code)]
    ProjectionError = 5,
}

impl ExitCode {
    /// Convert the exit code to an i32 for use with std::process::exit().
    pub const fn as_i32(self) -> i32 {
        self as u8 as i32
    }
}

impl From<&LoadError> for ExitCode {
    fn from(err: &LoadError) -> Self {
        match err.kind() {
            ConfigError::DirectoryUnavailable { .. } => ExitCode::ConfigDirectory,
            ConfigError::FileRead { .. } => ExitCode::FileRead,
            ConfigError::FileParse { .. } => ExitCode::ParseError,
            ConfigError::Projection { .. } => ExitCode::ProjectionError,
        }
    }
}

/// Extension trait for anyhow::Error to extract exit codes.
pub trait ExitCodeExt {
    /// Returns ExitCode::GeneralError if no LoadError is in the chain.
    fn exit_code(&self) -> ExitCode;
}

impl ExitCodeExt for anyhow::Error {
    fn exit_code(&self) -> ExitCode {
        self.chain()
            .find_map(|cause| cause.downcast_ref::<LoadError>())
            .map(ExitCode::from)
            .unwrap_or(ExitCode::GeneralError)
    }
}
