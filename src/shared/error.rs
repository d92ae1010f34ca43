use std::fmt;
use thiserror::Error;

/// Exit codes for the CLI application.
///
/// These codes let scripts tell an unknown identifier apart from
/// a network or decoding failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(i32)]
pub enum ExitCode {
    /// The record was found and rendered
    Success = 0,
    /// The database answered, but holds no record for the identifier
    NotFound = 1,
    /// Invalid command-line arguments (clap parsing errors)
    InvalidArguments = 2,
    /// Application error (network error, malformed response, stdout failure, etc.)
    ApplicationError = 3,
}

impl ExitCode {
    /// Convert to i32 for use with std::process::exit
    pub fn as_i32(self) -> i32 {
        self as i32
    }

    /// Classifies a failed run.
    ///
    /// Anything that is not a `LookupError::NotFound` is an application error;
    /// argument errors never reach here because clap exits on its own.
    pub fn from_error(err: &anyhow::Error) -> Self {
        match err.downcast_ref::<LookupError>() {
            Some(LookupError::NotFound { .. }) => ExitCode::NotFound,
            _ => ExitCode::ApplicationError,
        }
    }
}

impl fmt::Display for ExitCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExitCode::Success => write!(f, "Success (0)"),
            ExitCode::NotFound => write!(f, "Not Found (1)"),
            ExitCode::InvalidArguments => write!(f, "Invalid Arguments (2)"),
            ExitCode::ApplicationError => write!(f, "Application Error (3)"),
        }
    }
}

/// Failures of a single CVE lookup.
///
/// Uses thiserror to derive Display and Error; the underlying cause stays
/// reachable through `source()` so `main` can print the whole chain.
#[derive(Debug, Error)]
pub enum LookupError {
    #[error("Failed to fetch CVE data: {url}\n\n💡 Hint: Please check your internet connection and that the NVD API is reachable")]
    Transport {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("Failed to decode the NVD response\n\n💡 Hint: Run again with --verbose to see the raw response")]
    Decode {
        #[source]
        source: serde_json::Error,
    },

    #[error("No CVE data found for the given ID: {id}\n\n💡 Hint: Please verify the identifier (e.g. CVE-2021-34527)")]
    NotFound { id: String },
}
