//! Error types
//!
//! Per-record errors (`InvalidArnFormat`, `MalformedResourcePath`) are handled
//! according to the run's [`RecordPolicy`](crate::resource::RecordPolicy);
//! every other variant ends the run.

use thiserror::Error;

/// Exit status for a successful run
pub const EXIT_OK: u8 = 0;
/// Exit status for any fatal runtime error
pub const EXIT_FAILURE: u8 = 1;
/// Exit status for invalid command-line usage (matches clap)
pub const EXIT_USAGE: u8 = 2;
/// Exit status after Ctrl-C
pub const EXIT_CANCELLED: u8 = 130;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ScanError {
    /// ARN does not have the shape `arn:aws:<service>:<region>:<account>:<resource>`
    #[error("Invalid ARN format ({reason}): {arn}")]
    InvalidArnFormat { arn: String, reason: &'static str },

    /// A service-specific strategy expected `<product>/<identifier>`
    #[error("Malformed {service} resource path, expected '<product>/<id>': {short_arn}")]
    MalformedResourcePath { service: String, short_arn: String },

    /// The listing call failed (network, auth, throttling, ...)
    #[error("Tagging API request for page {page} failed: {message}")]
    Api {
        page: usize,
        message: String,
        hint: Option<String>,
    },

    /// Provider handed back the token it was just given
    #[error("Pagination stalled on page {page}: token '{token}' was returned twice")]
    PaginationStalled { page: usize, token: String },

    #[error("Cancelled before page {page} completed")]
    Cancelled { page: usize },

    #[error("{0}")]
    Usage(String),
}

impl ScanError {
    /// True for errors that concern a single resource rather than the run
    pub fn is_record_error(&self) -> bool {
        matches!(
            self,
            ScanError::InvalidArnFormat { .. } | ScanError::MalformedResourcePath { .. }
        )
    }

    /// Suggestion to show the user, if one is known
    pub fn hint(&self) -> Option<&str> {
        match self {
            ScanError::Api { hint, .. } => hint.as_deref(),
            ScanError::Usage(_) => Some("Usage: tagscan <REGION>, e.g. tagscan us-east-1"),
            _ => None,
        }
    }

    pub fn exit_code(&self) -> u8 {
        match self {
            ScanError::Cancelled { .. } => EXIT_CANCELLED,
            ScanError::Usage(_) => EXIT_USAGE,
            _ => EXIT_FAILURE,
        }
    }
}
