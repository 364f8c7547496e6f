//! Error types for a backup run.

use reqwest::StatusCode;

/// Everything that can abort a backup run.
///
/// Every variant is fatal for the current run. Nothing is retried; the
/// orchestrator stops at the first error and the process log is the only
/// place the failure shows up.
#[derive(Debug, thiserror::Error)]
pub enum SyncError {
    /// A required setting is missing or empty. Raised before any request.
    #[error("configuration error: {0}")]
    Configuration(String),

    /// The refresh token could not be exchanged for an access token.
    #[error("authentication failed: {0}")]
    Authentication(String),

    /// An expected playlist, user or resource does not exist.
    #[error("not found: {0}")]
    NotFound(String),

    /// Network or HTTP failure.
    #[error("transport error: {0}")]
    Transport(#[from] reqwest::Error),
}

impl SyncError {
    /// Maps a failed HTTP response to the matching error.
    ///
    /// `404 Not Found` becomes [`SyncError::NotFound`] naming `what`, every
    /// other status stays a transport error.
    pub fn from_status(err: reqwest::Error, what: &str) -> Self {
        match err.status() {
            Some(StatusCode::NOT_FOUND) => SyncError::NotFound(what.to_string()),
            _ => SyncError::Transport(err),
        }
    }
}
