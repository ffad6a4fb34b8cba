//! Error types for listenboard-core
//!
//! `ClientError` covers individual HTTP interactions with the analytics
//! backend; `SyncError` covers the two-phase load/resync orchestration.

use thiserror::Error;

/// Errors from the analytics backend client
#[derive(Error, Debug)]
pub enum ClientError {
    #[error("Failed to build HTTP client")]
    Build(#[source] reqwest::Error),

    #[error("Request to {endpoint} failed")]
    Transport {
        endpoint: &'static str,
        #[source]
        source: reqwest::Error,
    },

    #[error("{endpoint} returned HTTP {status}")]
    Status {
        endpoint: &'static str,
        status: reqwest::StatusCode,
    },

    #[error("Malformed payload from {endpoint}")]
    Decode {
        endpoint: &'static str,
        #[source]
        source: reqwest::Error,
    },
}

/// Errors from the sync orchestration
#[derive(Error, Debug)]
pub enum SyncError {
    /// Phase 1 failed: the backend refused or failed the refresh request.
    /// Phase 2 is never attempted in this case.
    #[error("Backend refresh failed")]
    TriggerFailed(#[source] ClientError),

    /// Phase 2 failed: at least one of the four analytics reads failed.
    /// The previous snapshot, if any, is left untouched.
    #[error("Analytics fetch failed")]
    FetchFailed(#[source] ClientError),

    /// A sync was already in flight; this request was rejected, not queued.
    #[error("A sync is already in progress")]
    AlreadySyncing,

    /// No user identity was resolved at startup; nothing can be fetched.
    #[error("No user identity available")]
    MissingIdentity,
}

impl SyncError {
    /// User-facing one-liner including the underlying cause
    pub fn display_chain(&self) -> String {
        use std::error::Error as _;

        let mut message = self.to_string();
        let mut source = self.source();
        while let Some(err) = source {
            message.push_str(": ");
            message.push_str(&err.to_string());
            source = err.source();
        }
        message
    }
}
