//! Error taxonomies for the relay, contact, and startup paths.

use thiserror::Error;

/// Errors from the chat relay path.
#[derive(Debug, Error)]
pub enum RelayError {
    /// The caller supplied malformed or incomplete input. Rejected before
    /// any outbound call is made.
    #[error("invalid request: {0}")]
    InvalidRequest(String),

    /// The upstream provider answered with a non-success status. The body
    /// is surfaced verbatim for diagnosability; no retry is attempted.
    #[error("upstream error: status {status}")]
    Upstream { status: u16, body: String },

    /// Transport failure mid-stream, after response headers were committed.
    /// Can only truncate the body, never change the HTTP status.
    #[error("stream error: {0}")]
    Stream(String),

    /// Transport failure before an upstream status was received.
    #[error("transport error: {0}")]
    Transport(String),
}

/// Errors from the contact relay path.
#[derive(Debug, Error)]
pub enum ContactError {
    #[error("invalid request: {0}")]
    InvalidRequest(String),

    #[error("failed to send email: {0}")]
    Delivery(String),
}

/// Fatal configuration errors detected at startup.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("missing GROQ_API_KEY in environment")]
    MissingApiKey,

    #[error("invalid value for {name}: '{value}'")]
    InvalidValue { name: &'static str, value: String },
}
