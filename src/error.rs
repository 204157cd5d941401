use thiserror::Error;

/// Errors surfaced to callers. Remote-side problems are never reported
/// through this type; they come back inside the normalized result with
/// `ReturnCode != 0`.
#[derive(Debug, Error)]
pub enum Error {
    #[error("invalid configuration: {0}")]
    Config(String),

    #[error("result is missing expected field: {0}")]
    MissingField(&'static str),
}

/// Network/protocol-level failures inside the transport boundary.
/// The facade folds these into a `ReturnCode = -1` result instead of
/// propagating them.
#[derive(Debug, Error)]
pub enum TransportError {
    #[error("http request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("remote returned HTTP {0}")]
    Status(reqwest::StatusCode),

    #[error("malformed reply: {0}")]
    Malformed(String),
}
