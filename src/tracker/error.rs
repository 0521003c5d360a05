use thiserror::Error;

#[derive(Debug, Error)]
pub enum TrackerError {
    /// Transport-level failure: DNS, connect, timeout, TLS.
    #[error("http error: {0}")]
    Http(#[from] reqwest::Error),

    /// The tracker answered with a non-success HTTP status.
    #[error("tracker returned status {0}")]
    BadStatus(reqwest::StatusCode),

    /// The tracker answered cleanly but reported a failure reason.
    #[error("tracker reported failure: {0}")]
    Failure(String),

    /// The response body violates the announce contract.
    #[error("invalid tracker response: {0}")]
    InvalidResponse(&'static str),

    /// The tracker sent the legacy list-of-dictionaries peer format.
    #[error("non-compact peer list is not supported")]
    UnsupportedPeerFormat,

    /// The compact peer blob does not split into 6-byte entries.
    #[error("compact peer blob length {0} is not a multiple of 6")]
    InvalidPeerBlob(usize),

    #[error("invalid tracker url: {0}")]
    InvalidUrl(String),
}
