use thiserror::Error;

#[derive(Debug, Error)]
pub enum PeerError {
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("timed out")]
    Timeout,

    #[error("connection closed before handshake completed")]
    ConnectionClosed,

    #[error("malformed handshake")]
    InvalidHandshake,

    #[error("peer answered with a different info hash")]
    InfoHashMismatch,
}
