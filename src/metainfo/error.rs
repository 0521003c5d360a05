use thiserror::Error;

use crate::bencode::BencodeError;

/// Errors from parsing a torrent file or computing its info hash.
#[derive(Debug, Error)]
pub enum MetainfoError {
    /// The file is not valid bencode.
    #[error("bencode error: {0}")]
    Bencode(#[from] BencodeError),

    /// A required field is absent.
    #[error("missing field: {0}")]
    MissingField(&'static str),

    /// A field is present but has the wrong type or an out-of-range value.
    #[error("invalid field: {0}")]
    InvalidField(&'static str),

    /// The `pieces` byte string does not split into 20-byte hashes.
    #[error("pieces length {0} is not a multiple of 20")]
    InvalidPiecesLength(usize),

    /// Re-encoding the info dictionary did not reproduce its source value.
    /// This is an encoder bug, not a malformed torrent.
    #[error("re-encoded info dictionary does not match its source")]
    EncodingMismatch,

    /// An info hash must be exactly 20 bytes.
    #[error("invalid info hash length")]
    InvalidInfoHashLength,
}
