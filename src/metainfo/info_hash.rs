use std::fmt;

use bytes::Bytes;
use sha1::{Digest, Sha1};

use super::error::MetainfoError;
use crate::bencode::{decode, encode, Value};

/// The SHA-1 digest of the canonically bencoded `info` dictionary.
///
/// This is the torrent's identity: trackers and peers only agree on it
/// because every client encodes the dictionary the same way (keys in
/// ascending byte order, canonical integers).
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct InfoHash([u8; 20]);

impl InfoHash {
    /// Computes the info hash of a decoded `info` value.
    ///
    /// The value is re-encoded canonically, and the encoding is decoded
    /// again and compared structurally with the input before hashing. A
    /// mismatch means the encoder produced bytes no other client would
    /// agree on and is reported as [`MetainfoError::EncodingMismatch`];
    /// it can never be caused by user input.
    ///
    /// Returns the digest together with the encoded bytes so callers can
    /// keep the raw form for the peer handshake path.
    pub fn of_info(info: &Value) -> Result<(Self, Bytes), MetainfoError> {
        let encoded = encode(info);

        let reparsed = decode(&encoded).map_err(|_| MetainfoError::EncodingMismatch)?;
        if reparsed != *info {
            return Err(MetainfoError::EncodingMismatch);
        }

        let mut hasher = Sha1::new();
        hasher.update(&encoded);
        let digest: [u8; 20] = hasher.finalize().into();

        Ok((Self(digest), Bytes::from(encoded)))
    }

    /// Wraps a 20-byte digest.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, MetainfoError> {
        let digest: [u8; 20] = bytes
            .try_into()
            .map_err(|_| MetainfoError::InvalidInfoHashLength)?;
        Ok(Self(digest))
    }

    /// Parses a 40-character hex string.
    pub fn from_hex(s: &str) -> Result<Self, MetainfoError> {
        let bytes = hex::decode(s).map_err(|_| MetainfoError::InvalidInfoHashLength)?;
        Self::from_bytes(&bytes)
    }

    pub fn as_bytes(&self) -> &[u8; 20] {
        &self.0
    }

    pub fn to_hex(&self) -> String {
        hex::encode(self.0)
    }
}

impl fmt::Debug for InfoHash {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "InfoHash({})", self.to_hex())
    }
}

impl fmt::Display for InfoHash {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}
