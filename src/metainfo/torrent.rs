use bytes::Bytes;

use super::error::MetainfoError;
use super::info_hash::InfoHash;
use crate::bencode::{decode, Value};

/// A parsed single-file torrent.
///
/// Immutable once constructed. The raw bencoded `info` bytes are kept
/// alongside the typed view because the handshake and extension paths need
/// the exact bytes the hash was computed over.
#[derive(Debug, Clone)]
pub struct Torrent {
    /// Primary tracker URL.
    pub announce: String,
    /// Typed view over the `info` dictionary.
    pub info: Info,
    /// Identity of the torrent content.
    pub info_hash: InfoHash,
    raw_info: Bytes,
}

/// The `info` dictionary of a single-file torrent.
#[derive(Debug, Clone)]
pub struct Info {
    /// Suggested file name.
    pub name: String,
    /// Bytes per piece.
    pub piece_length: u64,
    /// Total content length in bytes.
    pub length: u64,
    /// SHA-1 digest of each piece, in piece order.
    pub pieces: Vec<[u8; 20]>,
}

impl Torrent {
    /// Parses a `.torrent` file from raw bytes.
    ///
    /// # Errors
    ///
    /// [`MetainfoError::Bencode`] if the data is not valid bencode, and
    /// [`MetainfoError::MissingField`] / [`MetainfoError::InvalidField`] /
    /// [`MetainfoError::InvalidPiecesLength`] when the dictionary does not
    /// match the single-file schema.
    pub fn from_bytes(data: &[u8]) -> Result<Self, MetainfoError> {
        let value = decode(data)?;
        let dict = value.as_dict().ok_or(MetainfoError::InvalidField("root"))?;

        let announce = dict
            .get(b"announce".as_slice())
            .ok_or(MetainfoError::MissingField("announce"))?
            .as_str()
            .ok_or(MetainfoError::InvalidField("announce"))?
            .to_string();

        let info_value = dict
            .get(b"info".as_slice())
            .ok_or(MetainfoError::MissingField("info"))?;

        if info_value.as_dict().is_none() {
            return Err(MetainfoError::InvalidField("info"));
        }

        let info = parse_info(info_value)?;
        let (info_hash, raw_info) = InfoHash::of_info(info_value)?;

        Ok(Self {
            announce,
            info,
            info_hash,
            raw_info,
        })
    }

    /// The exact bencoded `info` bytes the info hash was computed over.
    pub fn raw_info(&self) -> &Bytes {
        &self.raw_info
    }
}

impl Info {
    pub fn piece_count(&self) -> usize {
        self.pieces.len()
    }
}

fn parse_info(value: &Value) -> Result<Info, MetainfoError> {
    let dict = value.as_dict().ok_or(MetainfoError::InvalidField("info"))?;

    let name = dict
        .get(b"name".as_slice())
        .and_then(|v| v.as_str())
        .ok_or(MetainfoError::MissingField("name"))?
        .to_string();

    let piece_length = dict
        .get(b"piece length".as_slice())
        .and_then(|v| v.as_integer())
        .ok_or(MetainfoError::MissingField("piece length"))?;
    if piece_length <= 0 {
        return Err(MetainfoError::InvalidField("piece length"));
    }

    let length = dict
        .get(b"length".as_slice())
        .and_then(|v| v.as_integer())
        .ok_or(MetainfoError::MissingField("length"))?;
    if length < 0 {
        return Err(MetainfoError::InvalidField("length"));
    }

    let pieces_bytes = dict
        .get(b"pieces".as_slice())
        .and_then(|v| v.as_bytes())
        .ok_or(MetainfoError::MissingField("pieces"))?;

    if pieces_bytes.len() % 20 != 0 {
        return Err(MetainfoError::InvalidPiecesLength(pieces_bytes.len()));
    }

    let pieces = pieces_bytes
        .chunks_exact(20)
        .map(|chunk| {
            let mut digest = [0u8; 20];
            digest.copy_from_slice(chunk);
            digest
        })
        .collect();

    Ok(Info {
        name,
        piece_length: piece_length as u64,
        length: length as u64,
        pieces,
    })
}
