use bytes::Bytes;
use std::collections::BTreeMap;

use super::error::BencodeError;
use super::value::Value;

const MAX_DEPTH: usize = 64;

/// Decodes a complete bencode buffer.
///
/// The buffer must hold exactly one value; trailing bytes are rejected with
/// [`BencodeError::TrailingData`].
pub fn decode(data: &[u8]) -> Result<Value, BencodeError> {
    let (value, end) = decode_at(data, 0)?;
    if end != data.len() {
        return Err(BencodeError::TrailingData);
    }
    Ok(value)
}

/// Decodes one value starting at `pos`.
///
/// Returns the value together with the offset of the first byte past it, so
/// callers can pull consecutive values out of a longer buffer. On error no
/// partial value is produced and no offset is reported.
pub fn decode_at(data: &[u8], pos: usize) -> Result<(Value, usize), BencodeError> {
    decode_value(data, pos, 0)
}

fn decode_value(data: &[u8], pos: usize, depth: usize) -> Result<(Value, usize), BencodeError> {
    if depth > MAX_DEPTH {
        return Err(BencodeError::NestingTooDeep);
    }

    match data.get(pos) {
        None => Err(BencodeError::UnexpectedEof),
        Some(b'i') => decode_integer(data, pos),
        Some(b'l') => decode_list(data, pos, depth),
        Some(b'd') => decode_dict(data, pos, depth),
        Some(b'0'..=b'9') => decode_bytes(data, pos),
        Some(&c) => Err(BencodeError::UnexpectedChar(c as char)),
    }
}

fn decode_integer(data: &[u8], pos: usize) -> Result<(Value, usize), BencodeError> {
    let start = pos + 1;
    let end = find_byte(data, start, b'e')?;

    let digits = std::str::from_utf8(&data[start..end])
        .map_err(|_| BencodeError::InvalidInteger("non-ascii digits".into()))?;

    if digits.is_empty() || digits == "-" {
        return Err(BencodeError::InvalidInteger("no digits".into()));
    }

    // Canonical form only: no "-0", no leading zeros.
    if digits.starts_with("-0") || (digits.len() > 1 && digits.starts_with('0')) {
        return Err(BencodeError::InvalidInteger(digits.into()));
    }

    let value: i64 = digits
        .parse()
        .map_err(|_| BencodeError::InvalidInteger(digits.into()))?;

    Ok((Value::Integer(value), end + 1))
}

fn decode_bytes(data: &[u8], pos: usize) -> Result<(Value, usize), BencodeError> {
    let colon = find_byte(data, pos, b':')?;

    let len: usize = std::str::from_utf8(&data[pos..colon])
        .ok()
        .and_then(|s| s.parse().ok())
        .ok_or(BencodeError::InvalidStringLength)?;

    let start = colon + 1;
    let end = start
        .checked_add(len)
        .filter(|&end| end <= data.len())
        .ok_or(BencodeError::UnexpectedEof)?;

    let bytes = Bytes::copy_from_slice(&data[start..end]);
    Ok((Value::Bytes(bytes), end))
}

fn decode_list(data: &[u8], pos: usize, depth: usize) -> Result<(Value, usize), BencodeError> {
    let mut pos = pos + 1;
    let mut items = Vec::new();

    loop {
        match data.get(pos) {
            None => return Err(BencodeError::UnexpectedEof),
            Some(b'e') => return Ok((Value::List(items), pos + 1)),
            Some(_) => {
                let (item, next) = decode_value(data, pos, depth + 1)?;
                items.push(item);
                pos = next;
            }
        }
    }
}

fn decode_dict(data: &[u8], pos: usize, depth: usize) -> Result<(Value, usize), BencodeError> {
    let mut pos = pos + 1;
    let mut entries = BTreeMap::new();

    loop {
        match data.get(pos) {
            None => return Err(BencodeError::UnexpectedEof),
            Some(b'e') => return Ok((Value::Dict(entries), pos + 1)),
            Some(_) => {
                let (key, next) = decode_value(data, pos, depth + 1)?;
                let key = match key {
                    Value::Bytes(b) => b,
                    _ => return Err(BencodeError::InvalidDictKey),
                };

                let (value, next) = decode_value(data, next, depth + 1)?;
                entries.insert(key, value);
                pos = next;
            }
        }
    }
}

fn find_byte(data: &[u8], from: usize, byte: u8) -> Result<usize, BencodeError> {
    data[from..]
        .iter()
        .position(|&b| b == byte)
        .map(|i| from + i)
        .ok_or(BencodeError::UnexpectedEof)
}
