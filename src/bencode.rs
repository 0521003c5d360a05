//! Bencode encoding and decoding ([BEP-3]).
//!
//! Bencode is the serialization format BitTorrent uses for `.torrent` files
//! and tracker responses. It has four data types:
//!
//! | Type | Format | Example |
//! |------|--------|---------|
//! | Integer | `i<number>e` | `i42e` → 42 |
//! | Byte string | `<length>:<data>` | `4:spam` → "spam" |
//! | List | `l<items>e` | `l4:spami42ee` → ["spam", 42] |
//! | Dictionary | `d<key><value>...e` | `d3:foo3:bare` → {"foo": "bar"} |
//!
//! Decoding threads an explicit offset through the input rather than a
//! shared cursor, so a malformed buffer never yields partial state:
//!
//! ```
//! use torv::bencode::{decode, decode_at, Value};
//!
//! let value = decode(b"l4:spami42ee").unwrap();
//! assert_eq!(value.as_list().map(|l| l.len()), Some(2));
//!
//! // Decoding one value out of a longer buffer returns the new offset.
//! let (value, next) = decode_at(b"4:spami42ee", 0).unwrap();
//! assert_eq!(value.as_str(), Some("spam"));
//! assert_eq!(next, 6);
//! ```
//!
//! Encoding is canonical: dictionary keys are emitted in ascending byte
//! order, which is what makes info hashes reproducible across clients.
//! `decode(encode(v))` returns a value equal to `v` for every [`Value`].
//!
//! ```
//! use torv::bencode::{encode, Value};
//! use bytes::Bytes;
//! use std::collections::BTreeMap;
//!
//! let mut dict = BTreeMap::new();
//! dict.insert(Bytes::from_static(b"b"), Value::Integer(2));
//! dict.insert(Bytes::from_static(b"a"), Value::Integer(1));
//! assert_eq!(encode(&Value::Dict(dict)), b"d1:ai1e1:bi2ee");
//! ```
//!
//! [BEP-3]: http://bittorrent.org/beps/bep_0003.html

mod decode;
mod encode;
mod error;
mod value;

pub use decode::{decode, decode_at};
pub use encode::encode;
pub use error::BencodeError;
pub use value::Value;

#[cfg(test)]
mod tests;
