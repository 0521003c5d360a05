//! torv - client-side BitTorrent building blocks
//!
//! This library implements the pieces of the BitTorrent protocol a client
//! needs before it can exchange any file data:
//!
//! - [`bencode`] - the self-describing binary serialization format used by
//!   `.torrent` files and tracker responses
//! - [`metainfo`] - torrent metadata extraction and info-hash computation
//! - [`tracker`] - the HTTP announce exchange that yields a peer list
//! - [`peer`] - peer identifiers and the 68-byte handshake
//!
//! The peer wire protocol proper (choking, piece requests, disk assembly)
//! is out of scope.

pub mod bencode;
pub mod metainfo;
pub mod peer;
pub mod tracker;

pub use bencode::{decode, decode_at, encode, BencodeError, Value};
pub use metainfo::{Info, InfoHash, MetainfoError, Torrent};
pub use peer::{Handshake, PeerError, PeerId};
pub use tracker::{AnnounceRequest, AnnounceResponse, HttpTracker, TrackerError};
