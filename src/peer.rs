//! Peer identity and the 68-byte handshake ([BEP-3]).
//!
//! The handshake is the first exchange on a peer connection: a fixed
//! message carrying the protocol name, the torrent's info hash, and each
//! side's peer id. [`handshake`] performs the full round trip and verifies
//! the peer is serving the same torrent; everything after it (choking,
//! piece requests) is out of scope for this crate.
//!
//! [BEP-3]: http://bittorrent.org/beps/bep_0003.html

mod error;
mod peer_id;
mod wire;

pub use error::PeerError;
pub use peer_id::PeerId;
pub use wire::{handshake, Handshake, HANDSHAKE_LEN, PROTOCOL};

#[cfg(test)]
mod tests;
