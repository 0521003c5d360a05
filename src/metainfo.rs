//! Torrent metainfo handling ([BEP-3]).
//!
//! A `.torrent` file is a bencoded dictionary carrying the tracker URL and
//! an `info` dictionary that describes the content: name, total length,
//! piece length, and the SHA-1 hash of every piece. [`Torrent::from_bytes`]
//! parses the file into a typed view and computes the info hash, the SHA-1
//! digest of the canonically re-encoded `info` dictionary that identifies
//! the torrent everywhere else in the protocol.
//!
//! ```no_run
//! use torv::metainfo::Torrent;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let data = std::fs::read("example.torrent")?;
//! let torrent = Torrent::from_bytes(&data)?;
//!
//! println!("Tracker: {}", torrent.announce);
//! println!("Info hash: {}", torrent.info_hash);
//! println!("{} pieces of {} bytes", torrent.info.piece_count(), torrent.info.piece_length);
//! # Ok(())
//! # }
//! ```
//!
//! [BEP-3]: http://bittorrent.org/beps/bep_0003.html

mod error;
mod info_hash;
mod torrent;

pub use error::MetainfoError;
pub use info_hash::InfoHash;
pub use torrent::{Info, Torrent};
