//! HTTP tracker announce ([BEP-3], [BEP-23]).
//!
//! One announce is one HTTP GET: the torrent's info hash and our peer id go
//! out percent-encoded as raw bytes, and the tracker answers with a
//! bencoded dictionary holding a re-announce interval and a compact peer
//! blob (6 bytes per peer). Only the compact form is accepted; the legacy
//! list-of-dictionaries form is rejected as
//! [`TrackerError::UnsupportedPeerFormat`].
//!
//! [BEP-3]: http://bittorrent.org/beps/bep_0003.html
//! [BEP-23]: http://bittorrent.org/beps/bep_0023.html

mod error;
mod http;
mod response;

pub use error::TrackerError;
pub use http::{AnnounceRequest, HttpTracker};
pub use response::{parse_compact_peers, AnnounceResponse};
