use std::net::{IpAddr, Ipv4Addr, SocketAddr};

use super::error::TrackerError;
use crate::bencode::{decode, Value};

/// A tracker's answer to one announce. Constructed fresh per call and never
/// persisted.
#[derive(Debug, Clone)]
pub struct AnnounceResponse {
    /// Seconds the tracker asks us to wait before re-announcing. Advisory.
    pub interval: u32,
    /// Peers in the order the tracker listed them.
    pub peers: Vec<SocketAddr>,
}

pub(super) fn parse_announce_response(body: &[u8]) -> Result<AnnounceResponse, TrackerError> {
    let value =
        decode(body).map_err(|_| TrackerError::InvalidResponse("body is not bencode"))?;
    let dict = value
        .as_dict()
        .ok_or(TrackerError::InvalidResponse("expected a dictionary"))?;

    if let Some(reason) = dict
        .get(b"failure reason".as_slice())
        .and_then(|v| v.as_str())
    {
        return Err(TrackerError::Failure(reason.to_string()));
    }

    let interval = dict
        .get(b"interval".as_slice())
        .and_then(|v| v.as_integer())
        .ok_or(TrackerError::InvalidResponse("missing interval"))?;
    let interval = u32::try_from(interval)
        .map_err(|_| TrackerError::InvalidResponse("interval out of range"))?;

    let peers = match dict.get(b"peers".as_slice()) {
        Some(Value::Bytes(blob)) => parse_compact_peers(blob)?,
        Some(Value::List(_)) => return Err(TrackerError::UnsupportedPeerFormat),
        Some(_) => return Err(TrackerError::InvalidResponse("peers has the wrong type")),
        None => return Err(TrackerError::InvalidResponse("missing peers")),
    };

    Ok(AnnounceResponse { interval, peers })
}

/// Decodes a compact peer blob: 6 bytes per peer, 4 IPv4 octets in network
/// order followed by a big-endian port.
///
/// Output order matches blob order. A length that is not a multiple of 6 is
/// rejected outright rather than truncated.
pub fn parse_compact_peers(blob: &[u8]) -> Result<Vec<SocketAddr>, TrackerError> {
    if blob.len() % 6 != 0 {
        return Err(TrackerError::InvalidPeerBlob(blob.len()));
    }

    Ok(blob
        .chunks_exact(6)
        .map(|entry| {
            let ip = Ipv4Addr::new(entry[0], entry[1], entry[2], entry[3]);
            let port = u16::from_be_bytes([entry[4], entry[5]]);
            SocketAddr::new(IpAddr::V4(ip), port)
        })
        .collect())
}
