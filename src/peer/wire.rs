use std::net::SocketAddr;
use std::time::Duration;

use bytes::{BufMut, Bytes, BytesMut};
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpStream;
use tokio::time::timeout;
use tracing::debug;

use super::error::PeerError;

pub const PROTOCOL: &[u8] = b"BitTorrent protocol";
pub const HANDSHAKE_LEN: usize = 68;

const CONNECT_TIMEOUT: Duration = Duration::from_secs(10);
const EXCHANGE_TIMEOUT: Duration = Duration::from_secs(30);

/// The fixed 68-byte handshake message.
///
/// Layout: one length byte (19), the literal protocol name, 8 reserved
/// bytes (all zero here, no extensions advertised), the 20-byte info hash,
/// and the sender's 20-byte peer id.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Handshake {
    pub info_hash: [u8; 20],
    pub peer_id: [u8; 20],
}

impl Handshake {
    pub fn new(info_hash: [u8; 20], peer_id: [u8; 20]) -> Self {
        Self { info_hash, peer_id }
    }

    pub fn encode(&self) -> Bytes {
        let mut buf = BytesMut::with_capacity(HANDSHAKE_LEN);
        buf.put_u8(PROTOCOL.len() as u8);
        buf.put_slice(PROTOCOL);
        buf.put_slice(&[0u8; 8]);
        buf.put_slice(&self.info_hash);
        buf.put_slice(&self.peer_id);
        buf.freeze()
    }

    pub fn decode(data: &[u8]) -> Result<Self, PeerError> {
        if data.len() < HANDSHAKE_LEN {
            return Err(PeerError::InvalidHandshake);
        }

        if data[0] as usize != PROTOCOL.len() || &data[1..20] != PROTOCOL {
            return Err(PeerError::InvalidHandshake);
        }

        let mut info_hash = [0u8; 20];
        info_hash.copy_from_slice(&data[28..48]);

        let mut peer_id = [0u8; 20];
        peer_id.copy_from_slice(&data[48..68]);

        Ok(Self { info_hash, peer_id })
    }
}

/// Performs the handshake exchange with one peer.
///
/// Connects, sends our 68 bytes, reads the peer's 68 bytes, and checks that
/// the peer is serving the same torrent; a different info hash in the reply
/// is [`PeerError::InfoHashMismatch`]. Both directions run under a bounded
/// timeout, and the connection is dropped on every exit path.
pub async fn handshake(
    addr: SocketAddr,
    info_hash: [u8; 20],
    peer_id: [u8; 20],
) -> Result<Handshake, PeerError> {
    let mut stream = timeout(CONNECT_TIMEOUT, TcpStream::connect(addr))
        .await
        .map_err(|_| PeerError::Timeout)??;

    let ours = Handshake::new(info_hash, peer_id);
    timeout(EXCHANGE_TIMEOUT, stream.write_all(&ours.encode()))
        .await
        .map_err(|_| PeerError::Timeout)??;

    let mut reply = [0u8; HANDSHAKE_LEN];
    timeout(EXCHANGE_TIMEOUT, stream.read_exact(&mut reply))
        .await
        .map_err(|_| PeerError::Timeout)?
        .map_err(|e| match e.kind() {
            std::io::ErrorKind::UnexpectedEof => PeerError::ConnectionClosed,
            _ => PeerError::Io(e),
        })?;

    let theirs = Handshake::decode(&reply)?;
    if theirs.info_hash != info_hash {
        return Err(PeerError::InfoHashMismatch);
    }

    debug!(peer = %addr, "handshake complete");
    Ok(theirs)
}
