use std::time::Duration;

use reqwest::Client;
use tracing::debug;

use super::error::TrackerError;
use super::response::{parse_announce_response, AnnounceResponse};

const HTTP_TIMEOUT: Duration = Duration::from_secs(30);

/// Parameters for one announce.
#[derive(Debug, Clone)]
pub struct AnnounceRequest {
    pub info_hash: [u8; 20],
    pub peer_id: [u8; 20],
    pub port: u16,
    pub uploaded: u64,
    pub downloaded: u64,
    pub left: u64,
}

/// An HTTP(S) announce client for a single tracker URL.
pub struct HttpTracker {
    client: Client,
    url: String,
}

impl HttpTracker {
    pub fn new(url: &str) -> Result<Self, TrackerError> {
        if !url.starts_with("http://") && !url.starts_with("https://") {
            return Err(TrackerError::InvalidUrl(url.to_string()));
        }

        let client = Client::builder()
            .timeout(HTTP_TIMEOUT)
            .build()
            .map_err(TrackerError::Http)?;

        Ok(Self {
            client,
            url: url.to_string(),
        })
    }

    /// Performs one announce round trip.
    ///
    /// The compact peer format is requested unconditionally. Transient
    /// failures surface as [`TrackerError::Http`]; whether to retry is the
    /// caller's decision, the client itself never does.
    pub async fn announce(&self, req: &AnnounceRequest) -> Result<AnnounceResponse, TrackerError> {
        // Built by hand: info_hash and peer_id are raw bytes, and a text
        // query encoder would mangle them. Announce URLs may already carry
        // a query (passkey trackers), so pick the separator accordingly.
        let separator = if self.url.contains('?') { '&' } else { '?' };
        let url = format!(
            "{}{}info_hash={}&peer_id={}&port={}&uploaded={}&downloaded={}&left={}&compact=1",
            self.url,
            separator,
            percent_encode(&req.info_hash),
            percent_encode(&req.peer_id),
            req.port,
            req.uploaded,
            req.downloaded,
            req.left,
        );

        debug!(tracker = %self.url, left = req.left, "announcing");

        let response = self.client.get(&url).send().await?;
        let status = response.status();
        if status.as_u16() >= 300 {
            return Err(TrackerError::BadStatus(status));
        }

        let body = response.bytes().await?;
        let parsed = parse_announce_response(&body)?;
        debug!(peers = parsed.peers.len(), interval = parsed.interval, "announce ok");
        Ok(parsed)
    }

    pub fn url(&self) -> &str {
        &self.url
    }
}

/// Percent-encodes raw bytes for a query string.
///
/// Every byte outside the RFC 3986 unreserved set is escaped; nothing here
/// assumes the input is text.
pub(super) fn percent_encode(bytes: &[u8]) -> String {
    let mut out = String::with_capacity(bytes.len() * 3);
    for &b in bytes {
        if b.is_ascii_alphanumeric() || matches!(b, b'-' | b'_' | b'.' | b'~') {
            out.push(b as char);
        } else {
            out.push_str(&format!("%{:02X}", b));
        }
    }
    out
}
