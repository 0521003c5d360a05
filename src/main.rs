use std::env;
use std::net::SocketAddr;
use std::process::ExitCode;

use anyhow::Context;

use torv::bencode::{self, Value};
use torv::metainfo::Torrent;
use torv::peer::{self, PeerId};
use torv::tracker::{AnnounceRequest, HttpTracker};

const DEFAULT_PORT: u16 = 6881;

#[tokio::main]
async fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let args: Vec<String> = env::args().collect();
    let result = match args.get(1).map(String::as_str) {
        Some("decode") if args.len() == 3 => cmd_decode(&args[2]),
        Some("info") if args.len() == 3 => cmd_info(&args[2]),
        Some("peers") if args.len() == 3 => cmd_peers(&args[2]).await,
        Some("handshake") if args.len() == 4 => cmd_handshake(&args[2], &args[3]).await,
        _ => {
            eprintln!("usage: torv decode <bencoded-string>");
            eprintln!("       torv info <torrent-file>");
            eprintln!("       torv peers <torrent-file>");
            eprintln!("       torv handshake <torrent-file> <ip:port>");
            return ExitCode::from(2);
        }
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error: {err:#}");
            ExitCode::from(exit_code(&err))
        }
    }
}

/// Maps library error kinds to stable sysexits-style codes, so scripts can
/// tell malformed input apart from an unreachable tracker.
fn exit_code(err: &anyhow::Error) -> u8 {
    for cause in err.chain() {
        if cause.downcast_ref::<torv::BencodeError>().is_some()
            || cause.downcast_ref::<torv::MetainfoError>().is_some()
        {
            return 65; // EX_DATAERR
        }
        if cause.downcast_ref::<torv::TrackerError>().is_some()
            || cause.downcast_ref::<torv::PeerError>().is_some()
        {
            return 69; // EX_UNAVAILABLE
        }
        if cause.downcast_ref::<std::io::Error>().is_some() {
            return 66; // EX_NOINPUT
        }
    }
    1
}

fn cmd_decode(input: &str) -> anyhow::Result<()> {
    let value = bencode::decode(input.as_bytes())?;
    println!("{}", to_json(&value));
    Ok(())
}

fn cmd_info(path: &str) -> anyhow::Result<()> {
    let torrent = read_torrent(path)?;

    println!("Tracker URL: {}", torrent.announce);
    println!("Length: {}", torrent.info.length);
    println!("Info Hash: {}", torrent.info_hash);
    println!("Piece Length: {}", torrent.info.piece_length);
    println!("Piece Hashes:");
    for piece in &torrent.info.pieces {
        println!("{}", hex::encode(piece));
    }
    Ok(())
}

async fn cmd_peers(path: &str) -> anyhow::Result<()> {
    let torrent = read_torrent(path)?;
    let tracker = HttpTracker::new(&torrent.announce)?;

    let response = tracker
        .announce(&AnnounceRequest {
            info_hash: *torrent.info_hash.as_bytes(),
            peer_id: *PeerId::generate().as_bytes(),
            port: DEFAULT_PORT,
            uploaded: 0,
            downloaded: 0,
            left: torrent.info.length,
        })
        .await?;

    for addr in &response.peers {
        println!("{addr}");
    }
    Ok(())
}

async fn cmd_handshake(path: &str, addr: &str) -> anyhow::Result<()> {
    let torrent = read_torrent(path)?;
    let addr: SocketAddr = addr.parse().context("peer address must be ip:port")?;

    let reply = peer::handshake(
        addr,
        *torrent.info_hash.as_bytes(),
        *PeerId::generate().as_bytes(),
    )
    .await?;

    println!("Peer ID: {}", hex::encode(reply.peer_id));
    Ok(())
}

fn read_torrent(path: &str) -> anyhow::Result<Torrent> {
    let data = std::fs::read(path).with_context(|| format!("reading {path}"))?;
    Ok(Torrent::from_bytes(&data)?)
}

/// Renders a bencode value as JSON for display.
///
/// Byte strings that are not valid UTF-8 are rendered lossily; this is a
/// display format, not a round-trippable encoding.
fn to_json(value: &Value) -> serde_json::Value {
    match value {
        Value::Integer(i) => serde_json::Value::from(*i),
        Value::Bytes(b) => serde_json::Value::from(String::from_utf8_lossy(b).into_owned()),
        Value::List(items) => serde_json::Value::Array(items.iter().map(to_json).collect()),
        Value::Dict(entries) => serde_json::Value::Object(
            entries
                .iter()
                .map(|(k, v)| (String::from_utf8_lossy(k).into_owned(), to_json(v)))
                .collect(),
        ),
    }
}
