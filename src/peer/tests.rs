use super::*;

#[test]
fn test_handshake_layout() {
    let info_hash = [0xAB; 20];
    let peer_id = [0xCD; 20];
    let encoded = Handshake::new(info_hash, peer_id).encode();

    assert_eq!(encoded.len(), HANDSHAKE_LEN);
    assert_eq!(encoded[0], 19);
    assert_eq!(&encoded[1..20], PROTOCOL);
    assert_eq!(&encoded[20..28], &[0u8; 8]);
    assert_eq!(&encoded[28..48], &info_hash);
    assert_eq!(&encoded[48..68], &peer_id);
}

#[test]
fn test_handshake_roundtrip() {
    let original = Handshake::new([1; 20], [2; 20]);
    let decoded = Handshake::decode(&original.encode()).unwrap();
    assert_eq!(decoded, original);
}

#[test]
fn test_handshake_decode_short_buffer() {
    assert!(matches!(
        Handshake::decode(&[19; 10]),
        Err(PeerError::InvalidHandshake)
    ));
}

#[test]
fn test_handshake_decode_wrong_protocol() {
    let mut data = Handshake::new([1; 20], [2; 20]).encode().to_vec();
    data[5] ^= 0xFF;
    assert!(matches!(
        Handshake::decode(&data),
        Err(PeerError::InvalidHandshake)
    ));
}

#[test]
fn test_peer_id_generate() {
    let id = PeerId::generate();
    assert_eq!(id.as_bytes().len(), 20);
    assert!(id.as_bytes().starts_with(b"-TV0001-"));

    // Two ids should practically never collide.
    assert_ne!(PeerId::generate().as_bytes(), id.as_bytes());
}

#[test]
fn test_peer_id_from_bytes() {
    assert!(PeerId::from_bytes(&[0u8; 20]).is_some());
    assert!(PeerId::from_bytes(&[0u8; 19]).is_none());
    assert!(PeerId::from_bytes(&[0u8; 21]).is_none());
}
