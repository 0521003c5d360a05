use std::collections::BTreeMap;

use bytes::Bytes;

use super::*;

#[test]
fn test_decode_integer() {
    assert_eq!(decode(b"i42e").unwrap(), Value::Integer(42));
    assert_eq!(decode(b"i-42e").unwrap(), Value::Integer(-42));
    assert_eq!(decode(b"i0e").unwrap(), Value::Integer(0));
}

#[test]
fn test_decode_integer_strict() {
    assert!(matches!(
        decode(b"i-0e"),
        Err(BencodeError::InvalidInteger(_))
    ));
    assert!(matches!(
        decode(b"i03e"),
        Err(BencodeError::InvalidInteger(_))
    ));
    assert!(matches!(decode(b"ie"), Err(BencodeError::InvalidInteger(_))));
    assert!(matches!(decode(b"i-e"), Err(BencodeError::InvalidInteger(_))));
}

#[test]
fn test_decode_bytes() {
    assert_eq!(
        decode(b"4:spam").unwrap(),
        Value::Bytes(Bytes::from_static(b"spam"))
    );
    assert_eq!(decode(b"0:").unwrap(), Value::Bytes(Bytes::from_static(b"")));
}

#[test]
fn test_decode_bytes_truncated() {
    assert!(matches!(decode(b"10:short"), Err(BencodeError::UnexpectedEof)));
    assert!(matches!(decode(b"4spam"), Err(BencodeError::UnexpectedEof)));
}

#[test]
fn test_decode_at_returns_new_offset() {
    let data = b"4:spami42ee";
    let (value, next) = decode_at(data, 0).unwrap();
    assert_eq!(value.as_str(), Some("spam"));
    assert_eq!(next, 6);

    let (value, next) = decode_at(data, next).unwrap();
    assert_eq!(value.as_integer(), Some(42));
    assert_eq!(next, 10);
}

#[test]
fn test_decode_list() {
    let result = decode(b"l4:spami42ee").unwrap();
    match result {
        Value::List(l) => {
            assert_eq!(l.len(), 2);
            assert_eq!(l[0], Value::Bytes(Bytes::from_static(b"spam")));
            assert_eq!(l[1], Value::Integer(42));
        }
        _ => panic!("expected list"),
    }
}

#[test]
fn test_decode_dict() {
    let result = decode(b"d3:cow3:moo4:spam4:eggse").unwrap();
    match result {
        Value::Dict(d) => {
            assert_eq!(d.len(), 2);
            assert_eq!(
                d.get(b"cow".as_slice()),
                Some(&Value::Bytes(Bytes::from_static(b"moo")))
            );
            assert_eq!(
                d.get(b"spam".as_slice()),
                Some(&Value::Bytes(Bytes::from_static(b"eggs")))
            );
        }
        _ => panic!("expected dict"),
    }
}

#[test]
fn test_decode_dict_non_string_key() {
    assert!(matches!(
        decode(b"di1e4:spame"),
        Err(BencodeError::InvalidDictKey)
    ));
}

#[test]
fn test_decode_unrecognized_tag() {
    assert!(matches!(
        decode(b"x:abc"),
        Err(BencodeError::UnexpectedChar('x'))
    ));
}

#[test]
fn test_decode_trailing_data() {
    assert!(matches!(
        decode(b"i42eextra"),
        Err(BencodeError::TrailingData)
    ));
}

#[test]
fn test_decode_nesting_limit() {
    let mut data = vec![b'l'; 80];
    data.extend(std::iter::repeat(b'e').take(80));
    assert!(matches!(decode(&data), Err(BencodeError::NestingTooDeep)));
}

#[test]
fn test_encode_integer() {
    assert_eq!(encode(&Value::Integer(42)), b"i42e");
    assert_eq!(encode(&Value::Integer(-42)), b"i-42e");
    assert_eq!(encode(&Value::Integer(0)), b"i0e");
}

#[test]
fn test_encode_bytes() {
    assert_eq!(encode(&Value::Bytes(Bytes::from_static(b"spam"))), b"4:spam");
    assert_eq!(encode(&Value::Bytes(Bytes::new())), b"0:");
}

#[test]
fn test_encode_list() {
    let list = Value::List(vec![
        Value::Bytes(Bytes::from_static(b"spam")),
        Value::Integer(42),
    ]);
    assert_eq!(encode(&list), b"l4:spami42ee");
}

#[test]
fn test_encode_dict_sorts_keys() {
    // Insertion order b then a; output order must be a then b.
    let mut dict = BTreeMap::new();
    dict.insert(Bytes::from_static(b"b"), Value::Integer(2));
    dict.insert(Bytes::from_static(b"a"), Value::Integer(1));
    assert_eq!(encode(&Value::Dict(dict)), b"d1:ai1e1:bi2ee");
}

#[test]
fn test_roundtrip_canonical() {
    let original: &[u8] =
        b"d8:announce15:http://test.com4:infod4:name4:test12:piece lengthi16384eee";
    let decoded = decode(original).unwrap();
    assert_eq!(encode(&decoded), original);
}

#[test]
fn test_roundtrip_value_equality() {
    let mut info = BTreeMap::new();
    info.insert(Bytes::from_static(b"name"), Value::string("a.txt"));
    info.insert(Bytes::from_static(b"length"), Value::Integer(1024));

    let value = Value::List(vec![
        Value::Integer(-7),
        Value::string(""),
        Value::Dict(info),
        Value::List(vec![]),
    ]);

    assert_eq!(decode(&encode(&value)).unwrap(), value);
}

#[test]
fn test_value_accessors() {
    let value = Value::Integer(42);
    assert_eq!(value.as_integer(), Some(42));
    assert!(value.as_bytes().is_none());

    let value = Value::string("test");
    assert_eq!(value.as_str(), Some("test"));
    assert!(value.as_integer().is_none());

    let value = Value::List(vec![]);
    assert!(value.as_list().is_some());
    assert!(value.as_dict().is_none());
}
