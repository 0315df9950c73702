//! Compatibility tests against blobs produced by existing encoders.

use codec::{AeadFramedCodec, CodecError, Cryptor, NONCE_LEN, TAG_LEN};

const KEY: &str = "1ab3adcf15eeb01bc812aae31b24efb5";
const KNOWN_BLOB: &str = "0cfaeaa3999edf03f2458fdd1b66469c939cda0ed1435d4e5cb359604f8010d6a9";

fn codec() -> AeadFramedCodec {
    AeadFramedCodec::new(KEY).unwrap()
}

#[test]
fn decodes_known_blob() {
    assert_eq!(codec().decode(KNOWN_BLOB).unwrap(), b"test");
    assert_eq!(codec().decrypt_text(KNOWN_BLOB).unwrap(), "test");
}

#[test]
fn decodes_uppercase_hex() {
    let upper = KNOWN_BLOB.to_uppercase();
    assert_eq!(codec().decode(&upper).unwrap(), b"test");
}

#[test]
fn short_blob_is_rejected() {
    assert!(codec().decode("123456").is_err());
}

#[test]
fn empty_blob_is_rejected() {
    assert!(matches!(
        codec().decode(""),
        Err(CodecError::FrameTooShort { len: 0 })
    ));
}

#[test]
fn round_trip_various_plaintexts() {
    let codec = codec();
    let big = vec![0x5a; 4096];
    let cases: [&[u8]; 5] = [b"", b"a", b"test", "zażółć gęślą jaźń".as_bytes(), &big];
    for plaintext in cases {
        let blob = codec.encode(plaintext).unwrap();
        assert_eq!(blob.len(), 2 * (1 + NONCE_LEN + plaintext.len() + TAG_LEN));
        assert_eq!(codec.decode(&blob).unwrap(), plaintext);
    }
}

#[test]
fn output_is_lowercase_hex() {
    let blob = codec().encode(b"case").unwrap();
    assert!(blob
        .chars()
        .all(|c| c.is_ascii_digit() || ('a'..='f').contains(&c)));
    assert!(blob.starts_with("0c"));
}

#[test]
fn same_input_gives_distinct_blobs() {
    let codec = codec();
    let a = codec.encode(b"test").unwrap();
    let b = codec.encode(b"test").unwrap();
    assert_ne!(a, b);
    assert_eq!(codec.decode(&a).unwrap(), b"test");
    assert_eq!(codec.decode(&b).unwrap(), b"test");
}

#[test]
fn odd_length_key_rejected_at_construction() {
    assert!(matches!(
        AeadFramedCodec::new("123"),
        Err(CodecError::InvalidKeyEncoding(_))
    ));
}

#[test]
fn short_key_rejected_on_use() {
    let codec = AeadFramedCodec::new("0011").unwrap();
    assert!(matches!(
        codec.encode(b""),
        Err(CodecError::KeyTooShort { len: 2 })
    ));
    assert!(matches!(
        codec.decode(KNOWN_BLOB),
        Err(CodecError::KeyTooShort { len: 2 })
    ));
}

#[test]
fn long_key_uses_first_sixteen_bytes() {
    let long = AeadFramedCodec::new(&format!("{KEY}deadbeefcafef00d")).unwrap();
    assert_eq!(long.decode(KNOWN_BLOB).unwrap(), b"test");

    let blob = long.encode(b"prefix").unwrap();
    assert_eq!(codec().decode(&blob).unwrap(), b"prefix");
}

#[test]
fn every_single_digit_flip_is_detected() {
    let codec = codec();
    for i in 0..KNOWN_BLOB.len() {
        let mut digits: Vec<u8> = KNOWN_BLOB.bytes().collect();
        digits[i] = if digits[i] == b'0' { b'1' } else { b'0' };
        let tampered = String::from_utf8(digits).unwrap();

        match codec.decode(&tampered) {
            Err(CodecError::AuthenticationFailed) | Err(CodecError::UnsupportedNonceLength(_)) => {}
            other => panic!("flip at digit {i} gave {other:?}"),
        }
    }
}

#[test]
fn truncated_blob_fails() {
    let blob = codec().encode(b"truncate me").unwrap();
    let cut = &blob[..blob.len() - 2];
    assert!(matches!(
        codec().decode(cut),
        Err(CodecError::AuthenticationFailed)
    ));
}

#[test]
fn crafted_nonce_length_rejected() {
    for declared in ["00", "0b", "0d", "10", "18", "ff"] {
        let crafted = format!("{declared}{}", &KNOWN_BLOB[2..]);
        assert!(
            matches!(
                codec().decode(&crafted),
                Err(CodecError::UnsupportedNonceLength(_))
            ),
            "declared length {declared} accepted"
        );
    }
}

#[test]
fn shared_across_threads() {
    let codec = codec();
    std::thread::scope(|s| {
        for t in 0..4u8 {
            let codec = &codec;
            s.spawn(move || {
                for i in 0..32u8 {
                    let plaintext = [t, i];
                    let blob = codec.encode(&plaintext).unwrap();
                    assert_eq!(codec.decode(&blob).unwrap(), plaintext);
                }
            });
        }
    });
}
