use wall_interface::{
    error::DecodeError,
    state::{
        decode_wall, encode_entry_payload, sort_by_recency, WallEntry, WallRecord, COUNT_LEN,
        ENTRY_LEN, MESSAGE_LEN, NAME_LEN, PAYLOAD_LEN,
    },
};

fn wall_buffer(records: &[WallRecord]) -> Vec<u8> {
    let mut buffer = (records.len() as u32).to_le_bytes().to_vec();
    for record in records {
        buffer.extend_from_slice(record.as_array());
    }
    buffer
}

#[test]
fn round_trip_preserves_text_within_limits() {
    let record = WallRecord::new(1_700_000_000, "Ada Lovelace", "First entry on the wall.");
    let entry = WallEntry::decode(record.as_array()).expect("Should decode");
    assert_eq!(entry.timestamp, 1_700_000_000);
    assert_eq!(entry.name, "Ada Lovelace");
    assert_eq!(entry.message, "First entry on the wall.");
}

#[test]
fn ascii_name_truncates_to_field_width() {
    // 20 ASCII bytes keep exactly the first 16.
    let record = WallRecord::new(0, "abcdefghijklmnopqrst", "msg");
    assert_eq!(&record.as_array()[8..8 + NAME_LEN], b"abcdefghijklmnop");

    let entry = WallEntry::decode(record.as_array()).expect("Should decode");
    assert_eq!(entry.name, "abcdefghijklmnop");
    assert_eq!(entry.name.len(), NAME_LEN);
}

#[test]
fn split_multibyte_truncation_fails_utf8_validation() {
    // 15 ASCII bytes followed by a two-byte char: byte 16 keeps only the
    // lead byte of 'é', which cannot validate on decode.
    let record = WallRecord::new(0, "0123456789abcdeé", "msg");
    assert_eq!(
        WallEntry::decode(record.as_array()),
        Err(DecodeError::InvalidText)
    );
}

#[test]
fn short_buffers_decode_to_empty_wall() {
    assert_eq!(decode_wall(&[]).expect("Should decode"), vec![]);
    assert_eq!(decode_wall(&[0, 0, 0]).expect("Should decode"), vec![]);
}

#[test]
fn declared_count_beyond_bytes_is_truncated_buffer() {
    let buffer = 1u32.to_le_bytes();
    assert_eq!(decode_wall(&buffer), Err(DecodeError::TruncatedBuffer));

    // One full record declared as two.
    let mut buffer = wall_buffer(&[WallRecord::new(1, "a", "b")]);
    buffer[..COUNT_LEN].copy_from_slice(&2u32.to_le_bytes());
    assert_eq!(decode_wall(&buffer), Err(DecodeError::TruncatedBuffer));
}

#[test]
fn trailing_capacity_bytes_are_ignored() {
    let mut buffer = wall_buffer(&[WallRecord::new(9, "a", "b")]);
    buffer.extend_from_slice(&[0u8; ENTRY_LEN * 3]);
    let entries = decode_wall(&buffer).expect("Should decode");
    assert_eq!(entries.len(), 1);
    assert_eq!(entries[0].timestamp, 9);
}

#[test]
fn decode_is_restartable() {
    let buffer = wall_buffer(&[
        WallRecord::new(1, "a", "x"),
        WallRecord::new(2, "b", "y"),
    ]);
    assert_eq!(
        decode_wall(&buffer).expect("Should decode"),
        decode_wall(&buffer).expect("Should decode"),
    );
}

#[test]
fn recency_sort_is_descending_and_stable() {
    let buffer = wall_buffer(&[
        WallRecord::new(100, "first", "m"),
        WallRecord::new(300, "second", "m"),
        WallRecord::new(200, "third", "m"),
        WallRecord::new(300, "fourth", "m"),
    ]);
    let mut entries = decode_wall(&buffer).expect("Should decode");

    // Raw decode preserves buffer (append) order.
    assert_eq!(entries[0].timestamp, 100);

    sort_by_recency(&mut entries);
    let timestamps: Vec<i64> = entries.iter().map(|e| e.timestamp).collect();
    assert_eq!(timestamps, vec![300, 300, 200, 100]);

    // The tied pair keeps its relative buffer order.
    assert_eq!(entries[0].name, "second");
    assert_eq!(entries[1].name, "fourth");
}

#[test]
fn payload_matches_wire_layout() {
    let payload = encode_entry_payload("Ada", "Hello, wall!");
    assert_eq!(payload.len(), PAYLOAD_LEN);
    assert_eq!(&payload[..3], b"Ada");
    assert!(payload[3..NAME_LEN].iter().all(|b| *b == 0));
    assert_eq!(&payload[NAME_LEN..NAME_LEN + 12], b"Hello, wall!");
    assert!(payload[NAME_LEN + 12..].iter().all(|b| *b == 0));
    assert_eq!(payload[NAME_LEN..].len(), MESSAGE_LEN);
}

#[test]
fn embedded_zero_bytes_are_stripped_on_decode() {
    let mut bytes = *WallRecord::new(5, "abc", "msg").as_array();
    // Zero out the middle of the name field; decode drops it entirely.
    bytes[9] = 0;
    let entry = WallEntry::decode(&bytes).expect("Should decode");
    assert_eq!(entry.name, "ac");
}

#[test]
fn hostile_declared_count_fails_before_allocating() {
    // A 4-byte buffer declaring u32::MAX records must come back as a decode
    // failure, not an allocation sized from the corrupt count.
    assert_eq!(
        decode_wall(&u32::MAX.to_le_bytes()),
        Err(DecodeError::TruncatedBuffer)
    );

    // Same with real records behind an inflated count.
    let mut buffer = wall_buffer(&[WallRecord::new(1, "a", "b")]);
    buffer[..COUNT_LEN].copy_from_slice(&u32::MAX.to_le_bytes());
    assert_eq!(decode_wall(&buffer), Err(DecodeError::TruncatedBuffer));
}
