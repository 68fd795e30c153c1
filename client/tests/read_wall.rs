use wall_client::reader::WallSnapshot;
use wall_interface::{error::DecodeError, state::WallRecord};

fn wall_buffer(records: &[WallRecord]) -> Vec<u8> {
    let mut buffer = (records.len() as u32).to_le_bytes().to_vec();
    for record in records {
        buffer.extend_from_slice(record.as_array());
    }
    buffer
}

#[test]
fn missing_account_is_empty_not_corrupt() {
    let snapshot = WallSnapshot::from_account_bytes(None);
    assert!(snapshot.is_empty());
    assert!(!snapshot.is_corrupt());
}

#[test]
fn short_buffer_is_uninitialized_wall() {
    let snapshot = WallSnapshot::from_account_bytes(Some(&[0, 0, 0][..]));
    assert!(snapshot.is_empty());
    assert!(!snapshot.is_corrupt());
}

#[test]
fn truncated_buffer_degrades_with_diagnostic() {
    // Declares one record, holds none.
    let snapshot = WallSnapshot::from_account_bytes(Some(&1u32.to_le_bytes()[..]));
    assert!(snapshot.is_empty());
    assert!(snapshot.is_corrupt());
    assert_eq!(snapshot.decode_error(), Some(DecodeError::TruncatedBuffer));
}

#[test]
fn invalid_text_degrades_with_diagnostic() {
    let mut buffer = wall_buffer(&[WallRecord::new(1, "ok", "fine")]);
    // Clobber the name field with a lone continuation byte.
    buffer[4 + 8] = 0xFF;
    let snapshot = WallSnapshot::from_account_bytes(Some(buffer.as_slice()));
    assert!(snapshot.is_empty());
    assert_eq!(snapshot.decode_error(), Some(DecodeError::InvalidText));
}

#[test]
fn snapshot_orders_most_recent_first() {
    let buffer = wall_buffer(&[
        WallRecord::new(100, "early", "m"),
        WallRecord::new(300, "late", "m"),
        WallRecord::new(200, "middle", "m"),
    ]);
    let snapshot = WallSnapshot::from_account_bytes(Some(buffer.as_slice()));
    assert!(!snapshot.is_corrupt());

    let timestamps: Vec<i64> = snapshot.entries().iter().map(|e| e.timestamp).collect();
    assert_eq!(timestamps, vec![300, 200, 100]);
    assert_eq!(snapshot.entries()[0].name, "late");
}

#[test]
fn each_snapshot_is_rebuilt_from_its_buffer() {
    let first = wall_buffer(&[WallRecord::new(1, "a", "m")]);
    let second = wall_buffer(&[
        WallRecord::new(1, "a", "m"),
        WallRecord::new(2, "b", "m"),
    ]);
    assert_eq!(WallSnapshot::from_account_bytes(Some(first.as_slice())).entries().len(), 1);
    assert_eq!(WallSnapshot::from_account_bytes(Some(second.as_slice())).entries().len(), 2);
}

#[test]
fn hostile_count_degrades_like_any_corrupt_buffer() {
    let snapshot = WallSnapshot::from_account_bytes(Some(&u32::MAX.to_le_bytes()[..]));
    assert!(snapshot.is_empty());
    assert_eq!(snapshot.decode_error(), Some(DecodeError::TruncatedBuffer));
}
