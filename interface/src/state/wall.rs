use crate::{
    error::DecodeError,
    state::{COUNT_LEN, ENTRY_LEN},
};

#[cfg(feature = "std")]
use crate::state::wall_entry::WallEntry;
#[cfg(feature = "std")]
use std::vec::Vec;

/// Reads the little-endian record count at offset 0.
///
/// `None` means the account holds fewer than 4 bytes: the defined
/// "uninitialized wall" state, not an error.
#[inline(always)]
pub fn entry_count(buffer: &[u8]) -> Option<u32> {
    let prefix: &[u8; COUNT_LEN] = buffer.get(..COUNT_LEN)?.try_into().ok()?;
    Some(u32::from_le_bytes(*prefix))
}

/// Returns the `index`-th 88-byte record window, at offset `4 + index * 88`.
#[inline(always)]
pub fn record_bytes(buffer: &[u8], index: usize) -> Result<&[u8; ENTRY_LEN], DecodeError> {
    let start = COUNT_LEN + index * ENTRY_LEN;
    buffer
        .get(start..start + ENTRY_LEN)
        .and_then(|window| window.try_into().ok())
        .ok_or(DecodeError::TruncatedBuffer)
}

/// Decodes a wall account buffer into records in buffer (append) order.
///
/// Absent or sub-4-byte buffers decode to an empty wall. A declared count
/// that exceeds the available bytes is `DecodeError::TruncatedBuffer`; bytes
/// past the last declared record are pre-allocated capacity and are ignored.
///
/// Pure function of its input: the same buffer always decodes to the same
/// records.
#[cfg(feature = "std")]
pub fn decode_wall(buffer: &[u8]) -> Result<Vec<WallEntry>, DecodeError> {
    let Some(count) = entry_count(buffer) else {
        return Ok(Vec::new());
    };
    let count = count as usize;
    // The count is untrusted account data; bound it by the bytes actually
    // present before any allocation sized from it.
    if buffer.len().saturating_sub(COUNT_LEN) / ENTRY_LEN < count {
        return Err(DecodeError::TruncatedBuffer);
    }
    let mut entries = Vec::with_capacity(count);
    for index in 0..count {
        entries.push(WallEntry::decode(record_bytes(buffer, index)?)?);
    }
    Ok(entries)
}

/// Sorts entries most-recent-first. Stable: entries with equal timestamps
/// keep their buffer order. Presentation policy, not a codec guarantee.
#[cfg(feature = "std")]
pub fn sort_by_recency(entries: &mut [WallEntry]) {
    entries.sort_by_key(|entry| core::cmp::Reverse(entry.timestamp));
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn entry_count_requires_four_bytes() {
        assert_eq!(entry_count(&[]), None);
        assert_eq!(entry_count(&[1, 0, 0]), None);
        assert_eq!(entry_count(&[2, 0, 0, 0]), Some(2));
    }

    #[test]
    fn record_window_is_bounds_checked() {
        let buffer = [0u8; COUNT_LEN + ENTRY_LEN];
        assert!(record_bytes(&buffer, 0).is_ok());
        assert_eq!(record_bytes(&buffer, 1), Err(DecodeError::TruncatedBuffer));
    }
}
