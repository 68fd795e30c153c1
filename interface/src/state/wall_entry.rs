use static_assertions::const_assert_eq;

use crate::{
    pack::{write_bytes, UNINIT_BYTE},
    state::{transmutable::Transmutable, LeI64, ENTRY_LEN, MESSAGE_LEN, NAME_LEN, PAYLOAD_LEN},
};

#[cfg(feature = "std")]
use crate::error::DecodeError;
#[cfg(feature = "std")]
use std::{string::String, vec::Vec};

/// Zero-copy view of one 88-byte wall record as laid out on chain.
#[repr(C)]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WallRecord {
    /// Unix seconds at append time, assigned by the program, as LE bytes.
    timestamp: LeI64,
    /// Author name, UTF-8 truncated to 16 bytes, zero-padded.
    name: [u8; NAME_LEN],
    /// Message text, UTF-8 truncated to 64 bytes, zero-padded.
    message: [u8; MESSAGE_LEN],
}

impl WallRecord {
    pub fn new(timestamp: i64, name: &str, message: &str) -> Self {
        WallRecord {
            timestamp: timestamp.to_le_bytes(),
            name: pack_text::<NAME_LEN>(name),
            message: pack_text::<MESSAGE_LEN>(message),
        }
    }

    #[inline(always)]
    pub fn timestamp(&self) -> i64 {
        i64::from_le_bytes(self.timestamp)
    }

    #[inline(always)]
    pub fn name_bytes(&self) -> &[u8; NAME_LEN] {
        &self.name
    }

    #[inline(always)]
    pub fn message_bytes(&self) -> &[u8; MESSAGE_LEN] {
        &self.message
    }

    #[inline(always)]
    pub fn as_array(&self) -> &[u8; ENTRY_LEN] {
        // Safety:
        // - `WallRecord` is always `ENTRY_LEN` bytes; size and alignment are
        //   checked with const asserts.
        // - All fields are byte-safe, `Copy`, non-pointer/reference u8 arrays.
        unsafe { &*(self as *const Self as *const [u8; ENTRY_LEN]) }
    }
}

// Safety:
//
// - Stable layout with `#[repr(C)]`.
// - `size_of` and `align_of` are checked below.
// - All bit patterns are valid.
unsafe impl Transmutable for WallRecord {
    const LEN: usize = ENTRY_LEN;
}

const_assert_eq!(size_of::<WallRecord>(), ENTRY_LEN);
const_assert_eq!(align_of::<WallRecord>(), 1);

/// Packs text into a fixed `N`-byte field: UTF-8 bytes truncated to the first
/// `N` bytes, zero-padded.
///
/// Truncation is byte-wise and may split a multi-byte character; the split
/// fragment then fails UTF-8 validation on decode. The field width is the
/// only knob, so callers that need boundary-aware truncation must clamp the
/// text before encoding.
pub fn pack_text<const N: usize>(text: &str) -> [u8; N] {
    let mut field = [0u8; N];
    let bytes = text.as_bytes();
    let len = bytes.len().min(N);
    field[..len].copy_from_slice(&bytes[..len]);
    field
}

/// Encodes the client-supplied instruction payload: 16-byte name field then
/// 64-byte message field, no tag, no length prefix. The program assigns the
/// timestamp when it appends the record.
pub fn encode_entry_payload(name: &str, message: &str) -> [u8; PAYLOAD_LEN] {
    // Payload layout:
    //   - [0..16]: zero-padded name bytes
    //   - [16..80]: zero-padded message bytes
    let mut data = [UNINIT_BYTE; PAYLOAD_LEN];

    write_bytes(&mut data[..NAME_LEN], &pack_text::<NAME_LEN>(name));
    write_bytes(&mut data[NAME_LEN..], &pack_text::<MESSAGE_LEN>(message));

    // Safety: All PAYLOAD_LEN bytes were written to.
    unsafe { *(data.as_ptr() as *const _) }
}

/// One decoded, owned wall record.
#[cfg(feature = "std")]
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct WallEntry {
    pub timestamp: i64,
    pub name: String,
    pub message: String,
}

#[cfg(feature = "std")]
impl WallEntry {
    /// Decodes one 88-byte record window. Never reads outside it.
    pub fn decode(bytes: &[u8; ENTRY_LEN]) -> Result<Self, DecodeError> {
        // Safety: the window is exactly ENTRY_LEN bytes and every bit pattern
        // is a valid `WallRecord`.
        let record = unsafe { crate::state::transmutable::load::<WallRecord>(bytes)? };
        Ok(WallEntry {
            timestamp: record.timestamp(),
            name: decode_text(record.name_bytes())?,
            message: decode_text(record.message_bytes())?,
        })
    }
}

/// Strips every zero byte (padding or embedded) and UTF-8-validates the rest.
#[cfg(feature = "std")]
fn decode_text(bytes: &[u8]) -> Result<String, DecodeError> {
    let stripped: Vec<u8> = bytes.iter().copied().filter(|b| *b != 0).collect();
    String::from_utf8(stripped).map_err(|_| DecodeError::InvalidText)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pack_text_pads_short_input() {
        let field = pack_text::<NAME_LEN>("Ada");
        assert_eq!(&field[..3], b"Ada");
        assert!(field[3..].iter().all(|b| *b == 0));
    }

    #[test]
    fn pack_text_truncates_long_input() {
        let field = pack_text::<NAME_LEN>("01234567890123456789");
        assert_eq!(&field, b"0123456789012345");
    }

    #[test]
    fn empty_text_encodes_to_zeroes() {
        assert_eq!(pack_text::<MESSAGE_LEN>(""), [0u8; MESSAGE_LEN]);
    }

    #[test]
    fn record_layout_is_stable() {
        let record = WallRecord::new(7, "Ada", "Hello");
        let bytes = record.as_array();
        assert_eq!(&bytes[..8], &7i64.to_le_bytes());
        assert_eq!(&bytes[8..11], b"Ada");
        assert_eq!(&bytes[24..29], b"Hello");
    }
}
