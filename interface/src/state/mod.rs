pub mod transmutable;
pub mod wall;
pub mod wall_entry;

pub use wall::*;
pub use wall_entry::*;

pub const U32_SIZE: usize = core::mem::size_of::<u32>();
pub const I64_SIZE: usize = core::mem::size_of::<i64>();

/// A little-endian `i64` as raw bytes.
pub type LeI64 = [u8; I64_SIZE];

/// Byte width of the zero-padded author name field.
pub const NAME_LEN: usize = 16;
/// Byte width of the zero-padded message field.
pub const MESSAGE_LEN: usize = 64;
/// Byte width of one full wall record: timestamp + name + message.
pub const ENTRY_LEN: usize = I64_SIZE + NAME_LEN + MESSAGE_LEN;
/// Byte width of the client-supplied instruction payload. The on-chain
/// program assigns the timestamp, so the payload carries only the text
/// fields.
pub const PAYLOAD_LEN: usize = NAME_LEN + MESSAGE_LEN;
/// Byte width of the entry count prefix at offset 0 of the wall account.
pub const COUNT_LEN: usize = U32_SIZE;
