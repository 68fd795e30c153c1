use core::mem::MaybeUninit;

pub const UNINIT_BYTE: MaybeUninit<u8> = MaybeUninit::uninit();

/// Writes bytes from a source slice into an uninitialized destination buffer.
///
/// Safe alternative to `ptr::copy_nonoverlapping` for `MaybeUninit` slices; the
/// loop compiles down to a memcpy in release builds while keeping bounds checks
/// at compile time.
///
/// Caller must write every byte of the destination before casting it back to an
/// initialized array. A partially written buffer is UB once dereferenced as one.
#[inline(always)]
pub fn write_bytes(dst: &mut [MaybeUninit<u8>], src: &[u8]) {
    debug_assert_eq!(
        src.len(),
        dst.len(),
        "tried to `write_bytes` with mismatched src/dst lengths"
    );
    for (d, s) in dst.iter_mut().zip(src.iter()) {
        d.write(*s);
    }
}
