// Derived from `pinocchio-token-interface` – commit 75116550519a9ee3fdfa6c819aca91e383fffa39, Apache-2.0.
// See: https://github.com/solana-program/token

use crate::error::DecodeError;

/// Marker trait for a zero-copy view of bytes as `&Self` via an unchecked cast
/// (e.g., `&*(bytes.as_ptr() as *const Self)`).
///
/// # Safety
/// **Implementor guarantees:**
/// - A stable layout (`#[repr(C)]` or `#[repr(transparent)]`), with any `LEN`
///   bytes forming a valid `Self`. Prefer `[u8; N]` fields.
/// - `size_of::<Self>() == LEN`
/// - `align_of::<Self>() == 1`
pub unsafe trait Transmutable: Sized {
    /// The cumulative size in bytes of all fields in the struct.
    const LEN: usize;
}

/// Returns a reference to a `T: Transmutable` from the given bytes after
/// checking the byte length.
///
/// # Safety
/// - Caller must guarantee `bytes` is a valid representation of `T`.
#[inline(always)]
pub unsafe fn load<T: Transmutable>(bytes: &[u8]) -> Result<&T, DecodeError> {
    if bytes.len() != T::LEN {
        return Err(DecodeError::TruncatedBuffer);
    }
    Ok(&*(bytes.as_ptr() as *const T))
}
