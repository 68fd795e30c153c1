use pinocchio::program_error::ProgramError;

/// Failures while decoding wall account bytes.
///
/// Encoding has no error variant: writing an entry only truncates and
/// zero-pads, so it cannot fail.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
#[repr(u8)]
pub enum DecodeError {
    /// The buffer declares more records than it holds bytes for.
    TruncatedBuffer,
    /// A name or message field is not valid UTF-8 after zero-stripping.
    InvalidText,
}

impl From<DecodeError> for ProgramError {
    #[inline(always)]
    fn from(e: DecodeError) -> Self {
        ProgramError::Custom(e as u32)
    }
}

impl From<DecodeError> for &'static str {
    fn from(value: DecodeError) -> Self {
        match value {
            DecodeError::TruncatedBuffer => "Declared record count exceeds available bytes",
            DecodeError::InvalidText => "Record text is not valid UTF-8",
        }
    }
}

#[cfg(not(target_os = "solana"))]
impl core::fmt::Display for DecodeError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{}", <&'static str>::from(*self))
    }
}

#[cfg(feature = "std")]
impl std::error::Error for DecodeError {}
