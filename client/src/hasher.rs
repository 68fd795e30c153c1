use sha2::{Digest, Sha256};

/// Byte width of the canonical message hash presented to signers.
pub const MESSAGE_HASH_LEN: usize = 32;

/// Deterministic content hash over serialized message bytes.
///
/// The hash is an external contract: whatever implementation is plugged in
/// must be bit-compatible with the verifier that checks the finished
/// transaction. The assembler treats it as an opaque function.
pub trait MessageHasher {
    fn hash_message(&self, message_bytes: &[u8]) -> [u8; MESSAGE_HASH_LEN];
}

/// SHA-256 message hasher, matching the reference verifier.
#[derive(Clone, Copy, Debug, Default)]
pub struct Sha256Hasher;

impl MessageHasher for Sha256Hasher {
    fn hash_message(&self, message_bytes: &[u8]) -> [u8; MESSAGE_HASH_LEN] {
        Sha256::digest(message_bytes).into()
    }
}
