use solana_pubkey::Pubkey;
use solana_sdk::signature::{Keypair, Signer};
use tokio::sync::{mpsc, oneshot};

use crate::hasher::MESSAGE_HASH_LEN;

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum SignerError {
    /// No signer backend is reachable (wallet absent, channel closed).
    Unavailable,
    /// The user declined the signing request.
    UserRejected,
    /// The backend returned bytes the assembler cannot use.
    InvalidInput,
}

impl std::fmt::Display for SignerError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let msg = match self {
            SignerError::Unavailable => "signer backend is unavailable",
            SignerError::UserRejected => "user rejected the signing request",
            SignerError::InvalidInput => "signer returned unusable bytes",
        };
        write!(f, "{msg}")
    }
}

impl std::error::Error for SignerError {}

/// Contract for producing a signature over the canonical message hash.
///
/// Implementations may complete synchronously (a local key) or suspend for an
/// unbounded, externally-controlled duration (a wallet awaiting user
/// approval). The assembler never assumes synchronous completion and applies
/// no implicit timeout; cancellation is the caller dropping the future.
#[allow(async_fn_in_trait)]
pub trait WallSigner {
    /// The public key the resulting signature must verify against.
    fn pubkey(&self) -> Pubkey;

    /// Signs the canonical hash, returning raw signature bytes, possibly with
    /// `signature_prefix_len` leading framing bytes.
    async fn sign_hash(&self, hash: &[u8; MESSAGE_HASH_LEN]) -> Result<Vec<u8>, SignerError>;

    /// Number of framing/version bytes this backend prepends to signatures.
    /// The assembler strips exactly this many bytes before using the rest.
    fn signature_prefix_len(&self) -> usize {
        0
    }
}

/// Local-key signer: deterministic, completes immediately, no framing prefix.
pub struct KeypairSigner {
    keypair: Keypair,
}

impl KeypairSigner {
    pub fn new(keypair: Keypair) -> Self {
        KeypairSigner { keypair }
    }
}

impl WallSigner for KeypairSigner {
    fn pubkey(&self) -> Pubkey {
        self.keypair.pubkey()
    }

    async fn sign_hash(&self, hash: &[u8; MESSAGE_HASH_LEN]) -> Result<Vec<u8>, SignerError> {
        Ok(self.keypair.sign_message(hash).as_ref().to_vec())
    }
}

/// One signing request forwarded to an approval surface.
pub struct SignRequest {
    /// The canonical hash, hex-encoded the way the wallet contract expects.
    pub hash_hex: String,
    /// Channel for the approval surface's reply.
    pub respond: oneshot::Sender<Result<Vec<u8>, SignerError>>,
}

/// Remote-approval signer: forwards the hash to an approval surface and
/// suspends until it replies. Models the wallet-mediated flow, where the
/// reply carries a documented framing prefix ahead of the signature bytes.
pub struct RemoteApprovalSigner {
    pubkey: Pubkey,
    requests: mpsc::Sender<SignRequest>,
    prefix_len: usize,
}

impl RemoteApprovalSigner {
    /// Framing bytes the reference wallet prepends to its signature replies.
    pub const WALLET_FRAME_LEN: usize = 2;

    pub fn new(pubkey: Pubkey, requests: mpsc::Sender<SignRequest>) -> Self {
        Self::with_prefix_len(pubkey, requests, Self::WALLET_FRAME_LEN)
    }

    /// Builds a signer for a backend with a different (or absent) framing
    /// prefix. The prefix is a per-backend parameter, never assumed.
    pub fn with_prefix_len(
        pubkey: Pubkey,
        requests: mpsc::Sender<SignRequest>,
        prefix_len: usize,
    ) -> Self {
        RemoteApprovalSigner {
            pubkey,
            requests,
            prefix_len,
        }
    }
}

impl WallSigner for RemoteApprovalSigner {
    fn pubkey(&self) -> Pubkey {
        self.pubkey
    }

    async fn sign_hash(&self, hash: &[u8; MESSAGE_HASH_LEN]) -> Result<Vec<u8>, SignerError> {
        let (respond, reply) = oneshot::channel();
        self.requests
            .send(SignRequest {
                hash_hex: hex::encode(hash),
                respond,
            })
            .await
            .map_err(|_| SignerError::Unavailable)?;

        // Suspends until the user acts; a dropped reply channel means the
        // approval surface went away.
        reply.await.map_err(|_| SignerError::Unavailable)?
    }

    fn signature_prefix_len(&self) -> usize {
        self.prefix_len
    }
}
