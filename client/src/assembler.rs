use serde::{Deserialize, Serialize};
use solana_instruction::Instruction;
use solana_pubkey::Pubkey;
use solana_sdk::{message::Message, signature::Signature, transaction::Transaction};
use wall_interface::instructions::post_entry_instruction;

use crate::{
    hasher::{MessageHasher, MESSAGE_HASH_LEN},
    session::WalletSession,
    signer::{SignerError, WallSigner},
};

/// Envelope version understood by the submission boundary.
pub const ENVELOPE_VERSION: u8 = 0;

/// One staged entry before encoding: raw text, owned by the caller until it
/// is handed to `draft_append`.
#[derive(Clone, Debug)]
pub struct PendingAppend {
    pub name: String,
    pub message: String,
}

#[derive(Debug)]
pub enum AssemblyError {
    /// The session has no connected signer.
    MissingSigner,
    /// The returned signature does not verify over the canonical hash.
    HashMismatch,
    /// The signer adapter itself failed.
    Signer(SignerError),
}

impl From<SignerError> for AssemblyError {
    fn from(e: SignerError) -> Self {
        AssemblyError::Signer(e)
    }
}

impl std::fmt::Display for AssemblyError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AssemblyError::MissingSigner => write!(f, "no signer connected to the session"),
            AssemblyError::HashMismatch => {
                write!(f, "signature does not verify over the message hash")
            }
            AssemblyError::Signer(e) => write!(f, "signer failed: {e}"),
        }
    }
}

impl std::error::Error for AssemblyError {}

/// Drafts the append: encodes the payload and builds the program instruction
/// with the session's signer as read-only signer and the wall account as
/// writable non-signer.
pub fn draft_append(
    session: &WalletSession,
    wall_account: &Pubkey,
    entry: &PendingAppend,
) -> Result<DraftedAppend, AssemblyError> {
    let author = session.signer_pubkey().ok_or(AssemblyError::MissingSigner)?;
    let instruction = post_entry_instruction(&author, wall_account, &entry.name, &entry.message);
    Ok(DraftedAppend {
        author,
        instruction,
    })
}

/// First assembler state: the instruction exists, nothing is hashed yet.
/// A pure value; dropping it abandons the append with nothing to clean up.
pub struct DraftedAppend {
    author: Pubkey,
    instruction: Instruction,
}

impl DraftedAppend {
    pub fn instruction(&self) -> &Instruction {
        &self.instruction
    }

    /// Wraps the instruction in a message naming the author as sole required
    /// signer and computes the canonical hash the signer must attest to.
    pub fn into_hashed<H: MessageHasher>(self, hasher: &H) -> HashedAppend {
        let message = Message::new(&[self.instruction], Some(&self.author));
        let hash = hasher.hash_message(&message.serialize());
        HashedAppend {
            author: self.author,
            message,
            hash,
        }
    }
}

/// Second assembler state: message built, canonical hash computed.
pub struct HashedAppend {
    author: Pubkey,
    message: Message,
    hash: [u8; MESSAGE_HASH_LEN],
}

impl HashedAppend {
    /// The exact bytes presented to the signer.
    pub fn hash(&self) -> &[u8; MESSAGE_HASH_LEN] {
        &self.hash
    }

    pub fn message(&self) -> &Message {
        &self.message
    }

    /// Invokes the signer adapter and validates what comes back: strips the
    /// adapter's declared framing prefix, rejects a wrong-length remainder,
    /// and verifies the signature over the hash against the author key.
    ///
    /// May suspend for as long as the signer does. No partial result escapes
    /// a failure here; the whole append aborts.
    pub async fn sign<S: WallSigner>(self, signer: &S) -> Result<SignedAppend, AssemblyError> {
        let raw = signer.sign_hash(&self.hash).await?;
        let body = raw
            .get(signer.signature_prefix_len()..)
            .ok_or(AssemblyError::Signer(SignerError::InvalidInput))?;
        let signature = Signature::try_from(body)
            .map_err(|_| AssemblyError::Signer(SignerError::InvalidInput))?;

        if !signature.verify(self.author.as_ref(), &self.hash) {
            return Err(AssemblyError::HashMismatch);
        }

        Ok(SignedAppend {
            message: self.message,
            signature,
        })
    }
}

/// Third assembler state: signature validated, envelope not yet built.
pub struct SignedAppend {
    message: Message,
    signature: Signature,
}

impl SignedAppend {
    pub fn finalize(self) -> SignedTransactionEnvelope {
        SignedTransactionEnvelope {
            version: ENVELOPE_VERSION,
            signatures: vec![self.signature],
            message: self.message,
        }
    }
}

/// The finished, signature-bearing bundle, ready for the submission
/// boundary. Immutable from here on; retry policy lives outside this core.
#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct SignedTransactionEnvelope {
    pub version: u8,
    pub signatures: Vec<Signature>,
    pub message: Message,
}

impl SignedTransactionEnvelope {
    /// Wire bytes for submission.
    pub fn to_bytes(&self) -> anyhow::Result<Vec<u8>> {
        use anyhow::Context;
        bincode::serialize(self).context("Failed to serialize transaction envelope")
    }

    pub fn into_transaction(self) -> Transaction {
        Transaction {
            signatures: self.signatures,
            message: self.message,
        }
    }
}
