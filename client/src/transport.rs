use anyhow::Context;
use solana_client::rpc_client::RpcClient;
use solana_commitment_config::CommitmentConfig;
use solana_pubkey::Pubkey;
use solana_sdk::signature::Signature;

use crate::{assembler::SignedTransactionEnvelope, logs::log_success};

/// Collaborator boundary for account reads and transaction submission.
///
/// This core never retries: re-polling account state and resubmitting
/// transactions are the caller's policy.
#[allow(async_fn_in_trait)]
pub trait WallTransport {
    /// Fetches the wall account's raw bytes; `None` when the account does
    /// not exist yet.
    async fn read_account(&self, account: &Pubkey) -> anyhow::Result<Option<Vec<u8>>>;

    /// Submits a finalized envelope, returning the receipt signature.
    async fn submit(&self, envelope: &SignedTransactionEnvelope) -> anyhow::Result<Signature>;

    /// Availability probe: whether the wall program is deployed. Gates the
    /// append surface only; not part of assembly logic.
    async fn program_deployed(&self, program_id: &Pubkey) -> anyhow::Result<bool>;
}

/// RPC-backed transport over a cluster endpoint.
///
/// Blocking adapter: each method drives the blocking `RpcClient` on the
/// calling thread for the full round-trip. That suits the strictly
/// sequential append/read flows this core serves; callers sharing an async
/// executor should wrap calls in `tokio::task::spawn_blocking`.
pub struct RpcTransport {
    rpc: RpcClient,
}

impl RpcTransport {
    pub fn new(url: impl ToString) -> Self {
        RpcTransport {
            rpc: RpcClient::new(url.to_string()),
        }
    }

    pub fn from_rpc(rpc: RpcClient) -> Self {
        RpcTransport { rpc }
    }
}

impl WallTransport for RpcTransport {
    async fn read_account(&self, account: &Pubkey) -> anyhow::Result<Option<Vec<u8>>> {
        let response = self
            .rpc
            .get_account_with_commitment(account, CommitmentConfig::confirmed())
            .context("Failed to fetch wall account")?;
        Ok(response.value.map(|account| account.data))
    }

    async fn submit(&self, envelope: &SignedTransactionEnvelope) -> anyhow::Result<Signature> {
        let transaction = envelope.clone().into_transaction();
        let signature = self
            .rpc
            .send_transaction(&transaction)
            .context("Failed transaction submission")?;
        log_success("Submitted", signature);
        Ok(signature)
    }

    async fn program_deployed(&self, program_id: &Pubkey) -> anyhow::Result<bool> {
        let response = self
            .rpc
            .get_account_with_commitment(program_id, CommitmentConfig::confirmed())
            .context("Failed to probe wall program account")?;
        Ok(response.value.map(|account| account.executable).unwrap_or(false))
    }
}
