use solana_pubkey::Pubkey;

/// Wallet session owned by the caller: created on connect, cleared on
/// disconnect. Replaces any notion of global wallet state; the assembler and
/// signer adapters only ever see this value.
#[derive(Clone, Debug, Default)]
pub struct WalletSession {
    signer_pubkey: Option<Pubkey>,
}

impl WalletSession {
    pub fn connect(signer_pubkey: Pubkey) -> Self {
        WalletSession {
            signer_pubkey: Some(signer_pubkey),
        }
    }

    pub fn disconnected() -> Self {
        WalletSession::default()
    }

    pub fn disconnect(&mut self) {
        self.signer_pubkey = None;
    }

    pub fn signer_pubkey(&self) -> Option<Pubkey> {
        self.signer_pubkey
    }

    pub fn is_connected(&self) -> bool {
        self.signer_pubkey.is_some()
    }
}
