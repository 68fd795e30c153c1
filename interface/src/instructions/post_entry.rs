use pinocchio::{
    account_info::AccountInfo,
    instruction::{AccountMeta, Instruction, Signer},
    ProgramResult,
};

use crate::state::{encode_entry_payload, PAYLOAD_LEN};

/// Appends one entry to the wall account.
///
/// The program stamps the entry with the cluster time; the client supplies
/// only the zero-padded text fields.
///
/// ### Accounts
///  0. `[SIGNER]` Author account
///  1. `[WRITE]` Wall account
pub struct PostEntry<'a> {
    /// The author signing the entry.
    pub author: &'a AccountInfo,
    /// The wall ledger account.
    pub wall_account: &'a AccountInfo,
    /// Author name; truncated to 16 bytes on encode.
    pub name: &'a str,
    /// Message text; truncated to 64 bytes on encode.
    pub message: &'a str,
}

impl PostEntry<'_> {
    #[inline(always)]
    pub fn invoke(&self) -> ProgramResult {
        self.invoke_signed(&[])
    }

    #[inline(always)]
    pub fn invoke_signed(&self, signers_seeds: &[Signer]) -> ProgramResult {
        pinocchio::cpi::invoke_signed(
            &Instruction {
                program_id: &crate::program::ID,
                accounts: &self.create_account_metas(),
                data: &self.pack_instruction_data(),
            },
            &[self.author, self.wall_account],
            signers_seeds,
        )
    }

    #[inline(always)]
    pub fn create_account_metas(&self) -> [AccountMeta; 2] {
        [
            AccountMeta::readonly_signer(self.author.key()),
            AccountMeta::writable(self.wall_account.key()),
        ]
    }

    #[inline(always)]
    pub fn pack_instruction_data(&self) -> [u8; PAYLOAD_LEN] {
        encode_entry_payload(self.name, self.message)
    }
}

/// Off-chain builder for the append instruction: author as read-only signer,
/// wall account writable, data the 80-byte payload.
#[cfg(feature = "client")]
pub fn post_entry_instruction(
    author: &solana_pubkey::Pubkey,
    wall_account: &solana_pubkey::Pubkey,
    name: &str,
    message: &str,
) -> solana_instruction::Instruction {
    use solana_instruction::AccountMeta;

    solana_instruction::Instruction::new_with_bytes(
        solana_pubkey::Pubkey::new_from_array(crate::program::ID),
        &encode_entry_payload(name, message),
        std::vec![
            AccountMeta::new_readonly(*author, true),
            AccountMeta::new(*wall_account, false),
        ],
    )
}
