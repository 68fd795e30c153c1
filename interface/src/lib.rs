#![no_std]

#[cfg(feature = "std")]
extern crate std;

pub mod error;
pub mod instructions;
pub mod pack;
pub mod state;

pub mod program {
    pinocchio_pubkey::declare_id!("Wa11Ledger111111111111111111111111111111111");
}
