//! Client-side pipeline for the wall ledger program.
//!
//! Covers the full append flow (draft, hash, sign, finalize), the signer
//! adapter contracts, and the pull-based read path over raw account bytes.

pub mod assembler;
pub mod hasher;
pub mod logs;
pub mod reader;
pub mod session;
pub mod signer;
pub mod transport;

pub use logs::LogColor;
