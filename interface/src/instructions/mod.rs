//! Instruction schema for the wall program.
//!
//! The program exposes a single operation, so instruction data carries no tag
//! byte: it is exactly the 80-byte zero-padded entry payload.

pub mod post_entry;

pub use post_entry::*;
