use wall_interface::{
    error::DecodeError,
    state::{decode_wall, sort_by_recency, WallEntry},
};

use crate::logs::log_warning;

/// One decoded view of the wall account, rebuilt wholesale on every fetch.
///
/// A corrupt buffer degrades to an empty presentation with the failure
/// retained, so callers can tell "no entries yet" from "decode failed"
/// instead of silently reading zero entries.
#[derive(Clone, Debug, Default)]
pub struct WallSnapshot {
    entries: Vec<WallEntry>,
    decode_error: Option<DecodeError>,
}

impl WallSnapshot {
    /// Decodes raw account bytes into a recency-ordered snapshot.
    ///
    /// `None` (account not found) and sub-4-byte buffers are the valid
    /// uninitialized-wall state.
    pub fn from_account_bytes(buffer: Option<&[u8]>) -> Self {
        let Some(buffer) = buffer else {
            return WallSnapshot::default();
        };
        match decode_wall(buffer) {
            Ok(mut entries) => {
                sort_by_recency(&mut entries);
                WallSnapshot {
                    entries,
                    decode_error: None,
                }
            }
            Err(error) => {
                log_warning("Wall decode", error);
                WallSnapshot {
                    entries: Vec::new(),
                    decode_error: Some(error),
                }
            }
        }
    }

    /// Entries sorted most-recent-first, decode order preserved on ties.
    pub fn entries(&self) -> &[WallEntry] {
        &self.entries
    }

    pub fn decode_error(&self) -> Option<DecodeError> {
        self.decode_error
    }

    pub fn is_corrupt(&self) -> bool {
        self.decode_error.is_some()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
