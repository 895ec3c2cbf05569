use serde::{Deserialize, Serialize};

use crate::constants::{UNKNOWN, limits};

/// Fields filled in by a metadata lookup.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Metadata {
    pub year: String,
    pub genre: String,
    pub parts: u32,
}

impl Metadata {
    /// Placeholder used whenever a lookup is skipped or fails.
    #[must_use]
    pub fn unknown() -> Self {
        Self {
            year: UNKNOWN.to_string(),
            genre: UNKNOWN.to_string(),
            parts: limits::DEFAULT_PARTS,
        }
    }

    #[must_use]
    pub fn is_unknown(&self) -> bool {
        *self == Self::unknown()
    }
}

impl Default for Metadata {
    fn default() -> Self {
        Self::unknown()
    }
}
