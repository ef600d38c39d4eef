//! Selected subtype pointer.

use crate::constants::NOT_A_SUBTYPE_ID;
use serde::{Deserialize, Serialize};

/// The active subtype of the active input method.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SelectedSubtype {
    /// No subtype selected
    #[default]
    None,
    /// Subtype with this hash code is selected
    Hash(i32),
}

impl SelectedSubtype {
    /// Decodes the persisted integer, mapping the sentinel to `None`.
    #[must_use]
    pub const fn from_persisted(value: i32) -> Self {
        if value == NOT_A_SUBTYPE_ID {
            Self::None
        } else {
            Self::Hash(value)
        }
    }

    /// Encodes to the persisted integer.
    #[must_use]
    pub const fn to_persisted(self) -> i32 {
        match self {
            Self::None => NOT_A_SUBTYPE_ID,
            Self::Hash(hash) => hash,
        }
    }

    /// Whether any subtype is selected.
    #[must_use]
    pub const fn is_selected(self) -> bool {
        matches!(self, Self::Hash(_))
    }

    /// Whether the selected subtype has this hash code.
    #[must_use]
    pub const fn matches(self, hash_code: i32) -> bool {
        match self {
            Self::None => false,
            Self::Hash(hash) => hash == hash_code,
        }
    }
}
