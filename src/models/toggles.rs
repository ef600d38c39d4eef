//! Checkbox state observed in the presentation layer.
//!
//! A missing entry means the screen shows no checkbox for that input method or
//! subtype. Reconciliation treats such entries as "not observed".

use crate::models::input_method::{InputMethodId, SubtypeHash};
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Observed input method and subtype checkboxes.
///
/// JSON form:
///
/// ```json
/// {
///   "input_methods": { "ime1": true },
///   "subtypes": { "ime1": { "1234": true, "5678": false } }
/// }
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ToggleState {
    /// Input method checkbox states
    #[serde(default)]
    pub input_methods: IndexMap<InputMethodId, bool>,
    /// Subtype checkbox states, grouped by input method
    #[serde(default)]
    pub subtypes: IndexMap<InputMethodId, IndexMap<SubtypeHash, bool>>,
}

impl ToggleState {
    /// Creates a state with no observed checkboxes.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Records an input method checkbox.
    pub fn set_input_method(&mut self, id: impl Into<String>, checked: bool) -> &mut Self {
        self.input_methods.insert(id.into(), checked);
        self
    }

    /// Records a subtype checkbox.
    pub fn set_subtype(
        &mut self,
        id: impl Into<String>,
        hash: impl Into<String>,
        checked: bool,
    ) -> &mut Self {
        self.subtypes
            .entry(id.into())
            .or_default()
            .insert(hash.into(), checked);
        self
    }

    /// Checkbox state of an input method, if shown.
    #[must_use]
    pub fn input_method_checked(&self, id: &str) -> Option<bool> {
        self.input_methods.get(id).copied()
    }

    /// Checkbox state of a subtype, if shown.
    #[must_use]
    pub fn subtype_checked(&self, id: &str, hash: &str) -> Option<bool> {
        self.subtypes.get(id).and_then(|m| m.get(hash)).copied()
    }
}
