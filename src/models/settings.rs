//! Decoded snapshot of the four persisted input method settings.

use crate::models::{DisabledSystemSet, EnabledMap, InputMethodId, SelectedSubtype};
use serde::Serialize;

/// Input method settings as read from a [`crate::services::SettingsStore`].
///
/// Rebuilt from the store on every load; never cached between passes.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct PersistedSettings {
    /// Parsed `ENABLED_INPUT_METHODS`
    pub enabled: EnabledMap,
    /// Parsed `DISABLED_SYSTEM_INPUT_METHODS`
    pub disabled_system: DisabledSystemSet,
    /// `DEFAULT_INPUT_METHOD`, `None` when unset or empty
    pub current_input_method: Option<InputMethodId>,
    /// `SELECTED_INPUT_METHOD_SUBTYPE`
    pub selected_subtype: SelectedSubtype,
}
