//! Reconciliation of persisted input method settings with checkbox state.
//!
//! One pass walks the installed input methods in platform order and merges
//! what the user sees checked into the persisted enabled map. The pass is a
//! pure transform: it reads a [`PersistedSettings`] snapshot and a
//! [`ToggleState`] and returns the values to write back.
//!
//! Subtype hash codes may change when an input method is updated, so the
//! first observed subtype checkbox of an input method discards its previously
//! persisted subtype set before the observed state is applied.

use crate::models::{
    DisabledSystemSet, EnabledMap, InputMethodDescriptor, InputMethodId, PersistedSettings,
    ToggleState,
};
use indexmap::IndexSet;
use tracing::debug;

/// Result of one reconciliation pass.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReconcileOutcome {
    /// Enabled input methods to persist
    pub enabled: EnabledMap,
    /// Disabled system input methods to persist
    pub disabled_system: DisabledSystemSet,
    /// Default input method to persist, `None` when it is no longer enabled
    pub current_input_method: Option<InputMethodId>,
    /// Whether the selected subtype must be reset to "none selected"
    pub needs_subtype_reset: bool,
}

/// Merges observed checkbox state into persisted settings.
///
/// # Arguments
///
/// * `input_methods` - Installed input methods in platform enumeration order
/// * `settings` - Snapshot of the persisted values
/// * `toggles` - Checkbox state observed on screen
/// * `has_hard_keyboard` - Whether a hardware keyboard is attached
/// * `is_always_enabled` - Platform policy for input methods that stay enabled
///   without a hardware keyboard
///
/// Input methods sharing an id are processed in order, so the last one wins.
pub fn reconcile<F>(
    input_methods: &[InputMethodDescriptor],
    settings: PersistedSettings,
    toggles: &ToggleState,
    has_hard_keyboard: bool,
    is_always_enabled: F,
) -> ReconcileOutcome
where
    F: Fn(&InputMethodDescriptor) -> bool,
{
    let PersistedSettings {
        mut enabled,
        mut disabled_system,
        mut current_input_method,
        selected_subtype,
    } = settings;

    // Input methods whose selected subtype may have been dropped. Tracked per
    // id so the result does not depend on descriptor order.
    let mut pending_reset: IndexSet<&str> = IndexSet::new();

    for imi in input_methods {
        let id = imi.id.as_str();
        let is_checked = toggles
            .input_method_checked(id)
            .unwrap_or_else(|| enabled.contains(id));
        let is_current = current_input_method.as_deref() == Some(id);

        if is_checked || (!has_hard_keyboard && is_always_enabled(imi)) {
            if !enabled.contains(id) {
                debug!("Input method {} has just been enabled", id);
            }
            let subtypes = enabled.entry_or_default(id);

            let mut subtype_toggle_seen = false;
            for subtype in &imi.subtypes {
                let hash = subtype.hash_string();
                let Some(subtype_checked) = toggles.subtype_checked(id, &hash) else {
                    continue;
                };
                if !subtype_toggle_seen {
                    subtypes.clear();
                    pending_reset.insert(id);
                    subtype_toggle_seen = true;
                }
                if subtype_checked {
                    subtypes.insert(hash);
                    if is_current && selected_subtype.matches(subtype.hash_code) {
                        // The selected subtype is still enabled.
                        pending_reset.shift_remove(id);
                    }
                } else {
                    subtypes.shift_remove(&hash);
                }
            }
        } else {
            enabled.remove(id);
            if is_current {
                debug!("Current input method {} was uninstalled or disabled", id);
                current_input_method = None;
            }
        }

        // Remember disabled system input methods so they are not re-enabled
        // automatically when the package list changes.
        if imi.is_system && has_hard_keyboard {
            if disabled_system.contains(id) {
                if is_checked {
                    disabled_system.remove(id);
                }
            } else if !is_checked {
                disabled_system.insert(id);
            }
        }
    }

    let needs_subtype_reset = !pending_reset.is_empty() || !selected_subtype.is_selected();
    debug!(
        "Reconciled {} enabled input methods, {} disabled system input methods, reset subtype: {}",
        enabled.len(),
        disabled_system.len(),
        needs_subtype_reset
    );

    ReconcileOutcome {
        enabled,
        disabled_system,
        current_input_method,
        needs_subtype_reset,
    }
}
