//! Load and save of the input method subtype list against a settings store.
//!
//! This is the adapter around [`reconcile`]: it reads the four persisted
//! values, runs one pass, and writes the results back with the platform's
//! write rules.

use crate::constants::keys;
use crate::models::{InputMethodDescriptor, PersistedSettings, SelectedSubtype, ToggleState};
use crate::parser::{
    parse_disabled_system_input_methods, parse_enabled_input_methods,
    serialize_disabled_system_input_methods, serialize_enabled_input_methods,
};
use crate::services::reconcile::{reconcile, ReconcileOutcome};
use crate::services::settings_store::SettingsStore;
use anyhow::Result;
use indexmap::IndexMap;
use serde::Serialize;
use tracing::debug;

/// Reads and decodes the persisted input method settings.
///
/// Missing values decode to empty collections; a missing or non-integer
/// selected subtype decodes to "none selected".
pub fn read_settings<S: SettingsStore + ?Sized>(store: &S) -> PersistedSettings {
    let enabled_str = store.get_string(keys::ENABLED_INPUT_METHODS);
    debug!("Load enabled input methods: {:?}", enabled_str);

    PersistedSettings {
        enabled: parse_enabled_input_methods(enabled_str.as_deref()),
        disabled_system: parse_disabled_system_input_methods(
            store
                .get_string(keys::DISABLED_SYSTEM_INPUT_METHODS)
                .as_deref(),
        ),
        current_input_method: store
            .get_string(keys::DEFAULT_INPUT_METHOD)
            .filter(|id| !id.is_empty()),
        selected_subtype: store
            .get_int(keys::SELECTED_INPUT_METHOD_SUBTYPE)
            .map_or(SelectedSubtype::None, SelectedSubtype::from_persisted),
    }
}

/// What a save wrote to the store.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SaveReport {
    /// Value written to `ENABLED_INPUT_METHODS`
    pub enabled_input_methods: String,
    /// Value written to `DISABLED_SYSTEM_INPUT_METHODS`, `None` if left untouched
    pub disabled_system_input_methods: Option<String>,
    /// Value written to `DEFAULT_INPUT_METHOD`
    pub default_input_method: String,
    /// Whether `SELECTED_INPUT_METHOD_SUBTYPE` was reset
    pub selected_subtype_reset: bool,
}

/// Reconciles checkbox state with the store and writes the result back.
///
/// Write rules:
/// - the selected subtype is reset to "none selected" when reconciliation asks for it
/// - `ENABLED_INPUT_METHODS` is always written
/// - `DISABLED_SYSTEM_INPUT_METHODS` is written only when non-empty
/// - `DEFAULT_INPUT_METHOD` is always written, empty when the current input
///   method is no longer enabled
pub fn save_input_method_subtype_list<S, F>(
    store: &mut S,
    input_methods: &[InputMethodDescriptor],
    toggles: &ToggleState,
    has_hard_keyboard: bool,
    is_always_enabled: F,
) -> Result<SaveReport>
where
    S: SettingsStore + ?Sized,
    F: Fn(&InputMethodDescriptor) -> bool,
{
    let settings = read_settings(&*store);
    let ReconcileOutcome {
        enabled,
        disabled_system,
        current_input_method,
        needs_subtype_reset,
    } = reconcile(
        input_methods,
        settings,
        toggles,
        has_hard_keyboard,
        is_always_enabled,
    );

    let enabled_str = serialize_enabled_input_methods(&enabled);
    let disabled_str = serialize_disabled_system_input_methods(&disabled_system);
    let default_str = current_input_method.unwrap_or_default();

    debug!("Save enabled input methods: {}", enabled_str);
    debug!("Save disabled system input methods: {}", disabled_str);
    debug!("Save default input method: {}", default_str);

    if needs_subtype_reset {
        debug!("Reset selected subtype");
        store.put_int(
            keys::SELECTED_INPUT_METHOD_SUBTYPE,
            SelectedSubtype::None.to_persisted(),
        )?;
    }

    store.put_string(keys::ENABLED_INPUT_METHODS, &enabled_str)?;
    let disabled_written = if disabled_str.is_empty() {
        None
    } else {
        store.put_string(keys::DISABLED_SYSTEM_INPUT_METHODS, &disabled_str)?;
        Some(disabled_str)
    };
    store.put_string(keys::DEFAULT_INPUT_METHOD, &default_str)?;

    Ok(SaveReport {
        enabled_input_methods: enabled_str,
        disabled_system_input_methods: disabled_written,
        default_input_method: default_str,
        selected_subtype_reset: needs_subtype_reset,
    })
}

/// Checkbox state a settings screen should display for the stored settings.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct SubtypeListView {
    /// Checked state of every input method and of the subtypes of enabled ones
    pub toggles: ToggleState,
    /// Whether each input method's subtype checkboxes accept input
    pub subtypes_enabled: IndexMap<String, bool>,
}

/// Projects stored settings onto checkboxes.
///
/// Input methods are checked when enabled. Subtypes of disabled input methods
/// are greyed out and carry no checked state; subtypes of enabled ones are
/// checked when their hash is stored.
pub fn load_input_method_subtype_list<S: SettingsStore + ?Sized>(
    store: &S,
    input_methods: &[InputMethodDescriptor],
) -> SubtypeListView {
    let enabled = read_settings(store).enabled;
    let mut view = SubtypeListView::default();

    for imi in input_methods {
        let is_enabled = enabled.contains(&imi.id);
        view.toggles.set_input_method(imi.id.as_str(), is_enabled);
        view.subtypes_enabled.insert(imi.id.clone(), is_enabled);

        // There is no need to check subtypes of disabled input methods.
        let Some(subtypes) = enabled.subtypes(&imi.id) else {
            continue;
        };
        for subtype in &imi.subtypes {
            let hash = subtype.hash_string();
            let checked = subtypes.contains(&hash);
            view.toggles.set_subtype(imi.id.as_str(), hash, checked);
        }
    }

    view
}
