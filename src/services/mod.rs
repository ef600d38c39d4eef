//! Service layer for business logic.
//!
//! This module contains the reconciliation pass and the adapters that connect
//! it to persisted settings.

pub mod reconcile;
pub mod settings_store;
pub mod subtype_list;

// Re-export commonly used types and functions
pub use reconcile::{reconcile, ReconcileOutcome};
pub use settings_store::{FileSettings, MemorySettings, SettingsStore};
pub use subtype_list::{
    load_input_method_subtype_list, read_settings, save_input_method_subtype_list, SaveReport,
    SubtypeListView,
};
