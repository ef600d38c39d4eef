//! Data models for input methods, subtypes, and their persisted settings.
//!
//! This module contains the core data structures used throughout the application.
//! Models are independent of storage and of the CLI.

pub mod enabled;
pub mod input_method;
pub mod selection;
pub mod settings;
pub mod toggles;

// Re-export all model types
pub use enabled::{DisabledSystemSet, EnabledMap};
pub use input_method::{InputMethodDescriptor, InputMethodId, Subtype, SubtypeHash};
pub use selection::SelectedSubtype;
pub use settings::PersistedSettings;
pub use toggles::ToggleState;
