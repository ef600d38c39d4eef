//! Application-wide constants.
//!
//! This module defines the application name and the fixed characters and
//! sentinels of the persisted input method settings format.

/// The display name of the application (human-readable, with proper capitalization).
pub const APP_NAME: &str = "IME Settings";

/// The binary name of the application (used in command examples, lowercase with hyphens).
pub const APP_BINARY_NAME: &str = "ime-settings";

/// Separates input method entries in `ENABLED_INPUT_METHODS` and
/// `DISABLED_SYSTEM_INPUT_METHODS`.
pub const INPUT_METHOD_SEPARATOR: char = ':';

/// Separates an input method id from its subtype hashes inside one entry.
pub const INPUT_METHOD_SUBTYPE_SEPARATOR: char = ';';

/// Value of `SELECTED_INPUT_METHOD_SUBTYPE` meaning "no subtype selected".
pub const NOT_A_SUBTYPE_ID: i32 = -1;

/// Persisted setting names, treated as opaque keys.
pub mod keys {
    /// Enabled input methods and their subtype hashes.
    pub const ENABLED_INPUT_METHODS: &str = "enabled_input_methods";
    /// System input methods the user disabled while a hardware keyboard was attached.
    pub const DISABLED_SYSTEM_INPUT_METHODS: &str = "disabled_system_input_methods";
    /// Id of the active input method, empty to let the platform choose.
    pub const DEFAULT_INPUT_METHOD: &str = "default_input_method";
    /// Hash of the active subtype, or [`super::NOT_A_SUBTYPE_ID`].
    pub const SELECTED_INPUT_METHOD_SUBTYPE: &str = "selected_input_method_subtype";
}
