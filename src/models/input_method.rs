//! Input method and subtype descriptors supplied by the platform.

use serde::{Deserialize, Serialize};

/// Opaque identifier of an installed input method.
pub type InputMethodId = String;

/// Decimal string form of a subtype's hash code, as persisted.
pub type SubtypeHash = String;

/// A locale/layout variant of an input method.
///
/// Only `hash_code` takes part in persistence. The labels are carried for
/// display in the CLI and are optional in descriptor files.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Subtype {
    /// Stable hash identifying this variant
    pub hash_code: i32,
    /// Locale tag (e.g., "en_US")
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub locale: Option<String>,
    /// Keyboard layout name (e.g., "qwerty")
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub layout: Option<String>,
}

impl Subtype {
    /// Creates a subtype with only a hash code.
    #[must_use]
    pub const fn new(hash_code: i32) -> Self {
        Self {
            hash_code,
            locale: None,
            layout: None,
        }
    }

    /// Sets the locale label.
    pub fn with_locale(mut self, locale: impl Into<String>) -> Self {
        self.locale = Some(locale.into());
        self
    }

    /// Returns the hash in its persisted string form.
    #[must_use]
    pub fn hash_string(&self) -> SubtypeHash {
        self.hash_code.to_string()
    }
}

/// Descriptor of one installed input method.
///
/// # Validation
///
/// - `id` must not contain `:` or `;` (not checked, see [`crate::parser`])
/// - `subtypes` are kept in platform enumeration order
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InputMethodDescriptor {
    /// Platform identifier (e.g., "com.example.latin/.LatinIME")
    pub id: InputMethodId,
    /// Whether the input method ships with the system image
    #[serde(default)]
    pub is_system: bool,
    /// Display label
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
    /// Subtypes in descriptor order
    #[serde(default)]
    pub subtypes: Vec<Subtype>,
}

impl InputMethodDescriptor {
    /// Creates a user-installed input method with no subtypes.
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            is_system: false,
            label: None,
            subtypes: Vec::new(),
        }
    }

    /// Marks the input method as system-provided.
    pub fn system(mut self) -> Self {
        self.is_system = true;
        self
    }

    /// Appends a subtype by hash code.
    pub fn with_subtype(mut self, hash_code: i32) -> Self {
        self.subtypes.push(Subtype::new(hash_code));
        self
    }

    /// Name shown to users, falling back to the id.
    #[must_use]
    pub fn display_name(&self) -> &str {
        self.label.as_deref().unwrap_or(&self.id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hash_string_keeps_sign() {
        assert_eq!(Subtype::new(-1_234).hash_string(), "-1234");
        assert_eq!(Subtype::new(42).hash_string(), "42");
    }

    #[test]
    fn test_descriptor_json_defaults() {
        let descriptor: InputMethodDescriptor =
            serde_json::from_str(r#"{"id": "com.example/.Ime"}"#).unwrap();
        assert!(!descriptor.is_system);
        assert!(descriptor.subtypes.is_empty());
        assert_eq!(descriptor.display_name(), "com.example/.Ime");
    }
}
