//! Codec for the persisted input method list strings.
//!
//! Enabled input methods and subtypes are saved as
//! `ime0;subtype0;subtype1:ime1;subtype0:ime2:ime3;subtype0;subtype1`,
//! disabled system input methods as `ime0:ime1`.
//!
//! Ids and hashes containing `:` or `;` do not survive a round trip. This is
//! a property of the format and is not validated here.

use crate::constants::{INPUT_METHOD_SEPARATOR, INPUT_METHOD_SUBTYPE_SEPARATOR};
use crate::models::{DisabledSystemSet, EnabledMap};

/// Parses `ENABLED_INPUT_METHODS`.
///
/// Never fails: empty entries and entries with an empty id are skipped, empty
/// subtype tokens are dropped, and a repeated id replaces the earlier entry.
///
/// # Examples
/// ```
/// use ime_settings::parser::parse_enabled_input_methods;
///
/// let map = parse_enabled_input_methods(Some("ime1;10;11::ime2"));
/// assert_eq!(map.len(), 2);
/// assert!(map.subtypes("ime1").unwrap().contains("11"));
/// assert!(map.subtypes("ime2").unwrap().is_empty());
/// assert!(parse_enabled_input_methods(None).is_empty());
/// ```
#[must_use]
pub fn parse_enabled_input_methods(value: Option<&str>) -> EnabledMap {
    let mut map = EnabledMap::new();
    let Some(value) = value.filter(|v| !v.is_empty()) else {
        return map;
    };

    for entry in value.split(INPUT_METHOD_SEPARATOR) {
        let mut tokens = entry.split(INPUT_METHOD_SUBTYPE_SEPARATOR);
        // The first token is the input method id.
        let Some(id) = tokens.next().filter(|id| !id.is_empty()) else {
            continue;
        };
        map.insert(id, tokens.filter(|hash| !hash.is_empty()));
    }

    map
}

/// Parses `DISABLED_SYSTEM_INPUT_METHODS`. Empty tokens are dropped.
#[must_use]
pub fn parse_disabled_system_input_methods(value: Option<&str>) -> DisabledSystemSet {
    value
        .unwrap_or_default()
        .split(INPUT_METHOD_SEPARATOR)
        .filter(|id| !id.is_empty())
        .collect()
}

/// Serializes an [`EnabledMap`] in its iteration order.
#[must_use]
pub fn serialize_enabled_input_methods(map: &EnabledMap) -> String {
    let mut builder = String::new();
    for (index, (id, subtypes)) in map.iter().enumerate() {
        if index > 0 {
            builder.push(INPUT_METHOD_SEPARATOR);
        }
        builder.push_str(id);
        for hash in subtypes {
            builder.push(INPUT_METHOD_SUBTYPE_SEPARATOR);
            builder.push_str(hash);
        }
    }
    builder
}

/// Serializes a [`DisabledSystemSet`]. An empty set yields an empty string.
#[must_use]
pub fn serialize_disabled_system_input_methods(set: &DisabledSystemSet) -> String {
    let mut builder = String::new();
    for (index, id) in set.iter().enumerate() {
        if index > 0 {
            builder.push(INPUT_METHOD_SEPARATOR);
        }
        builder.push_str(id);
    }
    builder
}
