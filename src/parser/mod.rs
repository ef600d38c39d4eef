//! Parsing and serialization of persisted settings values.
//!
//! This module handles the colon/semicolon delimited strings stored under
//! `ENABLED_INPUT_METHODS` and `DISABLED_SYSTEM_INPUT_METHODS`.

pub mod enabled_methods;

// Re-export commonly used functions
pub use enabled_methods::{
    parse_disabled_system_input_methods, parse_enabled_input_methods,
    serialize_disabled_system_input_methods, serialize_enabled_input_methods,
};
