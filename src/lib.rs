//! IME Settings Library
//!
//! This library manages the persisted "enabled input methods and subtypes"
//! settings of a device: parsing and serializing the stored strings,
//! reconciling them with checkbox state, and writing them back through a
//! settings store.

// Module declarations
pub mod cli;
pub mod config;
pub mod constants;
pub mod models;
pub mod parser;
pub mod services;
