// src/config/mod.rs

//! Configuration loading and validation for hookrun.
//!
//! Responsibilities:
//! - Define the TOML-backed data model (`model.rs`).
//! - Discover and load a config file from disk (`loader.rs`).
//! - Validate hook references and hook names (`validate.rs`).

pub mod loader;
pub mod model;
pub mod validate;

pub use loader::{discover_config, load_and_validate, load_from_path, CONFIG_FILE_NAME};
pub use model::ConfigFile;
pub use validate::validate_config;
