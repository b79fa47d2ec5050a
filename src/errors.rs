// src/errors.rs

//! Crate-wide error types.
//!
//! Most code propagates `anyhow::Result` with context attached at the call
//! site; the enum below covers the domain errors the host creates itself
//! (they convert into `anyhow::Error` through `?`).

use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum HookrunError {
    #[error("no Hookrun.toml found in {0:?} or any parent directory")]
    ConfigNotFound(PathBuf),

    #[error("script '{0}' is not defined in Hookrun.toml")]
    ScriptNotFound(String),

    #[error("unknown hook '{0}' (expected \"change\", \"change-all\" or \"periodic\")")]
    UnknownHook(String),

    #[error("configuration error: {0}")]
    Config(String),
}

pub use anyhow::{Error, Result};
