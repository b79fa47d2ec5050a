// src/config/model.rs

use std::collections::BTreeMap;

use serde::Deserialize;

/// Top-level configuration as read from `Hookrun.toml`:
///
/// ```toml
/// [scripts]
/// build = "cargo build"
/// serve = "python -m http.server"
///
/// [hooks]
/// serve = ["change", "periodic"]
/// ```
///
/// `[scripts]` maps script names to shell command strings. `[hooks]` maps a
/// script name to the hooks registered for it; scripts without an entry run
/// once and exit.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ConfigFile {
    /// All scripts from `[scripts]`, keyed by script name.
    #[serde(default)]
    pub scripts: BTreeMap<String, String>,

    /// Hook names per script from `[hooks]`.
    #[serde(default)]
    pub hooks: BTreeMap<String, Vec<String>>,
}

impl ConfigFile {
    /// Look up the shell command for a script name.
    pub fn script(&self, name: &str) -> Option<&str> {
        self.scripts.get(name).map(String::as_str)
    }

    /// Hook names configured for a script; empty if none.
    pub fn hook_names(&self, name: &str) -> &[String] {
        self.hooks.get(name).map(Vec::as_slice).unwrap_or(&[])
    }
}
