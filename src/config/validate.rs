// src/config/validate.rs

use std::collections::HashSet;

use anyhow::Result;

use crate::config::model::ConfigFile;
use crate::errors::HookrunError;
use crate::hooks::HookKind;

/// Run basic semantic validation against a loaded configuration.
///
/// This checks:
/// - every `[hooks]` key refers to a script defined in `[scripts]`
/// - every hook name parses to a known hook kind
/// - no hook is listed twice for the same script
///
/// It does **not** check that the command strings are runnable; that is only
/// observable at spawn time.
pub fn validate_config(cfg: &ConfigFile) -> Result<()> {
    for (script, hook_names) in cfg.hooks.iter() {
        if !cfg.scripts.contains_key(script) {
            return Err(HookrunError::Config(format!(
                "[hooks] entry '{script}' does not match any script in [scripts]"
            ))
            .into());
        }

        let mut seen = HashSet::new();
        for name in hook_names {
            let kind: HookKind = name.parse().map_err(HookrunError::UnknownHook)?;
            if !seen.insert(kind) {
                return Err(HookrunError::Config(format!(
                    "hook '{kind}' is listed more than once for script '{script}'"
                ))
                .into());
            }
        }
    }

    Ok(())
}
