// src/hooks/kind.rs

use std::fmt;
use std::str::FromStr;

/// The hook kinds a script can register.
///
/// - `Change`: watch the working directory (top level only) for changes to
///   eligible files.
/// - `ChangeAll`: same, but watch all subdirectories too.
/// - `Periodic`: re-run on a fixed timer, regardless of file activity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HookKind {
    Change,
    ChangeAll,
    Periodic,
}

impl FromStr for HookKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "change" => Ok(HookKind::Change),
            "change-all" => Ok(HookKind::ChangeAll),
            "periodic" => Ok(HookKind::Periodic),
            other => Err(other.to_string()),
        }
    }
}

impl fmt::Display for HookKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            HookKind::Change => "change",
            HookKind::ChangeAll => "change-all",
            HookKind::Periodic => "periodic",
        };
        f.write_str(name)
    }
}
