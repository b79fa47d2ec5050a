// src/cli.rs

//! CLI argument parsing using `clap`.

use clap::{Parser, ValueEnum};

use crate::hooks::{ELIGIBLE_EXTENSIONS, PERIODIC_INTERVAL};

/// Command-line arguments for `hookrun`.
#[derive(Debug, Clone, Parser)]
#[command(
    name = "hookrun",
    version,
    about = "Run project scripts and re-run them on file changes or timers.",
    long_about = None,
    after_long_help = help_footer()
)]
pub struct CliArgs {
    /// Name of the script to run, as defined in the [scripts] section of
    /// the config file.
    #[arg(value_name = "SCRIPT")]
    pub script: Option<String>,

    /// List all scripts with their commands and hooks, then exit.
    #[arg(long)]
    pub list: bool,

    /// Skip all hook registration; run the script once.
    #[arg(long)]
    pub no_hook: bool,

    /// Suppress per-run status lines and the clear-screen restart banner.
    #[arg(long)]
    pub no_console: bool,

    /// Always exit with code 0, regardless of the script's exit code.
    #[arg(long)]
    pub ignore_code: bool,

    /// Path to the config file (TOML).
    ///
    /// If omitted, `Hookrun.toml` is looked up in the current directory and
    /// its ancestors.
    #[arg(long, value_name = "PATH")]
    pub config: Option<String>,

    /// Logging level (error, warn, info, debug, trace).
    ///
    /// If omitted, `HOOKRUN_LOG` or a default level will be used.
    #[arg(long, value_enum, value_name = "LEVEL")]
    pub log_level: Option<LogLevel>,
}

/// Log level as exposed on the CLI.
#[derive(Debug, Copy, Clone, ValueEnum)]
pub enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

/// Convenience wrapper around `CliArgs::parse()`.
pub fn parse() -> CliArgs {
    CliArgs::parse()
}

/// Extra help section describing the available hooks and which file
/// extensions the change hooks react to.
fn help_footer() -> String {
    let extensions = ELIGIBLE_EXTENSIONS
        .iter()
        .map(|ext| format!(".{ext}"))
        .collect::<Vec<_>>()
        .join(", ");

    let lines = [
        "Hooks:".to_string(),
        "  change      Re-run the script when an eligible file in the working directory changes."
            .to_string(),
        "  change-all  Same as change, but also watches all subdirectories.".to_string(),
        format!(
            "  periodic    Re-run the script every {} seconds.",
            PERIODIC_INTERVAL.as_secs()
        ),
        String::new(),
        "Eligible file extensions:".to_string(),
        format!("  {extensions}"),
    ];

    lines.join("\n")
}
