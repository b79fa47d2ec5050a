// src/lib.rs

pub mod cli;
pub mod config;
pub mod errors;
pub mod exec;
pub mod hooks;
pub mod logging;
pub mod screen;

use std::path::{Path, PathBuf};

use anyhow::{anyhow, Context, Result};
use tokio::sync::{mpsc, watch};
use tracing::info;

use crate::cli::CliArgs;
use crate::config::{discover_config, load_and_validate, ConfigFile};
use crate::errors::HookrunError;
use crate::exec::{ScriptSpec, Supervisor, SupervisorOptions, SupervisorRequest};
use crate::hooks::{spawn_hook, HookHandle, HookKind, HookSpec};

/// High-level entry point used by `main.rs`.
///
/// This wires together:
/// - config discovery and loading
/// - the supervisor task for the chosen script
/// - one hook task per configured hook
/// - signal handling for a clean shutdown
///
/// Returns the process exit code.
pub async fn run(args: CliArgs) -> Result<i32> {
    let config_path = match &args.config {
        Some(path) => PathBuf::from(path),
        None => {
            let cwd = std::env::current_dir().context("resolving current directory")?;
            discover_config(&cwd)?
        }
    };
    let cfg = load_and_validate(&config_path)?;

    if args.list {
        print_script_list(&cfg, &config_path);
        return Ok(0);
    }

    let name = args
        .script
        .clone()
        .ok_or_else(|| anyhow!("no script name given (use --list to see what is available)"))?;
    let cmd = cfg
        .script(&name)
        .ok_or_else(|| HookrunError::ScriptNotFound(name.clone()))?
        .to_string();

    let hook_kinds: Vec<HookKind> = if args.no_hook {
        info!("ignoring hooks");
        Vec::new()
    } else {
        cfg.hook_names(&name)
            .iter()
            .map(|s| s.parse().map_err(HookrunError::UnknownHook))
            .collect::<Result<_, _>>()?
    };

    let options = SupervisorOptions {
        hooked: !hook_kinds.is_empty(),
        ignore_code: args.ignore_code,
        console: !args.no_console,
    };
    let console = options.console;

    let (supervisor, requests_tx) = Supervisor::new(ScriptSpec { name: name.clone(), cmd }, options);

    // Termination signals → clean shutdown of supervisor and hooks.
    let (shutdown_tx, shutdown_rx) = watch::channel(false);
    spawn_signal_listener(requests_tx.clone(), shutdown_tx);

    // Hooks watch the directory hookrun was invoked from, not the config's.
    let root = std::env::current_dir().context("resolving current directory")?;

    if !hook_kinds.is_empty() {
        if console {
            screen::clear();
        }
        let names: Vec<String> = hook_kinds.iter().map(ToString::to_string).collect();
        info!(script = %name, "running with hooks: {:?}", names);
    }

    let hook_handles: Vec<HookHandle> = hook_kinds
        .iter()
        .map(|&kind| {
            spawn_hook(
                HookSpec::new(kind, root.clone()),
                requests_tx.clone(),
                shutdown_rx.clone(),
            )
        })
        .collect();
    drop(requests_tx);

    // Terminal conditions: signal-driven shutdown (always 0), or — with no
    // hooks — the script's own exit code. With hooks and no signal this
    // blocks forever, which is the point of supervision.
    let code = supervisor.run().await?;

    for handle in hook_handles {
        handle.wait().await;
    }

    Ok(code)
}

/// Wait for a termination signal, then drive the shutdown: kill the current
/// run via the supervisor and flip the flag every hook task watches.
fn spawn_signal_listener(
    requests_tx: mpsc::Sender<SupervisorRequest>,
    shutdown_tx: watch::Sender<bool>,
) {
    tokio::spawn(async move {
        wait_for_termination_signal().await;
        info!("termination signal received; cleaning up");
        let _ = shutdown_tx.send(true);
        let _ = requests_tx.send(SupervisorRequest::Shutdown).await;
    });
}

#[cfg(unix)]
async fn wait_for_termination_signal() {
    use tokio::signal::unix::{signal, SignalKind};

    match signal(SignalKind::terminate()) {
        Ok(mut term) => {
            tokio::select! {
                res = tokio::signal::ctrl_c() => {
                    if let Err(err) = res {
                        eprintln!("failed to listen for Ctrl+C: {err}");
                    }
                }
                _ = term.recv() => {}
            }
        }
        Err(_) => {
            if let Err(err) = tokio::signal::ctrl_c().await {
                eprintln!("failed to listen for Ctrl+C: {err}");
            }
        }
    }
}

#[cfg(not(unix))]
async fn wait_for_termination_signal() {
    if let Err(err) = tokio::signal::ctrl_c().await {
        eprintln!("failed to listen for Ctrl+C: {err}");
    }
}

/// Plain listing of all scripts with their commands and hooks.
fn print_script_list(cfg: &ConfigFile, path: &Path) {
    println!("hookrun scripts from {}", path.display());
    println!();

    println!("scripts ({}):", cfg.scripts.len());
    for (name, cmd) in cfg.scripts.iter() {
        println!("  - {name}");
        println!("      cmd: {cmd}");
        let hooks = cfg.hook_names(name);
        if !hooks.is_empty() {
            println!("      hooks: {:?}", hooks);
        }
    }
}
