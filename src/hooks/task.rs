// src/hooks/task.rs

//! The per-hook task wiring a trigger source to the debouncer.

use std::path::PathBuf;
use std::time::Duration;

use tokio::sync::{mpsc, watch};
use tokio::task::JoinHandle;
use tracing::{debug, error, info};

use crate::exec::SupervisorRequest;
use crate::hooks::debounce::spawn_debouncer;
use crate::hooks::eligibility::is_eligible;
use crate::hooks::kind::HookKind;
use crate::hooks::trigger::{periodic, watch_directory, TriggerEvent};
use crate::hooks::{DEBOUNCE_WINDOW, PERIODIC_INTERVAL};

/// Everything needed to register one hook.
///
/// The window and interval default to the crate constants; tests shorten
/// them.
#[derive(Debug, Clone)]
pub struct HookSpec {
    pub kind: HookKind,
    /// Directory the change hooks watch (normally the working directory).
    pub root: PathBuf,
    pub debounce_window: Duration,
    pub periodic_interval: Duration,
}

impl HookSpec {
    pub fn new(kind: HookKind, root: impl Into<PathBuf>) -> Self {
        Self {
            kind,
            root: root.into(),
            debounce_window: DEBOUNCE_WINDOW,
            periodic_interval: PERIODIC_INTERVAL,
        }
    }
}

/// Completion handle for a registered hook.
///
/// The underlying task runs until shutdown is signalled or its trigger
/// source fails to set up; [`HookHandle::wait`] resolves in either case.
#[derive(Debug)]
pub struct HookHandle {
    pub kind: HookKind,
    handle: JoinHandle<()>,
}

impl HookHandle {
    /// Wait for the hook task to finish.
    pub async fn wait(self) {
        let _ = self.handle.await;
    }
}

/// Register one hook: spawn its task and return the completion handle.
///
/// `requests_tx` is the supervisor's request channel; `shutdown_rx` flips
/// to `true` when the whole program is shutting down, at which point the
/// task exits and the handle resolves.
pub fn spawn_hook(
    spec: HookSpec,
    requests_tx: mpsc::Sender<SupervisorRequest>,
    shutdown_rx: watch::Receiver<bool>,
) -> HookHandle {
    let kind = spec.kind;
    let handle = tokio::spawn(async move {
        run_hook(spec, requests_tx, shutdown_rx).await;
    });

    HookHandle { kind, handle }
}

async fn run_hook(
    spec: HookSpec,
    requests_tx: mpsc::Sender<SupervisorRequest>,
    mut shutdown_rx: watch::Receiver<bool>,
) {
    // Construct the trigger source. A setup failure kills only this hook;
    // the script and any other hooks keep running.
    let (watcher, mut events_rx) = match spec.kind {
        HookKind::Change | HookKind::ChangeAll => {
            let recursive = spec.kind == HookKind::ChangeAll;
            match watch_directory(&spec.root, recursive) {
                Ok((handle, rx)) => (Some(handle), rx),
                Err(err) => {
                    error!(hook = %spec.kind, error = %err, "could not register hook");
                    return;
                }
            }
        }
        HookKind::Periodic => (None, periodic(spec.periodic_interval)),
    };

    // Keep the watch alive for the lifetime of the loop.
    let _watcher = watcher;

    let debounce_tx = spawn_debouncer(spec.kind, spec.debounce_window, requests_tx);

    info!(hook = %spec.kind, "hook registered");

    loop {
        tokio::select! {
            event = events_rx.recv() => match event {
                Some(TriggerEvent::FileChanged { path }) => {
                    if is_eligible(&path) {
                        info!(hook = %spec.kind, "change: {}", path.display());
                        let _ = debounce_tx.send(TriggerEvent::FileChanged { path });
                    } else {
                        debug!(hook = %spec.kind, "ignoring change to {}", path.display());
                    }
                }
                Some(TriggerEvent::Tick) => {
                    let _ = debounce_tx.send(TriggerEvent::Tick);
                }
                None => break,
            },
            _ = shutdown_rx.changed() => break,
        }
    }

    debug!(hook = %spec.kind, "hook task exiting");
}
