// src/exec/supervisor.rs

//! The process supervisor: single owner of the "current run" slot.
//!
//! All starts, kill-and-restarts and the final shutdown go through one task
//! and one request channel, so two hooks firing near-simultaneously can
//! never interleave their read-kill-start sequences: requests are handled
//! strictly one at a time.
//!
//! Kills are fire-and-forget. A restart sends the old run its cancel signal
//! and immediately starts the successor without waiting for the old process
//! to die; for a short moment both may be alive. Every run carries a
//! generation number, and exit reports from superseded generations are
//! recognized and dropped, so the brief overlap can never confuse the exit
//! policy.

use anyhow::{bail, Result};
use tokio::sync::{mpsc, oneshot};
use tracing::{debug, error, info};

use crate::exec::command::{spawn_run, RunExit, RunOutcome};
use crate::screen;

/// The script under supervision: its config name and shell command.
#[derive(Debug, Clone)]
pub struct ScriptSpec {
    pub name: String,
    pub cmd: String,
}

/// Requests the rest of the program sends into the supervisor.
#[derive(Debug)]
pub enum SupervisorRequest {
    /// Kill the current run (if any) and start a new one. `reason` is a
    /// human-readable description of what triggered the restart.
    Restart { reason: String },
    /// Kill the current run and end supervision with exit code 0.
    Shutdown,
}

/// Host-level policy for the supervised script.
#[derive(Debug, Clone)]
pub struct SupervisorOptions {
    /// Whether any hooks are registered. With hooks, a non-zero exit is
    /// only logged, because a future restart is expected.
    pub hooked: bool,
    /// Force exit code 0 for the final run.
    pub ignore_code: bool,
    /// Whether to print per-run status lines and the restart banner.
    pub console: bool,
}

/// One live invocation, as seen from the supervisor.
struct ActiveRun {
    generation: u64,
    cancel: oneshot::Sender<()>,
}

/// The supervisor task state. Construct with [`Supervisor::new`], then
/// drive with [`Supervisor::run`].
pub struct Supervisor {
    script: ScriptSpec,
    options: SupervisorOptions,
    requests_rx: mpsc::Receiver<SupervisorRequest>,
    exits_tx: mpsc::Sender<RunExit>,
    exits_rx: mpsc::Receiver<RunExit>,
    current: Option<ActiveRun>,
    generation: u64,
}

impl Supervisor {
    /// Create a supervisor for `script` and return it together with the
    /// request channel everything else uses to reach it.
    pub fn new(
        script: ScriptSpec,
        options: SupervisorOptions,
    ) -> (Self, mpsc::Sender<SupervisorRequest>) {
        let (requests_tx, requests_rx) = mpsc::channel::<SupervisorRequest>(16);
        let (exits_tx, exits_rx) = mpsc::channel::<RunExit>(16);

        let supervisor = Self {
            script,
            options,
            requests_rx,
            exits_tx,
            exits_rx,
            current: None,
            generation: 0,
        };

        (supervisor, requests_tx)
    }

    /// Start the initial run and process requests until a terminal
    /// condition: shutdown (exit code 0), or — when no hooks are registered
    /// — the script's own exit.
    ///
    /// With hooks registered this future only resolves through
    /// [`SupervisorRequest::Shutdown`].
    pub async fn run(mut self) -> Result<i32> {
        self.start_run();

        loop {
            tokio::select! {
                req = self.requests_rx.recv() => match req {
                    Some(SupervisorRequest::Restart { reason }) => self.handle_restart(&reason),
                    Some(SupervisorRequest::Shutdown) | None => {
                        info!("cleaning up");
                        self.kill_current();
                        return Ok(0);
                    }
                },
                Some(exit) = self.exits_rx.recv() => {
                    if let Some(code) = self.handle_exit(exit)? {
                        return Ok(code);
                    }
                }
            }
        }
    }

    /// Kill the predecessor (without waiting for it) and start a fresh run.
    fn handle_restart(&mut self, reason: &str) {
        if self.options.console {
            screen::clear();
            info!("{reason}");
        } else {
            debug!(script = %self.script.name, "restart: {reason}");
        }

        self.kill_current();
        self.start_run();
    }

    /// Send the current run its cancel signal, if one is live. Never
    /// blocks; the kill itself happens in the run's own task.
    fn kill_current(&mut self) {
        if let Some(run) = self.current.take() {
            if run.cancel.send(()).is_err() {
                debug!(generation = run.generation, "previous run already finished");
            }
        }
    }

    /// Spawn the next generation and make it current.
    fn start_run(&mut self) {
        self.generation += 1;
        let (cancel_tx, cancel_rx) = oneshot::channel::<()>();

        spawn_run(
            self.script.clone(),
            self.generation,
            self.exits_tx.clone(),
            cancel_rx,
        );

        self.current = Some(ActiveRun {
            generation: self.generation,
            cancel: cancel_tx,
        });
    }

    /// Apply the exit policy to a run's exit report.
    ///
    /// Returns `Some(code)` when the whole program should exit with that
    /// code.
    fn handle_exit(&mut self, exit: RunExit) -> Result<Option<i32>> {
        let current_generation = self.current.as_ref().map(|run| run.generation);
        if current_generation != Some(exit.generation) {
            debug!(generation = exit.generation, "ignoring exit report from superseded run");
            return Ok(None);
        }

        self.current = None;

        match exit.outcome {
            RunOutcome::Success => {
                if self.options.console {
                    info!(script = %self.script.name, "script exited with code 0");
                }
                if !self.options.hooked {
                    return Ok(Some(0));
                }
            }
            RunOutcome::Failed(code) => {
                if self.options.console {
                    error!(script = %self.script.name, exit_code = code, "script exited with non-zero code");
                }
                if !self.options.hooked {
                    let code = if self.options.ignore_code { 0 } else { code };
                    return Ok(Some(code));
                }
            }
            RunOutcome::SpawnFailed(err) => {
                error!(script = %self.script.name, error = %err, "could not start script");
                if !self.options.hooked {
                    bail!("could not start script '{}': {err}", self.script.name);
                }
            }
        }

        Ok(None)
    }
}
