// src/exec/command.rs

use tokio::process::Command;
use tokio::sync::{mpsc, oneshot};
use tracing::{debug, error, info, warn};

use crate::exec::supervisor::ScriptSpec;

/// How a single script invocation ended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RunOutcome {
    Success,
    Failed(i32), // exit code
    SpawnFailed(String),
}

/// Exit report for one script invocation.
///
/// `generation` identifies which invocation this belongs to; the supervisor
/// uses it to recognize and discard late reports from runs it has already
/// replaced.
#[derive(Debug, Clone)]
pub struct RunExit {
    pub generation: u64,
    pub outcome: RunOutcome,
}

/// Spawn one invocation of the script in its own Tokio task.
///
/// The child inherits the terminal, so the script's own output is visible
/// between status lines. Two things can end the invocation:
///
/// - the process exits on its own: a [`RunExit`] is sent on `exits_tx`;
/// - `cancel_rx` fires (the supervisor replaced or shut down this run): the
///   process is killed and **no** exit report is sent, so a superseded run
///   can never be mistaken for the current one.
pub fn spawn_run(
    script: ScriptSpec,
    generation: u64,
    exits_tx: mpsc::Sender<RunExit>,
    cancel_rx: oneshot::Receiver<()>,
) {
    tokio::spawn(async move {
        run_script(script, generation, exits_tx, cancel_rx).await;
        debug!(generation, "script runner future finished");
    });
}

async fn run_script(
    script: ScriptSpec,
    generation: u64,
    exits_tx: mpsc::Sender<RunExit>,
    mut cancel_rx: oneshot::Receiver<()>,
) {
    info!(script = %script.name, cmd = %script.cmd, generation, "starting script process");

    // Build a shell command appropriate for the platform.
    let mut cmd = if cfg!(windows) {
        let mut c = Command::new("cmd");
        c.arg("/C").arg(&script.cmd);
        c
    } else {
        let mut c = Command::new("sh");
        c.arg("-c").arg(&script.cmd);
        c
    };

    cmd.kill_on_drop(true);

    let mut child = match cmd.spawn() {
        Ok(child) => child,
        Err(err) => {
            error!(script = %script.name, error = %err, "failed to spawn script process");
            let _ = exits_tx
                .send(RunExit {
                    generation,
                    outcome: RunOutcome::SpawnFailed(err.to_string()),
                })
                .await;
            return;
        }
    };

    // Either the process exits on its own (normal case), or the supervisor
    // requests a kill because a newer run replaces this one.
    tokio::select! {
        status_res = child.wait() => {
            let outcome = match status_res {
                Ok(status) => {
                    let code = status.code().unwrap_or(-1);
                    info!(
                        script = %script.name,
                        generation,
                        exit_code = code,
                        success = status.success(),
                        "script process exited"
                    );
                    if status.success() {
                        RunOutcome::Success
                    } else {
                        RunOutcome::Failed(code)
                    }
                }
                Err(err) => {
                    error!(script = %script.name, generation, error = %err, "failed waiting for script process");
                    RunOutcome::Failed(-1)
                }
            };

            let _ = exits_tx.send(RunExit { generation, outcome }).await;
        }

        cancel = &mut cancel_rx => {
            match cancel {
                Ok(()) => {
                    info!(script = %script.name, generation, "kill requested; stopping script process");
                    if let Err(err) = child.kill().await {
                        warn!(script = %script.name, generation, error = %err, "failed to kill script process");
                    }
                    // Superseded instance: no exit report.
                }
                Err(err) => {
                    debug!(script = %script.name, generation, error = %err, "cancel channel closed without explicit kill");
                    // Child will be killed on drop due to kill_on_drop(true).
                }
            }
        }
    }
}
