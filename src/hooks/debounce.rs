// src/hooks/debounce.rs

//! Trailing-edge debouncing of trigger events.
//!
//! Editors and build tools touch files in bursts; without debouncing, every
//! save would kill and restart the script several times. Each hook gets its
//! own debouncer task: a burst of events arriving faster than the window
//! collapses into a single restart request carrying the *last* event of the
//! burst.
//!
//! The fire itself is an awaited send into the supervisor's bounded request
//! channel. The supervisor handles requests one at a time, so fires from
//! one hook are strictly ordered; if a new burst completes while an earlier
//! fire is still in flight, the follow-up fire queues behind it instead of
//! being dropped or duplicated.

use std::time::Duration;

use tokio::sync::mpsc;
use tracing::debug;

use crate::exec::SupervisorRequest;
use crate::hooks::kind::HookKind;
use crate::hooks::trigger::TriggerEvent;

/// Spawn the debouncer task for one hook and return the sender the hook
/// task feeds accepted events into.
///
/// Every incoming event resets the quiet window; when the window elapses
/// with nothing new, exactly one restart request is sent. The task exits
/// when the event sender or the supervisor's receiver is dropped.
pub fn spawn_debouncer(
    hook: HookKind,
    window: Duration,
    requests_tx: mpsc::Sender<SupervisorRequest>,
) -> mpsc::UnboundedSender<TriggerEvent> {
    let (event_tx, event_rx) = mpsc::unbounded_channel::<TriggerEvent>();

    tokio::spawn(async move {
        run_debouncer(hook, window, event_rx, requests_tx).await;
        debug!(hook = %hook, "debouncer task finished");
    });

    event_tx
}

async fn run_debouncer(
    hook: HookKind,
    window: Duration,
    mut events_rx: mpsc::UnboundedReceiver<TriggerEvent>,
    requests_tx: mpsc::Sender<SupervisorRequest>,
) {
    let mut pending: Option<TriggerEvent> = None;

    loop {
        match pending.take() {
            // Quiet: block until something happens.
            None => match events_rx.recv().await {
                Some(event) => pending = Some(event),
                None => break,
            },
            // An event is pending: wait out the window, restarting it on
            // every newer event.
            Some(event) => {
                tokio::select! {
                    next = events_rx.recv() => match next {
                        Some(next) => pending = Some(next),
                        // Shutdown while waiting out the window: the
                        // pending restart is moot, drop it.
                        None => {
                            debug!(hook = %hook, "event stream closed with pending event; discarding");
                            break;
                        }
                    },
                    _ = tokio::time::sleep(window) => {
                        let reason = format!("{} [{}]", event.reason(), hook);
                        debug!(hook = %hook, reason = %reason, "debounce window elapsed; requesting restart");
                        if requests_tx
                            .send(SupervisorRequest::Restart { reason })
                            .await
                            .is_err()
                        {
                            // Supervisor is gone; nothing left to restart.
                            break;
                        }
                    }
                }
            }
        }
    }
}
