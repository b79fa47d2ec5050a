// src/hooks/trigger.rs

//! Trigger sources: filesystem watches and the periodic timer.
//!
//! Each source produces [`TriggerEvent`]s into an unbounded channel; the
//! hook task consumes them. The notify callback runs on a non-async thread,
//! so events are bridged into the async world through the channel rather
//! than handled in place.

use std::path::{Path, PathBuf};
use std::time::Duration;

use anyhow::{Context, Result};
use notify::{Config, Event, EventKind, RecommendedWatcher, RecursiveMode, Watcher};
use tokio::sync::mpsc;
use tracing::debug;

/// A single observed occurrence that may lead to a restart.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TriggerEvent {
    /// A file under the watched directory was created, written, or renamed.
    FileChanged { path: PathBuf },
    /// The periodic timer elapsed.
    Tick,
}

impl TriggerEvent {
    /// Human-readable description of why a restart would fire, surfaced in
    /// the restart banner.
    pub fn reason(&self) -> String {
        match self {
            TriggerEvent::FileChanged { path } => {
                format!("Changes were detected in {}", path.display())
            }
            TriggerEvent::Tick => "Periodic rerun".to_string(),
        }
    }
}

/// Handle for a filesystem watch.
///
/// This exists mainly so the underlying `RecommendedWatcher` is kept alive
/// for as long as needed. Dropping this handle stops file watching.
pub struct WatcherHandle {
    _inner: RecommendedWatcher,
}

impl std::fmt::Debug for WatcherHandle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("WatcherHandle").finish()
    }
}

/// Start watching `root` for file changes and return the live handle plus
/// the event stream.
///
/// - `recursive` selects between watching only the top-level directory and
///   watching the whole tree under it.
/// - Setup failures (missing directory, permission denied) are returned as
///   an error here; once this function returns `Ok`, the watch produces
///   events until the handle is dropped.
pub fn watch_directory(
    root: &Path,
    recursive: bool,
) -> Result<(WatcherHandle, mpsc::UnboundedReceiver<TriggerEvent>)> {
    let (event_tx, event_rx) = mpsc::unbounded_channel::<TriggerEvent>();

    // Closure called synchronously by notify whenever an event arrives.
    let mut watcher = RecommendedWatcher::new(
        move |res: notify::Result<Event>| match res {
            Ok(event) => {
                if !is_change(&event.kind) {
                    return;
                }
                for path in event.paths {
                    // Send failure means the hook task is gone; the watcher
                    // is about to be dropped with it.
                    let _ = event_tx.send(TriggerEvent::FileChanged { path });
                }
            }
            Err(err) => {
                eprintln!("hookrun: file watch error: {err}");
            }
        },
        Config::default(),
    )
    .context("creating filesystem watcher")?;

    let mode = if recursive {
        RecursiveMode::Recursive
    } else {
        RecursiveMode::NonRecursive
    };

    watcher
        .watch(root, mode)
        .with_context(|| format!("watching directory {:?}", root))?;

    debug!(?root, recursive, "file watch established");

    Ok((WatcherHandle { _inner: watcher }, event_rx))
}

/// Accept creates, writes and renames; ignore reads and metadata-only noise.
fn is_change(kind: &EventKind) -> bool {
    matches!(kind, EventKind::Create(_) | EventKind::Modify(_))
}

/// Start a timer that emits a [`TriggerEvent::Tick`] every `interval`,
/// starting one full interval from now.
///
/// The timer task exits when the receiving side is dropped.
pub fn periodic(interval: Duration) -> mpsc::UnboundedReceiver<TriggerEvent> {
    let (event_tx, event_rx) = mpsc::unbounded_channel::<TriggerEvent>();

    tokio::spawn(async move {
        loop {
            tokio::time::sleep(interval).await;
            if event_tx.send(TriggerEvent::Tick).is_err() {
                break;
            }
        }
    });

    event_rx
}
