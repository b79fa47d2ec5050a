// src/hooks/mod.rs

//! Hook registration and the trigger pipeline.
//!
//! A hook is a named re-run policy for a script. Each registered hook runs
//! as its own Tokio task that:
//! - owns a trigger source (filesystem watch or periodic timer),
//! - filters file-change events through the extension allow-list,
//! - debounces bursts into single restart requests,
//! - sends those requests into the supervisor's request channel.
//!
//! This module knows nothing about processes; it only turns external events
//! into [`SupervisorRequest::Restart`](crate::exec::SupervisorRequest)
//! messages.

pub mod debounce;
pub mod eligibility;
pub mod kind;
pub mod task;
pub mod trigger;

use std::time::Duration;

pub use debounce::spawn_debouncer;
pub use eligibility::{is_eligible, ELIGIBLE_EXTENSIONS};
pub use kind::HookKind;
pub use task::{spawn_hook, HookHandle, HookSpec};
pub use trigger::TriggerEvent;

/// Quiet period after the last trigger event before a restart fires.
pub const DEBOUNCE_WINDOW: Duration = Duration::from_millis(500);

/// Interval between ticks of the `periodic` hook. The first tick comes one
/// full interval after the hook is registered.
pub const PERIODIC_INTERVAL: Duration = Duration::from_secs(30);
