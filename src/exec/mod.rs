// src/exec/mod.rs

//! Process execution layer.
//!
//! This module owns the supervised script process, using
//! `tokio::process::Command`.
//!
//! - [`command`] runs a single script invocation and reports its exit back
//!   to the supervisor.
//! - [`supervisor`] is the single task that owns the "current run" slot and
//!   serializes every start / kill-and-restart / shutdown against it.

pub mod command;
pub mod supervisor;

pub use command::{RunExit, RunOutcome};
pub use supervisor::{ScriptSpec, Supervisor, SupervisorOptions, SupervisorRequest};
