// src/exec/mod.rs

//! Process execution layer.
//!
//! This module launches external binaries on behalf of the compose driver
//! and relays their output, using `tokio::process::Command`.
//!
//! - [`tee`] provides the capture-and-forward writer wrapped around the
//!   invoking process's stdout/stderr.
//! - [`runner`] owns the single-shot execution flow: spawn, drain both
//!   streams concurrently, wait, report an [`ExecResult`].

pub mod runner;
pub mod tee;

pub use runner::{execute, ExecResult, ProcessError};
pub use tee::TeeWriter;
