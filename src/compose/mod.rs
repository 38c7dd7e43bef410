// src/compose/mod.rs

//! Compose-orchestration wrapper.
//!
//! [`LocalCompose`] builds the argument list and environment for the local
//! `docker-compose` binary (project name, compose file list) and delegates
//! the actual invocation to the [`exec`](crate::exec) layer. Failures are
//! returned as [`ComposeError`] values rather than aborting the calling
//! flow; the surfaced error keeps the captured output for diagnostics.

pub mod driver;

pub use driver::{ComposeError, LocalCompose};
