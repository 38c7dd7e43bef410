// src/cli.rs

//! CLI argument parsing using `clap`.

use std::path::PathBuf;

use clap::{Parser, ValueEnum};

/// Command-line arguments for `modulegen`.
#[derive(Debug, Clone, Parser)]
#[command(
    name = "modulegen",
    version,
    about = "Scaffold a new module or example integration for the container-testing library.",
    long_about = None
)]
pub struct CliArgs {
    /// Name of the integration. Only alphabetical characters are allowed.
    #[arg(long, value_name = "NAME")]
    pub name: String,

    /// Title override for mixed casing (e.g. Mongodb -> MongoDB).
    ///
    /// Use camel-case when needed. Only alphabetical characters are
    /// allowed.
    #[arg(long, value_name = "TITLE")]
    pub title: Option<String>,

    /// Fully-qualified name of the Docker image used by the integration.
    #[arg(long, value_name = "IMAGE")]
    pub image: String,

    /// Generate under the modules directory as a reusable module instead
    /// of under the examples directory.
    #[arg(long)]
    pub as_module: bool,

    /// Repository root of the target library.
    #[arg(long, value_name = "PATH", default_value = ".")]
    pub root: PathBuf,

    /// Logging level (error, warn, info, debug, trace).
    ///
    /// If omitted, `MODULEGEN_LOG` or a default level will be used.
    #[arg(long, value_enum, value_name = "LEVEL")]
    pub log_level: Option<LogLevel>,
}

/// Log level as exposed on the CLI.
#[derive(Debug, Copy, Clone, ValueEnum)]
pub enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

/// Convenience wrapper around `CliArgs::parse()`.
pub fn parse() -> CliArgs {
    CliArgs::parse()
}
