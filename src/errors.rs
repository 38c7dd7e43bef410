// src/errors.rs

//! Crate-wide error aliases and helpers for the scaffolding generator.
//!
//! The compose/exec layer carries its own error types
//! ([`ProcessError`](crate::exec::ProcessError),
//! [`ComposeError`](crate::compose::ComposeError)); this enum covers the
//! generator pipeline.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum GenError {
    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("invalid name: {0}. Only alphanumerical characters are allowed (leading character must be a letter)")]
    InvalidName(String),

    #[error("invalid title: {0}. Only alphanumerical characters are allowed (leading character must be a letter)")]
    InvalidTitle(String),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("YAML parsing error: {0}")]
    YamlError(#[from] serde_yaml::Error),

    #[error("Template error: {0}")]
    TemplateError(#[from] tera::Error),

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

pub use anyhow::Error;
pub type Result<T> = std::result::Result<T, GenError>;
