// src/generate/dependabot.rs

//! Dependabot config patching.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::errors::Result;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DependabotConfig {
    pub version: u32,
    pub updates: Vec<UpdateEntry>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UpdateEntry {
    #[serde(rename = "package-ecosystem")]
    pub package_ecosystem: String,
    pub directory: String,
    pub schedule: Schedule,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Schedule {
    pub interval: String,
}

/// Register `directory` for `ecosystem` dependency updates, keeping the
/// update entries sorted by directory. No-op when an entry for the
/// directory and ecosystem already exists.
pub fn update_config(path: &Path, directory: &str, ecosystem: &str) -> Result<()> {
    let contents = fs::read_to_string(path)?;
    let mut config: DependabotConfig = serde_yaml::from_str(&contents)?;

    let exists = config
        .updates
        .iter()
        .any(|entry| entry.directory == directory && entry.package_ecosystem == ecosystem);
    if exists {
        return Ok(());
    }

    // New entries follow the schedule the existing entries use.
    let interval = config
        .updates
        .first()
        .map(|entry| entry.schedule.interval.clone())
        .unwrap_or_else(|| "weekly".to_string());

    config.updates.push(UpdateEntry {
        package_ecosystem: ecosystem.to_string(),
        directory: directory.to_string(),
        schedule: Schedule { interval },
    });
    config.updates.sort_by(|a, b| a.directory.cmp(&b.directory));

    fs::write(path, serde_yaml::to_string(&config)?)?;
    Ok(())
}
