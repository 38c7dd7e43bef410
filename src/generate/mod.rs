// src/generate/mod.rs

//! Scaffolding generator.
//!
//! Produces the boilerplate for a new module or example integration of the
//! container-testing library from templates, then patches the surrounding
//! project files so the new integration is wired into docs and CI.
//!
//! - [`module`] models the integration being scaffolded.
//! - [`render`] writes the crate and docs files from embedded templates.
//! - [`mkdocs`] patches the docs-site config and exposes the latest
//!   published library version.
//! - [`workflow`] regenerates the CI workflow from the full list of
//!   integrations.
//! - [`dependabot`] registers the new crate for dependency updates.

pub mod dependabot;
pub mod mkdocs;
pub mod module;
pub mod render;
pub mod workflow;

pub use module::ModuleSpec;

use std::fs;
use std::path::{Path, PathBuf};

use crate::errors::Result;

/// Well-known paths inside the target library repository.
#[derive(Debug, Clone)]
pub struct ProjectContext {
    root: PathBuf,
}

impl ProjectContext {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root_dir(&self) -> &Path {
        &self.root
    }

    pub fn docs_dir(&self) -> PathBuf {
        self.root.join("docs")
    }

    pub fn mkdocs_config_file(&self) -> PathBuf {
        self.root.join("mkdocs.yml")
    }

    pub fn dependabot_config_file(&self) -> PathBuf {
        self.root.join(".github").join("dependabot.yml")
    }

    pub fn github_workflows_dir(&self) -> PathBuf {
        self.root.join(".github").join("workflows")
    }

    /// Names of existing example integrations, sorted.
    pub fn examples(&self) -> Result<Vec<String>> {
        list_dirs(&self.root.join("examples"))
    }

    /// Names of existing module integrations, sorted.
    pub fn modules(&self) -> Result<Vec<String>> {
        list_dirs(&self.root.join("modules"))
    }
}

fn list_dirs(dir: &Path) -> Result<Vec<String>> {
    let mut names = Vec::new();
    if !dir.is_dir() {
        return Ok(names);
    }
    for entry in fs::read_dir(dir)? {
        let entry = entry?;
        if entry.file_type()?.is_dir() {
            if let Some(name) = entry.file_name().to_str() {
                names.push(name.to_string());
            }
        }
    }
    names.sort();
    Ok(names)
}
