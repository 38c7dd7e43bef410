// src/generate/module.rs

//! Model of one scaffolded integration.

use regex::Regex;
use serde::Serialize;

use crate::errors::{GenError, Result};

const NAME_PATTERN: &str = r"^[A-Za-z][A-Za-z0-9]*$";

/// A new "module" or "example" integration to scaffold.
///
/// Modules are reusable, publishable crates under `modules/`; examples are
/// copy-paste samples under `examples/` generated with `publish = false`.
#[derive(Debug, Clone, Serialize)]
pub struct ModuleSpec {
    /// Integration name as given on the command line.
    pub name: String,
    /// Optional mixed-casing override for the title (Mongodb -> MongoDB).
    pub title_name: Option<String>,
    /// Fully qualified Docker image, e.g. `redis:7-alpine`.
    pub image: String,
    /// Module (reusable crate) or example (sample crate).
    pub is_module: bool,
    /// Version of the container-testing library the scaffold depends on.
    pub library_version: String,
}

impl ModuleSpec {
    /// Lower-cased name; used as the directory and crate name.
    pub fn lower(&self) -> String {
        self.name.to_lowercase()
    }

    /// Title of the integration: the override if set, otherwise the name
    /// with its first character upper-cased.
    pub fn title(&self) -> String {
        if let Some(ref title) = self.title_name {
            return title.clone();
        }

        let lower = self.lower();
        let mut chars = lower.chars();
        match chars.next() {
            Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
            None => lower,
        }
    }

    /// Type name of the generated container handle, e.g. `RedisContainer`.
    pub fn container_type(&self) -> String {
        format!("{}Container", self.title())
    }

    /// Directory the scaffold lands in, relative to the repository root.
    pub fn parent_dir(&self) -> &'static str {
        if self.is_module { "modules" } else { "examples" }
    }

    /// Human-readable kind, used in docs and log output.
    pub fn kind(&self) -> &'static str {
        if self.is_module { "module" } else { "example" }
    }

    /// Check name and title against the allowed pattern.
    pub fn validate(&self) -> Result<()> {
        let pattern = Regex::new(NAME_PATTERN).map_err(|err| {
            GenError::ConfigError(format!("invalid name pattern {NAME_PATTERN}: {err}"))
        })?;

        if !pattern.is_match(&self.name) {
            return Err(GenError::InvalidName(self.name.clone()));
        }
        if let Some(ref title) = self.title_name {
            if !pattern.is_match(title) {
                return Err(GenError::InvalidTitle(title.clone()));
            }
        }
        Ok(())
    }
}
