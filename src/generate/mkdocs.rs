// src/generate/mkdocs.rs

//! Docs-site (`mkdocs.yml`) config reading and patching.
//!
//! The config is kept as a `serde_yaml::Value` round-trip so sections this
//! tool does not know about survive the rewrite.

use std::fs;
use std::path::Path;

use serde_yaml::Value;

use crate::errors::{GenError, Result};

#[derive(Debug, Clone)]
pub struct MkdocsConfig {
    value: Value,
}

impl MkdocsConfig {
    pub fn read(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path)?;
        let value: Value = serde_yaml::from_str(&contents)?;
        Ok(Self { value })
    }

    /// Latest published library version, from `extra.latest_version`.
    pub fn latest_version(&self) -> Option<&str> {
        self.value.get("extra")?.get("latest_version")?.as_str()
    }

    /// Insert `page` (a docs-relative path like `modules/redis.md`) into
    /// the nav section titled `section`, keeping pages sorted with any
    /// index entry first. No-op when the page is already listed.
    pub fn add_page(&mut self, section: &str, page: &str) -> Result<()> {
        let nav = self
            .value
            .get_mut("nav")
            .and_then(Value::as_sequence_mut)
            .ok_or_else(|| {
                GenError::ConfigError("mkdocs config has no nav section".to_string())
            })?;

        for item in nav.iter_mut() {
            let Some(pages) = item.get_mut(section).and_then(Value::as_sequence_mut) else {
                continue;
            };

            let new_page = Value::String(page.to_string());
            if pages.contains(&new_page) {
                return Ok(());
            }
            pages.push(new_page);
            sort_pages(pages);
            return Ok(());
        }

        Err(GenError::ConfigError(format!(
            "mkdocs nav has no {section} section"
        )))
    }

    pub fn write(&self, path: &Path) -> Result<()> {
        let rendered = serde_yaml::to_string(&self.value)?;
        fs::write(path, rendered)?;
        Ok(())
    }
}

/// Sort page paths alphabetically, keeping any `index.md` entry first.
fn sort_pages(pages: &mut Vec<Value>) {
    pages.sort_by_key(|page| {
        let path = page.as_str().unwrap_or_default().to_string();
        (!path.ends_with("index.md"), path)
    });
}
