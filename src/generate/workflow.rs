// src/generate/workflow.rs

//! GitHub Actions workflow regeneration.
//!
//! The workflow is always rewritten from the full current list of
//! integrations, so adding one keeps every earlier entry in place.

use std::fs;
use std::path::Path;

use tera::{Context as TeraContext, Tera};
use tracing::debug;

use crate::errors::Result;

const WORKFLOW_FILE: &str = "ci.yml";
const WORKFLOW_TEMPLATE: &str = include_str!("../../templates/ci.yml.tera");

/// Render the CI workflow for the given integrations into
/// `<workflows_dir>/ci.yml`.
pub fn generate(workflows_dir: &Path, examples: &[String], modules: &[String]) -> Result<()> {
    let mut context = TeraContext::new();
    context.insert("examples", examples);
    context.insert("modules", modules);

    let rendered = Tera::one_off(WORKFLOW_TEMPLATE, &context, false)?;

    fs::create_dir_all(workflows_dir)?;
    let path = workflows_dir.join(WORKFLOW_FILE);
    fs::write(&path, rendered)?;
    debug!(path = %path.display(), "regenerated CI workflow");
    Ok(())
}
