// src/generate/render.rs

//! Template rendering for the scaffolded crate and docs files.

use std::fs;
use std::path::{Path, PathBuf};

use serde::Serialize;
use tera::{Context as TeraContext, Tera};
use tracing::debug;

use crate::errors::Result;
use crate::generate::module::ModuleSpec;
use crate::generate::ProjectContext;

const CARGO_TOML_TEMPLATE: &str = include_str!("../../templates/cargo.toml.tera");
const LIB_RS_TEMPLATE: &str = include_str!("../../templates/lib.rs.tera");
const TEST_RS_TEMPLATE: &str = include_str!("../../templates/test.rs.tera");
const DOCS_MD_TEMPLATE: &str = include_str!("../../templates/docs.md.tera");

/// Values interpolated into every scaffold template.
#[derive(Debug, Serialize)]
struct TemplateValues {
    lower: String,
    title: String,
    container_type: String,
    kind: String,
    parent_dir: String,
    image: String,
    image_name: String,
    image_tag: String,
    library_version: String,
    publish: bool,
}

impl TemplateValues {
    fn from_spec(spec: &ModuleSpec) -> Self {
        // A colon inside the last path segment separates the tag; one in a
        // registry host:port prefix does not.
        let (image_name, image_tag) = match spec.image.rsplit_once(':') {
            Some((name, tag)) if !tag.contains('/') => (name.to_string(), tag.to_string()),
            _ => (spec.image.clone(), "latest".to_string()),
        };

        Self {
            lower: spec.lower(),
            title: spec.title(),
            container_type: spec.container_type(),
            kind: spec.kind().to_string(),
            parent_dir: spec.parent_dir().to_string(),
            image: spec.image.clone(),
            image_name,
            image_tag,
            library_version: spec.library_version.clone(),
            publish: spec.is_module,
        }
    }
}

/// Render all scaffold files for `spec` under the project root, returning
/// the created paths: the crate's `Cargo.toml`, `src/lib.rs` and
/// integration test, plus the docs page.
pub fn scaffold(ctx: &ProjectContext, spec: &ModuleSpec) -> Result<Vec<PathBuf>> {
    let values = TemplateValues::from_spec(spec);
    let context = TeraContext::from_serialize(&values)?;

    let crate_dir = ctx.root_dir().join(spec.parent_dir()).join(spec.lower());
    let docs_file = ctx
        .docs_dir()
        .join(spec.parent_dir())
        .join(format!("{}.md", spec.lower()));

    let files = [
        (crate_dir.join("Cargo.toml"), CARGO_TOML_TEMPLATE),
        (crate_dir.join("src").join("lib.rs"), LIB_RS_TEMPLATE),
        (
            crate_dir.join("tests").join(format!("{}.rs", spec.lower())),
            TEST_RS_TEMPLATE,
        ),
        (docs_file, DOCS_MD_TEMPLATE),
    ];

    let mut created = Vec::new();
    for (path, template) in files {
        let rendered = Tera::one_off(template, &context, false)?;
        write_file(&path, &rendered)?;
        debug!(path = %path.display(), "rendered scaffold file");
        created.push(path);
    }
    Ok(created)
}

fn write_file(path: &Path, contents: &str) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    fs::write(path, contents)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn spec() -> ModuleSpec {
        ModuleSpec {
            name: "Redis".to_string(),
            title_name: None,
            image: "redis:7-alpine".to_string(),
            is_module: true,
            library_version: "0.22.0".to_string(),
        }
    }

    #[test]
    fn image_splits_into_name_and_tag() {
        let values = TemplateValues::from_spec(&spec());
        assert_eq!(values.image_name, "redis");
        assert_eq!(values.image_tag, "7-alpine");
    }

    #[test]
    fn untagged_image_defaults_to_latest() {
        let mut s = spec();
        s.image = "redis".to_string();
        let values = TemplateValues::from_spec(&s);
        assert_eq!(values.image_name, "redis");
        assert_eq!(values.image_tag, "latest");
    }

    #[test]
    fn registry_port_is_not_a_tag() {
        let mut s = spec();
        s.image = "localhost:5000/redis".to_string();
        let values = TemplateValues::from_spec(&s);
        assert_eq!(values.image_name, "localhost:5000/redis");
        assert_eq!(values.image_tag, "latest");
    }
}
