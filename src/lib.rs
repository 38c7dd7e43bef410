// src/lib.rs

pub mod cli;
pub mod compose;
pub mod errors;
pub mod exec;
pub mod generate;
pub mod logging;

use anyhow::Result;
use tracing::info;

use crate::cli::CliArgs;
use crate::errors::GenError;
use crate::generate::mkdocs::MkdocsConfig;
use crate::generate::{dependabot, render, workflow, ModuleSpec, ProjectContext};

/// High-level entry point used by `main.rs`.
///
/// This wires together:
/// - target-repo layout discovery
/// - scaffold rendering from templates
/// - CI workflow regeneration
/// - docs-site and dependabot config patching
pub fn run(args: CliArgs) -> Result<()> {
    let ctx = ProjectContext::new(&args.root);

    let mut mkdocs = MkdocsConfig::read(&ctx.mkdocs_config_file())?;
    let library_version = mkdocs
        .latest_version()
        .ok_or_else(|| {
            GenError::ConfigError("mkdocs config has no extra.latest_version".to_string())
        })?
        .to_string();

    let spec = ModuleSpec {
        name: args.name,
        title_name: args.title,
        image: args.image,
        is_module: args.as_module,
        library_version,
    };
    spec.validate()?;

    info!(name = %spec.lower(), kind = spec.kind(), "scaffolding integration");

    let created = render::scaffold(&ctx, &spec)?;

    // Rescan after rendering so CI covers the new directory as well.
    workflow::generate(&ctx.github_workflows_dir(), &ctx.examples()?, &ctx.modules()?)?;

    let section = if spec.is_module { "Modules" } else { "Examples" };
    let page = format!("{}/{}.md", spec.parent_dir(), spec.lower());
    mkdocs.add_page(section, &page)?;
    mkdocs.write(&ctx.mkdocs_config_file())?;

    dependabot::update_config(
        &ctx.dependabot_config_file(),
        &format!("/{}/{}", spec.parent_dir(), spec.lower()),
        "cargo",
    )?;

    println!(
        "Generated {} '{}' under {}:",
        spec.kind(),
        spec.lower(),
        ctx.root_dir().join(spec.parent_dir()).display()
    );
    for path in &created {
        println!("  {}", path.display());
    }
    println!("Commit the modified files and submit a pull request to include them into the project.");

    Ok(())
}
