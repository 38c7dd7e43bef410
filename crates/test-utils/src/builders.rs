#![allow(dead_code)]

use std::fs;
use std::path::Path;

use tc_devtools::generate::ProjectContext;
use tempfile::TempDir;

/// Builder for a scratch target-repository tree the generator runs
/// against: `mkdocs.yml`, `.github/dependabot.yml` and any pre-existing
/// module/example directories.
pub struct ProjectTreeBuilder {
    latest_version: String,
    modules: Vec<String>,
    examples: Vec<String>,
}

impl ProjectTreeBuilder {
    pub fn new() -> Self {
        Self {
            latest_version: "0.22.0".to_string(),
            modules: Vec::new(),
            examples: Vec::new(),
        }
    }

    pub fn with_latest_version(mut self, version: &str) -> Self {
        self.latest_version = version.to_string();
        self
    }

    pub fn with_module(mut self, name: &str) -> Self {
        self.modules.push(name.to_string());
        self
    }

    pub fn with_example(mut self, name: &str) -> Self {
        self.examples.push(name.to_string());
        self
    }

    pub fn build(self) -> ProjectTree {
        let dir = TempDir::new().expect("Failed to create scratch project dir");
        let root = dir.path();

        let mut example_pages = String::new();
        for name in &self.examples {
            example_pages.push_str(&format!("      - examples/{name}.md\n"));
        }
        let mut module_pages = String::new();
        for name in &self.modules {
            module_pages.push_str(&format!("      - modules/{name}.md\n"));
        }

        let mkdocs = format!(
            r#"site_name: container-testing library
nav:
  - Home: index.md
  - Examples:
      - examples/index.md
{example_pages}  - Modules:
      - modules/index.md
{module_pages}extra:
  latest_version: {version}
"#,
            version = self.latest_version,
        );
        fs::write(root.join("mkdocs.yml"), mkdocs).expect("Failed to write mkdocs.yml");

        let mut updates = String::new();
        let directories = self
            .examples
            .iter()
            .map(|n| format!("/examples/{n}"))
            .chain(self.modules.iter().map(|n| format!("/modules/{n}")));
        for directory in std::iter::once("/".to_string()).chain(directories) {
            updates.push_str(&format!(
                r#"  - package-ecosystem: cargo
    directory: {directory}
    schedule:
      interval: weekly
"#
            ));
        }
        let dependabot = format!("version: 2\nupdates:\n{updates}");
        fs::create_dir_all(root.join(".github")).expect("Failed to create .github dir");
        fs::write(root.join(".github").join("dependabot.yml"), dependabot)
            .expect("Failed to write dependabot.yml");

        for name in &self.examples {
            fs::create_dir_all(root.join("examples").join(name))
                .expect("Failed to create example dir");
        }
        for name in &self.modules {
            fs::create_dir_all(root.join("modules").join(name))
                .expect("Failed to create module dir");
        }

        ProjectTree { dir }
    }
}

impl Default for ProjectTreeBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// A scratch target repository on disk, removed on drop.
pub struct ProjectTree {
    dir: TempDir,
}

impl ProjectTree {
    pub fn root(&self) -> &Path {
        self.dir.path()
    }

    pub fn context(&self) -> ProjectContext {
        ProjectContext::new(self.root())
    }
}
