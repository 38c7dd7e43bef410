// tests/modulegen_scaffold.rs

//! Full generator pipeline against a scratch target repository.

mod common;
use crate::common::init_tracing;

use std::fs;
use std::path::PathBuf;

use tc_devtools::cli::CliArgs;
use tc_devtools::run;
use tc_devtools_test_utils::builders::ProjectTreeBuilder;

fn args(root: PathBuf, name: &str, title: Option<&str>, as_module: bool) -> CliArgs {
    CliArgs {
        name: name.to_string(),
        title: title.map(str::to_string),
        image: "confluentinc/cp-kafka:7.5.0".to_string(),
        as_module,
        root,
        log_level: None,
    }
}

#[test]
fn scaffolds_module_and_patches_project_files() {
    init_tracing();

    let tree = ProjectTreeBuilder::new()
        .with_module("redis")
        .with_example("postgres")
        .build();

    run(args(tree.root().to_path_buf(), "Kafka", None, true)).unwrap();

    let crate_dir = tree.root().join("modules").join("kafka");
    assert!(crate_dir.join("Cargo.toml").is_file());
    assert!(crate_dir.join("tests").join("kafka.rs").is_file());
    assert!(tree.root().join("docs/modules/kafka.md").is_file());

    let lib = fs::read_to_string(crate_dir.join("src").join("lib.rs")).unwrap();
    assert!(lib.contains("pub struct KafkaContainer"));
    assert!(lib.contains(r#"const IMAGE: &str = "confluentinc/cp-kafka";"#));
    assert!(lib.contains(r#"const TAG: &str = "7.5.0";"#));

    // The latest published library version flows into the scaffold.
    let manifest = fs::read_to_string(crate_dir.join("Cargo.toml")).unwrap();
    assert!(manifest.contains(r#"testcontainers = { version = "0.22.0" }"#));
    assert!(!manifest.contains("publish = false"));

    let mkdocs = fs::read_to_string(tree.root().join("mkdocs.yml")).unwrap();
    assert!(mkdocs.contains("modules/kafka.md"));

    let dependabot = fs::read_to_string(tree.root().join(".github/dependabot.yml")).unwrap();
    assert!(dependabot.contains("/modules/kafka"));

    let workflow = fs::read_to_string(tree.root().join(".github/workflows/ci.yml")).unwrap();
    assert!(workflow.contains("- kafka"));
    assert!(workflow.contains("- redis"));
    assert!(workflow.contains("- postgres"));
}

#[test]
fn example_scaffold_is_unpublishable_and_documented_under_examples() {
    init_tracing();

    let tree = ProjectTreeBuilder::new().build();

    run(args(tree.root().to_path_buf(), "mongodb", Some("MongoDB"), false)).unwrap();

    let crate_dir = tree.root().join("examples").join("mongodb");
    let manifest = fs::read_to_string(crate_dir.join("Cargo.toml")).unwrap();
    assert!(manifest.contains("publish = false"));

    let lib = fs::read_to_string(crate_dir.join("src").join("lib.rs")).unwrap();
    assert!(lib.contains("pub struct MongoDBContainer"));

    let mkdocs = fs::read_to_string(tree.root().join("mkdocs.yml")).unwrap();
    assert!(mkdocs.contains("examples/mongodb.md"));
    assert!(tree.root().join("docs/examples/mongodb.md").is_file());
}

#[test]
fn invalid_name_aborts_before_any_file_is_written() {
    init_tracing();

    let tree = ProjectTreeBuilder::new().build();

    let err = run(args(tree.root().to_path_buf(), "my-module", None, true)).unwrap_err();
    assert!(err.to_string().contains("invalid name"));

    assert!(!tree.root().join("modules").join("my-module").exists());
    assert!(!tree.root().join(".github/workflows/ci.yml").exists());
}

#[test]
fn rerunning_the_generator_is_idempotent_for_project_files() {
    init_tracing();

    let tree = ProjectTreeBuilder::new().build();

    run(args(tree.root().to_path_buf(), "redis", None, true)).unwrap();
    run(args(tree.root().to_path_buf(), "redis", None, true)).unwrap();

    let mkdocs = fs::read_to_string(tree.root().join("mkdocs.yml")).unwrap();
    assert_eq!(mkdocs.matches("modules/redis.md").count(), 1);

    let dependabot = fs::read_to_string(tree.root().join(".github/dependabot.yml")).unwrap();
    assert_eq!(dependabot.matches("/modules/redis").count(), 1);
}
