//! Integration tests for the resolve and check commands.

use assert_cmd::Command;
use predicates::prelude::*;
use sitecfg_cli::cli::{CheckArgs, OutputFormat, ResolveArgs, SettingsArgs};
use sitecfg_cli::commands::{check, resolve};
use sitecfg_cli::CliError;
use sitecfg_config::ConfigError;
use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

fn project(settings: &str) -> TempDir {
    let temp = TempDir::new().unwrap();
    fs::write(temp.path().join("sitecfg.toml"), settings).unwrap();
    temp
}

fn settings_args(dir: &TempDir) -> SettingsArgs {
    SettingsArgs {
        config: None,
        slug: None,
        cwd: Some(dir.path().to_path_buf()),
    }
}

fn resolve_args(dir: &TempDir, mode: &str) -> ResolveArgs {
    ResolveArgs {
        settings: settings_args(dir),
        mode: Some(mode.to_string()),
        format: OutputFormat::Json,
    }
}

#[test]
fn resolve_production_from_settings_file() {
    let dir = project("project_slug = \"DAR-Actividad03\"\n");
    let config = resolve::resolve(&resolve_args(&dir, "production")).unwrap();

    assert_eq!(config.base_path(), "/DAR-Actividad03/");
    assert_eq!(config.output_dir(), std::path::Path::new("docs"));

    let json: serde_json::Value =
        serde_json::from_str(&resolve::render(&config, OutputFormat::Json).unwrap()).unwrap();
    assert_eq!(json["base"], "/DAR-Actividad03/");
    assert_eq!(json["outDir"], "docs");
    assert_eq!(json["plugins"][0]["name"], "vue");
}

#[test]
fn resolve_renders_toml() {
    let dir = project("project_slug = \"site\"\n");
    let config = resolve::resolve(&resolve_args(&dir, "development")).unwrap();
    let rendered = resolve::render(&config, OutputFormat::Toml).unwrap();

    assert!(rendered.contains("base = \"/\""));
    assert!(rendered.contains("outDir = \"docs\""));
    assert!(rendered.contains("[[plugins]]"));
}

#[test]
fn slug_flag_overrides_file() {
    let dir = project("project_slug = \"from-file\"\n");
    let mut args = resolve_args(&dir, "production");
    args.settings.slug = Some("from-flag".into());

    let config = resolve::resolve(&args).unwrap();
    assert_eq!(config.base_path(), "/from-flag/");
}

#[test]
fn missing_slug_is_rejected() {
    let dir = TempDir::new().unwrap();
    let result = resolve::resolve(&resolve_args(&dir, "development"));
    assert!(matches!(
        result,
        Err(CliError::Config(ConfigError::InvalidBasePath { .. }))
    ));
}

#[test]
fn explicit_missing_config_file() {
    let dir = TempDir::new().unwrap();
    let mut args = resolve_args(&dir, "production");
    args.settings.config = Some(PathBuf::from("custom.toml"));

    let result = resolve::resolve(&args);
    assert!(matches!(result, Err(CliError::FileNotFound(_))));
}

#[test]
fn check_reports_every_mode() {
    let dir = project(
        r#"
project_slug = "site"

[[plugins]]
name = "vue"

[[plugins]]
name = "vue-devtools"
when = "development"
"#,
    );

    let lines = check::check(&CheckArgs {
        settings: settings_args(&dir),
    })
    .unwrap();

    assert_eq!(
        lines,
        vec![
            "production: base=/site/ outDir=docs plugins=[vue]".to_string(),
            "development: base=/ outDir=docs plugins=[vue, vue-devtools]".to_string(),
        ]
    );
}

#[test]
fn check_rejects_escaping_output_dir() {
    let dir = project("project_slug = \"site\"\noutput_dir = \"../public\"\n");
    let result = check::check(&CheckArgs {
        settings: settings_args(&dir),
    });
    assert!(matches!(
        result,
        Err(CliError::Config(ConfigError::InvalidOutputPath { .. }))
    ));
}

#[test]
fn binary_uses_node_env() {
    let dir = project("project_slug = \"DAR-Actividad03\"\n");

    #[allow(deprecated)]
    let mut cmd = Command::cargo_bin("sitecfg").unwrap();
    cmd.current_dir(dir.path())
        .env("NODE_ENV", "production")
        .arg("resolve")
        .assert()
        .success()
        .stdout(predicate::str::contains("\"base\": \"/DAR-Actividad03/\""));
}

#[test]
fn binary_success_is_silent_on_stderr() {
    let dir = project("project_slug = \"DAR-Actividad03\"\n");

    #[allow(deprecated)]
    let mut cmd = Command::cargo_bin("sitecfg").unwrap();
    cmd.current_dir(dir.path())
        .env("NODE_ENV", "production")
        .env_remove("RUST_LOG")
        .arg("resolve")
        .assert()
        .success()
        .stdout(predicate::str::contains("\"outDir\": \"docs\""))
        .stderr(predicate::str::is_empty());
}

#[test]
fn binary_case_mismatch_is_development() {
    let dir = project("project_slug = \"DAR-Actividad03\"\n");

    #[allow(deprecated)]
    let mut cmd = Command::cargo_bin("sitecfg").unwrap();
    cmd.current_dir(dir.path())
        .env("NODE_ENV", "PRODUCTION")
        .arg("resolve")
        .assert()
        .success()
        .stdout(predicate::str::contains("\"base\": \"/\""));
}

#[test]
fn binary_fails_before_output_on_bad_base() {
    let dir = project(
        r#"
project_slug = "site"

[base_path]
production = { custom = "cdn" }
development = "root"
"#,
    );

    #[allow(deprecated)]
    let mut cmd = Command::cargo_bin("sitecfg").unwrap();
    cmd.current_dir(dir.path())
        .args(["resolve", "--mode", "development"])
        .assert()
        .failure()
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("must start with '/'"));
}
