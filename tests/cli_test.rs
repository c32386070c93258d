//! Integration tests for the labprobe CLI.
// The cargo_bin function is marked deprecated in favor of cargo_bin! macro,
// but both work correctly. Suppressing until assert_cmd stabilizes the new API.
#![allow(deprecated)]

use assert_cmd::cargo::cargo_bin;
use assert_cmd::Command;
use httpmock::prelude::*;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

fn setup_project(manifest: &str) -> TempDir {
    let temp = TempDir::new().unwrap();
    fs::write(temp.path().join("package.json"), manifest).unwrap();
    temp
}

#[test]
fn cli_shows_help() -> Result<(), Box<dyn std::error::Error>> {
    let mut cmd = Command::new(cargo_bin("labprobe"));
    cmd.arg("--help");
    cmd.assert().success().stdout(predicate::str::contains(
        "Python environment introspection",
    ));
    Ok(())
}

#[test]
fn cli_shows_version() -> Result<(), Box<dyn std::error::Error>> {
    let mut cmd = Command::new(cargo_bin("labprobe"));
    cmd.arg("--version");
    cmd.assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
    Ok(())
}

#[test]
fn cli_no_subcommand_fails_with_usage() -> Result<(), Box<dyn std::error::Error>> {
    let mut cmd = Command::new(cargo_bin("labprobe"));
    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("Usage"));
    Ok(())
}

#[test]
fn cli_invalid_command_fails() -> Result<(), Box<dyn std::error::Error>> {
    let mut cmd = Command::new(cargo_bin("labprobe"));
    cmd.arg("invalid-command");
    cmd.assert().failure();
    Ok(())
}

#[test]
fn package_version_prints_bare_version() -> Result<(), Box<dyn std::error::Error>> {
    let temp = setup_project(r#"{"name": "app", "version": "1.0.0"}"#);
    let mut cmd = Command::new(cargo_bin("labprobe"));
    cmd.current_dir(temp.path());
    cmd.arg("package-version");
    cmd.assert().success().stdout("1.0.0\n");
    Ok(())
}

#[test]
fn package_version_honors_path_flag() -> Result<(), Box<dyn std::error::Error>> {
    let temp = TempDir::new()?;
    fs::create_dir_all(temp.path().join("app"))?;
    fs::write(
        temp.path().join("app/package.json"),
        r#"{"version": "2.3.4"}"#,
    )?;

    let mut cmd = Command::new(cargo_bin("labprobe"));
    cmd.current_dir(temp.path());
    cmd.args(["package-version", "--path", "app/package.json"]);
    cmd.assert().success().stdout("2.3.4\n");
    Ok(())
}

#[test]
fn package_version_honors_project_flag() -> Result<(), Box<dyn std::error::Error>> {
    let temp = setup_project(r#"{"version": "5.6.7"}"#);
    let mut cmd = Command::new(cargo_bin("labprobe"));
    cmd.arg("--project").arg(temp.path()).arg("package-version");
    cmd.assert().success().stdout("5.6.7\n");
    Ok(())
}

#[test]
fn package_version_missing_manifest_fails() -> Result<(), Box<dyn std::error::Error>> {
    let temp = TempDir::new()?;
    let mut cmd = Command::new(cargo_bin("labprobe"));
    cmd.current_dir(temp.path());
    cmd.arg("package-version");
    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("Manifest not found"));
    Ok(())
}

#[test]
fn package_version_missing_field_fails() -> Result<(), Box<dyn std::error::Error>> {
    let temp = setup_project(r#"{"name": "app"}"#);
    let mut cmd = Command::new(cargo_bin("labprobe"));
    cmd.current_dir(temp.path());
    cmd.arg("package-version");
    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("No version field"));
    Ok(())
}

#[test]
fn latest_release_prints_first_stable_version() -> Result<(), Box<dyn std::error::Error>> {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(GET).path("/repos/jupyterlab/jupyterlab/releases");
        then.status(200).json_body(serde_json::json!([
            {"tag_name": "v4.1.0b2", "draft": false, "prerelease": true},
            {"tag_name": "v4.0.9", "draft": false, "prerelease": false}
        ]));
    });

    let mut cmd = Command::new(cargo_bin("labprobe"));
    cmd.env("GITHUB_TOKEN", "");
    cmd.args(["latest-release", "--api-url"]).arg(server.base_url());
    cmd.assert().success().stdout("4.0.9\n");
    Ok(())
}

#[test]
fn latest_release_all_prereleases_fails() -> Result<(), Box<dyn std::error::Error>> {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(GET).path("/repos/jupyterlab/jupyterlab/releases");
        then.status(200).json_body(serde_json::json!([
            {"tag_name": "v4.1.0b2", "draft": false, "prerelease": true}
        ]));
    });

    let mut cmd = Command::new(cargo_bin("labprobe"));
    cmd.env("GITHUB_TOKEN", "");
    cmd.args(["latest-release", "--api-url"]).arg(server.base_url());
    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("No stable release"));
    Ok(())
}

#[test]
fn latest_release_bad_tag_fails() -> Result<(), Box<dyn std::error::Error>> {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(GET).path("/repos/o/r/releases");
        then.status(200).json_body(serde_json::json!([
            {"tag_name": "3.2.1", "draft": false, "prerelease": false}
        ]));
    });

    let mut cmd = Command::new(cargo_bin("labprobe"));
    cmd.env("GITHUB_TOKEN", "");
    cmd.args(["latest-release", "--owner", "o", "--repo", "r", "--api-url"])
        .arg(server.base_url());
    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("does not start with v"));
    Ok(())
}

#[test]
fn env_info_reports_venv_as_json_line() -> Result<(), Box<dyn std::error::Error>> {
    let temp = TempDir::new()?;
    let prefix = temp.path().join("myenv");
    fs::create_dir_all(&prefix)?;
    fs::write(prefix.join("pyvenv.cfg"), "home = /usr/bin\nversion = 3.11.6\n")?;
    let sp = prefix.join("lib/python3.11/site-packages");
    fs::create_dir_all(sp.join("jupyterlab-4.0.9.dist-info"))?;

    let mut cmd = Command::new(cargo_bin("labprobe"));
    cmd.args(["env-info", "--prefix"]).arg(&prefix);
    let output = cmd.assert().success().get_output().stdout.clone();

    let line = String::from_utf8(output)?;
    let report: serde_json::Value = serde_json::from_str(line.trim())?;
    assert_eq!(report["type"], "venv");
    assert_eq!(report["name"], "myenv");
    assert_eq!(report["versions"]["jupyterlab"], "4.0.9");
    assert_eq!(report["versions"]["python"], "3.11.6");
    assert_eq!(report["versions"]["notebook"], "not-found");
    assert_eq!(report["defaultKernel"], "python3");
    Ok(())
}

#[test]
fn env_info_reports_conda_env() -> Result<(), Box<dyn std::error::Error>> {
    let temp = TempDir::new()?;
    let prefix = temp.path().join("envs").join("analysis");
    fs::create_dir_all(prefix.join("conda-meta"))?;

    let mut cmd = Command::new(cargo_bin("labprobe"));
    cmd.args(["env-info", "--prefix"]).arg(&prefix);
    let output = cmd.assert().success().get_output().stdout.clone();

    let report: serde_json::Value = serde_json::from_str(String::from_utf8(output)?.trim())?;
    assert_eq!(report["type"], "conda-env");
    assert_eq!(report["name"], "analysis");
    Ok(())
}

#[test]
fn env_info_missing_prefix_fails() -> Result<(), Box<dyn std::error::Error>> {
    let mut cmd = Command::new(cargo_bin("labprobe"));
    cmd.args(["env-info", "--prefix", "/nonexistent/prefix"]);
    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("Could not resolve"));
    Ok(())
}

#[test]
fn completions_generates_bash_script() -> Result<(), Box<dyn std::error::Error>> {
    let mut cmd = Command::new(cargo_bin("labprobe"));
    cmd.args(["completions", "bash"]);
    cmd.assert()
        .success()
        .stdout(predicate::str::contains("labprobe"));
    Ok(())
}

#[test]
fn cli_debug_flag_accepted() -> Result<(), Box<dyn std::error::Error>> {
    let temp = setup_project(r#"{"version": "1.0.0"}"#);
    let mut cmd = Command::new(cargo_bin("labprobe"));
    cmd.current_dir(temp.path());
    cmd.args(["--debug", "package-version"]);
    cmd.assert().success().stdout("1.0.0\n");
    Ok(())
}
