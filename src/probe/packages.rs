//! Installed package version discovery.
//!
//! Versions are read from installation metadata on disk rather than by
//! executing the interpreter: `.dist-info` directory names in
//! site-packages, with the conda-meta records as a fallback for packages
//! installed by conda (conda entries also carry dist-info, so the
//! fallback rarely fires). Packages that cannot be resolved report the
//! sentinel instead of failing the probe.

use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

use regex::Regex;

/// Packages whose versions are always reported.
pub const WATCHED_PACKAGES: &[&str] = &[
    "python",
    "jupyterlab",
    "notebook",
    "jupyter_core",
    "jupyter_server",
];

/// Reported version for a package that cannot be found.
pub const VERSION_SENTINEL: &str = "not-found";

/// Collect versions for every watched package under `prefix`.
pub fn package_versions(prefix: &Path) -> BTreeMap<String, String> {
    let installed = installed_versions(prefix);
    let python = python_version(prefix, &installed);

    let mut versions = BTreeMap::new();
    for package in WATCHED_PACKAGES {
        let version = if *package == "python" {
            python.clone()
        } else {
            installed.get(&normalize_name(package)).cloned()
        };
        versions.insert(
            package.to_string(),
            version.unwrap_or_else(|| VERSION_SENTINEL.to_string()),
        );
    }
    versions
}

/// Normalize a package name for comparison (PEP 503 style).
///
/// Lowercased, with `-` and `.` folded into `_` so that
/// `jupyter-server`, `jupyter.server` and `Jupyter_Server` all match.
fn normalize_name(name: &str) -> String {
    name.to_lowercase().replace(['-', '.'], "_")
}

/// Build a map of normalized package name to version from on-disk metadata.
fn installed_versions(prefix: &Path) -> BTreeMap<String, String> {
    let mut versions = BTreeMap::new();

    // conda-meta first so dist-info entries override them below.
    for (name, version) in conda_meta_versions(prefix) {
        versions.insert(name, version);
    }
    for dir in site_packages_dirs(prefix) {
        for (name, version) in dist_info_versions(&dir) {
            versions.insert(name, version);
        }
    }

    versions
}

/// Locate site-packages directories under the prefix.
///
/// Unix layouts nest them under `lib/pythonX.Y/`; Windows uses a flat
/// `Lib/site-packages`.
fn site_packages_dirs(prefix: &Path) -> Vec<PathBuf> {
    let mut dirs = Vec::new();

    let windows_layout = prefix.join("Lib").join("site-packages");
    if windows_layout.is_dir() {
        dirs.push(windows_layout);
    }

    let lib = prefix.join("lib");
    if let Ok(entries) = fs::read_dir(&lib) {
        for entry in entries.flatten() {
            let name = entry.file_name();
            if name.to_string_lossy().starts_with("python") {
                let candidate = entry.path().join("site-packages");
                if candidate.is_dir() {
                    dirs.push(candidate);
                }
            }
        }
    }

    dirs
}

/// Extract `(name, version)` pairs from `.dist-info` directory names.
fn dist_info_versions(site_packages: &Path) -> Vec<(String, String)> {
    // e.g. jupyterlab-4.0.9.dist-info, jupyter_server-2.12.1.dist-info
    let pattern = Regex::new(r"^(?P<name>.+)-(?P<version>[^-]+)\.dist-info$")
        .expect("dist-info pattern is valid");

    let Ok(entries) = fs::read_dir(site_packages) else {
        return Vec::new();
    };

    let mut found = Vec::new();
    for entry in entries.flatten() {
        if !entry.path().is_dir() {
            continue;
        }
        let file_name = entry.file_name();
        let name = file_name.to_string_lossy();
        if let Some(caps) = pattern.captures(&name) {
            found.push((
                normalize_name(&caps["name"]),
                caps["version"].to_string(),
            ));
        }
    }
    found
}

/// Extract `(name, version)` pairs from conda-meta record file names.
///
/// Records are named `<name>-<version>-<build>.json`; the name itself
/// may contain hyphens, so the split runs from the right.
fn conda_meta_versions(prefix: &Path) -> Vec<(String, String)> {
    let Ok(entries) = fs::read_dir(prefix.join("conda-meta")) else {
        return Vec::new();
    };

    let mut found = Vec::new();
    for entry in entries.flatten() {
        let file_name = entry.file_name();
        let name = file_name.to_string_lossy();
        let Some(stem) = name.strip_suffix(".json") else {
            continue;
        };
        let mut parts = stem.rsplitn(3, '-');
        let _build = parts.next();
        let version = parts.next();
        let package = parts.next();
        if let (Some(package), Some(version)) = (package, version) {
            found.push((normalize_name(package), version.to_string()));
        }
    }
    found
}

/// Determine the interpreter version itself.
///
/// venvs record it in `pyvenv.cfg`; conda installs carry a python
/// record in conda-meta. Anything else degrades to the sentinel via
/// the caller.
fn python_version(prefix: &Path, installed: &BTreeMap<String, String>) -> Option<String> {
    if let Some(version) = pyvenv_cfg_version(&prefix.join("pyvenv.cfg")) {
        return Some(version);
    }
    installed.get("python").cloned()
}

/// Read the `version` key out of a `pyvenv.cfg` file.
fn pyvenv_cfg_version(path: &Path) -> Option<String> {
    let content = fs::read_to_string(path).ok()?;
    for line in content.lines() {
        let Some((key, value)) = line.split_once('=') else {
            continue;
        };
        if key.trim() == "version" && !value.trim().is_empty() {
            return Some(value.trim().to_string());
        }
    }
    None
}
