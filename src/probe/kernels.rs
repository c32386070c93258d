//! Default kernel name discovery.
//!
//! Kernelspecs live under `share/jupyter/kernels/<name>/` in the
//! installation prefix. The default kernel name mirrors jupyter_client:
//! `python3` whenever it is available (or nothing can be read), otherwise
//! the alphabetically first installed kernelspec.

use std::fs;
use std::path::Path;

/// Fallback kernel name when no kernelspec can be resolved.
pub const DEFAULT_KERNEL: &str = "python3";

/// Determine the default kernel name for the installation at `prefix`.
///
/// This never fails; an unreadable or missing kernels directory degrades
/// to [`DEFAULT_KERNEL`].
pub fn default_kernel_name(prefix: &Path) -> String {
    let kernels_dir = prefix.join("share").join("jupyter").join("kernels");
    let Ok(entries) = fs::read_dir(&kernels_dir) else {
        tracing::debug!(dir = %kernels_dir.display(), "kernels directory unavailable");
        return DEFAULT_KERNEL.to_string();
    };

    let mut names: Vec<String> = entries
        .flatten()
        .filter(|e| e.path().is_dir())
        .map(|e| e.file_name().to_string_lossy().to_string())
        .collect();

    if names.is_empty() || names.iter().any(|n| n == DEFAULT_KERNEL) {
        return DEFAULT_KERNEL.to_string();
    }

    names.sort();
    names.remove(0)
}
