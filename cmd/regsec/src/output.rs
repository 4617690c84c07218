//! Manifest file output helpers.

use anyhow::{Context, Result};
use std::fs;
use std::path::{Path, PathBuf};

/// Return `path` with its extension replaced by `.yaml` unless it
/// already ends in `.yaml` or `.yml` (case-insensitive).
pub fn ensure_yaml_ext(path: &Path) -> PathBuf {
    match path.extension().and_then(|ext| ext.to_str()) {
        Some(ext) if ext.eq_ignore_ascii_case("yaml") || ext.eq_ignore_ascii_case("yml") => {
            path.to_path_buf()
        }
        _ => path.with_extension("yaml"),
    }
}

/// Write a rendered manifest to `path`.
pub fn write_manifest(path: &Path, manifest: &str) -> Result<()> {
    fs::write(path, manifest).with_context(|| format!("failed to write {}", path.display()))
}
