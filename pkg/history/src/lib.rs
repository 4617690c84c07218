//! Persisted input history for registries, namespaces, and secret names.
//!
//! Entries a user has submitted before are kept so they can be listed
//! again later. The history lives as YAML in the user config directory
//! and is capped at 100 entries per list.

use anyhow::{Context, Result};
use pkg_constants::history::MAX_HISTORY;
use pkg_constants::paths::{CONFIG_DIR_NAME, HISTORY_FILENAME};
use pkg_types::validate::validate_name;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

// --- History lists ---

/// Previously used inputs, oldest first.
///
/// Example `history.yaml`:
/// ```yaml
/// registries:
/// - docker.io
/// - ghcr.io
/// namespaces:
/// - staging
/// names:
/// - my-pull-secret
/// ```
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct History {
    #[serde(default)]
    pub registries: Vec<String>,
    #[serde(default)]
    pub namespaces: Vec<String>,
    #[serde(default)]
    pub names: Vec<String>,
}

impl History {
    /// Record a registry. Blank values are ignored.
    pub fn add_registry(&mut self, registry: &str) {
        push_value(&mut self.registries, registry);
    }

    /// Record a namespace. Values that fail Kubernetes name validation
    /// are ignored.
    pub fn add_namespace(&mut self, namespace: &str) {
        if validate_name(namespace).is_ok() {
            push_value(&mut self.namespaces, namespace);
        }
    }

    /// Record a secret name. Values that fail Kubernetes name validation
    /// are ignored.
    pub fn add_name(&mut self, name: &str) {
        if validate_name(name).is_ok() {
            push_value(&mut self.names, name);
        }
    }

    /// Sorted copy of the recorded registries.
    pub fn sorted_registries(&self) -> Vec<String> {
        sorted(&self.registries)
    }

    /// Sorted copy of the recorded namespaces.
    pub fn sorted_namespaces(&self) -> Vec<String> {
        sorted(&self.namespaces)
    }

    /// Sorted copy of the recorded secret names.
    pub fn sorted_names(&self) -> Vec<String> {
        sorted(&self.names)
    }

    pub fn clear(&mut self) {
        self.registries.clear();
        self.namespaces.clear();
        self.names.clear();
    }

    pub fn is_empty(&self) -> bool {
        self.registries.is_empty() && self.namespaces.is_empty() && self.names.is_empty()
    }
}

/// Append `value` unless blank or already present. Once a list grows
/// past `MAX_HISTORY` the oldest entry is dropped.
fn push_value(list: &mut Vec<String>, value: &str) {
    if value.trim().is_empty() {
        return;
    }
    if list.iter().any(|v| v == value) {
        return;
    }
    list.push(value.to_string());
    if list.len() > MAX_HISTORY {
        list.remove(0);
    }
}

fn sorted(list: &[String]) -> Vec<String> {
    let mut copy = list.to_vec();
    copy.sort();
    copy
}

// --- Persistence ---

/// Default location of the history file: `<config dir>/regsec/history.yaml`.
/// Returns `None` when the platform has no user config directory.
pub fn default_history_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join(CONFIG_DIR_NAME).join(HISTORY_FILENAME))
}

/// Load history from `path`, returning the default if the file doesn't exist.
pub fn load_history(path: &Path) -> Result<History> {
    let content = match fs::read_to_string(path) {
        Ok(c) => c,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
            return Ok(History::default());
        }
        Err(e) => return Err(e.into()),
    };
    let history: History = serde_yaml::from_str(&content)
        .with_context(|| format!("failed to parse history file {}", path.display()))?;
    Ok(history)
}

/// Write history to `path`, creating parent directories as needed.
pub fn save_history(path: &Path, history: &History) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)
            .with_context(|| format!("failed to create {}", parent.display()))?;
    }
    let content = serde_yaml::to_string(history)?;
    fs::write(path, content)
        .with_context(|| format!("failed to write history file {}", path.display()))?;
    debug!("saved history to {}", path.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_add_registry_dedups() {
        let mut history = History::default();
        history.add_registry("docker.io");
        history.add_registry("ghcr.io");
        history.add_registry("docker.io");
        assert_eq!(history.registries, vec!["docker.io", "ghcr.io"]);
    }

    #[test]
    fn test_blank_registry_ignored() {
        let mut history = History::default();
        history.add_registry("");
        history.add_registry("   ");
        assert!(history.registries.is_empty());
    }

    #[test]
    fn test_invalid_namespace_ignored() {
        let mut history = History::default();
        history.add_namespace("Staging");
        history.add_namespace("name_with_underscore");
        history.add_namespace("");
        history.add_namespace("staging");
        assert_eq!(history.namespaces, vec!["staging"]);
    }

    #[test]
    fn test_invalid_name_ignored() {
        let mut history = History::default();
        history.add_name("-bad");
        history.add_name("my-pull-secret");
        assert_eq!(history.names, vec!["my-pull-secret"]);
    }

    #[test]
    fn test_overflow_drops_oldest() {
        let mut history = History::default();
        for i in 0..=MAX_HISTORY {
            history.add_registry(&format!("registry-{}.example.com", i));
        }
        assert_eq!(history.registries.len(), MAX_HISTORY);
        assert_eq!(history.registries[0], "registry-1.example.com");
        assert_eq!(
            history.registries[MAX_HISTORY - 1],
            format!("registry-{}.example.com", MAX_HISTORY)
        );
    }

    #[test]
    fn test_sorted_copies_leave_order_intact() {
        let mut history = History::default();
        history.add_registry("zulu.example.com");
        history.add_registry("alpha.example.com");
        assert_eq!(
            history.sorted_registries(),
            vec!["alpha.example.com", "zulu.example.com"]
        );
        assert_eq!(
            history.registries,
            vec!["zulu.example.com", "alpha.example.com"]
        );
    }

    #[test]
    fn test_clear_and_is_empty() {
        let mut history = History::default();
        assert!(history.is_empty());
        history.add_registry("docker.io");
        history.add_namespace("staging");
        history.add_name("my-pull-secret");
        assert!(!history.is_empty());
        history.clear();
        assert!(history.is_empty());
    }

    #[test]
    fn test_load_missing_file_returns_default() {
        let dir = tempdir().unwrap();
        let history = load_history(&dir.path().join("nope.yaml")).unwrap();
        assert!(history.is_empty());
    }

    #[test]
    fn test_save_and_load_round_trip() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("history.yaml");

        let mut history = History::default();
        history.add_registry("docker.io");
        history.add_namespace("staging");
        history.add_name("my-pull-secret");
        save_history(&path, &history).unwrap();

        let loaded = load_history(&path).unwrap();
        assert_eq!(loaded.registries, history.registries);
        assert_eq!(loaded.namespaces, history.namespaces);
        assert_eq!(loaded.names, history.names);
    }

    #[test]
    fn test_save_creates_parent_dirs() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("nested").join("deeper").join("history.yaml");
        save_history(&path, &History::default()).unwrap();
        assert!(path.exists());
    }

    #[test]
    fn test_load_rejects_malformed_yaml() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("history.yaml");
        fs::write(&path, "registries: {not-a-list").unwrap();
        assert!(load_history(&path).is_err());
    }

    #[test]
    fn test_missing_keys_default_to_empty() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("history.yaml");
        fs::write(&path, "registries:\n- docker.io\n").unwrap();
        let history = load_history(&path).unwrap();
        assert_eq!(history.registries, vec!["docker.io"]);
        assert!(history.namespaces.is_empty());
        assert!(history.names.is_empty());
    }
}
