//! Filesystem path constants.

/// Directory name under the user config dir holding regsec files.
/// Full path = `<config_dir>/CONFIG_DIR_NAME`.
pub const CONFIG_DIR_NAME: &str = "regsec";

/// File name of the recent-values history inside the config directory.
pub const HISTORY_FILENAME: &str = "history.yaml";
