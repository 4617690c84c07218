//! Generated-name format.

/// Prefix of every generated secret name:
/// `pullsecret-<adjective>-<name>-<4 hex chars>`.
pub const PULL_SECRET_NAME_PREFIX: &str = "pullsecret";
