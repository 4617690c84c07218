use base64::Engine as _;
use base64::engine::general_purpose::STANDARD as BASE64;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

// --- Auth entry ---

/// Credentials for a single registry inside a Docker config.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthEntry {
    pub username: String,
    pub password: String,
    /// base64 of `username:password`, precomputed so kubelet can use it directly.
    pub auth: String,
}

impl AuthEntry {
    /// Build an entry, deriving the `auth` field from the credentials.
    pub fn new(username: &str, password: &str) -> Self {
        let auth = BASE64.encode(format!("{}:{}", username, password));
        Self {
            username: username.to_string(),
            password: password.to_string(),
            auth,
        }
    }
}

// --- Docker config ---

/// The JSON payload stored under the `.dockerconfigjson` key of a pull Secret.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DockerConfigJson {
    pub auths: BTreeMap<String, AuthEntry>,
}

impl DockerConfigJson {
    /// Config holding credentials for exactly one registry.
    pub fn single(registry: &str, username: &str, password: &str) -> Self {
        let mut auths = BTreeMap::new();
        auths.insert(registry.to_string(), AuthEntry::new(username, password));
        Self { auths }
    }
}
