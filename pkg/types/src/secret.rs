use crate::docker_config::DockerConfigJson;
use crate::error::SecretError;
use base64::Engine as _;
use base64::engine::general_purpose::STANDARD as BASE64;
use pkg_constants::secret::{
    API_VERSION_V1, DATA_KEY_DOCKER_CONFIG_JSON, KIND_SECRET, SECRET_TYPE_DOCKER_CONFIG_JSON,
};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

// --- Metadata ---

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SecretMetadata {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub namespace: Option<String>,
}

// --- Secret manifest ---

/// A Kubernetes Secret of type `kubernetes.io/dockerconfigjson`.
///
/// Field declaration order is serialization order, so the YAML reads
/// apiVersion, kind, metadata, type, data top to bottom.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Secret {
    #[serde(rename = "apiVersion")]
    pub api_version: String,
    pub kind: String,
    pub metadata: SecretMetadata,
    #[serde(rename = "type")]
    pub type_: String,
    /// Values are base64-encoded, as the API server expects.
    pub data: BTreeMap<String, String>,
}

impl Secret {
    /// Build an image-pull Secret for a single registry.
    ///
    /// The Docker config payload is serialized to JSON, base64-encoded,
    /// and stored under the `.dockerconfigjson` data key. An empty
    /// `namespace` is treated as absent and omitted from the manifest.
    pub fn image_pull(
        registry: &str,
        username: &str,
        password: &str,
        name: &str,
        namespace: Option<&str>,
    ) -> Result<Self, SecretError> {
        let config = DockerConfigJson::single(registry, username, password);
        let payload =
            serde_json::to_string(&config).map_err(|e| SecretError::Encoding(e.to_string()))?;

        let mut data = BTreeMap::new();
        data.insert(
            DATA_KEY_DOCKER_CONFIG_JSON.to_string(),
            BASE64.encode(payload),
        );

        Ok(Self {
            api_version: API_VERSION_V1.to_string(),
            kind: KIND_SECRET.to_string(),
            metadata: SecretMetadata {
                name: name.to_string(),
                namespace: namespace
                    .filter(|ns| !ns.is_empty())
                    .map(|ns| ns.to_string()),
            },
            type_: SECRET_TYPE_DOCKER_CONFIG_JSON.to_string(),
            data,
        })
    }

    /// Serialize the manifest to YAML, ready for `kubectl apply`.
    pub fn to_yaml(&self) -> Result<String, SecretError> {
        serde_yaml::to_string(self).map_err(|e| SecretError::Encoding(e.to_string()))
    }

    /// Render a copy of the manifest with the `.dockerconfigjson` value
    /// decoded back to plaintext JSON.
    ///
    /// The result is for human inspection only and is not a valid
    /// Secret: the API server expects `data` values to be base64.
    pub fn decoded_preview(&self) -> Result<String, SecretError> {
        let encoded = self.data.get(DATA_KEY_DOCKER_CONFIG_JSON).ok_or_else(|| {
            SecretError::Decoding(format!(
                "secret has no '{}' data key",
                DATA_KEY_DOCKER_CONFIG_JSON
            ))
        })?;
        let bytes = BASE64
            .decode(encoded.trim())
            .map_err(|e| SecretError::Decoding(e.to_string()))?;
        let plaintext =
            String::from_utf8(bytes).map_err(|e| SecretError::Decoding(e.to_string()))?;

        let mut preview = self.clone();
        preview
            .data
            .insert(DATA_KEY_DOCKER_CONFIG_JSON.to_string(), plaintext);
        preview.to_yaml()
    }
}
