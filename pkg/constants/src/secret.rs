//! Fixed field values of a Kubernetes image-pull Secret manifest.

/// `apiVersion` of every generated Secret.
pub const API_VERSION_V1: &str = "v1";

/// `kind` of every generated Secret.
pub const KIND_SECRET: &str = "Secret";

/// Secret `type` for embedded docker registry credentials.
pub const SECRET_TYPE_DOCKER_CONFIG_JSON: &str = "kubernetes.io/dockerconfigjson";

/// The single key under `data` holding the base64-encoded docker config.
pub const DATA_KEY_DOCKER_CONFIG_JSON: &str = ".dockerconfigjson";
