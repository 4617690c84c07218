/// Errors raised while building or inspecting a Secret manifest.
#[derive(Debug, thiserror::Error)]
pub enum SecretError {
    #[error("failed to encode secret: {0}")]
    Encoding(String),

    #[error("failed to decode secret data: {0}")]
    Decoding(String),
}
