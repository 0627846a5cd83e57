#[derive(Debug, thiserror::Error)]
#[error("failed to encode json patch: {0}")]
pub struct EncodingError(#[from] pub serde_json::Error);
