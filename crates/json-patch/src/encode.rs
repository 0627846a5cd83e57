use serde::Serialize;

use crate::{EncodingError, Operation};

/// Encodes `ops` as a JSON Patch document, keeping their order.
///
/// Nothing is returned on failure, not even a partial document.
pub fn to_vec<T: Serialize>(ops: &[Operation<T>]) -> Result<Vec<u8>, EncodingError> {
    tracing::debug!(op_count = ops.len(), "encode json patch");
    Ok(serde_json::to_vec(ops)?)
}

/// Like [`to_vec`], but returns an empty buffer instead of an error.
///
/// The failure is only logged. Do not use it where the correctness of the
/// document matters.
pub fn to_vec_lossy<T: Serialize>(ops: &[Operation<T>]) -> Vec<u8> {
    match to_vec(ops) {
        Ok(data) => data,
        Err(err) => {
            tracing::warn!(error = %err, op_count = ops.len(), "discard json patch");
            Vec::new()
        }
    }
}
