mod batch;
mod encode;
mod error;
pub mod metadata;
mod operation;

pub use batch::Batch;
pub use encode::{to_vec, to_vec_lossy};
pub use error::EncodingError;
pub use operation::{Op, Operation};

/// Media type of a JSON Patch document.
pub const CONTENT_TYPE: &str = "application/json-patch+json";
