//! Builders for JSON Patch (RFC 6902) documents.
//!
//! ```
//! use kubepatch::{metadata, patch_path, to_vec, Op, Operation};
//! use serde_json::json;
//!
//! let ops = vec![
//!     Operation::replace(patch_path!("spec", "containers", 0, "image"), json!("nginx:1.25")),
//!     metadata::annotation(Op::Add, "example.com/owner", json!("alice")),
//!     metadata::remove_label("tier"),
//! ];
//! let body = to_vec(&ops).unwrap();
//! assert!(body.starts_with(br#"[{"op":"replace","path":"/spec/containers/0/image""#));
//! ```

pub use json_patch::{
    metadata, to_vec, to_vec_lossy, Batch, EncodingError, Op, Operation, CONTENT_TYPE,
};
pub use json_pointer::{encode_segment, make_patch_path, patch_path, PatchPath};
