mod macros;

mod encode;
mod patch_path;

pub use encode::{encode_segment, make_patch_path};
pub use patch_path::PatchPath;
