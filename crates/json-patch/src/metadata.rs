//! The helpers never drop the payload, so `annotation(Op::Remove, key, value)`
//! keeps `value`. Use [`remove_annotation`] or [`remove_label`] for a remove
//! without payload.

use json_pointer::make_patch_path;

use crate::{Op, Operation};

pub const ANNOTATIONS_PATH: &str = "/metadata/annotations/";
pub const LABELS_PATH: &str = "/metadata/labels/";

pub fn annotation<T>(op: Op, key: &str, value: T) -> Operation<T> {
    Operation::new(op, make_patch_path(ANNOTATIONS_PATH, key), Some(value))
}

pub fn label<T>(op: Op, key: &str, value: T) -> Operation<T> {
    Operation::new(op, make_patch_path(LABELS_PATH, key), Some(value))
}

pub fn remove_annotation<T>(key: &str) -> Operation<T> {
    Operation::remove(make_patch_path(ANNOTATIONS_PATH, key))
}

pub fn remove_label<T>(key: &str) -> Operation<T> {
    Operation::remove(make_patch_path(LABELS_PATH, key))
}
