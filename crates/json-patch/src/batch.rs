use serde::Serialize;
use serde_json::Value;

use crate::{metadata, EncodingError, Op, Operation};

/// Collects operations in call order.
///
/// Payloads are converted to [`Value`] as they are added. The first
/// conversion error is kept, every later call is ignored and the error is
/// returned by [`Batch::into_operations`] or [`Batch::to_vec`].
#[derive(Debug)]
pub struct Batch {
    res: Result<Vec<Operation>, EncodingError>,
}

impl Default for Batch {
    fn default() -> Self {
        Self::new()
    }
}

impl Batch {
    pub fn new() -> Self {
        Self { res: Ok(vec![]) }
    }

    pub fn push(mut self, op: Operation) -> Self {
        if let Ok(patch_list) = &mut self.res {
            patch_list.push(op);
        }
        self
    }

    fn push_with<T: Serialize>(
        mut self,
        value: &T,
        f: impl FnOnce(Value) -> Operation,
    ) -> Self {
        self.res = self.res.and_then(|mut patch_list| {
            patch_list.push(f(serde_json::to_value(value)?));
            Ok(patch_list)
        });
        self
    }

    pub fn add<T: Serialize>(self, path: impl Into<String>, value: &T) -> Self {
        self.push_with(value, |value| Operation::add(path, value))
    }

    pub fn replace<T: Serialize>(self, path: impl Into<String>, value: &T) -> Self {
        self.push_with(value, |value| Operation::replace(path, value))
    }

    pub fn remove(self, path: impl Into<String>) -> Self {
        self.push(Operation::remove(path))
    }

    pub fn annotation<T: Serialize>(self, op: Op, key: &str, value: &T) -> Self {
        self.push_with(value, |value| metadata::annotation(op, key, value))
    }

    pub fn label<T: Serialize>(self, op: Op, key: &str, value: &T) -> Self {
        self.push_with(value, |value| metadata::label(op, key, value))
    }

    pub fn remove_annotation(self, key: &str) -> Self {
        self.push(metadata::remove_annotation(key))
    }

    pub fn remove_label(self, key: &str) -> Self {
        self.push(metadata::remove_label(key))
    }

    pub fn len(&self) -> usize {
        self.res.as_ref().map(Vec::len).unwrap_or_default()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn into_operations(self) -> Result<Vec<Operation>, EncodingError> {
        self.res
    }

    pub fn to_vec(self) -> Result<Vec<u8>, EncodingError> {
        crate::to_vec(&self.res?)
    }
}
