use std::fmt::{self, Display, Formatter};

use serde::Serialize;
use serde_json::Value;

#[derive(Debug, Copy, Clone, Serialize, Eq, PartialEq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum Op {
    Add,
    Remove,
    Replace,
}

impl Op {
    pub fn as_str(&self) -> &'static str {
        match self {
            Op::Add => "add",
            Op::Remove => "remove",
            Op::Replace => "replace",
        }
    }
}

impl Display for Op {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single JSON Patch (RFC 6902) step.
///
/// `value` is left out of the encoded object when it is `None`, while
/// `Some(Value::Null)` is written as `"value": null`.
#[derive(Debug, Clone, Serialize, Eq, PartialEq)]
pub struct Operation<T = Value> {
    pub op: Op,
    pub path: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value: Option<T>,
}

impl<T> Operation<T> {
    pub fn new(op: Op, path: impl Into<String>, value: Option<T>) -> Self {
        Self {
            op,
            path: path.into(),
            value,
        }
    }

    pub fn add(path: impl Into<String>, value: T) -> Self {
        Self::new(Op::Add, path, Some(value))
    }

    pub fn remove(path: impl Into<String>) -> Self {
        Self::new(Op::Remove, path, None)
    }

    pub fn replace(path: impl Into<String>, value: T) -> Self {
        Self::new(Op::Replace, path, Some(value))
    }
}
