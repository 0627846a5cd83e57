use std::{
    fmt::{self, Debug, Display, Formatter},
    ops::Deref,
};

use serde::{Serialize, Serializer};

use crate::encode_segment;

#[derive(Clone, Default, Eq, PartialEq, Hash)]
pub struct PatchPath(String);

impl Display for PatchPath {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl Debug for PatchPath {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        Debug::fmt(&self.0, f)
    }
}

impl Deref for PatchPath {
    type Target = str;

    #[inline]
    fn deref(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for PatchPath {
    #[inline]
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl From<PatchPath> for String {
    #[inline]
    fn from(path: PatchPath) -> Self {
        path.0
    }
}

impl PartialEq<str> for PatchPath {
    fn eq(&self, other: &str) -> bool {
        self.0 == other
    }
}

impl PartialEq<&str> for PatchPath {
    fn eq(&self, other: &&str) -> bool {
        self.0 == *other
    }
}

impl Serialize for PatchPath {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&self.0)
    }
}

impl PatchPath {
    #[inline]
    pub fn root() -> PatchPath {
        PatchPath(String::new())
    }

    /// Wraps an already escaped pointer without checking it. One trailing
    /// `/` is dropped, so `"/metadata/labels/"` and `"/metadata/labels"` are
    /// the same base.
    pub fn from_raw(base: impl Into<String>) -> PatchPath {
        let mut base = base.into();
        if base.ends_with('/') {
            base.pop();
        }
        PatchPath(base)
    }

    pub fn push(&mut self, segment: impl Display) -> &mut Self {
        self.0.push('/');
        self.0.push_str(&encode_segment(&segment.to_string()));
        self
    }

    #[must_use]
    pub fn join(mut self, segment: impl Display) -> PatchPath {
        self.push(segment);
        self
    }

    #[inline]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    #[inline]
    pub fn into_string(self) -> String {
        self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::patch_path;

    #[test]
    fn join() {
        let path = PatchPath::root()
            .join("spec")
            .join("containers")
            .join(0)
            .join("image");
        assert_eq!(path, "/spec/containers/0/image");
        assert_eq!(path.to_string(), "/spec/containers/0/image");
    }

    #[test]
    fn push_escapes_segments() {
        let mut path = PatchPath::root();
        path.push("metadata").push("annotations").push("team/owner");
        assert_eq!(path.as_str(), "/metadata/annotations/team~1owner");

        let mut path = PatchPath::from_raw("/metadata/labels/");
        path.push("a~b");
        assert_eq!(path.as_str(), "/metadata/labels/a~0b");
    }

    #[test]
    fn from_raw_is_not_escaped() {
        let path = PatchPath::from_raw("/a~1b").join("c/d");
        assert_eq!(path.into_string(), "/a~1b/c~1d");
    }

    #[test]
    fn root_push_empty_segment() {
        assert_eq!(PatchPath::root().join(""), "/");
        assert_eq!(PatchPath::root().join("").join(""), "//");
        assert_eq!(PatchPath::root().join("").join("a"), "//a");
    }

    #[test]
    fn empty_segment_is_kept() {
        let path = patch_path!("data", "", "x");
        assert_eq!(path, "/data//x");

        let doc = serde_json::json!({"data": {"": {"x": 1}, "x": 2}});
        assert_eq!(doc.pointer(&path), Some(&serde_json::json!(1)));
    }

    #[test]
    fn from_raw_trailing_slash() {
        assert_eq!(PatchPath::from_raw("/metadata/labels/").join("x"), "/metadata/labels/x");
        assert_eq!(PatchPath::from_raw("/metadata/labels").join("x"), "/metadata/labels/x");
        assert_eq!(PatchPath::from_raw("/").join("a"), "/a");
        assert_eq!(PatchPath::from_raw("/a//").join("b"), "/a//b");
    }

    #[test]
    fn macro_builds_path() {
        assert_eq!(
            patch_path!("spec", "template", "metadata", "labels", "app/name"),
            "/spec/template/metadata/labels/app~1name"
        );
        assert_eq!(patch_path!("secrets", 1), "/secrets/1");
        assert_eq!(patch_path!(), PatchPath::root());
    }

    #[test]
    fn serialize_as_string() {
        let path = patch_path!("metadata", "labels", "tier");
        assert_eq!(
            serde_json::to_string(&path).unwrap(),
            r#""/metadata/labels/tier""#
        );
    }
}
