// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2025 Blackman Artificial Intelligence Technologies Inc.

use std::fmt;

/// Location of a field inside a flow document.
///
/// Rendered as its segments joined by ` => `, or `root` for the top level.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldPath {
    segments: Vec<String>,
}

impl FieldPath {
    /// The document's top level
    pub fn root() -> Self {
        Self::default()
    }

    /// Path of a child field
    pub fn child(&self, key: &str) -> Self {
        let mut segments = self.segments.clone();
        segments.push(key.to_string());
        Self { segments }
    }

    pub fn is_root(&self) -> bool {
        self.segments.is_empty()
    }

    /// Last segment, if any
    pub fn leaf(&self) -> Option<&str> {
        self.segments.last().map(String::as_str)
    }
}

impl fmt::Display for FieldPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.segments.is_empty() {
            return write!(f, "root");
        }
        write!(f, "{}", self.segments.join(" => "))
    }
}

impl<S: Into<String>> FromIterator<S> for FieldPath {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self {
            segments: iter.into_iter().map(Into::into).collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_root_display() {
        assert_eq!(FieldPath::root().to_string(), "root");
        assert!(FieldPath::root().is_root());
        assert_eq!(FieldPath::root().leaf(), None);
    }

    #[test]
    fn test_child_display() {
        let path = FieldPath::root().child("data").child("siteType");
        assert_eq!(path.to_string(), "data => siteType");
        assert_eq!(path.leaf(), Some("siteType"));
        assert!(!path.is_root());
    }

    #[test]
    fn test_collect_from_strs() {
        let path: FieldPath = ["storeDetails", "tax"].into_iter().collect();
        assert_eq!(path, FieldPath::root().child("storeDetails").child("tax"));
    }
}
