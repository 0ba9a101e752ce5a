use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::PathBuf;

/// A location inside the project taxonomy, e.g. `04-drawings/approved`.
/// Segments are always separated by `/` regardless of platform.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TaxonomyNode(String);

impl TaxonomyNode {
    pub fn new(path: impl Into<String>) -> Self {
        Self(path.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Path segments of the node
    pub fn segments(&self) -> impl Iterator<Item = &str> {
        self.0.split('/').filter(|s| !s.is_empty())
    }

    /// The node as a relative filesystem path using the platform separator
    pub fn to_relative_path(&self) -> PathBuf {
        self.segments().collect()
    }
}

impl fmt::Display for TaxonomyNode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for TaxonomyNode {
    fn from(path: &str) -> Self {
        Self::new(path)
    }
}
