//! Template references.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A reference to a reusable template: where it lives, the path within
/// the repository, and the version to resolve.
///
/// Resolution itself (fetching the template and its schema) belongs to
/// the external template service, not this core.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TemplateRef {
    pub url: String,
    pub path: String,
    pub version: String,
}

impl TemplateRef {
    /// Creates a template reference.
    #[must_use]
    pub fn new(url: impl Into<String>, path: impl Into<String>, version: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            path: path.into(),
            version: version.into(),
        }
    }
}

impl fmt::Display for TemplateRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}@{}:{}", self.url, self.version, self.path)
    }
}
