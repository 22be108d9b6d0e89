//! Resource kinds - one subdirectory of the catalog per kind

use std::fmt;

/// A named category of stored documents (`users`, `teams`, `services`, ...)
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ResourceKind {
    dir: String,
    label: String,
}

impl ResourceKind {
    /// Kind with an explicit directory name and singular label
    pub fn new(dir: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            dir: dir.into(),
            label: label.into(),
        }
    }

    /// Kind whose label is the directory name without its plural `s`
    pub fn from_dir(dir: impl Into<String>) -> Self {
        let dir = dir.into();
        let label = dir.strip_suffix('s').unwrap_or(&dir).to_string();
        Self { dir, label }
    }

    pub fn users() -> Self {
        Self::new("users", "user")
    }

    pub fn teams() -> Self {
        Self::new("teams", "team")
    }

    /// Directory name under the catalog root
    pub fn dir(&self) -> &str {
        &self.dir
    }

    /// Singular name used in messages
    pub fn label(&self) -> &str {
        &self.label
    }
}

impl fmt::Display for ResourceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.dir)
    }
}
