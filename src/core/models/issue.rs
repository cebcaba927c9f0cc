//! Tracker issue model

/// A release label attached to an issue
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FixVersion {
    /// Version name as shown in the tracker (e.g. "1.2.3", "Frontend 1.2.3")
    pub name: String,
}

impl FixVersion {
    /// Create a new fix version
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

/// A tracker issue, reduced to what the gate needs
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Issue {
    /// Issue key (e.g. "ABC-123")
    pub key: String,
    /// Fix versions in tracker order
    pub fix_versions: Vec<FixVersion>,
}

impl Issue {
    /// Create a new issue
    #[must_use]
    pub fn new(key: impl Into<String>, fix_versions: Vec<FixVersion>) -> Self {
        Self {
            key: key.into(),
            fix_versions,
        }
    }

    /// The release version the gate compares against: the first fix version
    ///
    /// A first fix version with an empty name counts as no release version.
    #[must_use]
    pub fn release_version(&self) -> Option<&str> {
        self.fix_versions
            .first()
            .map(|v| v.name.as_str())
            .filter(|name| !name.is_empty())
    }
}
