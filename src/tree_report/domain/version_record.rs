use super::DependencyKey;
use serde::{Deserialize, Serialize};

/// The release date of one version of one library.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct VersionRecord {
    pub name: String,
    pub version: String,
    pub date: String,
}

impl VersionRecord {
    pub fn new(
        name: impl Into<String>,
        version: impl Into<String>,
        date: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            version: version.into(),
            date: date.into(),
        }
    }

    pub fn key(&self) -> DependencyKey {
        DependencyKey::new(self.name.clone(), self.version.clone())
    }
}
