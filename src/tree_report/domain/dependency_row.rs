use super::DependencyKey;
use serde::{Deserialize, Serialize};

/// One line of a dependency report: a dependency joined with what the
/// reference tables know about it.
///
/// Reports come in two widths. The batch variant stops after `latest_date`;
/// the enriched variant adds `new_location` and `description`, which default
/// to empty when absent.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DependencyRow {
    pub name: String,
    pub version: String,
    pub date: String,
    pub latest: String,
    pub latest_date: String,
    #[serde(default)]
    pub new_location: String,
    #[serde(default)]
    pub description: String,
}

impl DependencyRow {
    pub fn new(name: impl Into<String>, version: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            version: version.into(),
            ..Self::default()
        }
    }

    pub fn key(&self) -> DependencyKey {
        DependencyKey::new(self.name.clone(), self.version.clone())
    }

    /// Key of the library's latest version, which `latest_date` describes
    pub fn latest_key(&self) -> DependencyKey {
        DependencyKey::new(self.name.clone(), self.latest.clone())
    }
}
