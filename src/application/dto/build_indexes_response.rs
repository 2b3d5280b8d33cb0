use crate::tree_report::domain::{Library, VersionRecord};

/// BuildIndexesResponse - Updated master tables, already in export order
#[derive(Debug, Clone)]
pub struct BuildIndexesResponse {
    /// Sorted by name
    pub libraries: Vec<Library>,
    /// Sorted by name, then version
    pub versions: Vec<VersionRecord>,
}

impl BuildIndexesResponse {
    pub fn new(libraries: Vec<Library>, versions: Vec<VersionRecord>) -> Self {
        Self {
            libraries,
            versions,
        }
    }
}
