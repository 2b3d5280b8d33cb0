use mvn_dependency_tree::prelude::*;
use std::collections::HashMap;
use std::path::{Path, PathBuf};

/// Mock TableReader keyed by path, so each report file can differ
#[derive(Default)]
pub struct MockTableReader {
    libraries: Vec<Library>,
    versions: Vec<VersionRecord>,
    reports: HashMap<PathBuf, Vec<DependencyRow>>,
}

impl MockTableReader {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_library(mut self, library: Library) -> Self {
        self.libraries.push(library);
        self
    }

    pub fn with_version(mut self, name: &str, version: &str, date: &str) -> Self {
        self.versions.push(VersionRecord::new(name, version, date));
        self
    }

    pub fn with_report(mut self, path: &str, rows: Vec<DependencyRow>) -> Self {
        self.reports.insert(PathBuf::from(path), rows);
        self
    }
}

impl TableReader for MockTableReader {
    fn read_libraries(&self, _path: &Path) -> Result<Vec<Library>> {
        Ok(self.libraries.clone())
    }

    fn read_versions(&self, _path: &Path) -> Result<Vec<VersionRecord>> {
        Ok(self.versions.clone())
    }

    fn read_dependencies(&self, path: &Path) -> Result<Vec<DependencyRow>> {
        self.reports
            .get(path)
            .cloned()
            .ok_or_else(|| anyhow::anyhow!("Mock failure: no report at {}", path.display()))
    }
}
