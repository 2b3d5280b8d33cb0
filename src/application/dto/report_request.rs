use std::path::PathBuf;

/// ReportRequest - Inputs for one direct dependency report
#[derive(Debug, Clone, Default)]
pub struct ReportRequest {
    /// `dependency:tree` output; `None` reads standard input
    pub tree_path: Option<PathBuf>,
    /// Library table seeding lookups
    pub libraries_path: Option<PathBuf>,
    /// Version table seeding lookups
    pub versions_path: Option<PathBuf>,
    /// Previous dependency report merged into both tables before lookups
    pub store_path: Option<PathBuf>,
    /// Group-ID fragments whose subtrees are kept out of the report
    pub excluded_namespaces: Vec<String>,
}

impl ReportRequest {
    pub fn new(tree_path: Option<PathBuf>) -> Self {
        Self {
            tree_path,
            ..Self::default()
        }
    }

    pub fn with_libraries(mut self, path: Option<PathBuf>) -> Self {
        self.libraries_path = path;
        self
    }

    pub fn with_versions(mut self, path: Option<PathBuf>) -> Self {
        self.versions_path = path;
        self
    }

    pub fn with_store(mut self, path: Option<PathBuf>) -> Self {
        self.store_path = path;
        self
    }

    pub fn with_excluded_namespaces(mut self, namespaces: Vec<String>) -> Self {
        self.excluded_namespaces = namespaces;
        self
    }
}
