use std::path::PathBuf;

/// BuildIndexesRequest - Inputs for folding reports into master tables
#[derive(Debug, Clone, Default)]
pub struct BuildIndexesRequest {
    /// Existing library table to start from
    pub libraries_path: Option<PathBuf>,
    /// Existing version table to start from
    pub versions_path: Option<PathBuf>,
    /// Dependency reports, merged in this order
    pub report_paths: Vec<PathBuf>,
}

impl BuildIndexesRequest {
    pub fn new(
        libraries_path: Option<PathBuf>,
        versions_path: Option<PathBuf>,
        report_paths: Vec<PathBuf>,
    ) -> Self {
        Self {
            libraries_path,
            versions_path,
            report_paths,
        }
    }
}
