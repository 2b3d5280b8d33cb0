use crate::shared::Result;
use crate::tree_report::domain::{DependencyRow, Library, VersionRecord};
use std::path::Path;

/// TableReader port for loading reference tables and dependency reports
///
/// Each method reads one whole CSV file. Row order is preserved.
pub trait TableReader {
    /// Reads a library table (`name,new_location,latest,description`)
    fn read_libraries(&self, path: &Path) -> Result<Vec<Library>>;

    /// Reads a version table (`name,version,date`)
    fn read_versions(&self, path: &Path) -> Result<Vec<VersionRecord>>;

    /// Reads a dependency report in either the 5- or 7-column layout
    ///
    /// # Errors
    /// Returns an error if:
    /// - The file cannot be read
    /// - The title row width matches neither layout
    /// - Any row's field count differs from the title row
    fn read_dependencies(&self, path: &Path) -> Result<Vec<DependencyRow>>;
}
