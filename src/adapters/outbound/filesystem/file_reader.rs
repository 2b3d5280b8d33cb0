use crate::adapters::outbound::csv::{CsvCodec, CsvSchema};
use crate::ports::outbound::{TableReader, TreeReader};
use crate::shared::error::ReportError;
use crate::shared::security::{validate_file_size, validate_regular_file, MAX_FILE_SIZE};
use crate::shared::Result;
use crate::tree_report::domain::{DependencyRow, Library, VersionRecord};
use std::fs;
use std::io::{self, Read};
use std::path::Path;

/// FileSystemReader adapter for reading inputs from the file system
///
/// Implements both TreeReader and TableReader. Standard input stands in for
/// the tree file when no path is given.
#[derive(Debug, Clone, Copy)]
pub struct FileSystemReader;

impl FileSystemReader {
    pub fn new() -> Self {
        Self
    }
}

impl Default for FileSystemReader {
    fn default() -> Self {
        Self::new()
    }
}

impl FileSystemReader {
    /// Safely read a file with security checks:
    /// - Reject symbolic links
    /// - Validate file is a regular file
    /// - Check file size limits
    fn safe_read_file(&self, path: &Path, file_type: &str) -> Result<Vec<u8>> {
        let file_size = validate_regular_file(path, file_type)?;
        validate_file_size(file_size, path, MAX_FILE_SIZE)?;

        fs::read(path).map_err(|e| {
            ReportError::FileReadError {
                path: path.to_path_buf(),
                details: format!("Failed to read {}: {}", file_type, e),
            }
            .into()
        })
    }

    fn read_table<T: CsvSchema>(&self, path: &Path, file_type: &str) -> Result<Vec<T>> {
        let content = self.safe_read_file(path, file_type)?;
        Ok(CsvCodec::read(content.as_slice(), &path.display().to_string())?)
    }
}

impl TreeReader for FileSystemReader {
    fn read_tree(&self, path: Option<&Path>) -> Result<String> {
        match path {
            Some(path) => {
                let bytes = self.safe_read_file(path, "dependency tree")?;
                Ok(decode_tree(&bytes))
            }
            None => {
                let mut bytes = Vec::new();
                io::stdin()
                    .lock()
                    .read_to_end(&mut bytes)
                    .map_err(|e| anyhow::anyhow!("Failed to read dependency tree from stdin: {}", e))?;
                Ok(decode_tree(&bytes))
            }
        }
    }
}

/// Build logs may carry bytes in any encoding; tree nodes are plain ASCII,
/// so replacing invalid sequences never changes which lines are nodes.
fn decode_tree(bytes: &[u8]) -> String {
    String::from_utf8_lossy(bytes).into_owned()
}

impl TableReader for FileSystemReader {
    fn read_libraries(&self, path: &Path) -> Result<Vec<Library>> {
        self.read_table(path, "library table")
    }

    fn read_versions(&self, path: &Path) -> Result<Vec<VersionRecord>> {
        self.read_table(path, "version table")
    }

    fn read_dependencies(&self, path: &Path) -> Result<Vec<DependencyRow>> {
        self.read_table(path, "dependency report")
    }
}
