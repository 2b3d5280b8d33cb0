use crate::shared::Result;
use std::path::Path;

/// TreeReader port for reading `mvn dependency:tree` output
pub trait TreeReader {
    /// Reads the whole tree dump.
    ///
    /// # Arguments
    /// * `path` - File holding the dump; `None` reads standard input
    ///
    /// # Errors
    /// Returns an error if the source cannot be read
    fn read_tree(&self, path: Option<&Path>) -> Result<String>;
}
