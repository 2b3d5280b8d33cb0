use super::merge::merge_field;
use crate::shared::error::ReportError;
use crate::tree_report::domain::{DependencyRow, Library};
use std::collections::HashMap;

static EMPTY_LIBRARY: Library = Library {
    name: String::new(),
    new_location: String::new(),
    latest: String::new(),
    description: String::new(),
};

/// Library metadata keyed by library name (`group:artifact`).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LibraryTable {
    libraries: HashMap<String, Library>,
}

impl LibraryTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seeds a table from previously exported rows.
    ///
    /// Rows are inserted as-is; a repeated name keeps the last row.
    pub fn from_records(records: Vec<Library>) -> Self {
        let libraries = records
            .into_iter()
            .map(|library| (library.name.clone(), library))
            .collect();
        Self { libraries }
    }

    /// Returns the library, or an all-empty record when the name is unknown
    pub fn lookup(&self, name: &str) -> &Library {
        self.libraries.get(name).unwrap_or(&EMPTY_LIBRARY)
    }

    /// Merges one library fact.
    ///
    /// Fields are merged in the order `latest`, `new_location`,
    /// `description`. The first conflict stops the merge; fields merged
    /// before it in the same call stay applied.
    pub fn merge_library(&mut self, incoming: &Library) -> Result<(), ReportError> {
        if incoming.name.is_empty() {
            return Ok(());
        }

        let library = self
            .libraries
            .entry(incoming.name.clone())
            .or_insert_with(|| Library::new(incoming.name.clone()));

        let key = incoming.name.as_str();
        merge_field(key, "latest", &incoming.latest, &mut library.latest)?;
        merge_field(key, "new_location", &incoming.new_location, &mut library.new_location)?;
        merge_field(key, "description", &incoming.description, &mut library.description)
    }

    /// Merges the library half of a dependency report row
    pub fn merge_dependency(&mut self, row: &DependencyRow) -> Result<(), ReportError> {
        self.merge_library(&Library {
            name: row.name.clone(),
            new_location: row.new_location.clone(),
            latest: row.latest.clone(),
            description: row.description.clone(),
        })
    }

    /// Snapshot of every library, sorted by name
    pub fn libraries(&self) -> Vec<Library> {
        let mut libraries: Vec<Library> = self.libraries.values().cloned().collect();
        libraries.sort_by(|a, b| a.name.cmp(&b.name));
        libraries
    }

    pub fn len(&self) -> usize {
        self.libraries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.libraries.is_empty()
    }
}
