use crate::ports::outbound::{ProgressReporter, TableReader};
use crate::shared::Result;
use crate::tree_report::tables::{LibraryTable, VersionTable};
use anyhow::Context;
use std::path::Path;

/// Loads the seed tables both tools start from; absent paths give empty tables
pub(super) fn load_reference_tables<TBR, PR>(
    table_reader: &TBR,
    progress_reporter: &PR,
    libraries_path: Option<&Path>,
    versions_path: Option<&Path>,
) -> Result<(LibraryTable, VersionTable)>
where
    TBR: TableReader,
    PR: ProgressReporter,
{
    let libraries = match libraries_path {
        Some(path) => {
            let records = table_reader
                .read_libraries(path)
                .with_context(|| format!("Error loading library table {}", path.display()))?;
            progress_reporter.report(&format!(
                "📚 Loaded {} librar{} from {}",
                records.len(),
                if records.len() == 1 { "y" } else { "ies" },
                path.display()
            ));
            LibraryTable::from_records(records)
        }
        None => LibraryTable::new(),
    };

    let versions = match versions_path {
        Some(path) => {
            let records = table_reader
                .read_versions(path)
                .with_context(|| format!("Error loading version table {}", path.display()))?;
            progress_reporter.report(&format!(
                "📅 Loaded {} version date(s) from {}",
                records.len(),
                path.display()
            ));
            VersionTable::from_records(records)
        }
        None => VersionTable::new(),
    };

    Ok((libraries, versions))
}
