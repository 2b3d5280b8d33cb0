use crate::shared::error::ReportError;
use crate::tree_report::domain::{Coordinate, DependencyRow};
use crate::tree_report::tables::{LibraryTable, VersionTable};

/// ReportBuilder - Joins direct dependencies with the reference tables to
/// produce the enriched report.
pub struct ReportBuilder;

impl ReportBuilder {
    /// Parses raw coordinate strings, failing on the first malformed one
    pub fn parse_coordinates(raw: &[String]) -> Result<Vec<Coordinate>, ReportError> {
        raw.iter().map(|s| Coordinate::parse(s)).collect()
    }

    /// Builds one report row per dependency, in input order.
    ///
    /// A row with the same name and version as the row just before it is
    /// dropped; with sorted input this collapses an artifact listed under
    /// several scopes or packagings into one row.
    pub fn build(
        coordinates: &[Coordinate],
        libraries: &LibraryTable,
        versions: &VersionTable,
    ) -> Vec<DependencyRow> {
        let mut rows: Vec<DependencyRow> = Vec::with_capacity(coordinates.len());

        for coordinate in coordinates {
            let name = coordinate.name();
            if rows
                .last()
                .is_some_and(|last| last.name == name && last.version == coordinate.version)
            {
                continue;
            }

            let library = libraries.lookup(&name);
            let latest_date = if library.latest.is_empty() {
                ""
            } else {
                versions.date(&name, &library.latest)
            };
            rows.push(DependencyRow {
                date: versions.date(&name, &coordinate.version).to_string(),
                latest: library.latest.clone(),
                latest_date: latest_date.to_string(),
                new_location: library.new_location.clone(),
                description: library.description.clone(),
                version: coordinate.version.clone(),
                name,
            });
        }

        rows
    }
}
