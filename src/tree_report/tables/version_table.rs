use super::merge::merge_field;
use crate::shared::error::ReportError;
use crate::tree_report::domain::{DependencyKey, DependencyRow, VersionRecord};
use std::collections::HashMap;

/// Release dates keyed by library name and version.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct VersionTable {
    dates: HashMap<DependencyKey, String>,
}

impl VersionTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seeds a table from previously exported rows.
    ///
    /// Rows are inserted as-is; a repeated key keeps the last row. Rows
    /// missing a name or version are dropped, as they are on merge.
    pub fn from_records(records: Vec<VersionRecord>) -> Self {
        let dates = records
            .into_iter()
            .map(|record| (record.key(), record.date))
            .filter(|(key, _)| key.is_complete())
            .collect();
        Self { dates }
    }

    /// Release date of `name` at `version`, or empty when unknown
    pub fn date(&self, name: &str, version: &str) -> &str {
        self.dates
            .get(&DependencyKey::new(name, version))
            .map(String::as_str)
            .unwrap_or("")
    }

    /// Returns the record for a key, or an all-empty record when unknown
    pub fn lookup(&self, key: &DependencyKey) -> VersionRecord {
        match self.dates.get(key) {
            Some(date) => VersionRecord::new(key.name.clone(), key.version.clone(), date.clone()),
            None => VersionRecord::default(),
        }
    }

    /// Merges one release-date fact; keys missing a name or version are ignored
    pub fn merge_version(&mut self, record: &VersionRecord) -> Result<(), ReportError> {
        self.merge_fact(record.key(), &record.date)
    }

    /// Merges both version facts a report row carries: the dependency's own
    /// release date and the release date of its library's latest version.
    ///
    /// The facts are applied one after the other, so a conflict on the
    /// second leaves the first in place.
    pub fn merge_dependency(&mut self, row: &DependencyRow) -> Result<(), ReportError> {
        self.merge_fact(row.key(), &row.date)?;
        self.merge_fact(row.latest_key(), &row.latest_date)
    }

    fn merge_fact(&mut self, key: DependencyKey, date: &str) -> Result<(), ReportError> {
        if !key.is_complete() {
            return Ok(());
        }

        let key_name = key.to_string();
        let mut stored = self.dates.get(&key).cloned().unwrap_or_default();
        merge_field(&key_name, "date", date, &mut stored)?;
        self.dates.insert(key, stored);
        Ok(())
    }

    /// Snapshot of every record, sorted by name then version
    pub fn versions(&self) -> Vec<VersionRecord> {
        let mut keys: Vec<&DependencyKey> = self.dates.keys().collect();
        keys.sort();
        keys.into_iter()
            .map(|key| VersionRecord::new(key.name.clone(), key.version.clone(), self.dates[key].clone()))
            .collect()
    }

    pub fn len(&self) -> usize {
        self.dates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.dates.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_date_missing_is_empty() {
        let table = VersionTable::new();
        assert_eq!(table.date("a:b", "1.0"), "");
        assert_eq!(
            table.lookup(&DependencyKey::new("a:b", "1.0")),
            VersionRecord::default()
        );
    }

    #[test]
    fn test_merge_version_idempotent() {
        let mut table = VersionTable::new();
        let record = VersionRecord::new("a:b", "1.0", "2020-01-01");
        table.merge_version(&record).unwrap();
        let once = table.clone();
        table.merge_version(&record).unwrap();
        assert_eq!(table, once);
        assert_eq!(table.lookup(&record.key()), record);
    }

    #[test]
    fn test_merge_version_conflict() {
        let mut table = VersionTable::new();
        table
            .merge_version(&VersionRecord::new("a:b", "1.0", "2020-01-01"))
            .unwrap();
        let err = table
            .merge_version(&VersionRecord::new("a:b", "1.0", "2020-02-02"))
            .unwrap_err();
        assert_eq!(
            err,
            ReportError::ConflictingMetadata {
                key: "a:b+1.0".to_string(),
                field: "date",
                existing: "2020-01-01".to_string(),
                incoming: "2020-02-02".to_string(),
            }
        );
    }

    #[test]
    fn test_from_records_drops_incomplete_keys() {
        let table = VersionTable::from_records(vec![
            VersionRecord::new("a:b", "", "2020-01-01"),
            VersionRecord::new("", "1.0", "2020-01-01"),
            VersionRecord::new("a:b", "1.0", "2021-06-30"),
        ]);
        assert_eq!(table.len(), 1);
        assert_eq!(table.date("a:b", ""), "");
        assert_eq!(table.date("a:b", "1.0"), "2021-06-30");
    }

    #[test]
    fn test_incomplete_keys_are_ignored() {
        let mut table = VersionTable::new();
        table
            .merge_version(&VersionRecord::new("", "1.0", "2020-01-01"))
            .unwrap();
        table
            .merge_version(&VersionRecord::new("a:b", "", "2020-01-01"))
            .unwrap();
        assert!(table.is_empty());
    }

    #[test]
    fn test_known_version_without_date_is_kept() {
        let mut table = VersionTable::new();
        table.merge_version(&VersionRecord::new("a:b", "1.0", "")).unwrap();
        assert_eq!(table.versions(), vec![VersionRecord::new("a:b", "1.0", "")]);
    }

    #[test]
    fn test_merge_dependency_contributes_two_facts() {
        let mut table = VersionTable::new();
        let row = DependencyRow {
            date: "2020-01-01".to_string(),
            latest: "2.0".to_string(),
            latest_date: "2022-06-30".to_string(),
            ..DependencyRow::new("a:b", "1.0")
        };
        table.merge_dependency(&row).unwrap();
        assert_eq!(
            table.versions(),
            vec![
                VersionRecord::new("a:b", "1.0", "2020-01-01"),
                VersionRecord::new("a:b", "2.0", "2022-06-30"),
            ]
        );
    }

    #[test]
    fn test_conflict_on_latest_keeps_first_fact() {
        let mut table =
            VersionTable::from_records(vec![VersionRecord::new("a:b", "2.0", "2022-06-30")]);
        let row = DependencyRow {
            date: "2020-01-01".to_string(),
            latest: "2.0".to_string(),
            latest_date: "2022-07-01".to_string(),
            ..DependencyRow::new("a:b", "1.0")
        };
        let err = table.merge_dependency(&row).unwrap_err();
        assert!(err.to_string().contains("On 'a:b+2.0'"));
        assert_eq!(table.date("a:b", "1.0"), "2020-01-01");
        assert_eq!(table.date("a:b", "2.0"), "2022-06-30");
    }

    #[test]
    fn test_versions_sorted_by_name_then_version() {
        let table = VersionTable::from_records(vec![
            VersionRecord::new("b:b", "1.0", "d1"),
            VersionRecord::new("a:a", "2.0", "d2"),
            VersionRecord::new("a:a", "1.0", "d3"),
        ]);
        assert_eq!(
            table.versions(),
            vec![
                VersionRecord::new("a:a", "1.0", "d3"),
                VersionRecord::new("a:a", "2.0", "d2"),
                VersionRecord::new("b:b", "1.0", "d1"),
            ]
        );
    }
}
