use super::{LibraryTable, VersionTable};
use crate::shared::error::ReportError;
use crate::tree_report::domain::DependencyRow;

/// Folds `incoming` into `existing` for one field of one key.
///
/// An empty incoming value never changes anything and an empty existing
/// value adopts the incoming one. Two different non-empty values conflict.
pub(super) fn merge_field(
    key: &str,
    field: &'static str,
    incoming: &str,
    existing: &mut String,
) -> Result<(), ReportError> {
    if incoming.is_empty() {
        return Ok(());
    }
    if existing.is_empty() {
        incoming.clone_into(existing);
        return Ok(());
    }
    if existing.as_str() != incoming {
        return Err(ReportError::ConflictingMetadata {
            key: key.to_string(),
            field,
            existing: existing.clone(),
            incoming: incoming.to_string(),
        });
    }
    Ok(())
}

/// The table a batch of dependency rows is folded into.
///
/// The two tables are keyed differently, so each variant routes a row to
/// its own merge function.
pub enum MergeTarget<'t> {
    Libraries(&'t mut LibraryTable),
    Versions(&'t mut VersionTable),
}

impl MergeTarget<'_> {
    pub fn merge(&mut self, row: &DependencyRow) -> Result<(), ReportError> {
        match self {
            MergeTarget::Libraries(table) => table.merge_dependency(row),
            MergeTarget::Versions(table) => table.merge_dependency(row),
        }
    }
}

/// Merges every row in order; the first conflict stops the batch.
pub fn merge_all(rows: &[DependencyRow], mut target: MergeTarget<'_>) -> Result<(), ReportError> {
    rows.iter().try_for_each(|row| target.merge(row))
}
