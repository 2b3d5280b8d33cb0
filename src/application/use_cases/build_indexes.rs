use super::reference_tables::load_reference_tables;
use crate::application::dto::{BuildIndexesRequest, BuildIndexesResponse};
use crate::ports::outbound::{ProgressReporter, TableReader};
use crate::shared::Result;
use crate::tree_report::tables::{merge_all, MergeTarget};
use anyhow::Context;

/// BuildIndexesUseCase - Folds a batch of dependency reports into the
/// master library and version tables.
///
/// Reports are merged strictly in the order given. The first conflicting
/// fact aborts the whole batch, and the error names the report it came from.
pub struct BuildIndexesUseCase<TBR, PR> {
    table_reader: TBR,
    progress_reporter: PR,
}

impl<TBR, PR> BuildIndexesUseCase<TBR, PR>
where
    TBR: TableReader,
    PR: ProgressReporter,
{
    pub fn new(table_reader: TBR, progress_reporter: PR) -> Self {
        Self {
            table_reader,
            progress_reporter,
        }
    }

    pub fn execute(&self, request: BuildIndexesRequest) -> Result<BuildIndexesResponse> {
        let (mut libraries, mut versions) = load_reference_tables(
            &self.table_reader,
            &self.progress_reporter,
            request.libraries_path.as_deref(),
            request.versions_path.as_deref(),
        )?;

        let total = request.report_paths.len();
        self.progress_reporter
            .report(&format!("🔗 Merging {} dependency report(s)...", total));

        for (idx, path) in request.report_paths.iter().enumerate() {
            self.progress_reporter
                .report_progress(idx + 1, total, Some(&path.display().to_string()));

            let rows = self
                .table_reader
                .read_dependencies(path)
                .with_context(|| format!("Error processing {}", path.display()))?;
            merge_all(&rows, MergeTarget::Libraries(&mut libraries))
                .with_context(|| format!("Error processing {}", path.display()))?;
            merge_all(&rows, MergeTarget::Versions(&mut versions))
                .with_context(|| format!("Error processing {}", path.display()))?;
        }

        self.progress_reporter.report_completion(&format!(
            "✅ Indexed {} librar{} and {} version(s)",
            libraries.len(),
            if libraries.len() == 1 { "y" } else { "ies" },
            versions.len()
        ));

        Ok(BuildIndexesResponse::new(
            libraries.libraries(),
            versions.versions(),
        ))
    }
}
