use super::reference_tables::load_reference_tables;
use crate::application::dto::{ReportRequest, ReportResponse};
use crate::ports::outbound::{ProgressReporter, TableReader, TreeReader};
use crate::shared::Result;
use crate::tree_report::policies::NamespaceExclusion;
use crate::tree_report::services::{ReportBuilder, TreeScanner};
use crate::tree_report::tables::{merge_all, LibraryTable, MergeTarget, VersionTable};
use anyhow::Context;

/// GenerateReportUseCase - Turns a `dependency:tree` dump into the enriched
/// direct dependency report.
///
/// # Type Parameters
/// * `TR` - TreeReader implementation
/// * `TBR` - TableReader implementation
/// * `PR` - ProgressReporter implementation
pub struct GenerateReportUseCase<TR, TBR, PR> {
    tree_reader: TR,
    table_reader: TBR,
    progress_reporter: PR,
}

impl<TR, TBR, PR> GenerateReportUseCase<TR, TBR, PR>
where
    TR: TreeReader,
    TBR: TableReader,
    PR: ProgressReporter,
{
    pub fn new(tree_reader: TR, table_reader: TBR, progress_reporter: PR) -> Self {
        Self {
            tree_reader,
            table_reader,
            progress_reporter,
        }
    }

    /// Executes the report generation
    ///
    /// # Errors
    /// Returns an error if any input cannot be read, the previous report
    /// conflicts with the seed tables, an excluded namespace is invalid, or
    /// a direct dependency has a malformed coordinate.
    pub fn execute(&self, request: ReportRequest) -> Result<ReportResponse> {
        // Step 1: Build the reference tables
        let (mut libraries, mut versions) = load_reference_tables(
            &self.table_reader,
            &self.progress_reporter,
            request.libraries_path.as_deref(),
            request.versions_path.as_deref(),
        )?;
        self.merge_store(&request, &mut libraries, &mut versions)?;

        // Step 2: Scan the tree for direct dependencies
        let exclusion = NamespaceExclusion::new(request.excluded_namespaces.clone())?;
        let (dependencies, summary) = self.scan_tree(&request, &exclusion)?;

        // Step 3: Join with the tables
        let coordinates = ReportBuilder::parse_coordinates(&dependencies)?;
        let rows = ReportBuilder::build(&coordinates, &libraries, &versions);

        self.progress_reporter
            .report(&format!("✅ Report contains {} row(s)", rows.len()));

        Ok(ReportResponse::new(rows, summary))
    }

    /// Folds a previous report into both tables so its dates carry over
    fn merge_store(
        &self,
        request: &ReportRequest,
        libraries: &mut LibraryTable,
        versions: &mut VersionTable,
    ) -> Result<()> {
        let Some(path) = request.store_path.as_deref() else {
            return Ok(());
        };

        let rows = self
            .table_reader
            .read_dependencies(path)
            .with_context(|| format!("Error loading previous report {}", path.display()))?;
        merge_all(&rows, MergeTarget::Libraries(libraries))
            .with_context(|| format!("Error processing {}", path.display()))?;
        merge_all(&rows, MergeTarget::Versions(versions))
            .with_context(|| format!("Error processing {}", path.display()))?;

        self.progress_reporter.report(&format!(
            "🗂️  Merged {} row(s) from previous report {}",
            rows.len(),
            path.display()
        ));
        Ok(())
    }

    fn scan_tree(
        &self,
        request: &ReportRequest,
        exclusion: &NamespaceExclusion,
    ) -> Result<(Vec<String>, crate::tree_report::services::ScanSummary)> {
        let source = request
            .tree_path
            .as_ref()
            .map(|p| p.display().to_string())
            .unwrap_or_else(|| "standard input".to_string());
        self.progress_reporter
            .report(&format!("📖 Reading dependency tree from: {}", source));

        let content = self.tree_reader.read_tree(request.tree_path.as_deref())?;
        let mut scanner = TreeScanner::new(exclusion);
        scanner.scan_lines(content.lines());
        let summary = scanner.summary();
        let dependencies = scanner.into_dependencies();

        self.progress_reporter.report(&format!(
            "✅ Detected {} direct dependenc{} ({} tree node(s) scanned)",
            dependencies.len(),
            if dependencies.len() == 1 { "y" } else { "ies" },
            summary.nodes
        ));
        if summary.excluded > 0 {
            self.progress_reporter.report(&format!(
                "🚫 Excluded {} entr{} from internal namespaces",
                summary.excluded,
                if summary.excluded == 1 { "y" } else { "ies" }
            ));
        }
        for namespace in exclusion.unmatched_namespaces() {
            self.progress_reporter.report_error(&format!(
                "⚠️  Warning: Excluded namespace '{}' did not match any direct dependency.",
                namespace
            ));
        }

        Ok((dependencies, summary))
    }
}
