use crate::tree_report::domain::DependencyRow;
use crate::tree_report::services::ScanSummary;

/// ReportResponse - The enriched report and what the scan saw
#[derive(Debug, Clone)]
pub struct ReportResponse {
    /// Report rows in raw coordinate order
    pub rows: Vec<DependencyRow>,
    pub summary: ScanSummary,
}

impl ReportResponse {
    pub fn new(rows: Vec<DependencyRow>, summary: ScanSummary) -> Self {
        Self { rows, summary }
    }
}
