mod line_classifier;
mod report_builder;
mod tree_scanner;

pub use line_classifier::{LineClassifier, TreeEntry};
pub use report_builder::ReportBuilder;
pub use tree_scanner::{ScanSummary, TreeScanner};
