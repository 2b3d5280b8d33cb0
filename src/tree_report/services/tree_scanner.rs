use super::line_classifier::{LineClassifier, TreeEntry};
use crate::tree_report::policies::NamespaceExclusion;
use std::collections::BTreeSet;

/// Counters describing what a scan kept and dropped
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ScanSummary {
    /// Lines recognized as tree nodes
    pub nodes: usize,
    /// Nodes dropped because they sit below the current frontier
    pub transitive: usize,
    /// Nodes dropped because they belong to an excluded namespace
    pub excluded: usize,
}

/// TreeScanner - Reduces a `dependency:tree` dump to the direct
/// dependencies of the artifact under build.
///
/// The scanner keeps a frontier level. A node deeper than the frontier is
/// transitive and skipped; any other node moves the frontier to its own
/// level. An excluded node is not recorded and pushes the frontier one
/// level down: its children are then weighed like direct dependencies,
/// while anything deeper stays pruned and later siblings at the original
/// depth are still considered.
pub struct TreeScanner<'p> {
    exclusion: &'p NamespaceExclusion,
    scan_level: usize,
    seen: BTreeSet<String>,
    summary: ScanSummary,
}

impl<'p> TreeScanner<'p> {
    pub fn new(exclusion: &'p NamespaceExclusion) -> Self {
        Self {
            exclusion,
            scan_level: 1,
            seen: BTreeSet::new(),
            summary: ScanSummary::default(),
        }
    }

    /// Feeds one raw line; lines that are not tree nodes are ignored
    pub fn scan_line(&mut self, line: &str) {
        if let Some(entry) = LineClassifier::classify(line) {
            self.scan_entry(entry);
        }
    }

    pub fn scan_lines<'l>(&mut self, lines: impl IntoIterator<Item = &'l str>) {
        for line in lines {
            self.scan_line(line);
        }
    }

    pub fn scan_entry(&mut self, entry: TreeEntry<'_>) {
        self.summary.nodes += 1;

        if entry.level > self.scan_level {
            self.summary.transitive += 1;
            return;
        }
        self.scan_level = entry.level;

        if self.exclusion.is_excluded(entry.coordinate) {
            self.summary.excluded += 1;
            self.scan_level += 1;
            return;
        }

        self.seen.insert(entry.coordinate.to_string());
    }

    pub fn summary(&self) -> ScanSummary {
        self.summary
    }

    /// Direct dependency coordinates, deduplicated and sorted by raw text
    pub fn into_dependencies(self) -> Vec<String> {
        self.seen.into_iter().collect()
    }
}
