//! mvn-dependency-tree - Direct dependency reports from Maven builds
//!
//! Reads the text printed by `mvn dependency:tree`, keeps only the direct
//! dependencies of the artifact under build, and joins them with two
//! reference tables: library metadata (latest version, relocation,
//! description) and per-version release dates. A batch tool folds finished
//! reports back into those tables, refusing contradictory facts.
//!
//! # Architecture
//!
//! - **Domain Layer** (`tree_report`): tree scanning, coordinate parsing,
//!   reference tables and the conflict-checked merge
//! - **Application Layer** (`application`): the report and index-building use cases
//! - **Ports** (`ports`): interface definitions for infrastructure
//! - **Adapters** (`adapters`): file system, CSV and console implementations
//! - **Shared** (`shared`): error types, file safety checks
//!
//! # Example
//!
//! ```no_run
//! use mvn_dependency_tree::prelude::*;
//! use std::path::PathBuf;
//!
//! # fn main() -> Result<()> {
//! let use_case = GenerateReportUseCase::new(
//!     FileSystemReader::new(),
//!     FileSystemReader::new(),
//!     StderrProgressReporter::new(),
//! );
//!
//! let request = ReportRequest::new(Some(PathBuf::from("tree.txt")))
//!     .with_libraries(Some(PathBuf::from("libraries.csv")))
//!     .with_excluded_namespaces(vec!["com.example.internal".to_string()]);
//! let response = use_case.execute(request)?;
//!
//! print!("{}", CsvCodec::render(&response.rows)?);
//! # Ok(())
//! # }
//! ```

pub mod adapters;
pub mod application;
pub mod cli;
pub mod config;
pub mod ports;
pub mod shared;
pub mod tree_report;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::adapters::outbound::console::StderrProgressReporter;
    pub use crate::adapters::outbound::csv::CsvCodec;
    pub use crate::adapters::outbound::filesystem::{
        FileSystemReader, FileSystemWriter, StdoutPresenter,
    };
    pub use crate::application::dto::{
        BuildIndexesRequest, BuildIndexesResponse, ReportRequest, ReportResponse,
    };
    pub use crate::application::use_cases::{BuildIndexesUseCase, GenerateReportUseCase};
    pub use crate::ports::outbound::{OutputPresenter, ProgressReporter, TableReader, TreeReader};
    pub use crate::shared::error::{ExitCode, ReportError};
    pub use crate::shared::Result;
    pub use crate::tree_report::domain::{
        Coordinate, DependencyKey, DependencyRow, Library, VersionRecord,
    };
    pub use crate::tree_report::policies::NamespaceExclusion;
    pub use crate::tree_report::services::{ScanSummary, TreeScanner};
    pub use crate::tree_report::tables::{LibraryTable, VersionTable};
}
