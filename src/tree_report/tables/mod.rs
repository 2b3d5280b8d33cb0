//! In-memory reference tables and the conflict-checked merge that
//! grows them.
mod library_table;
mod merge;
mod version_table;

pub use library_table::LibraryTable;
pub use merge::{merge_all, MergeTarget};
pub use version_table::VersionTable;
