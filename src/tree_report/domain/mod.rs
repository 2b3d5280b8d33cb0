pub mod coordinate;
pub mod dependency_row;
pub mod library;
pub mod version_record;

pub use coordinate::{Coordinate, DependencyKey};
pub use dependency_row::DependencyRow;
pub use library::Library;
pub use version_record::VersionRecord;
