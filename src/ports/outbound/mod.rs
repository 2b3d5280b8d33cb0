/// Outbound ports (Driven ports) - Infrastructure interfaces
///
/// These ports define the interfaces that the application core uses
/// to interact with external systems (file system, standard streams, console).
pub mod output_presenter;
pub mod progress_reporter;
pub mod table_reader;
pub mod tree_reader;

pub use output_presenter::OutputPresenter;
pub use progress_reporter::ProgressReporter;
pub use table_reader::TableReader;
pub use tree_reader::TreeReader;
