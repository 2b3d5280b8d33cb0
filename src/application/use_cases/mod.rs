/// Use cases module containing application business logic orchestration
mod build_indexes;
mod generate_report;
mod reference_tables;

pub use build_indexes::BuildIndexesUseCase;
pub use generate_report::GenerateReportUseCase;
