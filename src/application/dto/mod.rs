/// Data Transfer Objects for application layer
///
/// DTOs carry data between the command-line adapters and the use cases,
/// keeping the domain layer isolated.
mod build_indexes_request;
mod build_indexes_response;
mod report_request;
mod report_response;

pub use build_indexes_request::BuildIndexesRequest;
pub use build_indexes_response::BuildIndexesResponse;
pub use report_request::ReportRequest;
pub use report_response::ReportResponse;
