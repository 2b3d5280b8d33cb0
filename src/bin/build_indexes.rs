use mvn_dependency_tree::adapters::outbound::console::StderrProgressReporter;
use mvn_dependency_tree::adapters::outbound::csv::CsvCodec;
use mvn_dependency_tree::adapters::outbound::filesystem::{FileSystemReader, FileSystemWriter};
use mvn_dependency_tree::application::dto::BuildIndexesRequest;
use mvn_dependency_tree::application::use_cases::BuildIndexesUseCase;
use mvn_dependency_tree::cli::{print_error, BuildIndexesArgs};
use mvn_dependency_tree::ports::outbound::OutputPresenter;
use mvn_dependency_tree::shared::error::ExitCode;
use mvn_dependency_tree::shared::Result;
use std::process;

fn main() {
    if let Err(e) = run() {
        print_error(&e);
        process::exit(ExitCode::ApplicationError.as_i32());
    }
}

fn run() -> Result<()> {
    let args = BuildIndexesArgs::parse_args();

    let use_case = BuildIndexesUseCase::new(FileSystemReader::new(), StderrProgressReporter::new());
    let request = BuildIndexesRequest::new(args.lin, args.vin, args.reports);
    let response = use_case.execute(request)?;

    // Both tables are rendered before either file is touched.
    let libraries = CsvCodec::render(&response.libraries)?;
    let versions = CsvCodec::render(&response.versions)?;

    FileSystemWriter::new(args.lout).present(&libraries)?;
    FileSystemWriter::new(args.vout).present(&versions)?;

    Ok(())
}
