use mvn_dependency_tree::adapters::outbound::console::StderrProgressReporter;
use mvn_dependency_tree::adapters::outbound::csv::CsvCodec;
use mvn_dependency_tree::adapters::outbound::filesystem::{
    FileSystemReader, FileSystemWriter, StdoutPresenter,
};
use mvn_dependency_tree::application::dto::ReportRequest;
use mvn_dependency_tree::application::use_cases::GenerateReportUseCase;
use mvn_dependency_tree::cli::{print_error, ReportArgs};
use mvn_dependency_tree::config::{self, ConfigFile};
use mvn_dependency_tree::ports::outbound::OutputPresenter;
use mvn_dependency_tree::shared::error::ExitCode;
use mvn_dependency_tree::shared::Result;
use std::path::Path;
use std::process;

fn main() {
    if let Err(e) = run() {
        print_error(&e);
        process::exit(ExitCode::ApplicationError.as_i32());
    }
}

fn run() -> Result<()> {
    let args = ReportArgs::parse_args();

    // Load config file (explicit path or auto-discovery)
    let config = load_config(args.config.as_deref())?;
    let excluded_namespaces =
        config::merge_excluded_namespaces(config.as_ref(), &args.exclude_namespace);

    // Create adapters (Dependency Injection)
    let use_case = GenerateReportUseCase::new(
        FileSystemReader::new(),
        FileSystemReader::new(),
        StderrProgressReporter::new(),
    );

    let request = ReportRequest::new(args.tree)
        .with_libraries(args.libraries)
        .with_versions(args.versions)
        .with_store(args.store)
        .with_excluded_namespaces(excluded_namespaces);

    let response = use_case.execute(request)?;
    let report = CsvCodec::render(&response.rows)?;

    let presenter: Box<dyn OutputPresenter> = match args.csv {
        Some(path) => Box::new(FileSystemWriter::new(path)),
        None => Box::new(StdoutPresenter::new()),
    };
    presenter.present(&report)?;

    Ok(())
}

fn load_config(explicit: Option<&Path>) -> Result<Option<ConfigFile>> {
    match explicit {
        Some(path) => config::load_config_from_path(path).map(Some),
        None => {
            let discovered = config::discover_config(Path::new("."))?;
            if discovered.is_some() {
                eprintln!("📄 Auto-discovered config file: {}", config::CONFIG_FILENAME);
            }
            Ok(discovered)
        }
    }
}
