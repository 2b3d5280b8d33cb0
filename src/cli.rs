use crate::shared::error::ExitCode;
use clap::Parser;
use owo_colors::{OwoColorize, Stream};
use std::path::PathBuf;
use std::process;

/// Report the direct dependencies of a Maven build, enriched with library
/// metadata and release dates
#[derive(Parser, Debug)]
#[command(name = "mvn-dependency-tree")]
#[command(version)]
#[command(
    about = "Report the direct dependencies found in `mvn dependency:tree` output",
    long_about = None
)]
pub struct ReportArgs {
    /// `mvn dependency:tree` output (if not specified, reads stdin)
    #[arg(short, long, value_name = "FILE")]
    pub tree: Option<PathBuf>,

    /// Output report file path (if not specified, outputs to stdout)
    #[arg(short = 'o', long = "csv", value_name = "FILE")]
    pub csv: Option<PathBuf>,

    /// Library table (name,new_location,latest,description)
    #[arg(short, long, value_name = "FILE")]
    pub libraries: Option<PathBuf>,

    /// Version table (name,version,date)
    #[arg(short = 's', long, value_name = "FILE")]
    pub versions: Option<PathBuf>,

    /// Previous dependency report merged into both tables before lookups
    #[arg(long, value_name = "FILE")]
    pub store: Option<PathBuf>,

    /// Exclude entries whose coordinate contains this group-ID fragment.
    /// Can be specified multiple times: -x com.example -x org.internal
    #[arg(short = 'x', long = "exclude-namespace", value_name = "FRAGMENT")]
    pub exclude_namespace: Vec<String>,

    /// Path to config file (auto-discovers mvn-dependency-tree.config.yml if not specified)
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,
}

impl ReportArgs {
    pub fn parse_args() -> Self {
        parse_or_exit()
    }
}

/// Fold dependency reports into the master library and version tables
#[derive(Parser, Debug)]
#[command(name = "build-indexes")]
#[command(version)]
#[command(about = "Merge dependency reports into library and version tables", long_about = None)]
pub struct BuildIndexesArgs {
    /// Existing library table to start from
    #[arg(long, value_name = "FILE")]
    pub lin: Option<PathBuf>,

    /// Existing version table to start from
    #[arg(long, value_name = "FILE")]
    pub vin: Option<PathBuf>,

    /// Where to write the merged library table
    #[arg(long, value_name = "FILE")]
    pub lout: PathBuf,

    /// Where to write the merged version table
    #[arg(long, value_name = "FILE")]
    pub vout: PathBuf,

    /// Dependency reports, merged in the order given
    #[arg(value_name = "REPORT")]
    pub reports: Vec<PathBuf>,
}

impl BuildIndexesArgs {
    pub fn parse_args() -> Self {
        parse_or_exit()
    }
}

/// Parses the process arguments, exiting on `--help`, `--version`, or a
/// usage error
fn parse_or_exit<P: Parser>() -> P {
    P::try_parse().unwrap_or_else(|e| {
        let _ = e.print();
        process::exit(exit_code_for(&e).as_i32())
    })
}

/// Help and version requests are clap "errors" printed to stdout
fn exit_code_for(e: &clap::Error) -> ExitCode {
    if e.use_stderr() {
        ExitCode::InvalidArguments
    } else {
        ExitCode::Success
    }
}

/// Prints a failed run's error and its cause chain to stderr
pub fn print_error(e: &anyhow::Error) {
    eprintln!(
        "\n{}\n",
        "❌ An error occurred:".if_supports_color(Stream::Stderr, |text| text.red())
    );
    eprintln!("{}", e);

    for cause in e.chain().skip(1) {
        eprintln!("\nCaused by: {}", cause);
    }

    eprintln!();
}
