use std::fmt;
use std::path::PathBuf;
use thiserror::Error;

/// Exit codes for both command-line tools.
///
/// A run either completes or fails outright, so there are only three outcomes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(i32)]
pub enum ExitCode {
    /// Every input was processed and every output written
    Success = 0,
    /// Malformed input, conflicting metadata, or file I/O failure
    ApplicationError = 1,
    /// Invalid command-line arguments (clap parsing errors)
    InvalidArguments = 2,
}

impl ExitCode {
    /// Convert to i32 for use with std::process::exit
    pub fn as_i32(self) -> i32 {
        self as i32
    }
}

impl fmt::Display for ExitCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExitCode::Success => write!(f, "Success (0)"),
            ExitCode::ApplicationError => write!(f, "Application Error (1)"),
            ExitCode::InvalidArguments => write!(f, "Invalid Arguments (2)"),
        }
    }
}

/// Errors raised while building dependency reports and reference tables.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ReportError {
    #[error("'{coordinate}' lacks all 5 dependency fields (group:artifact:packaging:version:scope)")]
    MalformedCoordinate { coordinate: String },

    #[error("On '{key}', had '{existing}' saw '{incoming}' for '{field}'")]
    ConflictingMetadata {
        key: String,
        field: &'static str,
        existing: String,
        incoming: String,
    },

    #[error("Malformed CSV in {source_name}\nDetails: {details}\n\n💡 Hint: Expected columns: {expected}")]
    CsvFormatError {
        source_name: String,
        details: String,
        expected: String,
    },

    #[error("Failed to read file: {path}\nDetails: {details}\n\n💡 Hint: Please verify that the file exists and you have read permissions")]
    FileReadError { path: PathBuf, details: String },

    #[error("Failed to write to file: {path}\nDetails: {details}\n\n💡 Hint: Please verify that the directory exists and you have write permissions")]
    FileWriteError { path: PathBuf, details: String },

    #[error("Security violation: {path}\nReason: {reason}\n\n💡 Hint: {hint}")]
    SecurityError {
        path: PathBuf,
        reason: String,
        hint: String,
    },

    #[error("Validation error: {message}")]
    Validation { message: String },
}
