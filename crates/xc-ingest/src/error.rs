//! Error types for meet result ingestion.

use std::path::PathBuf;

use thiserror::Error;
use xc_model::ScoringError;

/// Errors that can occur while loading results or configuration.
#[derive(Debug, Error)]
pub enum IngestError {
    // === File System Errors ===
    /// Results or configuration file not found.
    #[error("file not found: {path}")]
    FileNotFound { path: PathBuf },

    /// Failed to read file.
    #[error("failed to read file {path}: {source}")]
    FileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    // === CSV Errors ===
    /// The CSV reader rejected the input.
    #[error("failed to parse CSV {path}: {message}")]
    CsvParse { path: PathBuf, message: String },

    /// The source has no non-blank rows.
    #[error("CSV file is empty: {path}")]
    EmptyCsv { path: PathBuf },

    /// A required column is missing from the header row.
    #[error("required column '{column}' not found in header")]
    MissingColumn { column: &'static str },

    /// A row could not be turned into a runner record.
    #[error("line {line}: {source}")]
    InvalidRecord {
        line: usize,
        #[source]
        source: RecordError,
    },

    // === Configuration Errors ===
    /// The course configuration file is malformed.
    #[error("invalid course configuration {path}: {message}")]
    CourseFile { path: PathBuf, message: String },
}

impl IngestError {
    pub(crate) fn read(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        let path = path.into();
        if source.kind() == std::io::ErrorKind::NotFound {
            Self::FileNotFound { path }
        } else {
            Self::FileRead { path, source }
        }
    }
}

/// Why a single row was rejected.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum RecordError {
    #[error("expected at least {expected} fields, found {found}")]
    Arity { found: usize, expected: usize },

    #[error("empty {column} field")]
    EmptyField { column: &'static str },

    #[error(transparent)]
    Time(#[from] ScoringError),
}

/// Result type for ingestion operations.
pub type Result<T> = std::result::Result<T, IngestError>;
