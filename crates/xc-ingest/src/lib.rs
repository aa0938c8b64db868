//! Meet result ingestion.
//!
//! This crate reads finish-line CSV exports and turns them into
//! [`RunnerRecord`](xc_model::RunnerRecord)s, plus the optional TOML file
//! that configures course distances and scoring options.
//!
//! # Example
//!
//! ```ignore
//! use std::path::Path;
//! use xc_ingest::{IngestOptions, load_results};
//!
//! let loaded = load_results(Path::new("league-meet.csv"), &IngestOptions::default())?;
//! println!("{} runners", loaded.records.len());
//! ```

mod config;
mod error;
mod layout;
mod reader;

// === Error Types ===
pub use error::{IngestError, RecordError, Result};

// === CSV Reading ===
pub use reader::{CsvRow, read_csv_rows, read_csv_rows_from_reader};

// === Record Mapping ===
pub use layout::{
    ColumnLayout, HeaderRow, IngestOptions, LoadedResults, MissingTimePolicy, RejectedRow,
    load_results, parse_results,
};

// === Configuration ===
pub use config::{MeetConfig, load_meet_config};
