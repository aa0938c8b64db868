//! Raw CSV row reading.

use std::io::Read;
use std::path::Path;

use csv::ReaderBuilder;

use crate::error::{IngestError, Result};

/// One non-blank CSV row with its 1-based source line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CsvRow {
    pub line: usize,
    pub cells: Vec<String>,
}

pub(crate) fn normalize_cell(raw: &str) -> String {
    raw.trim().trim_matches('\u{feff}').to_string()
}

/// Header text folded for alias matching: trimmed, single-spaced, lowercase.
pub(crate) fn normalize_header(raw: &str) -> String {
    normalize_cell(raw)
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
        .to_lowercase()
}

/// Reads every non-blank row of a CSV file. No row is treated as a header here.
pub fn read_csv_rows(path: &Path) -> Result<Vec<CsvRow>> {
    let file = std::fs::File::open(path).map_err(|e| IngestError::read(path, e))?;
    read_csv_rows_from_reader(file, path)
}

/// Reads CSV rows from any reader; `source` names the input in errors.
pub fn read_csv_rows_from_reader<R: Read>(reader: R, source: &Path) -> Result<Vec<CsvRow>> {
    let mut reader = ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_reader(reader);
    let mut rows = Vec::new();
    for (index, record) in reader.records().enumerate() {
        let record = record.map_err(|e| IngestError::CsvParse {
            path: source.to_path_buf(),
            message: e.to_string(),
        })?;
        let cells: Vec<String> = record.iter().map(normalize_cell).collect();
        if cells.iter().all(String::is_empty) {
            continue;
        }
        let line = record
            .position()
            .map_or(index + 1, |position| position.line() as usize);
        rows.push(CsvRow { line, cells });
    }
    tracing::debug!(source = %source.display(), rows = rows.len(), "read csv rows");
    Ok(rows)
}
