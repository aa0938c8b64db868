//! Mapping CSV rows into runner records.
//!
//! Results come in two shapes. Positional files carry the columns in a fixed
//! order (`name, time, team[, course]`), with or without a leading title row.
//! Named files carry a header row whose labels locate each column, in any
//! order. Both shapes are mapped onto [`RunnerRecord`] here so nothing
//! downstream deals with column positions.

use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};
use xc_model::{RecordPolicy, RunnerRecord, parse_duration, parse_duration_or_zero};

use crate::error::{IngestError, RecordError, Result};
use crate::reader::{CsvRow, normalize_header, read_csv_rows};

const NAME_ALIASES: &[&str] = &["name", "runner", "athlete"];
const TIME_ALIASES: &[&str] = &["time", "total time", "finish time", "finish"];
const TEAM_ALIASES: &[&str] = &["team", "school"];
const COURSE_ALIASES: &[&str] = &["course", "meet", "location"];

/// How columns are located.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ColumnLayout {
    /// Fixed order: name, time, team, optional course.
    #[default]
    Positional,
    /// Looked up by header label. The first row is always the header.
    Named,
}

/// Whether a positional file starts with a title row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HeaderRow {
    Present,
    Absent,
    /// Treat the first row as a header when its time field is a column label.
    #[default]
    Detect,
}

/// Treatment of rows whose time field is empty.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MissingTimePolicy {
    /// An empty time rejects the row.
    #[default]
    Reject,
    /// An empty time becomes a zero-second placeholder.
    Zero,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct IngestOptions {
    pub layout: ColumnLayout,
    pub header: HeaderRow,
    pub missing_time: MissingTimePolicy,
    pub records: RecordPolicy,
}

impl IngestOptions {
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_layout(mut self, layout: ColumnLayout) -> Self {
        self.layout = layout;
        self
    }

    #[must_use]
    pub fn with_header(mut self, header: HeaderRow) -> Self {
        self.header = header;
        self
    }

    #[must_use]
    pub fn with_missing_time(mut self, policy: MissingTimePolicy) -> Self {
        self.missing_time = policy;
        self
    }

    #[must_use]
    pub fn with_records(mut self, policy: RecordPolicy) -> Self {
        self.records = policy;
        self
    }
}

/// A row dropped under [`RecordPolicy::Skip`].
#[derive(Debug, Clone, PartialEq)]
pub struct RejectedRow {
    pub line: usize,
    pub error: RecordError,
}

/// Records in source order, plus anything that was skipped.
#[derive(Debug, Clone, Default)]
pub struct LoadedResults {
    /// Header labels as they appeared in the source, if a header row was found.
    pub header: Option<Vec<String>>,
    pub records: Vec<RunnerRecord>,
    pub rejected: Vec<RejectedRow>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct ColumnMap {
    name: usize,
    time: usize,
    team: usize,
    course: Option<usize>,
}

impl ColumnMap {
    const POSITIONAL: Self = Self {
        name: 0,
        time: 1,
        team: 2,
        course: Some(3),
    };

    fn from_header(header: &[String]) -> Result<Self> {
        let folded: Vec<String> = header.iter().map(|label| normalize_header(label)).collect();
        let find = |aliases: &[&str]| {
            folded
                .iter()
                .position(|label| aliases.iter().any(|alias| *alias == label.as_str()))
        };
        Ok(Self {
            name: find(NAME_ALIASES).ok_or(IngestError::MissingColumn { column: "name" })?,
            time: find(TIME_ALIASES).ok_or(IngestError::MissingColumn { column: "time" })?,
            team: find(TEAM_ALIASES).ok_or(IngestError::MissingColumn { column: "team" })?,
            course: find(COURSE_ALIASES),
        })
    }

    fn required_width(self) -> usize {
        self.name.max(self.time).max(self.team) + 1
    }
}

/// Loads runner records from a CSV file.
pub fn load_results(path: &Path, options: &IngestOptions) -> Result<LoadedResults> {
    let rows = read_csv_rows(path)?;
    if rows.is_empty() {
        return Err(IngestError::EmptyCsv {
            path: path.to_path_buf(),
        });
    }
    parse_results(&rows, options)
}

/// Maps already-read rows into runner records.
pub fn parse_results(rows: &[CsvRow], options: &IngestOptions) -> Result<LoadedResults> {
    let Some(first) = rows.first() else {
        return Ok(LoadedResults::default());
    };
    let (columns, header) = match options.layout {
        ColumnLayout::Named => (ColumnMap::from_header(&first.cells)?, true),
        ColumnLayout::Positional => {
            let header = match options.header {
                HeaderRow::Present => true,
                HeaderRow::Absent => false,
                HeaderRow::Detect => looks_like_header(first, ColumnMap::POSITIONAL.time),
            };
            (ColumnMap::POSITIONAL, header)
        }
    };
    let data = if header { &rows[1..] } else { rows };
    debug!(
        layout = ?options.layout,
        header,
        rows = data.len(),
        "mapping result rows"
    );

    let mut loaded = LoadedResults {
        header: header.then(|| first.cells.clone()),
        ..LoadedResults::default()
    };
    for row in data {
        match build_record(row, columns, options.missing_time) {
            Ok(record) => loaded.records.push(record),
            Err(error) => match options.records {
                RecordPolicy::Abort => {
                    return Err(IngestError::InvalidRecord {
                        line: row.line,
                        source: error,
                    });
                }
                RecordPolicy::Skip => {
                    warn!(line = row.line, %error, "skipping result row");
                    loaded.rejected.push(RejectedRow {
                        line: row.line,
                        error,
                    });
                }
            },
        }
    }
    Ok(loaded)
}

/// A title row names its time column. Anything else is data, so a bad first
/// runner still goes through record validation.
fn looks_like_header(row: &CsvRow, time_column: usize) -> bool {
    row.cells.get(time_column).is_some_and(|cell| {
        let label = normalize_header(cell);
        TIME_ALIASES.iter().any(|alias| *alias == label.as_str())
    })
}

fn build_record(
    row: &CsvRow,
    columns: ColumnMap,
    missing_time: MissingTimePolicy,
) -> std::result::Result<RunnerRecord, RecordError> {
    let expected = columns.required_width();
    if row.cells.len() < expected {
        return Err(RecordError::Arity {
            found: row.cells.len(),
            expected,
        });
    }
    let name = required(row, columns.name, "name")?;
    let team = required(row, columns.team, "team")?;
    let time = &row.cells[columns.time];
    let elapsed = match missing_time {
        MissingTimePolicy::Reject => parse_duration(time)?,
        MissingTimePolicy::Zero => parse_duration_or_zero(time)?,
    };
    let course = columns
        .course
        .and_then(|index| row.cells.get(index))
        .filter(|cell| !cell.is_empty())
        .cloned();
    Ok(RunnerRecord {
        name,
        elapsed,
        team,
        course,
    })
}

fn required(
    row: &CsvRow,
    index: usize,
    column: &'static str,
) -> std::result::Result<String, RecordError> {
    let value = &row.cells[index];
    if value.is_empty() {
        return Err(RecordError::EmptyField { column });
    }
    Ok(value.clone())
}
