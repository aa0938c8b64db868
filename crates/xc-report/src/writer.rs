//! CSV and JSON output.

use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::Serialize;
use xc_core::MeetResults;

use crate::table::{Table, runner_table, scoreboard_table};

/// Both report tables for one scored meet.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ReportTables {
    pub results: Table,
    pub team_scores: Table,
}

impl ReportTables {
    pub fn from_results(results: &MeetResults) -> Self {
        Self {
            results: runner_table(results.results()),
            team_scores: scoreboard_table(results.scoreboard()),
        }
    }
}

/// Files written by [`write_outputs`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutputPaths {
    pub results: PathBuf,
    pub team_scores: PathBuf,
}

/// Writes a table as CSV with a header row.
pub fn write_csv<W: Write>(table: &Table, writer: W) -> Result<()> {
    let mut writer = csv::Writer::from_writer(writer);
    writer.write_record(&table.headers).context("write csv header")?;
    for row in &table.rows {
        writer.write_record(row).context("write csv row")?;
    }
    writer.flush().context("flush csv")?;
    Ok(())
}

/// Writes `results.csv` and `team-scores.csv` into `output_dir`.
pub fn write_outputs(output_dir: &Path, tables: &ReportTables) -> Result<OutputPaths> {
    fs::create_dir_all(output_dir)
        .with_context(|| format!("create output dir {}", output_dir.display()))?;
    let paths = OutputPaths {
        results: output_dir.join("results.csv"),
        team_scores: output_dir.join("team-scores.csv"),
    };
    for (table, path) in [
        (&tables.results, &paths.results),
        (&tables.team_scores, &paths.team_scores),
    ] {
        let file =
            fs::File::create(path).with_context(|| format!("create {}", path.display()))?;
        write_csv(table, file).with_context(|| format!("write {}", path.display()))?;
        tracing::debug!(path = %path.display(), rows = table.rows.len(), "wrote table");
    }
    Ok(paths)
}

/// Serializes both tables as pretty JSON.
pub fn to_json(tables: &ReportTables) -> Result<String> {
    serde_json::to_string_pretty(tables).context("serialize report tables")
}
