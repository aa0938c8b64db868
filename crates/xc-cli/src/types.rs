use std::path::PathBuf;

use xc_core::MeetResults;
use xc_ingest::RejectedRow;
use xc_report::ReportTables;

#[derive(Debug)]
pub struct ScoreResult {
    pub input: PathBuf,
    /// Title row of the results file, when one was found.
    pub header: Option<Vec<String>>,
    pub meet: MeetResults,
    pub tables: ReportTables,
    /// CSV rows that never became records.
    pub rejected: Vec<RejectedRow>,
    pub moved: usize,
    pub outputs: Option<xc_report::OutputPaths>,
}
