//! Pace derivation from elapsed time and course distance.

use tracing::warn;
use xc_model::{
    CourseRegistry, Pace, PacedRecord, RankingMode, RecordPolicy, Result, RunnerRecord,
    ScoringError,
};

/// A record left out of the results because its pace could not be derived.
#[derive(Debug, Clone, PartialEq)]
pub struct SkippedRecord {
    /// Position of the record in the input.
    pub index: usize,
    pub record: RunnerRecord,
    pub error: ScoringError,
}

/// Output of [`pace_records`].
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PacedRecords {
    pub records: Vec<PacedRecord>,
    pub skipped: Vec<SkippedRecord>,
}

/// Seconds per mile for one record.
pub fn compute_pace(record: &RunnerRecord, registry: &CourseRegistry) -> Result<Pace> {
    let course = record
        .course
        .as_deref()
        .ok_or_else(|| ScoringError::MissingCourse {
            runner: record.name.clone(),
        })?;
    let miles = registry.distance(course)?;
    Ok(Pace::new(record.elapsed / miles))
}

/// Derives the pace of every record from scratch.
///
/// Records without a course get no pace when ranking by time; ranking by pace
/// requires one. A course missing from the registry always fails the record.
pub fn pace_records(
    records: &[RunnerRecord],
    registry: &CourseRegistry,
    mode: RankingMode,
    policy: RecordPolicy,
) -> Result<PacedRecords> {
    let mut paced = PacedRecords::default();
    for (index, record) in records.iter().enumerate() {
        let pace = match (&record.course, mode) {
            (None, RankingMode::Time) => Ok(None),
            _ => compute_pace(record, registry).map(Some),
        };
        match pace {
            Ok(pace) => paced.records.push(PacedRecord {
                record: record.clone(),
                pace,
            }),
            Err(error) if policy == RecordPolicy::Skip => {
                warn!(index, runner = %record.name, %error, "skipping runner");
                paced.skipped.push(SkippedRecord {
                    index,
                    record: record.clone(),
                    error,
                });
            }
            Err(error) => return Err(error),
        }
    }
    Ok(paced)
}
