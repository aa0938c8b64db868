//! Runner records and the values derived from them.

use serde::{Deserialize, Serialize};

use crate::duration::{format_pace, pace_whole_seconds};

/// One finisher as read from the results source.
///
/// Records have no stable identifier; their position in a dataset is their
/// identity. Reordering changes derived fields, never the record itself.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RunnerRecord {
    pub name: String,
    /// Elapsed finish time in seconds.
    pub elapsed: f64,
    pub team: String,
    pub course: Option<String>,
}

impl RunnerRecord {
    pub fn new(name: impl Into<String>, elapsed: f64, team: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            elapsed,
            team: team.into(),
            course: None,
        }
    }

    #[must_use]
    pub fn with_course(mut self, course: impl Into<String>) -> Self {
        self.course = Some(course.into());
        self
    }
}

/// Time per mile.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Pace {
    pub seconds_per_mile: f64,
}

impl Pace {
    pub fn new(seconds_per_mile: f64) -> Self {
        Self { seconds_per_mile }
    }

    /// `HH:MM:SS` display form.
    pub fn display(&self) -> String {
        format_pace(self.seconds_per_mile)
    }

    /// Whole seconds of the displayed pace.
    pub fn whole_seconds(&self) -> u64 {
        pace_whole_seconds(self.seconds_per_mile)
    }
}

/// A record with its pace, when the record names a course.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PacedRecord {
    pub record: RunnerRecord,
    pub pace: Option<Pace>,
}

/// A record holding a 1-based place in the current order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlacedRecord {
    pub place: u32,
    pub record: RunnerRecord,
    pub pace: Option<Pace>,
}

impl PlacedRecord {
    pub fn team(&self) -> &str {
        &self.record.team
    }
}
