//! Data model for cross-country meet results.

pub mod course;
pub mod duration;
pub mod error;
pub mod options;
pub mod runner;
pub mod scoring;

pub use course::CourseRegistry;
pub use duration::{format_elapsed, format_pace, parse_duration, parse_duration_or_zero};
pub use error::{Result, ScoringError};
pub use options::{IncompleteTeamPolicy, RankingMode, RecordPolicy, ScoringOptions, TieBreak};
pub use runner::{Pace, PacedRecord, PlacedRecord, RunnerRecord};
pub use scoring::{TeamScoreEntry, TeamScoreboard};
