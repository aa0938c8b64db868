//! Scoring engine for cross-country meets.
//!
//! Pipeline order, leaf first:
//!
//! 1. [`pace`] derives each runner's pace from elapsed time and course distance.
//! 2. [`ranking`] orders runners by time or pace and numbers them.
//! 3. [`scoring`] totals each team's best places.
//! 4. [`reorder`] lets a judge override the order before re-placing.
//!
//! [`MeetResults`] ties the stages together and re-runs them on every change.

pub mod meet;
pub mod pace;
pub mod ranking;
pub mod reorder;
pub mod scoring;

pub use meet::MeetResults;
pub use pace::{PacedRecords, SkippedRecord, compute_pace, pace_records};
pub use ranking::{assign_places, rank_by, ranking_key};
pub use reorder::{Direction, swap_adjacent};
pub use scoring::score_teams;
