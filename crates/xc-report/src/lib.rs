//! Meet report generation.
//!
//! Turns scored meet results into display tables:
//!
//! - **Results**: every runner with place, time, pace, team and course
//! - **Team scores**: team placing, total points and the scoring places
//!
//! Tables can be written as CSV files or serialized together as JSON.

mod table;
mod writer;

pub use table::{Table, runner_table, scoreboard_table};
pub use writer::{OutputPaths, ReportTables, to_json, write_csv, write_outputs};
