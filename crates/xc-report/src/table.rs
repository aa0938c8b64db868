//! Display tables built from scored results.

use serde::Serialize;
use xc_model::{PlacedRecord, TeamScoreboard, format_elapsed};

/// Ordered headers plus rows of display strings. Every row has one cell per header.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Table {
    pub headers: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

impl Table {
    pub fn new(headers: &[&str]) -> Self {
        Self {
            headers: headers.iter().map(|header| (*header).to_string()).collect(),
            rows: Vec::new(),
        }
    }

    fn push_row(&mut self, row: Vec<String>) {
        debug_assert_eq!(row.len(), self.headers.len(), "row arity");
        self.rows.push(row);
    }
}

/// Ranked runner table.
///
/// Pace and course columns only appear when at least one runner has a course.
pub fn runner_table(results: &[PlacedRecord]) -> Table {
    let with_course = results.iter().any(|runner| runner.record.course.is_some());
    let mut table = if with_course {
        Table::new(&["Place", "Name", "Time", "Pace (min/mile)", "Team", "Course"])
    } else {
        Table::new(&["Place", "Name", "Time", "Team"])
    };
    for runner in results {
        let mut row = vec![
            runner.place.to_string(),
            runner.record.name.clone(),
            format_elapsed(runner.record.elapsed),
        ];
        if with_course {
            row.push(runner.pace.map(|pace| pace.display()).unwrap_or_default());
        }
        row.push(runner.record.team.clone());
        if with_course {
            row.push(runner.record.course.clone().unwrap_or_default());
        }
        table.push_row(row);
    }
    table
}

/// Team scoreboard table.
pub fn scoreboard_table(board: &TeamScoreboard) -> Table {
    let mut table = Table::new(&["Place", "Team", "Total Points", "Individual Points"]);
    for (place, entry) in board.placings() {
        let places: Vec<String> = entry.places.iter().map(u32::to_string).collect();
        table.push_row(vec![
            place.to_string(),
            entry.team.clone(),
            entry.total.to_string(),
            places.join(", "),
        ]);
    }
    table
}
