//! Meet results session.
//!
//! [`MeetResults`] owns the raw records, the course registry and the scoring
//! options, and keeps the derived views (ranked order, places, scoreboard)
//! current. Every mutation recomputes the affected views wholesale:
//!
//! - a course distance change re-derives everything from the raw records,
//!   re-ranking on timing data (manual moves are discarded);
//! - a manual move re-places and re-scores the current order only.

use tracing::{debug, info, info_span};
use xc_model::{
    CourseRegistry, PacedRecord, PlacedRecord, Result, RunnerRecord, ScoringError,
    ScoringOptions, TeamScoreboard,
};

use crate::pace::{SkippedRecord, pace_records};
use crate::ranking::{assign_places, rank_by, ranking_key};
use crate::reorder::{Direction, swap_adjacent};
use crate::scoring::score_teams;

#[derive(Debug, Clone)]
pub struct MeetResults {
    records: Vec<RunnerRecord>,
    registry: CourseRegistry,
    options: ScoringOptions,
    order: Vec<PacedRecord>,
    placed: Vec<PlacedRecord>,
    scoreboard: TeamScoreboard,
    skipped: Vec<SkippedRecord>,
}

impl MeetResults {
    /// Runs the full pipeline over `records`.
    pub fn new(
        records: Vec<RunnerRecord>,
        registry: CourseRegistry,
        options: ScoringOptions,
    ) -> Result<Self> {
        if options.scorers_per_team == 0 {
            return Err(ScoringError::InvalidScorerCount { scorers: 0 });
        }
        let mut results = Self {
            records,
            registry,
            options,
            order: Vec::new(),
            placed: Vec::new(),
            scoreboard: TeamScoreboard::default(),
            skipped: Vec::new(),
        };
        results.recompute()?;
        Ok(results)
    }

    /// Runners in ranked order with their places.
    pub fn results(&self) -> &[PlacedRecord] {
        &self.placed
    }

    pub fn scoreboard(&self) -> &TeamScoreboard {
        &self.scoreboard
    }

    /// Records left out because their pace could not be derived.
    pub fn skipped(&self) -> &[SkippedRecord] {
        &self.skipped
    }

    pub fn registry(&self) -> &CourseRegistry {
        &self.registry
    }

    pub fn options(&self) -> &ScoringOptions {
        &self.options
    }

    /// Changes a course distance and re-derives every view from the raw records.
    pub fn set_course_distance(&mut self, course: &str, miles: f64) -> Result<()> {
        let previous = self.registry.set_distance(course, miles)?;
        debug!(course, miles, ?previous, "course distance changed");
        self.recompute()
    }

    /// Moves the runner at `index` (0-based) one place up.
    pub fn move_up(&mut self, index: usize) -> Result<bool> {
        self.move_runner(index, Direction::Up)
    }

    /// Moves the runner at `index` (0-based) one place down.
    pub fn move_down(&mut self, index: usize) -> Result<bool> {
        self.move_runner(index, Direction::Down)
    }

    fn move_runner(&mut self, index: usize, direction: Direction) -> Result<bool> {
        let moved = swap_adjacent(&mut self.order, index, direction)?;
        if moved {
            debug!(index, ?direction, "runner moved");
            self.rescore();
        }
        Ok(moved)
    }

    fn recompute(&mut self) -> Result<()> {
        let span = info_span!("score_meet", ranking = ?self.options.ranking);
        let _guard = span.enter();
        let paced = pace_records(
            &self.records,
            &self.registry,
            self.options.ranking,
            self.options.records,
        )?;
        self.order = rank_by(paced.records, ranking_key(self.options.ranking));
        self.skipped = paced.skipped;
        self.rescore();
        info!(
            runners = self.placed.len(),
            skipped = self.skipped.len(),
            teams = self.scoreboard.len(),
            "meet scored"
        );
        Ok(())
    }

    fn rescore(&mut self) {
        self.placed = assign_places(&self.order);
        self.scoreboard = score_teams(&self.placed, &self.options);
    }
}

#[cfg(test)]
mod tests {
    use xc_model::RankingMode;

    use super::*;

    fn meet() -> MeetResults {
        let records = vec![
            RunnerRecord::new("A", 1200.0, "TeamX").with_course("Winchester"),
            RunnerRecord::new("B", 1170.0, "TeamY").with_course("Winchester"),
            RunnerRecord::new("C", 1150.0, "TeamX").with_course("Belmont"),
        ];
        MeetResults::new(
            records,
            CourseRegistry::league_default(),
            ScoringOptions::default(),
        )
        .unwrap()
    }

    fn order(results: &MeetResults) -> Vec<&str> {
        results
            .results()
            .iter()
            .map(|runner| runner.record.name.as_str())
            .collect()
    }

    #[test]
    fn distance_change_reranks_and_discards_moves() {
        let mut results = meet();
        // Paces: C 383.3, B 379.9, A 389.6.
        assert_eq!(order(&results), vec!["B", "C", "A"]);
        results.move_down(0).unwrap();
        assert_eq!(order(&results), vec!["C", "B", "A"]);

        results.set_course_distance("Belmont", 3.2).unwrap();
        // C now 359.4 per mile.
        assert_eq!(order(&results), vec!["C", "B", "A"]);
        results.set_course_distance("Belmont", 2.9).unwrap();
        assert_eq!(order(&results), vec!["B", "A", "C"]);
    }

    #[test]
    fn failed_distance_change_keeps_state() {
        let mut results = meet();
        assert!(results.set_course_distance("Winchester", 0.0).is_err());
        assert_eq!(results.registry().distance("Winchester").unwrap(), 3.08);
        assert_eq!(order(&results), vec!["B", "C", "A"]);
    }

    #[test]
    fn zero_scorers_are_rejected() {
        let records = vec![RunnerRecord::new("A", 1200.0, "TeamX")];
        let options = ScoringOptions::default()
            .with_ranking(RankingMode::Time)
            .with_scorers_per_team(0);
        let err = MeetResults::new(records, CourseRegistry::new(), options).unwrap_err();
        assert_eq!(err, ScoringError::InvalidScorerCount { scorers: 0 });
    }

    #[test]
    fn time_ranking_ignores_distance() {
        let records = vec![
            RunnerRecord::new("A", 1200.0, "TeamX"),
            RunnerRecord::new("B", 1170.0, "TeamY"),
        ];
        let options = ScoringOptions::default().with_ranking(RankingMode::Time);
        let results =
            MeetResults::new(records, CourseRegistry::new(), options).unwrap();
        assert_eq!(order(&results), vec!["B", "A"]);
        assert!(results.results().iter().all(|runner| runner.pace.is_none()));
    }
}
