//! Configuration options for ranking and team scoring.

use serde::{Deserialize, Serialize};

/// Metric that orders runners.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RankingMode {
    /// Elapsed finish time.
    Time,
    /// Displayed pace per mile, for results pooled across courses.
    #[default]
    Pace,
}

/// How teams with equal totals are ordered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TieBreak {
    /// Compare the place of each team's first non-scoring runner. A team with
    /// such a runner beats one without. Remaining ties keep first-encounter order.
    #[default]
    NextRunner,
    /// Keep the order in which teams first appear in the results.
    FirstEncounter,
}

/// Treatment of teams with fewer finishers than the scoring cap.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum IncompleteTeamPolicy {
    /// Score the team with the runners it has.
    #[default]
    Score,
    /// Leave the team off the scoreboard.
    Exclude,
}

/// What to do with a record that fails validation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RecordPolicy {
    /// Stop and report the first failing record.
    #[default]
    Abort,
    /// Drop the record, keep a note of it and continue.
    Skip,
}

/// Options controlling ranking and team scoring.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScoringOptions {
    pub ranking: RankingMode,
    /// Number of runners whose places count toward a team total.
    pub scorers_per_team: usize,
    pub tie_break: TieBreak,
    pub incomplete_teams: IncompleteTeamPolicy,
    pub records: RecordPolicy,
}

impl Default for ScoringOptions {
    fn default() -> Self {
        Self {
            ranking: RankingMode::default(),
            scorers_per_team: 5,
            tie_break: TieBreak::default(),
            incomplete_teams: IncompleteTeamPolicy::default(),
            records: RecordPolicy::default(),
        }
    }
}

impl ScoringOptions {
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_ranking(mut self, ranking: RankingMode) -> Self {
        self.ranking = ranking;
        self
    }

    #[must_use]
    pub fn with_scorers_per_team(mut self, scorers: usize) -> Self {
        self.scorers_per_team = scorers;
        self
    }

    #[must_use]
    pub fn with_tie_break(mut self, tie_break: TieBreak) -> Self {
        self.tie_break = tie_break;
        self
    }

    #[must_use]
    pub fn with_incomplete_teams(mut self, policy: IncompleteTeamPolicy) -> Self {
        self.incomplete_teams = policy;
        self
    }

    #[must_use]
    pub fn with_records(mut self, policy: RecordPolicy) -> Self {
        self.records = policy;
        self
    }
}
