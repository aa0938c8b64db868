//! Team score types.

use serde::{Deserialize, Serialize};

/// A team's score for one ranked dataset.
///
/// Recomputed wholesale whenever the ranked order changes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TeamScoreEntry {
    pub team: String,
    /// Sum of `places`.
    pub total: u32,
    /// Places of the scoring runners, in the order they appear in the results.
    pub places: Vec<u32>,
    /// Place of the first runner after the scoring cap, used for tie-breaks.
    pub next_place: Option<u32>,
    /// Every finisher of the team, scoring or not.
    pub finishers: usize,
}

impl TeamScoreEntry {
    /// Whether the team fielded a full scoring roster.
    pub fn is_complete(&self, scorers_per_team: usize) -> bool {
        self.places.len() >= scorers_per_team
    }
}

/// Team scores ordered from best (lowest total) to worst.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TeamScoreboard {
    pub entries: Vec<TeamScoreEntry>,
}

impl TeamScoreboard {
    pub fn new(entries: Vec<TeamScoreEntry>) -> Self {
        Self { entries }
    }

    /// Entries paired with their 1-based team place.
    pub fn placings(&self) -> impl Iterator<Item = (usize, &TeamScoreEntry)> {
        self.entries
            .iter()
            .enumerate()
            .map(|(index, entry)| (index + 1, entry))
    }

    pub fn get(&self, team: &str) -> Option<&TeamScoreEntry> {
        self.entries.iter().find(|entry| entry.team == team)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
