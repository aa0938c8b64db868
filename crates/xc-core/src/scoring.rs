//! Team scoring under the top-N-scorers rule.

use std::cmp::Ordering;
use std::collections::HashMap;

use tracing::debug;
use xc_model::{
    IncompleteTeamPolicy, PlacedRecord, ScoringOptions, TeamScoreEntry, TeamScoreboard, TieBreak,
};

/// Scores every team from placed runners, best (lowest) total first.
///
/// Walks the runners in order and keeps the first `scorers_per_team` places
/// seen for each team. Places are taken as they appear, never re-sorted before
/// the cap is applied.
pub fn score_teams(placed: &[PlacedRecord], options: &ScoringOptions) -> TeamScoreboard {
    let cap = options.scorers_per_team;
    let mut entries: Vec<TeamScoreEntry> = Vec::new();
    let mut by_team: HashMap<&str, usize> = HashMap::new();
    for runner in placed {
        let slot = *by_team.entry(runner.team()).or_insert_with(|| {
            entries.push(TeamScoreEntry {
                team: runner.team().to_string(),
                total: 0,
                places: Vec::new(),
                next_place: None,
                finishers: 0,
            });
            entries.len() - 1
        });
        let entry = &mut entries[slot];
        entry.finishers += 1;
        if entry.places.len() < cap {
            entry.places.push(runner.place);
            entry.total += runner.place;
        } else if entry.next_place.is_none() {
            entry.next_place = Some(runner.place);
        }
    }

    if options.incomplete_teams == IncompleteTeamPolicy::Exclude {
        entries.retain(|entry| {
            let keep = entry.is_complete(cap);
            if !keep {
                debug!(team = %entry.team, finishers = entry.finishers, "excluding incomplete team");
            }
            keep
        });
    }

    // Stable: teams still tied after the tie-break keep first-encounter order.
    entries.sort_by(|a, b| {
        a.total.cmp(&b.total).then_with(|| match options.tie_break {
            TieBreak::NextRunner => compare_next_runner(a.next_place, b.next_place),
            TieBreak::FirstEncounter => Ordering::Equal,
        })
    });
    TeamScoreboard::new(entries)
}

fn compare_next_runner(a: Option<u32>, b: Option<u32>) -> Ordering {
    match (a, b) {
        (Some(a), Some(b)) => a.cmp(&b),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}
