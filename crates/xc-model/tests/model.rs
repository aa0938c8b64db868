//! Tests for xc-model types.

use proptest::prelude::*;

use xc_model::{
    IncompleteTeamPolicy, RankingMode, ScoringOptions, TeamScoreEntry, TeamScoreboard, TieBreak,
    format_elapsed, format_pace, parse_duration,
};

proptest! {
    #[test]
    fn hms_round_trips_through_seconds(h in 0u32..10, m in 0u32..60, s in 0u32..60) {
        let text = format!("{h}:{m:02}:{s:02}");
        let seconds = parse_duration(&text).unwrap();
        prop_assert_eq!(seconds, f64::from(h * 3600 + m * 60 + s));
        prop_assert_eq!(format_elapsed(seconds), text);
    }

    #[test]
    fn whole_seconds_round_trip(seconds in 0u32..36_000) {
        let text = format_elapsed(f64::from(seconds));
        prop_assert_eq!(parse_duration(&text).unwrap(), f64::from(seconds));
    }

    #[test]
    fn pace_never_shows_sixty_seconds(pace in 0.0f64..3600.0) {
        let text = format_pace(pace);
        prop_assert_eq!(text.len(), 8);
        let secs: u32 = text[6..].parse().unwrap();
        prop_assert!(secs < 60);
        prop_assert_eq!(format_pace(pace), text);
    }
}

#[test]
fn options_default_to_five_scorers_by_pace() {
    let options = ScoringOptions::default();
    assert_eq!(options.ranking, RankingMode::Pace);
    assert_eq!(options.scorers_per_team, 5);
    assert_eq!(options.tie_break, TieBreak::NextRunner);
    assert_eq!(options.incomplete_teams, IncompleteTeamPolicy::Score);
}

#[test]
fn options_deserialize_with_defaults() {
    let options: ScoringOptions =
        serde_json::from_str(r#"{"ranking": "time", "incomplete_teams": "exclude"}"#)
            .expect("deserialize options");
    assert_eq!(options.ranking, RankingMode::Time);
    assert_eq!(options.incomplete_teams, IncompleteTeamPolicy::Exclude);
    assert_eq!(options.scorers_per_team, 5);
}

#[test]
fn scoreboard_placings_are_one_based() {
    let entry = |team: &str, total: u32| TeamScoreEntry {
        team: team.to_string(),
        total,
        places: vec![total],
        next_place: None,
        finishers: 1,
    };
    let board = TeamScoreboard::new(vec![entry("Reading", 1), entry("Melrose", 2)]);
    let placings: Vec<(usize, &str)> = board
        .placings()
        .map(|(place, entry)| (place, entry.team.as_str()))
        .collect();
    assert_eq!(placings, vec![(1, "Reading"), (2, "Melrose")]);
    assert_eq!(board.get("Melrose").map(|e| e.total), Some(2));
    assert!(!board.get("Reading").unwrap().is_complete(5));
}
