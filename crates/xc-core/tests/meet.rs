//! End-to-end scoring tests.

use proptest::prelude::*;

use xc_core::{MeetResults, assign_places, rank_by, ranking_key, score_teams};
use xc_model::{
    CourseRegistry, PacedRecord, RankingMode, RecordPolicy, RunnerRecord, ScoringError,
    ScoringOptions,
};

fn winchester_meet() -> MeetResults {
    let records = vec![
        RunnerRecord::new("A", 1200.0, "TeamX").with_course("Winchester"),
        RunnerRecord::new("B", 1170.0, "TeamY").with_course("Winchester"),
    ];
    MeetResults::new(
        records,
        CourseRegistry::league_default(),
        ScoringOptions::default(),
    )
    .expect("score meet")
}

#[test]
fn ranks_winchester_example_by_pace() {
    let results = winchester_meet();
    let rows: Vec<(u32, &str, String)> = results
        .results()
        .iter()
        .map(|runner| {
            (
                runner.place,
                runner.record.name.as_str(),
                runner.pace.map(|pace| pace.display()).unwrap_or_default(),
            )
        })
        .collect();
    assert_eq!(
        rows,
        vec![
            (1, "B", "00:06:20".to_string()),
            (2, "A", "00:06:30".to_string()),
        ]
    );
}

#[test]
fn move_down_swaps_first_and_second() {
    let records = vec![
        RunnerRecord::new("A", 1000.0, "TeamX"),
        RunnerRecord::new("B", 1010.0, "TeamY"),
        RunnerRecord::new("C", 1020.0, "TeamX"),
        RunnerRecord::new("D", 1030.0, "TeamY"),
    ];
    let options = ScoringOptions::default().with_ranking(RankingMode::Time);
    let mut results = MeetResults::new(records, CourseRegistry::new(), options).unwrap();
    assert_eq!(results.scoreboard().get("TeamX").unwrap().total, 4);
    assert_eq!(results.scoreboard().get("TeamY").unwrap().total, 6);

    assert!(results.move_down(0).unwrap());
    let places: Vec<(u32, &str)> = results
        .results()
        .iter()
        .map(|runner| (runner.place, runner.record.name.as_str()))
        .collect();
    assert_eq!(places, vec![(1, "B"), (2, "A"), (3, "C"), (4, "D")]);
    assert_eq!(results.scoreboard().get("TeamX").unwrap().places, vec![2, 3]);
    assert_eq!(results.scoreboard().get("TeamY").unwrap().places, vec![1, 4]);
    assert_eq!(results.scoreboard().get("TeamX").unwrap().total, 5);
    assert_eq!(results.scoreboard().get("TeamY").unwrap().total, 5);

    // Boundary moves change nothing.
    assert!(!results.move_up(0).unwrap());
    assert!(!results.move_down(3).unwrap());
    assert!(matches!(
        results.move_up(4),
        Err(ScoringError::RowOutOfRange { index: 4, len: 4 })
    ));
}

#[test]
fn unknown_course_aborts_or_skips() {
    let records = vec![
        RunnerRecord::new("A", 1200.0, "TeamX").with_course("Winchester"),
        RunnerRecord::new("B", 1170.0, "TeamY").with_course("Franklin Park"),
    ];
    let err = MeetResults::new(
        records.clone(),
        CourseRegistry::league_default(),
        ScoringOptions::default(),
    )
    .unwrap_err();
    assert_eq!(
        err,
        ScoringError::UnknownCourse {
            course: "Franklin Park".to_string()
        }
    );

    let options = ScoringOptions::default().with_records(RecordPolicy::Skip);
    let mut results =
        MeetResults::new(records, CourseRegistry::league_default(), options).unwrap();
    assert_eq!(results.results().len(), 1);
    assert_eq!(results.skipped()[0].record.name, "B");

    // Registering the course brings the runner back on the next recompute.
    results.set_course_distance("Franklin Park", 3.1).unwrap();
    assert_eq!(results.results().len(), 2);
    assert!(results.skipped().is_empty());
    assert_eq!(results.results()[0].record.name, "B");
}

fn arb_records() -> impl Strategy<Value = Vec<RunnerRecord>> {
    prop::collection::vec((900u32..960, 0usize..4), 0..40).prop_map(|rows| {
        rows.into_iter()
            .enumerate()
            .map(|(index, (seconds, team))| {
                RunnerRecord::new(format!("R{index}"), f64::from(seconds), format!("T{team}"))
            })
            .collect()
    })
}

fn paced(records: &[RunnerRecord]) -> Vec<PacedRecord> {
    records
        .iter()
        .map(|record| PacedRecord {
            record: record.clone(),
            pace: None,
        })
        .collect()
}

proptest! {
    #[test]
    fn ranking_is_stable(records in arb_records()) {
        let ranked = rank_by(paced(&records), ranking_key(RankingMode::Time));
        for pair in ranked.windows(2) {
            let (a, b) = (&pair[0].record, &pair[1].record);
            prop_assert!(a.elapsed <= b.elapsed);
            if a.elapsed == b.elapsed {
                let index = |name: &str| name[1..].parse::<usize>().unwrap();
                prop_assert!(index(&a.name) < index(&b.name));
            }
        }
    }

    #[test]
    fn places_are_one_to_n(records in arb_records()) {
        let placed = assign_places(&rank_by(paced(&records), ranking_key(RankingMode::Time)));
        let places: Vec<u32> = placed.iter().map(|runner| runner.place).collect();
        let expected: Vec<u32> = (1..=records.len() as u32).collect();
        prop_assert_eq!(places, expected);
    }

    #[test]
    fn scoreboard_caps_and_orders(records in arb_records()) {
        let placed = assign_places(&rank_by(paced(&records), ranking_key(RankingMode::Time)));
        let board = score_teams(&placed, &ScoringOptions::default());
        for entry in &board.entries {
            let best: Vec<u32> = placed
                .iter()
                .filter(|runner| runner.record.team == entry.team)
                .map(|runner| runner.place)
                .take(5)
                .collect();
            prop_assert_eq!(&entry.places, &best);
            prop_assert_eq!(entry.total, best.iter().sum::<u32>());
        }
        for pair in board.entries.windows(2) {
            prop_assert!(pair[0].total <= pair[1].total);
        }
    }
}
