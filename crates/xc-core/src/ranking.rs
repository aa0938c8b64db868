//! Ordering runners and assigning places.

use xc_model::{PacedRecord, PlacedRecord, RankingMode};

/// Stable-sorts records ascending by `key`.
///
/// Records with equal keys keep their input order, which is the only record
/// of finish-line order for identical times.
pub fn rank_by<F>(mut records: Vec<PacedRecord>, key: F) -> Vec<PacedRecord>
where
    F: Fn(&PacedRecord) -> f64,
{
    records.sort_by(|a, b| key(a).total_cmp(&key(b)));
    records
}

/// Ranking key for `mode`.
///
/// Pace ranks on the whole-second pace as displayed, so runners whose paces
/// display identically keep their input order. A record without a pace sorts
/// last when ranking by pace.
pub fn ranking_key(mode: RankingMode) -> fn(&PacedRecord) -> f64 {
    match mode {
        RankingMode::Time => |paced: &PacedRecord| paced.record.elapsed,
        RankingMode::Pace => |paced: &PacedRecord| {
            paced
                .pace
                .map_or(f64::INFINITY, |pace| pace.whole_seconds() as f64)
        },
    }
}

/// Numbers records `1..=N` in their current order.
///
/// Reads no timing data, so it can follow a manual reorder without undoing it.
pub fn assign_places(records: &[PacedRecord]) -> Vec<PlacedRecord> {
    records
        .iter()
        .zip(1u32..)
        .map(|(paced, place)| PlacedRecord {
            place,
            record: paced.record.clone(),
            pace: paced.pace,
        })
        .collect()
}
