use crate::score_log::ScoreRecord;
use itertools::Itertools;
use std::cmp::Ordering;

/// How many records the leaderboard shows by default.
pub const DEFAULT_TOP_SCORES: usize = 10;

/// Best records first: primary key wpm descending, secondary key accuracy
/// descending.
pub fn top_records(records: Vec<ScoreRecord>, limit: usize) -> Vec<ScoreRecord> {
    records
        .into_iter()
        .sorted_by(|a, b| {
            b.wpm.cmp(&a.wpm).then(
                b.accuracy
                    .partial_cmp(&a.accuracy)
                    .unwrap_or(Ordering::Equal),
            )
        })
        .take(limit)
        .collect()
}

/// Plain-text leaderboard for the no-TTY `--best-scores` path.
pub fn format_plain(records: &[ScoreRecord]) -> String {
    if records.is_empty() {
        return String::from("no recorded scores yet\n");
    }

    let mut out = String::from("rank  wpm  accuracy  time\n");
    for (i, record) in records.iter().enumerate() {
        out.push_str(&format!(
            "{:>4}  {:>3}  {:>7.1}%  {:>3}s\n",
            i + 1,
            record.wpm,
            record.accuracy * 100.0,
            record.elapsed_secs
        ));
    }
    out
}
