use serde::Serialize;

use crate::model::{MatchRecord, Outcome};

/// +1 for a win, -1 for a loss, 0 for anything else.
#[must_use]
pub fn score_change(record: &MatchRecord) -> i64 {
    match record.outcome() {
        Outcome::Win => 1,
        Outcome::Loss => -1,
        Outcome::Other | Outcome::Unplayed => 0,
    }
}

/// Running score over the sequence; `None` for unplayed matches.
#[must_use]
pub fn running_scores(matches: &[MatchRecord]) -> Vec<Option<i64>> {
    let mut total = 0;
    matches
        .iter()
        .map(|m| {
            if m.is_played() {
                total += score_change(m);
                Some(total)
            } else {
                None
            }
        })
        .collect()
}

#[derive(Serialize, Clone, Debug, PartialEq)]
pub struct TrendPoint {
    /// Position in the unfiltered match list.
    pub index: usize,
    pub label: String,
    pub opponent: String,
    pub value: f64,
}

/// Chart points for every match with a cumulative score. A match without one
/// ends the current segment, so the line never bridges unplayed games.
#[must_use]
pub fn trend_segments(matches: &[MatchRecord]) -> Vec<Vec<TrendPoint>> {
    let mut segments: Vec<Vec<TrendPoint>> = Vec::new();
    let mut current: Vec<TrendPoint> = Vec::new();

    for (index, m) in matches.iter().enumerate() {
        match m.cumulative_score {
            Some(value) => current.push(TrendPoint {
                index,
                label: axis_label(m),
                opponent: m.opponent.clone(),
                value,
            }),
            None => {
                if !current.is_empty() {
                    segments.push(std::mem::take(&mut current));
                }
            }
        }
    }
    if !current.is_empty() {
        segments.push(current);
    }
    segments
}

#[must_use]
pub fn axis_label(record: &MatchRecord) -> String {
    record
        .parsed_date()
        .map_or_else(|| record.date.clone(), |d| d.format("%b %-d").to_string())
}
