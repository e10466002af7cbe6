use crate::model::MatchRecord;

/// Case-insensitive substring match on the opponent. A blank needle matches everything.
#[must_use]
pub fn opponent_matches(record: &MatchRecord, needle: &str) -> bool {
    let needle = needle.trim().to_lowercase();
    needle.is_empty() || record.opponent.to_lowercase().contains(&needle)
}

#[must_use]
pub fn filter_by_opponent<'a>(matches: &'a [MatchRecord], needle: &str) -> Vec<&'a MatchRecord> {
    matches
        .iter()
        .filter(|m| opponent_matches(m, needle))
        .collect()
}

/// Result text for tables; unplayed and `-` placeholders read as `N/A`.
#[must_use]
pub fn result_display(record: &MatchRecord) -> &str {
    match record.result.trim() {
        "" | "-" => crate::model::NOT_AVAILABLE,
        other => other,
    }
}
