use chrono::Duration as ChronoDuration;

#[must_use]
pub fn format_time_ago(td: ChronoDuration) -> String {
    let secs = td.num_seconds().max(0);

    const MINUTE: i64 = 60;
    const HOUR: i64 = 60 * MINUTE;
    const DAY: i64 = 24 * HOUR;

    let (amount, unit) = if secs >= DAY {
        (secs / DAY, "day")
    } else if secs >= HOUR {
        (secs / HOUR, "hour")
    } else if secs >= MINUTE {
        (secs / MINUTE, "minute")
    } else {
        (secs, "second")
    };

    if amount == 1 {
        format!("1 {unit}")
    } else {
        format!("{amount} {unit}s")
    }
}

/// Signed score for display: `+3`, `-1`, `0`, `+1.5`.
#[must_use]
pub fn format_score(score: f64) -> String {
    let body = if score.fract() == 0.0 {
        format!("{}", score as i64)
    } else {
        format!("{score}")
    };
    if score > 0.0 { format!("+{body}") } else { body }
}

/// CSS class for the sign of a score.
#[must_use]
pub fn score_class(score: f64) -> &'static str {
    if score > 0.0 {
        "score-up"
    } else if score < 0.0 {
        "score-down"
    } else {
        "score-even"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn formats_scores_with_sign() {
        assert_eq!(format_score(3.0), "+3");
        assert_eq!(format_score(-1.0), "-1");
        assert_eq!(format_score(0.0), "0");
        assert_eq!(format_score(1.5), "+1.5");
        assert_eq!(score_class(-2.0), "score-down");
    }

    #[test]
    fn formats_time_ago() {
        assert_eq!(format_time_ago(ChronoDuration::seconds(1)), "1 second");
        assert_eq!(format_time_ago(ChronoDuration::seconds(125)), "2 minutes");
        assert_eq!(format_time_ago(ChronoDuration::hours(3)), "3 hours");
        assert_eq!(format_time_ago(ChronoDuration::seconds(-5)), "0 seconds");
    }
}
