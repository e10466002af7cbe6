use crate::error::AppError;
use crate::model::{MatchRecord, Outcome, RosterEntry, TeamMeta, TeamSummary, TeamTable, WinLoss};

/// How many played games the recent-games list keeps.
pub const RECENT_GAMES: usize = 5;

/// Build the summary for `team_name` from one season of matches and its roster.
///
/// `latest_score` is read from the last element of the unfiltered `matches`,
/// even when that match has not been played yet; a missing cumulative score
/// there reads as `0`.
///
/// # Errors
///
/// Will return `AppError::TeamNotFound` if `team_name` is not in `teams`
pub fn summarize(
    teams: &TeamTable,
    team_name: &str,
    matches: &[MatchRecord],
    roster: &[RosterEntry],
) -> Result<TeamSummary, AppError> {
    let meta = teams.lookup(team_name)?;
    Ok(summarize_for(meta, matches, roster))
}

#[must_use]
pub fn summarize_for(meta: &TeamMeta, matches: &[MatchRecord], roster: &[RosterEntry]) -> TeamSummary {
    let played: Vec<&MatchRecord> = matches.iter().filter(|m| m.is_played()).collect();

    let record = played.iter().fold(WinLoss::default(), |mut acc, m| {
        match m.outcome() {
            Outcome::Win => acc.wins += 1,
            Outcome::Loss => acc.losses += 1,
            Outcome::Other | Outcome::Unplayed => {}
        }
        acc
    });

    let latest_score = matches
        .last()
        .and_then(|m| m.cumulative_score)
        .unwrap_or(0.0);

    let recent_games = played
        .iter()
        .rev()
        .take(RECENT_GAMES)
        .map(|m| (*m).clone())
        .collect();

    TeamSummary {
        name: meta.name.clone(),
        logo: meta.logo.clone(),
        color: meta.color.clone(),
        record,
        latest_score,
        recent_games,
        roster: roster.to_vec(),
        matches: matches.to_vec(),
    }
}
