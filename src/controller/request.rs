use std::collections::HashMap;
use std::hash::BuildHasher;

use crate::controller::compare::Selection;
use crate::error::AppError;
use crate::model::{Season, TeamTable};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompareRequest {
    pub selection: Selection,
    pub want_json: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TeamRequest {
    pub season: Season,
    pub opponent: String,
    pub want_json: bool,
}

fn param<'a, S: BuildHasher>(query: &'a HashMap<String, String, S>, key: &str) -> Option<&'a str> {
    query
        .get(key)
        .map(|s| s.trim())
        .filter(|s| !s.is_empty())
}

fn flag<S: BuildHasher>(query: &HashMap<String, String, S>, key: &str) -> bool {
    match param(query, key) {
        Some("1") => true,
        Some("0") | None => false,
        Some(other) => other.parse().unwrap_or(false),
    }
}

fn season_param<S: BuildHasher>(
    query: &HashMap<String, String, S>,
    default_season: &Season,
) -> Result<Season, AppError> {
    param(query, "season").map_or_else(|| Ok(default_season.clone()), |s| s.parse())
}

/// Parse `left`, `right`, `season` and `json`; missing teams fall back to the table defaults.
///
/// # Errors
///
/// Returns `AppError::TeamNotFound` for an unknown team and `AppError::BadRequest` for a bad season.
pub fn parse_compare_request<S: BuildHasher>(
    query: &HashMap<String, String, S>,
    teams: &TeamTable,
    default_season: &Season,
) -> Result<CompareRequest, AppError> {
    let season = season_param(query, default_season)?;
    let mut selection = Selection::defaults(teams, season);
    if let Some(left) = param(query, "left") {
        selection.left = teams.lookup(left)?.name.clone();
    }
    if let Some(right) = param(query, "right") {
        selection.right = teams.lookup(right)?.name.clone();
    }
    Ok(CompareRequest {
        selection,
        want_json: flag(query, "json"),
    })
}

/// # Errors
///
/// Returns `AppError::BadRequest` for a bad season.
pub fn parse_team_request<S: BuildHasher>(
    query: &HashMap<String, String, S>,
    default_season: &Season,
) -> Result<TeamRequest, AppError> {
    Ok(TeamRequest {
        season: season_param(query, default_season)?,
        opponent: param(query, "opponent").unwrap_or_default().to_string(),
        want_json: flag(query, "json"),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn query(pairs: &[(&str, &str)]) -> HashMap<String, String> {
        pairs
            .iter()
            .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
            .collect()
    }

    #[test]
    fn compare_defaults_to_primary_and_first_opponent() {
        let teams = TeamTable::big_ten();
        let req = parse_compare_request(&query(&[]), &teams, &Season::default()).unwrap();
        assert_eq!(req.selection.left, "UCLA");
        assert_eq!(req.selection.right, "USC");
        assert_eq!(req.selection.season.as_str(), "2025-26");
        assert!(!req.want_json);
    }

    #[test]
    fn compare_rejects_unknown_teams_and_seasons() {
        let teams = TeamTable::big_ten();
        let season = Season::default();
        assert_eq!(
            parse_compare_request(&query(&[("right", "Rutgers")]), &teams, &season),
            Err(AppError::TeamNotFound("Rutgers".into()))
        );
        assert!(matches!(
            parse_compare_request(&query(&[("season", "2025")]), &teams, &season),
            Err(AppError::BadRequest(_))
        ));
    }

    #[test]
    fn team_request_reads_flags() {
        let req = parse_team_request(
            &query(&[("json", "true"), ("opponent", " stan "), ("season", "2024-25")]),
            &Season::default(),
        )
        .unwrap();
        assert!(req.want_json);
        assert_eq!(req.opponent, "stan");
        assert_eq!(req.season.as_str(), "2024-25");
    }
}
