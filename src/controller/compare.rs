use chrono::{DateTime, Utc};
use serde::Serialize;
use serde_json::{Value, json};
use tracing::{debug, warn};

use crate::controller::api::SeasonApi;
use crate::error::AppError;
use crate::model::{MatchRecord, Season, TeamSummary, TeamTable};
use crate::score::{filter_by_opponent, summarize};

/// What the comparison view is showing: two teams and a season.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Selection {
    pub left: String,
    pub right: String,
    pub season: Season,
}

impl Selection {
    /// Primary team against the first other team in the table.
    #[must_use]
    pub fn defaults(teams: &TeamTable, season: Season) -> Self {
        Self {
            left: teams.primary().name.clone(),
            right: teams.default_opponent().name.clone(),
            season,
        }
    }
}

pub type SideOutcome = Result<TeamSummary, AppError>;

#[derive(Debug, Clone)]
pub struct Comparison {
    pub selection: Selection,
    pub left: SideOutcome,
    pub right: SideOutcome,
    pub fetched_at: DateTime<Utc>,
}

impl Comparison {
    #[must_use]
    pub fn to_json(&self) -> Value {
        json!({
            "season": self.selection.season,
            "fetchedAt": self.fetched_at.to_rfc3339(),
            "left": side_json(&self.selection.left, &self.left),
            "right": side_json(&self.selection.right, &self.right),
        })
    }
}

#[must_use]
pub fn side_json(team: &str, outcome: &SideOutcome) -> Value {
    match outcome {
        Ok(summary) => json!({ "team": team, "summary": summary, "error": null }),
        Err(e) => json!({
            "team": team,
            "summary": null,
            "error": { "kind": e.kind(), "message": e.to_string() },
        }),
    }
}

/// Fetch one team's season and roster concurrently, then summarize.
///
/// # Errors
///
/// Will return `Err` if the team is unknown, either fetch fails, or the data is malformed
pub async fn load_team_summary(
    api: &dyn SeasonApi,
    teams: &TeamTable,
    team_name: &str,
    season: &Season,
) -> Result<TeamSummary, AppError> {
    let meta = teams.lookup(team_name)?;
    let (matches, roster) =
        futures::try_join!(api.season_matches(meta, season), api.school_roster(meta))?;
    debug!(
        team = team_name,
        season = %season,
        matches = matches.len(),
        roster = roster.len(),
        "loaded team data"
    );
    summarize(teams, team_name, &matches, &roster)
}

async fn load_side(
    api: &dyn SeasonApi,
    teams: &TeamTable,
    team_name: &str,
    season: &Season,
) -> SideOutcome {
    let outcome = load_team_summary(api, teams, team_name, season).await;
    if let Err(e) = &outcome {
        warn!(team = team_name, season = %season, error = %e, "no data for comparison side");
    }
    outcome
}

/// Load both sides concurrently and wait for both, whatever their outcome.
pub async fn load_comparison(
    api: &dyn SeasonApi,
    teams: &TeamTable,
    selection: &Selection,
) -> Comparison {
    let (left, right) = futures::join!(
        load_side(api, teams, &selection.left, &selection.season),
        load_side(api, teams, &selection.right, &selection.season),
    );
    Comparison {
        selection: selection.clone(),
        left,
        right,
        fetched_at: Utc::now(),
    }
}

/// Everything the single-team page shows.
#[derive(Debug, Clone)]
pub struct TeamOverview {
    pub season: Season,
    pub summary: SideOutcome,
    pub schedule: Result<Vec<MatchRecord>, AppError>,
    pub seasons: Vec<String>,
    pub fetched_at: DateTime<Utc>,
}

impl TeamOverview {
    #[must_use]
    pub fn to_json(&self, team: &str, opponent: &str) -> Value {
        let schedule = match &self.schedule {
            Ok(rows) => json!({ "rows": filter_by_opponent(rows, opponent), "error": null }),
            Err(e) => json!({
                "rows": [],
                "error": { "kind": e.kind(), "message": e.to_string() },
            }),
        };
        json!({
            "season": self.season,
            "seasons": self.seasons,
            "fetchedAt": self.fetched_at.to_rfc3339(),
            "team": side_json(team, &self.summary),
            "schedule": schedule,
        })
    }
}

/// Keep the backend's season labels that parse as a `Season`, in order.
/// Falls back to `fallback_seasons` when none survive.
#[must_use]
pub fn usable_seasons(labels: Vec<String>, fallback_seasons: &[Season]) -> Vec<String> {
    let valid: Vec<String> = labels
        .into_iter()
        .filter_map(|label| match label.parse::<Season>() {
            Ok(season) => Some(season.to_string()),
            Err(e) => {
                warn!(label = %label, error = %e, "dropping season label from backend");
                None
            }
        })
        .collect();
    if valid.is_empty() {
        fallback_seasons.iter().map(ToString::to_string).collect()
    } else {
        valid
    }
}

/// Primary team summary, current schedule and season list, fetched concurrently.
/// The season list falls back to `fallback_seasons` when the backend has none.
pub async fn load_team_overview(
    api: &dyn SeasonApi,
    teams: &TeamTable,
    season: &Season,
    fallback_seasons: &[Season],
) -> TeamOverview {
    let primary = teams.primary();
    let summary = async {
        let (matches, roster) =
            futures::try_join!(api.season_matches(primary, season), api.primary_roster())?;
        let summary = summarize(teams, &primary.name, &matches, &roster)?;
        Ok::<TeamSummary, AppError>(summary)
    };

    let (summary, schedule, seasons) =
        futures::join!(summary, api.primary_schedule(), api.seasons());

    if let Err(e) = &summary {
        warn!(team = %primary.name, season = %season, error = %e, "no season data");
    }
    if let Err(e) = &schedule {
        warn!(error = %e, "no schedule data");
    }
    let seasons = match seasons {
        Ok(list) => usable_seasons(list, fallback_seasons),
        Err(e) => {
            warn!(error = %e, "season list unavailable, using configured seasons");
            fallback_seasons.iter().map(ToString::to_string).collect()
        }
    };

    TeamOverview {
        season: season.clone(),
        summary,
        schedule,
        seasons,
        fetched_at: Utc::now(),
    }
}
