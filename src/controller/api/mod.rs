pub mod client;
pub mod fixture;

pub use client::*;
pub use fixture::*;

use async_trait::async_trait;

use crate::error::AppError;
use crate::model::{MatchRecord, RosterEntry, Season, TeamMeta};

/// Read-only view of the season backend.
///
/// Implementations map transport problems to `AppError::FetchFailed` and
/// undecodable bodies to `AppError::MalformedData`.
#[async_trait]
pub trait SeasonApi: Send + Sync {
    /// `GET /seasons/{season}` for the primary team, `GET /schools/{name}/seasons/{season}` otherwise.
    async fn season_matches(
        &self,
        team: &TeamMeta,
        season: &Season,
    ) -> Result<Vec<MatchRecord>, AppError>;

    /// `GET /schools/{name}/roster`
    async fn school_roster(&self, team: &TeamMeta) -> Result<Vec<RosterEntry>, AppError>;

    /// `GET /roster`
    async fn primary_roster(&self) -> Result<Vec<RosterEntry>, AppError>;

    /// `GET /schedule`
    async fn primary_schedule(&self) -> Result<Vec<MatchRecord>, AppError>;

    /// `GET /seasons`
    async fn seasons(&self) -> Result<Vec<String>, AppError>;
}

/// Path segments for a team's season, shared by every implementation.
#[must_use]
pub fn season_path(team: &TeamMeta, season: &Season) -> Vec<String> {
    if team.is_primary {
        vec!["seasons".into(), season.to_string()]
    } else {
        vec![
            "schools".into(),
            team.name.clone(),
            "seasons".into(),
            season.to_string(),
        ]
    }
}

#[must_use]
pub fn roster_path(team: &TeamMeta) -> Vec<String> {
    vec!["schools".into(), team.name.clone(), "roster".into()]
}
