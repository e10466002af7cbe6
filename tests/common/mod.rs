#![allow(dead_code)]

use async_trait::async_trait;
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

use rusty_tennis::DashboardState;
use rusty_tennis::controller::api::{FixtureSeasonApi, SeasonApi};
use rusty_tennis::error::AppError;
use rusty_tennis::model::{MatchRecord, RosterEntry, Season, TeamMeta, TeamTable};

pub fn fixtures_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
}

pub fn fixture_api() -> FixtureSeasonApi {
    FixtureSeasonApi::new(fixtures_dir())
}

pub fn fixture_state() -> DashboardState {
    state_with(Arc::new(fixture_api()))
}

pub fn state_with(api: Arc<dyn SeasonApi>) -> DashboardState {
    DashboardState::new(api, TeamTable::big_ten(), Season::defaults(), Season::default())
}

pub fn played(date: &str, result: &str, cumulative: Option<f64>) -> MatchRecord {
    MatchRecord {
        date: date.to_string(),
        opponent: "Opponent".to_string(),
        location: None,
        result: result.to_string(),
        cumulative_score: cumulative,
    }
}

/// Fixture-backed api that holds back one team's season data.
pub struct DelayedApi {
    inner: FixtureSeasonApi,
    slow_team: String,
    delay: Duration,
}

impl DelayedApi {
    pub fn new(slow_team: &str, delay: Duration) -> Self {
        Self {
            inner: fixture_api(),
            slow_team: slow_team.to_string(),
            delay,
        }
    }
}

#[async_trait]
impl SeasonApi for DelayedApi {
    async fn season_matches(
        &self,
        team: &TeamMeta,
        season: &Season,
    ) -> Result<Vec<MatchRecord>, AppError> {
        if team.name == self.slow_team {
            tokio::time::sleep(self.delay).await;
        }
        self.inner.season_matches(team, season).await
    }

    async fn school_roster(&self, team: &TeamMeta) -> Result<Vec<RosterEntry>, AppError> {
        self.inner.school_roster(team).await
    }

    async fn primary_roster(&self) -> Result<Vec<RosterEntry>, AppError> {
        self.inner.primary_roster().await
    }

    async fn primary_schedule(&self) -> Result<Vec<MatchRecord>, AppError> {
        self.inner.primary_schedule().await
    }

    async fn seasons(&self) -> Result<Vec<String>, AppError> {
        self.inner.seasons().await
    }
}
