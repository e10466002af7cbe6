use async_trait::async_trait;
use std::path::{Path, PathBuf};
use tracing::debug;

use super::{SeasonApi, roster_path, season_path};
use crate::error::AppError;
use crate::model::{MatchRecord, RosterEntry, Season, TeamMeta, decode_matches, decode_roster};

/// Offline `SeasonApi` reading JSON files laid out like the REST paths,
/// e.g. `<root>/schools/USC/seasons/2025-26.json`.
#[derive(Debug, Clone)]
pub struct FixtureSeasonApi {
    root: PathBuf,
}

impl FixtureSeasonApi {
    #[must_use]
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    #[must_use]
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// # Errors
    ///
    /// Will return `Err` if a segment would escape the fixture root
    pub fn path_for<S: AsRef<str>>(&self, segments: &[S]) -> Result<PathBuf, AppError> {
        let mut path = self.root.clone();
        let last = segments.len().saturating_sub(1);
        for (idx, segment) in segments.iter().enumerate() {
            let segment = segment.as_ref();
            if segment.is_empty() || segment == ".." || segment.contains(['/', '\\']) {
                return Err(AppError::FetchFailed(format!(
                    "invalid fixture path segment '{segment}'"
                )));
            }
            if idx == last {
                path.push(format!("{segment}.json"));
            } else {
                path.push(segment);
            }
        }
        Ok(path)
    }

    async fn read<S: AsRef<str>>(&self, segments: &[S]) -> Result<Vec<u8>, AppError> {
        let path = self.path_for(segments)?;
        debug!(path = %path.display(), "reading fixture");
        tokio::fs::read(&path)
            .await
            .map_err(|e| AppError::FetchFailed(format!("{}: {e}", path.display())))
    }
}

#[async_trait]
impl SeasonApi for FixtureSeasonApi {
    async fn season_matches(
        &self,
        team: &TeamMeta,
        season: &Season,
    ) -> Result<Vec<MatchRecord>, AppError> {
        decode_matches(&self.read(&season_path(team, season)).await?)
    }

    async fn school_roster(&self, team: &TeamMeta) -> Result<Vec<RosterEntry>, AppError> {
        decode_roster(&self.read(&roster_path(team)).await?)
    }

    async fn primary_roster(&self) -> Result<Vec<RosterEntry>, AppError> {
        decode_roster(&self.read(&["roster"]).await?)
    }

    async fn primary_schedule(&self) -> Result<Vec<MatchRecord>, AppError> {
        decode_matches(&self.read(&["schedule"]).await?)
    }

    async fn seasons(&self) -> Result<Vec<String>, AppError> {
        Ok(serde_json::from_slice(&self.read(&["seasons"]).await?)?)
    }
}
