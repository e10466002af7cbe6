use async_trait::async_trait;
use reqwest::{Client, Url};
use tracing::debug;

use super::{SeasonApi, roster_path, season_path};
use crate::error::AppError;
use crate::model::{MatchRecord, RosterEntry, Season, TeamMeta, decode_matches, decode_roster};

pub const DEFAULT_API_BASE: &str = "http://localhost:8000";

/// `SeasonApi` over HTTP, sharing one reqwest client.
#[derive(Debug, Clone)]
pub struct HttpSeasonApi {
    client: Client,
    base: Url,
}

impl HttpSeasonApi {
    /// # Errors
    ///
    /// Will return `Err` if `base` is not an absolute http(s) url
    pub fn new(base: &str) -> Result<Self, AppError> {
        Self::with_client(Client::new(), base)
    }

    /// # Errors
    ///
    /// Will return `Err` if `base` is not an absolute http(s) url
    pub fn with_client(client: Client, base: &str) -> Result<Self, AppError> {
        let base = Url::parse(base).map_err(|e| AppError::Other(format!("api base {base}: {e}")))?;
        if !matches!(base.scheme(), "http" | "https") {
            return Err(AppError::Other(format!(
                "api base must be http or https, got {}",
                base.scheme()
            )));
        }
        Ok(Self { client, base })
    }

    #[must_use]
    pub fn base(&self) -> &Url {
        &self.base
    }

    /// Join percent-encoded path segments onto the base url.
    ///
    /// # Errors
    ///
    /// Will return `Err` if the base url cannot carry a path
    pub fn url_for<S: AsRef<str>>(&self, segments: &[S]) -> Result<Url, AppError> {
        let mut url = self.base.clone();
        url.path_segments_mut()
            .map_err(|()| AppError::Other(format!("api base {} cannot carry a path", self.base)))?
            .pop_if_empty()
            .extend(segments.iter().map(AsRef::as_ref));
        Ok(url)
    }

    async fn get_body<S: AsRef<str>>(&self, segments: &[S]) -> Result<Vec<u8>, AppError> {
        let url = self.url_for(segments)?;
        debug!(%url, "fetching");
        let resp = self.client.get(url).send().await?.error_for_status()?;
        Ok(resp.bytes().await?.to_vec())
    }
}

#[async_trait]
impl SeasonApi for HttpSeasonApi {
    async fn season_matches(
        &self,
        team: &TeamMeta,
        season: &Season,
    ) -> Result<Vec<MatchRecord>, AppError> {
        let body = self.get_body(&season_path(team, season)).await?;
        decode_matches(&body)
    }

    async fn school_roster(&self, team: &TeamMeta) -> Result<Vec<RosterEntry>, AppError> {
        let body = self.get_body(&roster_path(team)).await?;
        decode_roster(&body)
    }

    async fn primary_roster(&self) -> Result<Vec<RosterEntry>, AppError> {
        let body = self.get_body(&["roster"]).await?;
        decode_roster(&body)
    }

    async fn primary_schedule(&self) -> Result<Vec<MatchRecord>, AppError> {
        let body = self.get_body(&["schedule"]).await?;
        decode_matches(&body)
    }

    async fn seasons(&self) -> Result<Vec<String>, AppError> {
        let body = self.get_body(&["seasons"]).await?;
        Ok(serde_json::from_slice(&body)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn url_for_encodes_school_names() {
        let api = HttpSeasonApi::new("http://localhost:8000/api/").unwrap();
        let url = api
            .url_for(&["schools", "Ohio State", "seasons", "2025-26"])
            .unwrap();
        assert_eq!(
            url.as_str(),
            "http://localhost:8000/api/schools/Ohio%20State/seasons/2025-26"
        );
    }

    #[test]
    fn rejects_non_http_bases() {
        assert!(HttpSeasonApi::new("ftp://example.com").is_err());
        assert!(HttpSeasonApi::new("not a url").is_err());
    }
}
