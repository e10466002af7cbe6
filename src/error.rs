use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AppError {
    #[error("team not found: {0}")]
    TeamNotFound(String),
    #[error("fetch failed: {0}")]
    FetchFailed(String),
    #[error("malformed data: {0}")]
    MalformedData(String),
    #[error("bad request: {0}")]
    BadRequest(String),
    #[error("{0}")]
    Other(String),
}

impl AppError {
    /// Short machine-readable kind, used by the JSON views.
    #[must_use]
    pub fn kind(&self) -> &'static str {
        match self {
            Self::TeamNotFound(_) => "team_not_found",
            Self::FetchFailed(_) => "fetch_failed",
            Self::MalformedData(_) => "malformed_data",
            Self::BadRequest(_) => "bad_request",
            Self::Other(_) => "other",
        }
    }
}

impl From<reqwest::Error> for AppError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_decode() {
            Self::MalformedData(err.to_string())
        } else {
            Self::FetchFailed(err.to_string())
        }
    }
}

impl From<serde_json::Error> for AppError {
    fn from(err: serde_json::Error) -> Self {
        Self::MalformedData(err.to_string())
    }
}

impl From<std::io::Error> for AppError {
    fn from(err: std::io::Error) -> Self {
        Self::Other(err.to_string())
    }
}

impl From<String> for AppError {
    fn from(err: String) -> Self {
        Self::Other(err)
    }
}

impl From<&str> for AppError {
    fn from(err: &str) -> Self {
        Self::Other(err.to_string())
    }
}
