use chrono::NaiveDate;
use serde::de::{self, Deserializer};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt;

/// Date format the backend serves, e.g. `01-15-2026`.
pub const BACKEND_DATE_FORMAT: &str = "%m-%d-%Y";

/// One row of season data, in the order the backend returns it.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct MatchRecord {
    #[serde(rename = "Date", default, deserialize_with = "nullable_string")]
    pub date: String,
    #[serde(rename = "Opponent", default, deserialize_with = "nullable_string")]
    pub opponent: String,
    #[serde(
        rename = "Location",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub location: Option<String>,
    #[serde(rename = "Result", default, deserialize_with = "nullable_string")]
    pub result: String,
    #[serde(
        rename = "CumulativeScore",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub cumulative_score: Option<f64>,
}

#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
pub enum Outcome {
    Win,
    Loss,
    Other,
    Unplayed,
}

impl MatchRecord {
    #[must_use]
    pub fn is_played(&self) -> bool {
        !self.result.trim().is_empty()
    }

    /// Classifies the result by its first letter, case-insensitively.
    #[must_use]
    pub fn outcome(&self) -> Outcome {
        match self.result.trim().chars().next() {
            None => Outcome::Unplayed,
            Some(c) => match c.to_ascii_uppercase() {
                'W' => Outcome::Win,
                'L' => Outcome::Loss,
                _ => Outcome::Other,
            },
        }
    }

    #[must_use]
    pub fn parsed_date(&self) -> Option<NaiveDate> {
        NaiveDate::parse_from_str(self.date.trim(), BACKEND_DATE_FORMAT).ok()
    }
}

/// A player row as served by the roster endpoints.
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
pub struct RosterEntry {
    #[serde(rename = "Player", default, deserialize_with = "nullable_string")]
    pub player: String,
    #[serde(rename = "Year", default, deserialize_with = "text_or_number")]
    pub year: Option<String>,
    #[serde(rename = "Hometown", default, deserialize_with = "text_or_number")]
    pub hometown: Option<String>,
    #[serde(rename = "UTR", default, deserialize_with = "text_or_number")]
    pub utr: Option<String>,
    #[serde(
        rename = "Singles_Record",
        default,
        deserialize_with = "text_or_number"
    )]
    pub singles_record: Option<String>,
    #[serde(
        rename = "Doubles_Record",
        default,
        deserialize_with = "text_or_number"
    )]
    pub doubles_record: Option<String>,
    #[serde(rename = "Singles_Wins", default, deserialize_with = "text_or_number")]
    pub singles_wins: Option<String>,
    #[serde(
        rename = "Singles_Losses",
        default,
        deserialize_with = "text_or_number"
    )]
    pub singles_losses: Option<String>,
    #[serde(rename = "Doubles_Wins", default, deserialize_with = "text_or_number")]
    pub doubles_wins: Option<String>,
    #[serde(
        rename = "Doubles_Losses",
        default,
        deserialize_with = "text_or_number"
    )]
    pub doubles_losses: Option<String>,
}

pub const NOT_AVAILABLE: &str = "N/A";

impl RosterEntry {
    /// Combined singles record if present, otherwise `wins-losses`, otherwise `N/A`.
    #[must_use]
    pub fn singles_display(&self) -> String {
        record_display(
            self.singles_record.as_deref(),
            self.singles_wins.as_deref(),
            self.singles_losses.as_deref(),
        )
    }

    #[must_use]
    pub fn doubles_display(&self) -> String {
        record_display(
            self.doubles_record.as_deref(),
            self.doubles_wins.as_deref(),
            self.doubles_losses.as_deref(),
        )
    }
}

fn record_display(combined: Option<&str>, wins: Option<&str>, losses: Option<&str>) -> String {
    if let Some(record) = combined.map(str::trim).filter(|r| !r.is_empty()) {
        return record.to_string();
    }
    match (counter(wins), counter(losses)) {
        (Some(w), Some(l)) => format!("{w}-{l}"),
        _ => NOT_AVAILABLE.to_string(),
    }
}

// The backend fills unknown counters with "N/A".
fn counter(value: Option<&str>) -> Option<&str> {
    value
        .map(str::trim)
        .filter(|v| !v.is_empty() && !v.eq_ignore_ascii_case(NOT_AVAILABLE))
}

#[derive(Serialize, Deserialize, Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct WinLoss {
    pub wins: usize,
    pub losses: usize,
}

impl fmt::Display for WinLoss {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.wins, self.losses)
    }
}

/// Derived per-team view model. Rebuilt from scratch on every fetch.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct TeamSummary {
    pub name: String,
    pub logo: String,
    pub color: String,
    pub record: WinLoss,
    pub latest_score: f64,
    pub recent_games: Vec<MatchRecord>,
    pub roster: Vec<RosterEntry>,
    pub matches: Vec<MatchRecord>,
}

/// Decode a season payload. Any field of the wrong JSON type is `MalformedData`.
///
/// # Errors
///
/// Returns `AppError::MalformedData` if the body is not an array of match records.
pub fn decode_matches(body: &[u8]) -> Result<Vec<MatchRecord>, crate::error::AppError> {
    Ok(serde_json::from_slice(body)?)
}

/// Decode a roster payload; a `null` body is an empty roster.
///
/// # Errors
///
/// Returns `AppError::MalformedData` if the body is neither `null` nor an array of players.
pub fn decode_roster(body: &[u8]) -> Result<Vec<RosterEntry>, crate::error::AppError> {
    let roster: Option<Vec<RosterEntry>> = serde_json::from_slice(body)?;
    Ok(roster.unwrap_or_default())
}

fn nullable_string<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

fn text_or_number<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    match Option::<Value>::deserialize(deserializer)? {
        None | Some(Value::Null) => Ok(None),
        Some(Value::String(s)) => Ok(Some(s)),
        Some(Value::Number(n)) => Ok(Some(n.to_string())),
        Some(other) => Err(de::Error::custom(format!(
            "expected text or number, found {other}"
        ))),
    }
}
