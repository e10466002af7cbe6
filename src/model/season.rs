use regex::Regex;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use std::sync::OnceLock;

use crate::error::AppError;

pub const DEFAULT_SEASON: &str = "2025-26";
pub const DEFAULT_SEASONS: [&str; 5] = ["2025-26", "2024-25", "2023-24", "2022-23", "2021-22"];

/// A season label such as `2025-26`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Season(String);

impl Season {
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Parse a comma separated list, skipping blanks.
    ///
    /// # Errors
    ///
    /// Will return `Err` on the first invalid label
    pub fn parse_list(input: &str) -> Result<Vec<Self>, AppError> {
        input
            .split(',')
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(str::parse)
            .collect()
    }

    #[must_use]
    pub fn defaults() -> Vec<Self> {
        DEFAULT_SEASONS
            .iter()
            .map(|s| Self((*s).to_string()))
            .collect()
    }
}

impl Default for Season {
    fn default() -> Self {
        Self(DEFAULT_SEASON.to_string())
    }
}

impl FromStr for Season {
    type Err = AppError;

    fn from_str(input: &str) -> Result<Self, Self::Err> {
        static REGEX: OnceLock<Regex> = OnceLock::new();
        let re = REGEX.get_or_init(|| {
            Regex::new(r"^\d{4}-\d{2}$").expect("Invalid regex pattern - this is a programming error")
        });

        let input = input.trim();
        if re.is_match(input) {
            Ok(Self(input.to_string()))
        } else {
            Err(AppError::BadRequest(format!(
                "season must look like 2025-26, got '{input}'"
            )))
        }
    }
}

impl TryFrom<String> for Season {
    type Error = AppError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<Season> for String {
    fn from(season: Season) -> Self {
        season.0
    }
}

impl fmt::Display for Season {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
