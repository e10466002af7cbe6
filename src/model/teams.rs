use serde::{Deserialize, Serialize};
use std::collections::HashSet;

use crate::error::AppError;

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct TeamMeta {
    pub name: String,
    pub color: String,
    pub logo: String,
    #[serde(default)]
    pub is_primary: bool,
}

impl TeamMeta {
    fn new(name: &str, color: &str, logo: &str, is_primary: bool) -> Self {
        Self {
            name: name.to_string(),
            color: color.to_string(),
            logo: logo.to_string(),
            is_primary,
        }
    }
}

/// Immutable team lookup, kept in dropdown order.
#[derive(Debug, Clone)]
pub struct TeamTable {
    teams: Vec<TeamMeta>,
    primary_idx: usize,
}

impl TeamTable {
    /// # Errors
    ///
    /// Will return `Err` if the list is empty, names repeat, or there is not exactly one primary team
    pub fn new(teams: Vec<TeamMeta>) -> Result<Self, AppError> {
        let mut seen = HashSet::new();
        for team in &teams {
            if team.name.trim().is_empty() {
                return Err(AppError::Other("team names must not be empty".into()));
            }
            if !seen.insert(team.name.as_str()) {
                return Err(AppError::Other(format!("duplicate team: {}", team.name)));
            }
        }

        let primaries: Vec<usize> = teams
            .iter()
            .enumerate()
            .filter(|(_, t)| t.is_primary)
            .map(|(idx, _)| idx)
            .collect();
        match primaries.as_slice() {
            [idx] => Ok(Self {
                primary_idx: *idx,
                teams,
            }),
            [] => Err(AppError::Other("team table needs a primary team".into())),
            _ => Err(AppError::Other(
                "team table has more than one primary team".into(),
            )),
        }
    }

    /// # Errors
    ///
    /// Will return `Err` if the json is not a list of teams or fails validation
    pub fn from_json(text: &str) -> Result<Self, AppError> {
        let teams: Vec<TeamMeta> = serde_json::from_str(text)?;
        Self::new(teams)
    }

    /// The compiled-in Big Ten table, UCLA first and primary.
    #[must_use]
    pub fn big_ten() -> Self {
        let teams = vec![
            TeamMeta::new("UCLA", "#2774AE", "\u{1F43B}", true),
            TeamMeta::new("USC", "#990000", "\u{1F531}", false),
            TeamMeta::new("Ohio State", "#BB0000", "\u{1F330}", false),
            TeamMeta::new("Michigan", "#00274C", "M", false),
            TeamMeta::new("Penn State", "#041E42", "PSU", false),
            TeamMeta::new("Illinois", "#13294B", "ILL", false),
            TeamMeta::new("Northwestern", "#4E2A84", "NU", false),
            TeamMeta::new("Indiana", "#990000", "IU", false),
            TeamMeta::new("Purdue", "#000000", "PU", false),
            TeamMeta::new("Wisconsin", "#C5050C", "W", false),
            TeamMeta::new("Nebraska", "#E41C38", "N", false),
            TeamMeta::new("Michigan State", "#18453B", "MSU", false),
        ];
        Self {
            teams,
            primary_idx: 0,
        }
    }

    /// # Errors
    ///
    /// Will return `AppError::TeamNotFound` if no team has exactly this name
    pub fn lookup(&self, name: &str) -> Result<&TeamMeta, AppError> {
        self.teams
            .iter()
            .find(|t| t.name == name)
            .ok_or_else(|| AppError::TeamNotFound(name.to_string()))
    }

    #[must_use]
    pub fn primary(&self) -> &TeamMeta {
        &self.teams[self.primary_idx]
    }

    /// First non-primary team, or the primary team when it is alone.
    #[must_use]
    pub fn default_opponent(&self) -> &TeamMeta {
        self.teams
            .iter()
            .find(|t| !t.is_primary)
            .unwrap_or_else(|| self.primary())
    }

    pub fn iter(&self) -> impl Iterator<Item = &TeamMeta> {
        self.teams.iter()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.teams.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.teams.is_empty()
    }
}

impl Default for TeamTable {
    fn default() -> Self {
        Self::big_ten()
    }
}
