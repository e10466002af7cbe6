use reqwest::Url;
use std::{fs, path::PathBuf};

use crate::model::{Season, TeamTable};

/// # Errors
///
/// Will return `Err` if the value is not an absolute http(s) URL
pub fn check_http_url(value: &str) -> Result<String, String> {
    let url = Url::parse(value.trim()).map_err(|e| format!("'{value}' is not a valid URL: {e}"))?;
    match url.scheme() {
        "http" | "https" => Ok(value.trim().to_string()),
        other => Err(format!("'{value}' must use http or https, not {other}")),
    }
}

/// # Errors
///
/// Will return `Err` if the directory does not exist
pub fn check_readable_dir(dir: &str) -> Result<PathBuf, String> {
    let path = PathBuf::from(dir);
    if !path.is_dir() || fs::read_dir(&path).is_err() {
        return Err(format!("The fixtures directory '{dir}' is not readable."));
    }
    Ok(path)
}

/// # Errors
///
/// Will return `Err` if the file is not readable or is not a valid team table
pub fn check_readable_file_and_teams(file: &str) -> Result<TeamTable, String> {
    let path = PathBuf::from(file);
    if !path.is_file() {
        return Err(format!("The json file '{file}' is not readable."));
    }
    let contents =
        fs::read_to_string(&path).map_err(|e| format!("The json file '{file}' is not readable: {e}"))?;
    TeamTable::from_json(&contents).map_err(|e| format!("The json file '{file}' is not a team table: {e}"))
}

/// # Errors
///
/// Will return `Err` if the label does not look like `2025-26`
pub fn check_season(value: &str) -> Result<Season, String> {
    value.parse().map_err(|e: crate::error::AppError| e.to_string())
}
