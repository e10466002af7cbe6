use clap::Parser;
use std::path::PathBuf;

use crate::controller::api::DEFAULT_API_BASE;
use crate::model::{DEFAULT_SEASON, Season, TeamTable};

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Base URL of the season backend.
    #[arg(
        long,
        env = "RUSTY_TENNIS_API_BASE",
        value_name = "URL",
        default_value = DEFAULT_API_BASE,
        value_parser = crate::args::validation::check_http_url
    )]
    pub api_base: String,
    /// Serve from JSON files laid out like the backend paths instead of calling `--api-base`.
    #[arg(
        long,
        env = "RUSTY_TENNIS_FIXTURES_DIR",
        value_name = "DIR",
        value_parser = crate::args::validation::check_readable_dir
    )]
    pub fixtures_dir: Option<PathBuf>,
    /// Replaces the compiled-in Big Ten table. A JSON list of `{name, color, logo, isPrimary}`.
    #[arg(
        long,
        env = "RUSTY_TENNIS_TEAMS_JSON",
        value_name = "FILE",
        value_parser = crate::args::validation::check_readable_file_and_teams
    )]
    pub teams_json: Option<TeamTable>,
    #[arg(
        long,
        env = "RUSTY_TENNIS_SEASON",
        value_name = "SEASON",
        default_value = DEFAULT_SEASON,
        value_parser = crate::args::validation::check_season
    )]
    pub season: Season,
    /// Comma separated season labels offered in the selectors.
    #[arg(long, env = "RUSTY_TENNIS_SEASONS", value_name = "SEASONS")]
    pub seasons: Option<String>,
    #[arg(long, env = "RUSTY_TENNIS_BIND", default_value = "0.0.0.0")]
    pub bind: String,
    #[arg(long, env = "RUSTY_TENNIS_PORT", default_value_t = 5201)]
    pub port: u16,
}

/// Where season data comes from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BackendSource {
    Http(String),
    Fixtures(PathBuf),
}

#[derive(Debug, Clone)]
pub struct CleanArgs {
    pub source: BackendSource,
    pub teams: TeamTable,
    pub season: Season,
    pub seasons: Vec<Season>,
    pub bind: String,
    pub port: u16,
}
