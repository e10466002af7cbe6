use clap::Parser;

pub mod types;
pub mod validation;

pub use types::{Args, BackendSource, CleanArgs};

use crate::model::{Season, TeamTable};

/// Parse the command line and environment, then validate.
///
/// # Errors
///
/// Will return `Err` if the arguments are inconsistent
pub fn args_checks() -> Result<CleanArgs, String> {
    let mut args = Args::parse();
    args.validate()?;
    Ok(CleanArgs::new(args))
}

impl Args {
    /// Normalise the season list so it is non-empty and offers `--season`.
    ///
    /// # Errors
    ///
    /// Will return `Err` if a season label is invalid
    pub fn validate(&mut self) -> Result<(), String> {
        let Some(list) = &self.seasons else {
            return Ok(());
        };
        let mut seasons = Season::parse_list(list).map_err(|e| e.to_string())?;
        if seasons.is_empty() {
            return Err("--seasons must name at least one season".to_string());
        }
        if !seasons.contains(&self.season) {
            seasons.insert(0, self.season.clone());
        }
        self.seasons = Some(
            seasons
                .iter()
                .map(Season::as_str)
                .collect::<Vec<_>>()
                .join(","),
        );
        Ok(())
    }
}

impl CleanArgs {
    #[must_use]
    pub fn new(args: Args) -> Self {
        let source = match args.fixtures_dir {
            Some(dir) => BackendSource::Fixtures(dir),
            None => BackendSource::Http(args.api_base),
        };
        let mut seasons = args
            .seasons
            .as_deref()
            .and_then(|list| Season::parse_list(list).ok())
            .unwrap_or_else(Season::defaults);
        if !seasons.contains(&args.season) {
            seasons.insert(0, args.season.clone());
        }
        CleanArgs {
            source,
            teams: args.teams_json.unwrap_or_else(TeamTable::big_ten),
            season: args.season,
            seasons,
            bind: args.bind,
            port: args.port,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(argv: &[&str]) -> Args {
        Args::try_parse_from(std::iter::once("rusty-tennis").chain(argv.iter().copied())).unwrap()
    }

    #[test]
    fn defaults_use_backend_and_big_ten() {
        let mut args = parse(&[]);
        args.validate().unwrap();
        let clean = CleanArgs::new(args);
        assert_eq!(
            clean.source,
            BackendSource::Http("http://localhost:8000".to_string())
        );
        assert_eq!(clean.teams.primary().name, "UCLA");
        assert_eq!(clean.season.as_str(), "2025-26");
        assert_eq!(clean.seasons.len(), 5);
        assert_eq!(clean.port, 5201);
    }

    #[test]
    fn season_is_added_to_the_list() {
        let mut args = parse(&["--season", "2019-20", "--seasons", "2024-25, 2023-24"]);
        args.validate().unwrap();
        let clean = CleanArgs::new(args);
        let labels: Vec<&str> = clean.seasons.iter().map(Season::as_str).collect();
        assert_eq!(labels, vec!["2019-20", "2024-25", "2023-24"]);
    }

    #[test]
    fn bad_values_are_rejected() {
        let argv = ["rusty-tennis", "--season", "next year"];
        assert!(Args::try_parse_from(argv).is_err());
        let argv = ["rusty-tennis", "--api-base", "file:///tmp"];
        assert!(Args::try_parse_from(argv).is_err());

        let mut args = parse(&["--seasons", "2024-25,bogus"]);
        assert!(args.validate().is_err());
        let mut args = parse(&["--seasons", " , "]);
        assert!(args.validate().is_err());
    }
}
