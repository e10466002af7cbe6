use actix_web::{App, HttpResponse, HttpServer, web};
use std::path::PathBuf;

use rusty_tennis::controller::api::{HttpSeasonApi, SeasonApi};
use rusty_tennis::controller::compare::{load_team_overview, load_team_summary};
use rusty_tennis::error::AppError;
use rusty_tennis::model::{Season, TeamTable};

mod common;

fn fixture_response(path: PathBuf) -> HttpResponse {
    match std::fs::read(&path) {
        Ok(body) => HttpResponse::Ok()
            .content_type("application/json")
            .body(body),
        Err(_) => HttpResponse::NotFound().finish(),
    }
}

async fn primary_season(path: web::Path<String>) -> HttpResponse {
    let season = path.into_inner();
    fixture_response(common::fixtures_dir().join("seasons").join(format!("{season}.json")))
}

async fn school_season(path: web::Path<(String, String)>) -> HttpResponse {
    let (name, season) = path.into_inner();
    if name == "Michigan" {
        return HttpResponse::InternalServerError().body("backend exploded");
    }
    fixture_response(
        common::fixtures_dir()
            .join("schools")
            .join(&name)
            .join("seasons")
            .join(format!("{season}.json")),
    )
}

async fn school_roster(path: web::Path<String>) -> HttpResponse {
    let name = path.into_inner();
    fixture_response(common::fixtures_dir().join("schools").join(&name).join("roster.json"))
}

async fn top_level(path: web::Path<String>) -> HttpResponse {
    let name = path.into_inner();
    fixture_response(common::fixtures_dir().join(format!("{name}.json")))
}

/// Serve the fixtures over real HTTP on an ephemeral port.
fn spawn_backend() -> Result<(String, actix_web::dev::ServerHandle), Box<dyn std::error::Error>> {
    let server = HttpServer::new(|| {
        App::new()
            .route("/seasons/{season}", web::get().to(primary_season))
            .route("/schools/{name}/seasons/{season}", web::get().to(school_season))
            .route("/schools/{name}/roster", web::get().to(school_roster))
            .route("/{name}", web::get().to(top_level))
    })
    .workers(1)
    .bind(("127.0.0.1", 0))?;
    let addr = server.addrs()[0];
    let server = server.run();
    let handle = server.handle();
    actix_web::rt::spawn(server);
    Ok((format!("http://{addr}/"), handle))
}

#[actix_web::test]
async fn test_http_api_loads_both_halves() -> Result<(), Box<dyn std::error::Error>> {
    let (base, handle) = spawn_backend()?;
    let api = HttpSeasonApi::new(&base)?;
    let teams = TeamTable::big_ten();
    let season = Season::default();

    // "Ohio State" only resolves if the space survives the trip as %20
    let summary = load_team_summary(&api, &teams, "Ohio State", &season).await?;
    assert_eq!(summary.record.to_string(), "1-1");
    assert_eq!(summary.roster.len(), 1);
    assert_eq!(summary.roster[0].utr.as_deref(), Some("14.1"));
    assert_eq!(summary.roster[0].singles_display(), "8-2");
    assert_eq!(summary.roster[0].doubles_display(), "6-4");

    let usc = load_team_summary(&api, &teams, "USC", &season).await?;
    assert!(usc.roster.is_empty());
    assert!((usc.latest_score - 2.5).abs() < f64::EPSILON);

    let ucla = load_team_summary(&api, &teams, "UCLA", &season).await?;
    assert_eq!(ucla.record.to_string(), "3-1");
    assert_eq!(ucla.roster.len(), 3);

    handle.stop(true).await;
    Ok(())
}

#[actix_web::test]
async fn test_http_api_error_mapping() -> Result<(), Box<dyn std::error::Error>> {
    let (base, handle) = spawn_backend()?;
    let api = HttpSeasonApi::new(&base)?;
    let teams = TeamTable::big_ten();
    let season = Season::default();

    let michigan = teams.lookup("Michigan")?;
    assert!(matches!(
        api.season_matches(michigan, &season).await,
        Err(AppError::FetchFailed(_))
    ));

    // missing season file is a 404
    let old: Season = "1999-00".parse()?;
    assert!(matches!(
        load_team_summary(&api, &teams, "USC", &old).await,
        Err(AppError::FetchFailed(_))
    ));

    assert!(matches!(
        load_team_summary(&api, &teams, "Purdue", &season).await,
        Err(AppError::MalformedData(_))
    ));

    assert!(matches!(
        load_team_summary(&api, &teams, "Rutgers", &season).await,
        Err(AppError::TeamNotFound(_))
    ));

    handle.stop(true).await;
    Ok(())
}

#[actix_web::test]
async fn test_http_api_team_overview() -> Result<(), Box<dyn std::error::Error>> {
    let (base, handle) = spawn_backend()?;
    let api = HttpSeasonApi::new(&base)?;
    let teams = TeamTable::big_ten();

    let overview = load_team_overview(&api, &teams, &Season::default(), &Season::defaults()).await;
    // "current" in the backend list is not a season label
    assert_eq!(overview.seasons, vec!["2025-26", "2024-25", "2023-24"]);
    assert_eq!(overview.schedule.as_ref().map(Vec::len), Ok(6));
    let summary = overview.summary.as_ref().map_err(Clone::clone)?;
    assert_eq!(summary.name, "UCLA");
    assert_eq!(summary.recent_games[0].opponent, "Ohio State");

    handle.stop(true).await;
    Ok(())
}

#[actix_web::test]
async fn test_unreachable_backend_is_fetch_failed() -> Result<(), Box<dyn std::error::Error>> {
    // port 9 (discard) is closed on test hosts
    let api = HttpSeasonApi::new("http://127.0.0.1:9/")?;
    assert!(matches!(api.seasons().await, Err(AppError::FetchFailed(_))));

    let teams = TeamTable::big_ten();
    let overview = load_team_overview(&api, &teams, &Season::default(), &Season::defaults()).await;
    assert_eq!(overview.seasons.len(), 5);
    assert!(overview.summary.is_err());
    assert!(overview.schedule.is_err());
    Ok(())
}
