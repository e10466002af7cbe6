use rusty_tennis::args::{self, BackendSource, CleanArgs};
use rusty_tennis::controller::api::{FixtureSeasonApi, HttpSeasonApi, SeasonApi};
use rusty_tennis::controller::http_handlers::{DashboardState, compare, index, team};

use actix_files::Files;
use actix_web::web::Data;
use actix_web::{App, HttpResponse, HttpServer, web};
use std::sync::Arc;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[actix_web::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let args = args::args_checks()?;
    let state = init_state(args.clone())?;

    info!(
        bind = %args.bind,
        port = args.port,
        season = %args.season,
        teams = state.teams.len(),
        "starting dashboard"
    );

    HttpServer::new(move || {
        App::new()
            .app_data(Data::new(state.clone()))
            .route("/", web::get().to(index))
            .route("/compare", web::get().to(compare))
            .route("/team", web::get().to(team))
            .route("/health", web::get().to(HttpResponse::Ok))
            .service(Files::new("/static", "./static"))
    })
    .bind((args.bind.as_str(), args.port))?
    .run()
    .await?;
    Ok(())
}

fn init_state(args: CleanArgs) -> Result<DashboardState, Box<dyn std::error::Error>> {
    let api: Arc<dyn SeasonApi> = match &args.source {
        BackendSource::Http(base) => {
            info!(api_base = %base, "using season backend");
            Arc::new(HttpSeasonApi::new(base)?)
        }
        BackendSource::Fixtures(dir) => {
            info!(fixtures = %dir.display(), "serving from fixtures");
            Arc::new(FixtureSeasonApi::new(dir.clone()))
        }
    };
    Ok(DashboardState::new(api, args.teams, args.seasons, args.season))
}
