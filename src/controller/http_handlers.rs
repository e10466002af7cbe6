use actix_web::web::{self, Data};
use actix_web::{HttpResponse, Responder};
use serde_json::json;
use std::collections::HashMap;
use std::sync::Arc;
use tracing::{info, warn};

use crate::controller::api::SeasonApi;
use crate::controller::compare::{Selection, load_team_overview};
use crate::controller::request::{parse_compare_request, parse_team_request};
use crate::model::{Season, TeamTable};
use crate::mvu::{DashboardModel, Deps, Msg, run_dashboard};
use crate::view::index::{DEFAULT_INDEX_TITLE, render_index_template};
use crate::view::team::render_team_template;

/// Shared by every handler; cloned into each actix worker.
#[derive(Clone)]
pub struct DashboardState {
    pub api: Arc<dyn SeasonApi>,
    pub teams: Arc<TeamTable>,
    pub seasons: Vec<Season>,
    pub default_season: Season,
}

impl DashboardState {
    #[must_use]
    pub fn new(
        api: Arc<dyn SeasonApi>,
        teams: TeamTable,
        seasons: Vec<Season>,
        default_season: Season,
    ) -> Self {
        Self {
            api,
            teams: Arc::new(teams),
            seasons,
            default_season,
        }
    }

    fn deps(&self) -> Deps<'_> {
        Deps {
            api: self.api.as_ref(),
            teams: &self.teams,
        }
    }
}

fn html_response(markup: maud::Markup) -> HttpResponse {
    HttpResponse::Ok()
        .content_type("text/html")
        .body(markup.into_string())
}

pub async fn index(
    query: web::Query<HashMap<String, String>>,
    state: Data<DashboardState>,
) -> impl Responder {
    let params = query.into_inner();
    let selection = match parse_compare_request(&params, &state.teams, &state.default_season) {
        Ok(request) => request.selection,
        Err(e) => {
            warn!(error = %e, "ignoring index parameters");
            Selection::defaults(&state.teams, state.default_season.clone())
        }
    };

    let markup = render_index_template(DEFAULT_INDEX_TITLE, &state.teams, &state.seasons, &selection);
    html_response(markup)
}

/// `GET /compare`: the head-to-head fragment, or JSON with `json=1`.
pub async fn compare(
    query: web::Query<HashMap<String, String>>,
    state: Data<DashboardState>,
) -> impl Responder {
    let params = query.into_inner();
    let request = match parse_compare_request(&params, &state.teams, &state.default_season) {
        Ok(request) => request,
        Err(e) => {
            return HttpResponse::BadRequest().json(json!({"error": e.to_string()}));
        }
    };

    info!(
        left = %request.selection.left,
        right = %request.selection.right,
        season = %request.selection.season,
        "comparison requested"
    );

    let mut model = DashboardModel::new(request.want_json);
    run_dashboard(
        &mut model,
        [Msg::SelectionChanged(request.selection)],
        state.deps(),
    )
    .await;

    match (model.comparison, model.markup) {
        (Some(comparison), _) if request.want_json => HttpResponse::Ok().json(comparison.to_json()),
        (_, Some(markup)) => html_response(markup),
        _ => HttpResponse::InternalServerError()
            .json(json!({"error": "comparison did not complete"})),
    }
}

/// `GET /team`: the primary team's season page, or JSON with `json=1`.
pub async fn team(
    query: web::Query<HashMap<String, String>>,
    state: Data<DashboardState>,
) -> impl Responder {
    let params = query.into_inner();
    let request = match parse_team_request(&params, &state.default_season) {
        Ok(request) => request,
        Err(e) => {
            return HttpResponse::BadRequest().json(json!({"error": e.to_string()}));
        }
    };

    let overview = load_team_overview(
        state.api.as_ref(),
        &state.teams,
        &request.season,
        &state.seasons,
    )
    .await;

    let primary = state.teams.primary();
    if request.want_json {
        HttpResponse::Ok().json(overview.to_json(&primary.name, &request.opponent))
    } else {
        html_response(render_team_template(primary, &overview, &request.opponent))
    }
}
