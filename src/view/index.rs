use maud::{Markup, html};

use crate::HTMX_PATH;
use crate::controller::compare::Selection;
use crate::model::{Season, TeamTable};
use crate::view::utils::relative_link;

pub const DEFAULT_INDEX_TITLE: &str = "Big Ten Head-to-Head Comparison";

#[must_use]
pub fn render_head(title: &str) -> Markup {
    html! {
        head {
            meta charset="UTF-8";
            meta name="viewport" content="width=device-width, initial-scale=1.0";
            link rel="stylesheet" type="text/css" href="static/dashboard.css";
            title { (title) }
            script src=(HTMX_PATH) defer integrity="sha384-/TgkGk7p307TH7EXJDuUlgG3Ce1UVolAOFopFekQkkXihi5u/6OCvVKyz1W+idaz" crossorigin="anonymous" {}
        }
    }
}

fn render_team_select(name: &str, label: &str, teams: &TeamTable, current: &str) -> Markup {
    let border = teams
        .lookup(current)
        .map(|t| format!("border-color: {};", t.color))
        .unwrap_or_default();
    html! {
        div class="school-selector-box" {
            label for=(name) { (label) }
            select id=(name) name=(name) style=(border) {
                @for team in teams.iter() {
                    option value=(team.name) selected[team.name == current] { (team.name) }
                }
            }
        }
    }
}

/// Full comparison page. The comparison itself is fetched by htmx from the
/// relative `compare` route. The initial load and the selector form share the
/// `#selection` sync queue, so a newer selection replaces any request in flight.
#[must_use]
pub fn render_index_template(
    title: &str,
    teams: &TeamTable,
    seasons: &[Season],
    selection: &Selection,
) -> Markup {
    let compare_link = relative_link(
        "compare",
        &[
            ("left", selection.left.as_str()),
            ("right", selection.right.as_str()),
            ("season", selection.season.as_str()),
        ],
    );

    html! {
        (maud::DOCTYPE)
        html lang="en" {
            (render_head(title))
            body {
                div class="big10-comparison-container" {
                    div class="comparison-header" {
                        h1 class="comparison-title" { (title) }
                        a class="team-link" href=(relative_link("team", &[("season", selection.season.as_str())])) {
                            (teams.primary().name) " season view"
                        }
                    }
                    form id="selection" hx-get="compare" hx-target="#comparison" hx-trigger="change"
                        hx-sync="this:replace" hx-indicator="#comparison-loading" {
                        div class="season-selector-top" {
                            label for="season" { "Season:" }
                            select id="season" name="season" {
                                @for season in seasons {
                                    option value=(season.as_str()) selected[*season == selection.season] { (season.as_str()) }
                                }
                            }
                        }
                        (render_team_select("left", "School 1:", teams, &selection.left))
                        (render_team_select("right", "School 2:", teams, &selection.right))
                    }
                    div id="comparison-loading" class="htmx-indicator loading-container" {
                        div class="loading-spinner" { "Loading..." }
                    }
                    div id="comparison" hx-get=(compare_link) hx-trigger="load" hx-sync="#selection:replace" {}
                }
            }
        }
    }
}
