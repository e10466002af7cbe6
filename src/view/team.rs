use maud::{Markup, html};

use crate::controller::compare::TeamOverview;
use crate::model::{MatchRecord, TeamMeta};
use crate::score::{opponent_matches, result_display, running_scores};
use crate::view::card::{Side, render_roster_box, render_school_card};
use crate::view::index::render_head;
use crate::view::utils::relative_link;

fn render_match_table(rows: &[MatchRecord], opponent: &str) -> Markup {
    let shown: Vec<(&MatchRecord, Option<i64>)> = rows
        .iter()
        .zip(running_scores(rows))
        .filter(|(row, _)| opponent_matches(row, opponent))
        .collect();
    html! {
        @if shown.is_empty() {
            p class="no-schedule" { "No matches found" }
        } @else {
            table class="styled-table schedule-table" {
                thead {
                    tr {
                        th { "Date" }
                        th { "Opponent" }
                        th { "Location" }
                        th { "Result" }
                        th { "Running" }
                    }
                }
                tbody {
                    @for (row, running) in &shown {
                        tr {
                            td { (row.date) }
                            td class="schedule-opponent" { (row.opponent) }
                            td { (row.location.as_deref().unwrap_or_default()) }
                            td class="schedule-result" { (result_display(row)) }
                            td { (running.map(|s| s.to_string()).unwrap_or_default()) }
                        }
                    }
                }
            }
        }
    }
}

/// Single-team page: summary card, the selected season's results and the
/// current schedule (both opponent-filtered), and roster.
#[must_use]
pub fn render_team_template(primary: &TeamMeta, overview: &TeamOverview, opponent: &str) -> Markup {
    let title = format!("{} Men's Tennis", primary.name);
    html! {
        (maud::DOCTYPE)
        html lang="en" {
            (render_head(&title))
            body {
                div class="team-container" {
                    div class="comparison-header" {
                        h1 { (title) }
                        a class="compare-link" href=(relative_link("./", &[("season", overview.season.as_str())])) {
                            "Head-to-head comparison"
                        }
                    }
                    form id="team-filters" method="get" action="team" {
                        label for="season" { "Season:" }
                        select id="season" name="season" {
                            @for season in &overview.seasons {
                                option value=(season) selected[season == overview.season.as_str()] { (season) }
                            }
                        }
                        label for="opponent" { "Opponent:" }
                        input id="opponent" type="text" name="opponent" value=(opponent) placeholder="leave blank for all";
                        button type="submit" { "Apply" }
                    }
                    div class="team-summary" {
                        (render_school_card(&overview.summary, Side::Left))
                    }
                    h2 { "Season Results " (overview.season.as_str()) }
                    div id="season-results" {
                        @match &overview.summary {
                            Ok(summary) => {
                                (render_match_table(&summary.matches, opponent))
                            },
                            Err(_) => {
                                p class="no-schedule" { "No results for this season" }
                            },
                        }
                    }
                    h2 { "Match Schedule" }
                    div id="schedule" {
                        @match &overview.schedule {
                            Ok(rows) => {
                                (render_match_table(rows, opponent))
                            },
                            Err(_) => {
                                p class="no-schedule" { "No schedule data available" }
                            },
                        }
                    }
                    h2 { "Player Roster & Stats" }
                    @match &overview.summary {
                        Ok(summary) => {
                            (render_roster_box(summary))
                        },
                        Err(_) => {
                            p class="no-roster" { "No roster data available" }
                        },
                    }
                }
            }
        }
    }
}
