use maud::{Markup, html};

use crate::controller::compare::SideOutcome;
use crate::model::{Outcome, TeamSummary, format_score, score_class};
use crate::view::chart::render_trend_chart;
use crate::view::utils::render_logo;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Side {
    Left,
    Right,
}

impl Side {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Side::Left => "left",
            Side::Right => "right",
        }
    }
}

fn result_class(outcome: Outcome) -> &'static str {
    match outcome {
        Outcome::Win => "game-result win",
        Outcome::Loss => "game-result loss",
        Outcome::Other | Outcome::Unplayed => "game-result other",
    }
}

#[must_use]
pub fn render_no_data(side: Side) -> Markup {
    html! {
        div class=(format!("school-card {}", side.as_str())) {
            div class="no-data-placeholder" {
                p { "No data available" }
            }
        }
    }
}

#[must_use]
pub fn render_school_card(outcome: &SideOutcome, side: Side) -> Markup {
    let Ok(summary) = outcome else {
        return render_no_data(side);
    };

    html! {
        div class=(format!("school-card {}", side.as_str())) data-team=(summary.name)
            style=(format!("border-color: {};", summary.color)) {
            div class="school-header" style=(format!("background-color: {};", summary.color)) {
                div class="school-logo" { (render_logo(&summary.name, &summary.logo)) }
                h3 { (summary.name) }
            }
            div class="school-stats-summary" {
                div class="stat-box" {
                    div class="stat-label" { "Record" }
                    div class="stat-value record" { (summary.record.to_string()) }
                }
                div class="stat-box" {
                    div class="stat-label" { "Score" }
                    div class=(format!("stat-value latest-score {}", score_class(summary.latest_score))) {
                        (format_score(summary.latest_score))
                    }
                }
            }
            (render_trend_chart(&summary.matches, &summary.color))
            (render_recent_games(summary))
        }
    }
}

#[must_use]
pub fn render_recent_games(summary: &TeamSummary) -> Markup {
    html! {
        div class="recent-games" {
            h4 { "Recent Games" }
            div class="games-list" {
                @if summary.recent_games.is_empty() {
                    p class="no-games" { "No games played yet" }
                }
                @for game in &summary.recent_games {
                    div class="game-item" {
                        span class="game-date" { (game.date) }
                        span class="game-opponent" { (game.opponent) }
                        span class=(result_class(game.outcome())) { (game.result) }
                    }
                }
            }
        }
    }
}

#[must_use]
pub fn render_roster_box(summary: &TeamSummary) -> Markup {
    html! {
        div class="roster-card" style=(format!("border-color: {};", summary.color)) {
            h4 { (summary.name) " Team Roster" }
            @if summary.roster.is_empty() {
                p class="no-roster" { "No roster data available" }
            } @else {
                table class="styled-table roster-table" {
                    thead {
                        tr {
                            th { "Player" }
                            th { "Year" }
                            th { "UTR" }
                            th { "Singles" }
                            th { "Doubles" }
                        }
                    }
                    tbody {
                        @for player in &summary.roster {
                            tr {
                                td class="player-name" { (player.player) }
                                td class="player-year" { (player.year.as_deref().unwrap_or_default()) }
                                td class="player-utr" { (player.utr.as_deref().unwrap_or_default()) }
                                td class="player-record" { (player.singles_display()) }
                                td class="player-doubles" { (player.doubles_display()) }
                            }
                        }
                    }
                }
            }
        }
    }
}
