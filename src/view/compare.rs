use chrono::Utc;
use maud::{Markup, html};

use crate::controller::compare::Comparison;
use crate::model::format_time_ago;
use crate::view::card::{Side, render_roster_box, render_school_card};

/// Head-to-head fragment: both cards, their rosters and the VS divider.
#[must_use]
pub fn render_comparison(comparison: &Comparison) -> Markup {
    let elapsed = Utc::now() - comparison.fetched_at;
    html! {
        div class="comparison-layout" data-season=(comparison.selection.season.as_str()) {
            div class="left-side" {
                (render_school_card(&comparison.left, Side::Left))
                @if let Ok(summary) = &comparison.left {
                    (render_roster_box(summary))
                }
            }
            div class="vs-divider" {
                div class="vs-circle" { "VS" }
            }
            div class="right-side" {
                (render_school_card(&comparison.right, Side::Right))
                @if let Ok(summary) = &comparison.right {
                    (render_roster_box(summary))
                }
            }
        }
        p class="refresh" {
            "Season " (comparison.selection.season.as_str())
            ", loaded " (format_time_ago(elapsed)) " ago"
        }
    }
}
