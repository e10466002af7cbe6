use maud::{Markup, html};

use crate::model::{MatchRecord, format_score};
use crate::score::{TrendPoint, trend_segments};

pub const CHART_WIDTH: f64 = 480.0;
pub const CHART_HEIGHT: f64 = 250.0;
const PAD_X: f64 = 30.0;
const PAD_TOP: f64 = 15.0;
const PAD_BOTTOM: f64 = 60.0;

#[derive(Debug, Clone)]
pub struct PlottedPoint {
    pub x: f64,
    pub y: f64,
    pub point: TrendPoint,
}

#[derive(Debug, Clone)]
pub struct TrendGeometry {
    pub segments: Vec<Vec<PlottedPoint>>,
    pub zero_y: f64,
    pub min: f64,
    pub max: f64,
}

/// Lay the cumulative score out on the chart canvas. The value range always
/// includes zero so the baseline is visible. `None` when nothing has a score.
#[must_use]
pub fn preprocess_trend(matches: &[MatchRecord]) -> Option<TrendGeometry> {
    let segments = trend_segments(matches);
    let values = segments.iter().flatten().map(|p| p.value);
    let (mut min, mut max) = values.fold((0.0_f64, 0.0_f64), |(lo, hi), v| (lo.min(v), hi.max(v)));
    if segments.is_empty() {
        return None;
    }
    if (max - min).abs() < f64::EPSILON {
        min -= 1.0;
        max += 1.0;
    }

    let steps = matches.len().saturating_sub(1).max(1) as f64;
    let plot_width = CHART_WIDTH - 2.0 * PAD_X;
    let plot_height = CHART_HEIGHT - PAD_TOP - PAD_BOTTOM;
    let x_of = |index: usize| PAD_X + (index as f64) * plot_width / steps;
    let y_of = |value: f64| PAD_TOP + (max - value) / (max - min) * plot_height;

    let segments = segments
        .into_iter()
        .map(|segment| {
            segment
                .into_iter()
                .map(|point| PlottedPoint {
                    x: x_of(point.index),
                    y: y_of(point.value),
                    point,
                })
                .collect()
        })
        .collect();

    Some(TrendGeometry {
        segments,
        zero_y: y_of(0.0),
        min,
        max,
    })
}

fn polyline_points(segment: &[PlottedPoint]) -> String {
    segment
        .iter()
        .map(|p| format!("{:.1},{:.1}", p.x, p.y))
        .collect::<Vec<_>>()
        .join(" ")
}

#[must_use]
pub fn render_trend_chart(matches: &[MatchRecord], color: &str) -> Markup {
    let Some(geometry) = preprocess_trend(matches) else {
        return html! {
            div class="school-chart" {
                p class="no-chart" { "No games played yet" }
            }
        };
    };

    html! {
        div class="school-chart" {
            svg class="trend-chart" xmlns="http://www.w3.org/2000/svg"
                viewBox=(format!("0 0 {CHART_WIDTH} {CHART_HEIGHT}"))
                role="img" aria-label="Cumulative score by match" {
                line class="baseline" x1=(PAD_X) x2=(CHART_WIDTH - PAD_X)
                    y1=(format!("{:.1}", geometry.zero_y)) y2=(format!("{:.1}", geometry.zero_y))
                    stroke="#e0e0e0" stroke-dasharray="3 3" {}
                text class="axis-max" x="2" y=(PAD_TOP + 4.0) font-size="12" { (format_score(geometry.max)) }
                text class="axis-min" x="2" y=(CHART_HEIGHT - PAD_BOTTOM) font-size="12" { (format_score(geometry.min)) }
                @for segment in &geometry.segments {
                    polyline class="trend-line" points=(polyline_points(segment))
                        fill="none" stroke=(color) stroke-width="3" {}
                    @for p in segment {
                        circle cx=(format!("{:.1}", p.x)) cy=(format!("{:.1}", p.y)) r="4" fill=(color) {
                            title { (format!("{} vs {}: {}", p.point.label, p.point.opponent, format_score(p.point.value))) }
                        }
                        text class="axis-label" font-size="10" text-anchor="end"
                            x=(format!("{:.1}", p.x)) y=(format!("{:.1}", CHART_HEIGHT - PAD_BOTTOM + 14.0))
                            transform=(format!("rotate(-45 {:.1} {:.1})", p.x, CHART_HEIGHT - PAD_BOTTOM + 14.0)) {
                            (p.point.label)
                        }
                    }
                }
            }
        }
    }
}
