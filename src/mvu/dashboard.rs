use maud::Markup;
use tracing::debug;

use crate::controller::api::SeasonApi;
use crate::controller::compare::{Comparison, Selection, load_comparison};
use crate::model::TeamTable;
use crate::view::compare::render_comparison;

/// State behind the head-to-head view.
///
/// Every selection change takes a new sequence number; a loaded comparison is
/// only accepted when it carries the current one, so the latest request wins
/// regardless of the order responses arrive in.
///
/// The `/compare` handler builds one model per request with a single
/// selection, so in the browser the guard against stale responses is the
/// htmx `hx-sync` queue on `#selection`, not this model. The discard path
/// applies when several selections are fed to one model.
#[derive(Debug, Clone, Default)]
pub struct DashboardModel {
    pub selection: Option<Selection>,
    pub seq: u64,
    pub loading: bool,
    pub want_json: bool,
    pub comparison: Option<Comparison>,
    pub markup: Option<Markup>,
    pub discarded: usize,
}

impl DashboardModel {
    #[must_use]
    pub fn new(want_json: bool) -> Self {
        Self {
            want_json,
            ..Self::default()
        }
    }
}

#[derive(Debug, Clone)]
pub enum Msg {
    SelectionChanged(Selection),
    ComparisonLoaded { seq: u64, comparison: Comparison },
    Rendered { seq: u64, markup: Markup },
}

#[derive(Debug, Clone)]
pub enum Effect {
    LoadComparison { seq: u64, selection: Selection },
    Render { seq: u64 },
}

pub fn update(model: &mut DashboardModel, msg: Msg) -> Vec<Effect> {
    match msg {
        Msg::SelectionChanged(selection) => {
            model.seq += 1;
            model.loading = true;
            model.selection = Some(selection.clone());
            vec![Effect::LoadComparison {
                seq: model.seq,
                selection,
            }]
        }
        Msg::ComparisonLoaded { seq, comparison } => {
            if seq != model.seq || model.selection.as_ref() != Some(&comparison.selection) {
                debug!(seq, current = model.seq, "discarding stale comparison");
                model.discarded += 1;
                return vec![];
            }
            model.comparison = Some(comparison);
            model.loading = false;
            if model.want_json {
                vec![]
            } else {
                vec![Effect::Render { seq }]
            }
        }
        Msg::Rendered { seq, markup } => {
            if seq == model.seq {
                model.markup = Some(markup);
            }
            vec![]
        }
    }
}

#[derive(Clone, Copy)]
pub struct Deps<'a> {
    pub api: &'a dyn SeasonApi,
    pub teams: &'a TeamTable,
}

pub async fn run_load(seq: u64, selection: Selection, deps: Deps<'_>) -> Msg {
    let comparison = load_comparison(deps.api, deps.teams, &selection).await;
    Msg::ComparisonLoaded { seq, comparison }
}

/// Render the accepted comparison. `None` when there is nothing to draw yet.
#[must_use]
pub fn run_render(seq: u64, model: &DashboardModel) -> Option<Msg> {
    model.comparison.as_ref().map(|comparison| Msg::Rendered {
        seq,
        markup: render_comparison(comparison),
    })
}
