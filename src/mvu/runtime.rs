use futures::StreamExt;
use futures::stream::FuturesUnordered;
use std::collections::VecDeque;

use crate::mvu::dashboard::{DashboardModel, Deps, Effect, Msg, run_load, run_render, update};

/// Runs the MVU loop for the dashboard: feeds `msgs` in order, runs loads
/// concurrently and applies their results in arrival order until nothing is in flight.
pub async fn run_dashboard(
    model: &mut DashboardModel,
    msgs: impl IntoIterator<Item = Msg>,
    deps: Deps<'_>,
) {
    let mut effects: VecDeque<Effect> = VecDeque::new();
    for msg in msgs {
        effects.extend(update(model, msg));
    }

    let mut in_flight = FuturesUnordered::new();
    loop {
        while let Some(effect) = effects.pop_front() {
            match effect {
                Effect::LoadComparison { seq, selection } => {
                    in_flight.push(run_load(seq, selection, deps));
                }
                Effect::Render { seq } => {
                    if let Some(msg) = run_render(seq, model) {
                        effects.extend(update(model, msg));
                    }
                }
            }
        }

        match in_flight.next().await {
            Some(msg) => effects.extend(update(model, msg)),
            None => break,
        }
    }
}
