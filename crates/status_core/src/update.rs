use readability_core::DocumentMetrics;

use crate::{AppState, Effect, Msg};

/// Pure update function: applies a message to state and returns any effects.
pub fn update(mut state: AppState, msg: Msg) -> (AppState, Vec<Effect>) {
    let effects = match msg {
        Msg::ContentChanged(text) => {
            let was_over = state.is_over_limit();
            state.set_metrics(DocumentMetrics::from_text(&text));
            limit_transition(&state, was_over)
        }
        Msg::CharacterLimitChanged(limit) => {
            let was_over = state.is_over_limit();
            state.set_character_limit(limit);
            limit_transition(&state, was_over)
        }
        Msg::Tick | Msg::NoOp => Vec::new(),
    };

    (state, effects)
}

/// Effects fire only when crossing the limit, not while staying on one side.
fn limit_transition(state: &AppState, was_over: bool) -> Vec<Effect> {
    match (was_over, state.is_over_limit(), state.character_limit()) {
        (false, true, Some(limit)) => vec![Effect::LimitExceeded {
            characters: state.metrics().characters,
            limit,
        }],
        (true, false, _) => vec![Effect::LimitRestored],
        _ => Vec::new(),
    }
}
