use crate::{AppState, Effect, Msg, SubmitDecision};

/// Pure update function: applies a message to state and returns any effects.
pub fn update(mut state: AppState, msg: Msg) -> (AppState, Vec<Effect>) {
    let effects = match msg {
        Msg::InputChanged(text) => {
            if state.input_mut().on_change(text) {
                state.mark_dirty();
            }
            Vec::new()
        }
        Msg::Submitted => {
            let request = state.input().on_submit();
            match state.controller_mut().submit(request) {
                SubmitDecision::Start { load_id, url } => {
                    state.mark_dirty();
                    vec![Effect::StartLoad { load_id, url }]
                }
                // Presentation is unchanged until the context is rebuilt.
                SubmitDecision::ForceReload => vec![Effect::ForceReload],
                SubmitDecision::Discard => Vec::new(),
            }
        }
        Msg::LoadFinished { load_id, result } => {
            if state.controller_mut().complete(load_id, result) {
                state.mark_dirty();
            }
            Vec::new()
        }
        Msg::ReloadFinished { result } => {
            if !state.controller().reload_pending() {
                return (state, Vec::new());
            }
            match result {
                Ok(()) => {
                    state = AppState::new();
                    state.mark_dirty();
                }
                Err(message) => {
                    if state.controller_mut().fail_reload(message) {
                        state.mark_dirty();
                    }
                }
            }
            Vec::new()
        }
    };

    (state, effects)
}
