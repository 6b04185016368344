use viewer_core::{update, AppState, Effect, LoadResultKind, LoadState, Msg};

fn init_logging() {
    engine_logging::initialize_for_tests();
}

fn reload_pending() -> AppState {
    let (state, _) = update(
        AppState::with_url("https://example.com/a.gltf"),
        Msg::Submitted,
    );
    let (state, _) = update(
        state,
        Msg::LoadFinished {
            load_id: 1,
            result: LoadResultKind::Success,
        },
    );
    let (mut state, effects) = update(state, Msg::Submitted);
    assert_eq!(effects, vec![Effect::ForceReload]);
    state.consume_dirty();
    state
}

#[test]
fn successful_reset_rebuilds_a_fresh_context() {
    init_logging();
    let (mut state, effects) = update(reload_pending(), Msg::ReloadFinished { result: Ok(()) });

    assert!(effects.is_empty());
    assert!(state.consume_dirty());
    let mut expected = AppState::new();
    expected.consume_dirty();
    assert_eq!(state, expected);

    // Load ids restart with the context.
    let (_, effects) = update(state, Msg::Submitted);
    assert_eq!(
        effects,
        vec![Effect::StartLoad {
            load_id: 1,
            url: String::new(),
        }]
    );
}

#[test]
fn failed_reset_surfaces_error_and_allows_retry() {
    init_logging();
    let (state, _) = update(
        reload_pending(),
        Msg::ReloadFinished {
            result: Err("init failed".to_string()),
        },
    );
    let view = state.view();
    assert_eq!(view.load_state, LoadState::Errored);
    assert_eq!(view.error_message.as_deref(), Some("init failed"));
    assert!(!view.canvas_visible);

    let (state, effects) = update(state, Msg::Submitted);
    assert_eq!(
        effects,
        vec![Effect::StartLoad {
            load_id: 2,
            url: "https://example.com/a.gltf".to_string(),
        }]
    );
    assert_eq!(state.view().error_message, None);
}

#[test]
fn reload_result_without_pending_reload_is_ignored() {
    init_logging();
    let state = AppState::new();
    let (next, effects) = update(state.clone(), Msg::ReloadFinished { result: Ok(()) });
    assert_eq!(next, state);
    assert!(effects.is_empty());
}
