use log::LevelFilter;
use pretty_assertions::assert_eq;
use viewer_app::{ConfigError, RestartPolicy, ViewerConfig};
use viewer_core::LoadState;

#[test]
fn defaults_match_the_engine_contract() {
    let config = ViewerConfig::default();

    assert_eq!(config.canvas_id, "renderer-canvas");
    assert_eq!(config.engine_global, "__viewerEngine");
    assert_eq!(config.suppression_marker, "Using exceptions for control flow,");
    assert_eq!(config.restart, RestartPolicy::PageReload);
    assert_eq!(config.log_level(), LevelFilter::Info);
    assert_eq!(config.autostart_url(), None);
}

#[test]
fn json_fills_missing_fields_with_defaults() {
    let config = ViewerConfig::from_json(
        r#"{ "restart": "engine-reset", "initial_url": "https://example.com/a.gltf", "autostart": true }"#,
    )
    .expect("valid config");

    assert_eq!(config.restart, RestartPolicy::EngineReset);
    assert_eq!(config.autostart_url(), Some("https://example.com/a.gltf"));
    assert_eq!(config.canvas_id, "renderer-canvas");
}

#[test]
fn json_rejects_unknown_restart_policy_and_bad_level() {
    assert!(matches!(
        ViewerConfig::from_json(r#"{ "restart": "reboot" }"#),
        Err(ConfigError::Json(_))
    ));
    assert!(matches!(
        ViewerConfig::from_json(r#"{ "log_level": "loud" }"#),
        Err(ConfigError::InvalidValue { .. })
    ));
}

#[test]
fn query_overrides_json() {
    let mut config = ViewerConfig::from_json(r#"{ "initial_url": "https://a.example/x.gltf" }"#)
        .expect("valid config");

    config
        .apply_query("?url=https%3A%2F%2Fb.example%2Fy.gltf&autostart=1&restart=engine-reset&log=debug")
        .expect("valid query");

    assert_eq!(config.initial_url.as_deref(), Some("https://b.example/y.gltf"));
    assert!(config.autostart);
    assert_eq!(config.restart, RestartPolicy::EngineReset);
    assert_eq!(config.log_level(), LevelFilter::Debug);
}

#[test]
fn invalid_query_leaves_config_untouched() {
    let mut config = ViewerConfig::default();

    let err = config
        .apply_query("url=https://a.example/x.gltf&autostart=maybe")
        .unwrap_err();

    assert!(matches!(err, ConfigError::InvalidValue { ref key, .. } if key == "autostart"));
    assert_eq!(config, ViewerConfig::default());
}

#[test]
fn autostart_requires_a_non_blank_url() {
    let mut config = ViewerConfig::default();
    config.apply_query("autostart=true&url=%20").expect("valid query");
    assert_eq!(config.autostart_url(), None);
}

#[test]
fn initial_state_prefills_url_only() {
    let config = ViewerConfig {
        initial_url: Some("https://example.com/a.gltf".to_string()),
        ..ViewerConfig::default()
    };
    let view = config.initial_state().view();

    assert_eq!(view.url, "https://example.com/a.gltf");
    assert_eq!(view.load_state, LoadState::Idle);
}

#[test]
fn loader_settings_carry_the_marker() {
    let config = ViewerConfig {
        suppression_marker: "EXPECTED:".to_string(),
        ..ViewerConfig::default()
    };
    let settings = config.loader_settings();

    assert!(settings.suppression_marker.matches("EXPECTED: unwinding"));
    assert!(!settings
        .suppression_marker
        .matches("Using exceptions for control flow, x"));
}
