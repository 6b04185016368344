//! Viewer configuration.
//!
//! Sources, lowest precedence first: built-in defaults, a JSON document on the
//! host element, then the page query string.

use std::str::FromStr;

use log::LevelFilter;
use serde::Deserialize;
use thiserror::Error;
use viewer_core::AppState;
use viewer_engine::{
    LoaderSettings, SuppressionMarker, DEFAULT_ENGINE_GLOBAL, DEFAULT_SUPPRESSION_MARKER,
};

pub const DEFAULT_CANVAS_ID: &str = "renderer-canvas";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid config json: {0}")]
    Json(#[from] serde_json::Error),
    #[error("invalid value `{value}` for `{key}`")]
    InvalidValue { key: String, value: String },
}

/// How a submit while the engine is running restarts it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum RestartPolicy {
    /// Reload the whole page, discarding the engine with it.
    #[default]
    PageReload,
    /// Stop and re-initialize the engine in place.
    EngineReset,
}

impl FromStr for RestartPolicy {
    type Err = ConfigError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim() {
            "page-reload" => Ok(RestartPolicy::PageReload),
            "engine-reset" => Ok(RestartPolicy::EngineReset),
            other => Err(ConfigError::InvalidValue {
                key: "restart".to_string(),
                value: other.to_string(),
            }),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ViewerConfig {
    /// Container the engine attaches its canvas to.
    pub canvas_id: String,
    /// `window` property holding the engine module.
    pub engine_global: String,
    pub suppression_marker: String,
    pub restart: RestartPolicy,
    pub initial_url: Option<String>,
    /// Submit `initial_url` once on startup.
    pub autostart: bool,
    pub log_level: String,
}

impl Default for ViewerConfig {
    fn default() -> Self {
        Self {
            canvas_id: DEFAULT_CANVAS_ID.to_string(),
            engine_global: DEFAULT_ENGINE_GLOBAL.to_string(),
            suppression_marker: DEFAULT_SUPPRESSION_MARKER.to_string(),
            restart: RestartPolicy::default(),
            initial_url: None,
            autostart: false,
            log_level: "info".to_string(),
        }
    }
}

impl ViewerConfig {
    pub fn from_json(text: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    /// Overrides fields from a query string such as `?url=...&autostart=1`.
    ///
    /// Unknown keys are ignored. On error the config is left unchanged.
    pub fn apply_query(&mut self, query: &str) -> Result<(), ConfigError> {
        let query = query.strip_prefix('?').unwrap_or(query);
        let mut next = self.clone();
        for (key, value) in url::form_urlencoded::parse(query.as_bytes()) {
            match key.as_ref() {
                "url" => next.initial_url = Some(value.into_owned()),
                "autostart" => next.autostart = parse_flag(&key, &value)?,
                "restart" => next.restart = value.parse()?,
                "log" => next.log_level = value.into_owned(),
                _ => {}
            }
        }
        next.validate()?;
        *self = next;
        Ok(())
    }

    pub fn log_level(&self) -> LevelFilter {
        engine_logging::parse_level(&self.log_level).unwrap_or(LevelFilter::Info)
    }

    pub fn loader_settings(&self) -> LoaderSettings {
        LoaderSettings {
            suppression_marker: SuppressionMarker::new(self.suppression_marker.clone()),
        }
    }

    pub fn initial_state(&self) -> AppState {
        match &self.initial_url {
            Some(url) => AppState::with_url(url.clone()),
            None => AppState::new(),
        }
    }

    /// URL to submit at startup, if auto-loading is configured.
    pub fn autostart_url(&self) -> Option<&str> {
        if !self.autostart {
            return None;
        }
        self.initial_url.as_deref().filter(|url| !url.trim().is_empty())
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if engine_logging::parse_level(&self.log_level).is_none() {
            return Err(ConfigError::InvalidValue {
                key: "log_level".to_string(),
                value: self.log_level.clone(),
            });
        }
        if self.canvas_id.trim().is_empty() {
            return Err(ConfigError::InvalidValue {
                key: "canvas_id".to_string(),
                value: self.canvas_id.clone(),
            });
        }
        Ok(())
    }
}

fn parse_flag(key: &str, value: &str) -> Result<bool, ConfigError> {
    match value.trim() {
        "" | "1" | "true" | "yes" => Ok(true),
        "0" | "false" | "no" => Ok(false),
        other => Err(ConfigError::InvalidValue {
            key: key.to_string(),
            value: other.to_string(),
        }),
    }
}
