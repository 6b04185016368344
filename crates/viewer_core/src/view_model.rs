use crate::LoadState;

pub const RUN_LABEL: &str = "Run";
pub const RELOAD_LABEL: &str = "Reload";
pub const ERROR_PREFIX: &str = "An error occurred loading: ";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppViewModel {
    pub url: String,
    pub load_state: LoadState,
    pub button_label: &'static str,
    /// The render surface is only shown once the engine has started.
    pub canvas_visible: bool,
    /// Raw failure message, present only while errored.
    pub error_message: Option<String>,
    /// `error_message` worded for display.
    pub error_text: Option<String>,
    pub dirty: bool,
}

pub(crate) fn button_label(state: LoadState) -> &'static str {
    match state {
        LoadState::Started => RELOAD_LABEL,
        LoadState::Idle | LoadState::Loading | LoadState::Errored => RUN_LABEL,
    }
}

pub(crate) fn error_text(message: &str) -> String {
    format!("{ERROR_PREFIX}{message}")
}
