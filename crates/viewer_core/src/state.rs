use crate::view_model::{button_label, error_text, AppViewModel};
use crate::{InputPanel, LoadController, LoadState};

pub type LoadId = u64;

/// User-visible details of an unsuppressed load failure.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ErrorInfo {
    pub message: String,
}

/// Canonical page state: the URL input plus the load controller.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct AppState {
    input: InputPanel,
    controller: LoadController,
    dirty: bool,
}

impl AppState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Fresh state with the URL input pre-filled.
    pub fn with_url(url: impl Into<String>) -> Self {
        Self {
            input: InputPanel::with_text(url),
            ..Self::default()
        }
    }

    pub fn input(&self) -> &InputPanel {
        &self.input
    }

    pub fn controller(&self) -> &LoadController {
        &self.controller
    }

    pub fn load_state(&self) -> LoadState {
        self.controller.state()
    }

    pub fn view(&self) -> AppViewModel {
        let load_state = self.controller.state();
        let error_message = self.controller.error().map(|info| info.message.clone());
        AppViewModel {
            url: self.input.text().to_string(),
            load_state,
            button_label: button_label(load_state),
            canvas_visible: load_state == LoadState::Started,
            error_text: error_message.as_deref().map(error_text),
            error_message,
            dirty: self.dirty,
        }
    }

    /// Returns whether the view changed since the last call, and clears the flag.
    pub fn consume_dirty(&mut self) -> bool {
        std::mem::take(&mut self.dirty)
    }

    pub(crate) fn input_mut(&mut self) -> &mut InputPanel {
        &mut self.input
    }

    pub(crate) fn controller_mut(&mut self) -> &mut LoadController {
        &mut self.controller
    }

    pub(crate) fn mark_dirty(&mut self) {
        self.dirty = true;
    }
}
