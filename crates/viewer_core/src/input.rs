/// A single request to load the asset at `url`.
///
/// Created on submit and handed straight to the controller; nothing keeps it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoadRequest {
    pub url: String,
}

/// Controlled text input holding the model URL.
///
/// The panel never filters submits; whether a submit does anything is up to
/// [`crate::LoadController`].
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct InputPanel {
    text: String,
}

impl InputPanel {
    pub fn with_text(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    /// Replaces the current text. Returns `true` when the value changed.
    pub fn on_change(&mut self, text: String) -> bool {
        if self.text == text {
            return false;
        }
        self.text = text;
        true
    }

    pub fn on_submit(&self) -> LoadRequest {
        LoadRequest {
            url: self.text.clone(),
        }
    }
}
