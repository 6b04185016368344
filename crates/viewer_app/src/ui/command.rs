/// Declarative DOM mutation produced by layout and render.
///
/// `parent: None` means the viewer's host element.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DomCommand {
    CreatePanel {
        id: String,
        parent: Option<String>,
        class: &'static str,
    },
    CreateLabel {
        id: String,
        parent: Option<String>,
        text: String,
        class: &'static str,
    },
    CreateInput {
        id: String,
        parent: Option<String>,
        initial_text: String,
        placeholder: String,
    },
    CreateButton {
        id: String,
        parent: Option<String>,
        text: String,
    },
    /// Only written when it differs, so the caret is not disturbed while typing.
    SetInputValue { id: String, text: String },
    SetText { id: String, text: String },
    SetVisible { id: String, visible: bool },
}
