use viewer_core::{AppViewModel, LoadState};

use super::constants::*;
use super::DomCommand;

#[allow(clippy::vec_init_then_push)]
pub fn render(canvas_id: &str, view: &AppViewModel) -> Vec<DomCommand> {
    let mut cmds = Vec::new();

    cmds.push(DomCommand::SetInputValue {
        id: INPUT_URL.to_string(),
        text: view.url.clone(),
    });

    cmds.push(DomCommand::SetText {
        id: BUTTON_ACTION.to_string(),
        text: view.button_label.to_string(),
    });

    cmds.push(DomCommand::SetText {
        id: LABEL_STATUS.to_string(),
        text: status_text(view.load_state).to_string(),
    });

    cmds.push(DomCommand::SetText {
        id: LABEL_ERROR.to_string(),
        text: view.error_text.clone().unwrap_or_default(),
    });
    cmds.push(DomCommand::SetVisible {
        id: LABEL_ERROR.to_string(),
        visible: view.error_text.is_some(),
    });

    cmds.push(DomCommand::SetVisible {
        id: canvas_id.to_string(),
        visible: view.canvas_visible,
    });

    cmds
}

fn status_text(state: LoadState) -> &'static str {
    match state {
        LoadState::Idle => "Ready",
        LoadState::Loading => "Loading…",
        LoadState::Started => "Running",
        LoadState::Errored => "Failed",
    }
}
