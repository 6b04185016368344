use viewer_core::RUN_LABEL;

use super::constants::*;
use super::DomCommand;
use crate::ViewerConfig;

const URL_PLACEHOLDER: &str = "https://example.com/model.gltf";

#[allow(clippy::vec_init_then_push)]
pub fn initial_commands(config: &ViewerConfig) -> Vec<DomCommand> {
    let mut commands = Vec::new();

    commands.push(DomCommand::CreatePanel {
        id: PANEL_INPUT.to_string(),
        parent: None,
        class: "viewer-panel",
    });

    commands.push(DomCommand::CreateLabel {
        id: LABEL_INPUT.to_string(),
        parent: Some(PANEL_INPUT.to_string()),
        text: "Model URL".to_string(),
        class: "viewer-label",
    });

    // Text field and action button share one row.
    commands.push(DomCommand::CreatePanel {
        id: ROW_INPUT.to_string(),
        parent: Some(PANEL_INPUT.to_string()),
        class: "viewer-row",
    });
    commands.push(DomCommand::CreateInput {
        id: INPUT_URL.to_string(),
        parent: Some(ROW_INPUT.to_string()),
        initial_text: config.initial_url.clone().unwrap_or_default(),
        placeholder: URL_PLACEHOLDER.to_string(),
    });
    commands.push(DomCommand::CreateButton {
        id: BUTTON_ACTION.to_string(),
        parent: Some(ROW_INPUT.to_string()),
        text: RUN_LABEL.to_string(),
    });

    commands.push(DomCommand::CreateLabel {
        id: LABEL_ERROR.to_string(),
        parent: Some(PANEL_INPUT.to_string()),
        text: String::new(),
        class: "viewer-error",
    });
    commands.push(DomCommand::SetVisible {
        id: LABEL_ERROR.to_string(),
        visible: false,
    });

    commands.push(DomCommand::CreateLabel {
        id: LABEL_STATUS.to_string(),
        parent: Some(PANEL_INPUT.to_string()),
        text: String::new(),
        class: "viewer-status",
    });

    // The engine appends its own canvas inside this container.
    commands.push(DomCommand::CreatePanel {
        id: config.canvas_id.clone(),
        parent: None,
        class: "viewer-canvas",
    });
    commands.push(DomCommand::SetVisible {
        id: config.canvas_id.clone(),
        visible: false,
    });

    commands
}
