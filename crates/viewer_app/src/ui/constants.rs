/// Host element the viewer mounts into; `<body>` is used when it is absent.
pub const ROOT_HOST: &str = "viewer-root";
/// Attribute on the host element carrying a JSON [`crate::ViewerConfig`].
pub const CONFIG_ATTRIBUTE: &str = "data-viewer-config";

pub const PANEL_INPUT: &str = "viewer-input-panel";
pub const LABEL_INPUT: &str = "viewer-input-label";
pub const ROW_INPUT: &str = "viewer-input-row";
pub const INPUT_URL: &str = "viewer-url";
pub const BUTTON_ACTION: &str = "viewer-action";
pub const LABEL_ERROR: &str = "viewer-error";
pub const LABEL_STATUS: &str = "viewer-status";
