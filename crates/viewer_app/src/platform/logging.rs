//! Browser logging initialization for viewer_app.
//!
//! Records go to the developer console at the configured level.

use crate::ViewerConfig;

pub fn initialize(config: &ViewerConfig) {
    engine_logging::initialize_for_browser(config.log_level());
}
