//! Viewer core: pure load-lifecycle state machine and view-model helpers.
mod controller;
mod effect;
mod input;
mod msg;
mod state;
mod update;
mod view_model;

pub use controller::{LoadController, LoadState, SubmitDecision};
pub use effect::Effect;
pub use input::{InputPanel, LoadRequest};
pub use msg::{LoadResultKind, Msg};
pub use state::{AppState, ErrorInfo, LoadId};
pub use update::update;
pub use view_model::{AppViewModel, ERROR_PREFIX, RELOAD_LABEL, RUN_LABEL};
