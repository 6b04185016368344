//! Viewer engine: adapter around the external rendering engine module.
mod loader;
mod module;
mod suppress;
mod types;
#[cfg(target_arch = "wasm32")]
mod web;

pub use loader::{EngineLoader, LoaderSettings};
pub use module::{EngineModule, DEFAULT_ENGINE_GLOBAL};
pub use suppress::{SuppressionMarker, DEFAULT_SUPPRESSION_MARKER};
pub use types::{LoadFailure, LoadOutcome, LoadStage, ModuleError};
#[cfg(target_arch = "wasm32")]
pub use web::WebEngineModule;
