//! Browser front end for the model viewer.
//!
//! Layout, rendering and configuration are plain data transformations so they
//! can be exercised off the browser; the `platform` module applies them to the
//! DOM and wires events and effects on `wasm32`.
pub mod config;
pub mod outcome;
pub mod ui;

#[cfg(target_arch = "wasm32")]
mod platform;

pub use config::{ConfigError, RestartPolicy, ViewerConfig};
