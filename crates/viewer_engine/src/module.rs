use crate::ModuleError;

/// Name of the `window` property the host page publishes the engine under.
pub const DEFAULT_ENGINE_GLOBAL: &str = "__viewerEngine";

/// Entry points exposed by the rendering engine module.
///
/// Futures are not required to be `Send`: browser promises live on the page's
/// single event loop.
#[async_trait::async_trait(?Send)]
pub trait EngineModule {
    /// Prepares the module. Expected to be idempotent for one page load.
    async fn init(&self) -> Result<(), ModuleError>;

    /// Begins rendering the asset at `url`.
    async fn start(&self, url: &str) -> Result<(), ModuleError>;

    fn stop(&self) -> Result<(), ModuleError>;
}
