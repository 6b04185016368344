use std::any::Any;
use std::future::Future;
use std::panic::{self, AssertUnwindSafe};
use std::sync::atomic::{AtomicBool, Ordering};

use engine_logging::{engine_debug, engine_error, engine_info};
use futures_util::FutureExt;

use crate::{EngineModule, LoadFailure, LoadOutcome, LoadStage, ModuleError, SuppressionMarker};

#[derive(Debug, Clone, Default)]
pub struct LoaderSettings {
    pub suppression_marker: SuppressionMarker,
}

/// Adapter that drives an [`EngineModule`] through one load and normalizes
/// whatever it raises into a [`LoadOutcome`].
///
/// Nothing thrown or panicked by the module escapes `load`. The loader keeps no
/// state across calls other than whether `init` has already succeeded.
pub struct EngineLoader<M> {
    module: M,
    settings: LoaderSettings,
    initialized: AtomicBool,
}

impl<M: EngineModule> EngineLoader<M> {
    pub fn new(module: M, settings: LoaderSettings) -> Self {
        Self {
            module,
            settings,
            initialized: AtomicBool::new(false),
        }
    }

    pub fn module(&self) -> &M {
        &self.module
    }

    pub fn is_initialized(&self) -> bool {
        self.initialized.load(Ordering::Acquire)
    }

    /// Initializes the module if needed, then starts rendering `url`.
    pub async fn load(&self, url: &str) -> LoadOutcome {
        engine_info!("Load requested url_len={} url={}", url.len(), url);
        if let Err(failure) = self.ensure_initialized().await {
            return self.classify(failure);
        }
        match guarded(self.module.start(url)).await {
            Ok(()) => {
                engine_info!("Engine started url={}", url);
                LoadOutcome::Success
            }
            Err(message) => self.classify(LoadFailure {
                stage: LoadStage::Start,
                message,
            }),
        }
    }

    /// Asks the module to stop rendering. No current load flow calls this on
    /// its own; [`EngineLoader::reset`] does.
    pub fn stop(&self) -> Result<(), LoadFailure> {
        let result = match panic::catch_unwind(AssertUnwindSafe(|| self.module.stop())) {
            Ok(result) => result.map_err(|err| err.message),
            Err(payload) => Err(panic_message(payload.as_ref())),
        };
        result.map_err(|message| {
            engine_error!("Engine stop failed: {}", message);
            LoadFailure {
                stage: LoadStage::Stop,
                message,
            }
        })
    }

    /// Stops the module and initializes it again without reloading the page.
    pub async fn reset(&self) -> Result<(), LoadFailure> {
        engine_info!("Resetting engine module");
        self.stop()?;
        self.initialized.store(false, Ordering::Release);
        match self.ensure_initialized().await {
            Ok(()) => Ok(()),
            Err(failure) => match self.classify(failure) {
                LoadOutcome::Failure(failure) => Err(failure),
                LoadOutcome::Success | LoadOutcome::Suppressed { .. } => Ok(()),
            },
        }
    }

    async fn ensure_initialized(&self) -> Result<(), LoadFailure> {
        if self.is_initialized() {
            return Ok(());
        }
        guarded(self.module.init())
            .await
            .map_err(|message| LoadFailure {
                stage: LoadStage::Init,
                message,
            })?;
        self.initialized.store(true, Ordering::Release);
        engine_debug!("Engine module initialized");
        Ok(())
    }

    fn classify(&self, failure: LoadFailure) -> LoadOutcome {
        engine_info!("Engine {} reported: {}", failure.stage, failure.message);
        if self.settings.suppression_marker.matches(&failure.message) {
            engine_debug!(
                "Suppressing control-flow failure during {}",
                failure.stage
            );
            return LoadOutcome::Suppressed {
                message: failure.message,
            };
        }
        engine_error!("An error occurred loading: {}", failure);
        LoadOutcome::Failure(failure)
    }
}

async fn guarded<F>(future: F) -> Result<(), String>
where
    F: Future<Output = Result<(), ModuleError>>,
{
    match AssertUnwindSafe(future).catch_unwind().await {
        Ok(result) => result.map_err(|err| err.message),
        Err(payload) => Err(panic_message(payload.as_ref())),
    }
}

fn panic_message(payload: &(dyn Any + Send)) -> String {
    if let Some(text) = payload.downcast_ref::<&str>() {
        (*text).to_string()
    } else if let Some(text) = payload.downcast_ref::<String>() {
        text.clone()
    } else {
        "engine module panicked".to_string()
    }
}
