use std::rc::Rc;

use engine_logging::{engine_error, engine_info, engine_warn};
use viewer_core::{Effect, Msg};
use viewer_engine::{EngineLoader, WebEngineModule};
use wasm_bindgen_futures::spawn_local;

use crate::outcome::to_result_kind;
use crate::{RestartPolicy, ViewerConfig};

/// Sends a message back into the update loop.
pub type Dispatch = Rc<dyn Fn(Msg)>;

pub struct EffectRunner {
    loader: Rc<EngineLoader<WebEngineModule>>,
    restart: RestartPolicy,
}

impl EffectRunner {
    pub fn new(config: &ViewerConfig) -> Self {
        let module = WebEngineModule::new(config.engine_global.clone());
        Self {
            loader: Rc::new(EngineLoader::new(module, config.loader_settings())),
            restart: config.restart,
        }
    }

    pub fn enqueue(&self, effects: Vec<Effect>, dispatch: &Dispatch) {
        for effect in effects {
            match effect {
                Effect::StartLoad { load_id, url } => {
                    engine_info!("StartLoad load_id={} url={}", load_id, url);
                    let loader = Rc::clone(&self.loader);
                    let dispatch = Rc::clone(dispatch);
                    spawn_local(async move {
                        let outcome = loader.load(&url).await;
                        dispatch(Msg::LoadFinished {
                            load_id,
                            result: to_result_kind(outcome),
                        });
                    });
                }
                Effect::ForceReload => match self.restart {
                    RestartPolicy::PageReload => reload_page(),
                    RestartPolicy::EngineReset => {
                        let loader = Rc::clone(&self.loader);
                        let dispatch = Rc::clone(dispatch);
                        spawn_local(async move {
                            let result = loader.reset().await.map_err(|failure| {
                                engine_warn!("Engine reset failed: {}", failure);
                                failure.message
                            });
                            dispatch(Msg::ReloadFinished { result });
                        });
                    }
                },
            }
        }
    }
}

fn reload_page() {
    engine_info!("Reloading page to restart the engine");
    let Some(window) = web_sys::window() else {
        engine_error!("Cannot reload: no window");
        return;
    };
    if let Err(err) = window.location().reload() {
        engine_error!("Page reload failed: {:?}", err);
    }
}
