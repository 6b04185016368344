//! Binding to an engine module published on the page's `window`.
//!
//! The host page imports the engine's generated JS package and exposes it as
//! an object with `init`, `start(url)` and `stop` functions.

use js_sys::{Function, Promise, Reflect};
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;

use crate::{EngineModule, ModuleError, DEFAULT_ENGINE_GLOBAL};

#[derive(Debug, Clone)]
pub struct WebEngineModule {
    global: String,
}

impl Default for WebEngineModule {
    fn default() -> Self {
        Self::new(DEFAULT_ENGINE_GLOBAL)
    }
}

impl WebEngineModule {
    pub fn new(global: impl Into<String>) -> Self {
        Self {
            global: global.into(),
        }
    }

    fn entry_point(&self, name: &str) -> Result<(JsValue, Function), ModuleError> {
        let window = web_sys::window().ok_or_else(|| ModuleError::new("no window"))?;
        let target = Reflect::get(&window, &JsValue::from_str(&self.global)).map_err(js_error)?;
        if target.is_undefined() || target.is_null() {
            return Err(ModuleError::new(format!(
                "engine module `{}` is not loaded",
                self.global
            )));
        }
        let function = Reflect::get(&target, &JsValue::from_str(name))
            .map_err(js_error)?
            .dyn_into::<Function>()
            .map_err(|_| {
                ModuleError::new(format!(
                    "engine module `{}` has no `{}` function",
                    self.global, name
                ))
            })?;
        Ok((target, function))
    }
}

#[async_trait::async_trait(?Send)]
impl EngineModule for WebEngineModule {
    async fn init(&self) -> Result<(), ModuleError> {
        let (target, init) = self.entry_point("init")?;
        let value = init.call0(&target).map_err(js_error)?;
        settle(value).await
    }

    async fn start(&self, url: &str) -> Result<(), ModuleError> {
        let (target, start) = self.entry_point("start")?;
        let value = start
            .call1(&target, &JsValue::from_str(url))
            .map_err(js_error)?;
        settle(value).await
    }

    fn stop(&self) -> Result<(), ModuleError> {
        let (target, stop) = self.entry_point("stop")?;
        stop.call0(&target).map_err(js_error)?;
        Ok(())
    }
}

// Entry points may be plain functions or return a promise.
async fn settle(value: JsValue) -> Result<(), ModuleError> {
    if let Some(promise) = value.dyn_ref::<Promise>() {
        JsFuture::from(promise.clone()).await.map_err(js_error)?;
    }
    Ok(())
}

fn js_error(value: JsValue) -> ModuleError {
    if let Some(error) = value.dyn_ref::<js_sys::Error>() {
        return ModuleError::new(String::from(error.message()));
    }
    if let Some(text) = value.as_string() {
        return ModuleError::new(text);
    }
    ModuleError::new(format!("{value:?}"))
}
