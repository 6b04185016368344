use std::cell::RefCell;
use std::rc::Rc;

use engine_logging::{engine_error, engine_info, engine_warn};
use viewer_core::{update, AppState, Msg};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Element, Window};

use super::dom::Dom;
use super::effects::{Dispatch, EffectRunner};
use super::logging;
use crate::ui::constants::{BUTTON_ACTION, CONFIG_ATTRIBUTE, INPUT_URL, ROOT_HOST};
use crate::{ui, ConfigError, ViewerConfig};

pub fn run_app() -> Result<(), JsValue> {
    let window = web_sys::window().ok_or_else(|| JsValue::from_str("no window"))?;
    let document = window
        .document()
        .ok_or_else(|| JsValue::from_str("no document"))?;
    let host = match document.get_element_by_id(ROOT_HOST) {
        Some(host) => host,
        None => document
            .body()
            .map(Element::from)
            .ok_or_else(|| JsValue::from_str("no body"))?,
    };

    let (config, problems) = load_config(&window, &host);
    logging::initialize(&config);
    for problem in problems {
        engine_warn!("Ignoring viewer config: {}", problem);
    }
    engine_info!(
        "Viewer starting canvas_id={} engine_global={} restart={:?}",
        config.canvas_id,
        config.engine_global,
        config.restart
    );

    let dom = Dom::new(document, host);
    dom.apply_all(ui::layout::initial_commands(&config))?;

    let app = Rc::new(App {
        state: RefCell::new(config.initial_state()),
        effects: EffectRunner::new(&config),
        dom,
        config,
    });
    let initial_view = app.state.borrow().view();
    app.dom
        .apply_all(ui::render::render(&app.config.canvas_id, &initial_view))?;
    App::bind_events(&app)?;

    if let Some(url) = app.config.autostart_url() {
        engine_info!("Autostart url={}", url);
        app.dispatch(Msg::Submitted);
    }
    Ok(())
}

// Each layer wins over the previous one; a bad layer is skipped, not fatal.
fn load_config(window: &Window, host: &Element) -> (ViewerConfig, Vec<ConfigError>) {
    let mut problems = Vec::new();
    let mut config = match host.get_attribute(CONFIG_ATTRIBUTE) {
        Some(json) => ViewerConfig::from_json(&json).unwrap_or_else(|err| {
            problems.push(err);
            ViewerConfig::default()
        }),
        None => ViewerConfig::default(),
    };
    let query = window.location().search().unwrap_or_default();
    if let Err(err) = config.apply_query(&query) {
        problems.push(err);
    }
    (config, problems)
}

struct App {
    config: ViewerConfig,
    state: RefCell<AppState>,
    dom: Dom,
    effects: EffectRunner,
}

impl App {
    fn bind_events(app: &Rc<Self>) -> Result<(), JsValue> {
        let input = app.dom.input(INPUT_URL)?;
        let source = input.clone();
        let handler = Rc::clone(app);
        let on_input = Closure::<dyn FnMut(web_sys::Event)>::new(move |_event: web_sys::Event| {
            handler.dispatch(Msg::InputChanged(source.value()));
        });
        input.add_event_listener_with_callback("input", on_input.as_ref().unchecked_ref())?;
        // Listeners live as long as the page.
        on_input.forget();

        let button = app.dom.element(BUTTON_ACTION)?;
        let handler = Rc::clone(app);
        let on_click = Closure::<dyn FnMut(web_sys::Event)>::new(move |_event: web_sys::Event| {
            handler.dispatch(Msg::Submitted);
        });
        button.add_event_listener_with_callback("click", on_click.as_ref().unchecked_ref())?;
        on_click.forget();
        Ok(())
    }

    fn dispatch(self: &Rc<Self>, msg: Msg) {
        let (maybe_view, effects) = {
            let mut guard = self.state.borrow_mut();
            let state = std::mem::take(&mut *guard);
            let (mut state, effects) = update(state, msg);
            let maybe_view = if state.consume_dirty() {
                Some(state.view())
            } else {
                None
            };
            *guard = state;
            (maybe_view, effects)
        };

        if let Some(view) = maybe_view {
            let commands = ui::render::render(&self.config.canvas_id, &view);
            if let Err(err) = self.dom.apply_all(commands) {
                engine_error!("Render failed: {:?}", err);
            }
        }

        if !effects.is_empty() {
            self.effects.enqueue(effects, &self.dispatcher());
        }
    }

    fn dispatcher(self: &Rc<Self>) -> Dispatch {
        let app = Rc::downgrade(self);
        Rc::new(move |msg: Msg| {
            if let Some(app) = app.upgrade() {
                app.dispatch(msg);
            }
        })
    }
}
