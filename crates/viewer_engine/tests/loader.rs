use std::cell::RefCell;
use std::collections::VecDeque;

use pretty_assertions::assert_eq;
use viewer_engine::{
    EngineLoader, EngineModule, LoadFailure, LoadOutcome, LoadStage, LoaderSettings, ModuleError,
    SuppressionMarker,
};

const CONTROL_FLOW: &str =
    "Using exceptions for control flow, don't mind me. This isn't actually an error!";

#[derive(Debug, Clone)]
enum Step {
    Ok,
    Fail(&'static str),
    Panic(&'static str),
}

/// Engine stand-in that replays scripted results and records every call.
#[derive(Default)]
struct ScriptedModule {
    init_script: RefCell<VecDeque<Step>>,
    start_script: RefCell<VecDeque<Step>>,
    stop_script: RefCell<VecDeque<Step>>,
    calls: RefCell<Vec<String>>,
}

impl ScriptedModule {
    fn new() -> Self {
        Self::default()
    }

    fn init_steps(self, steps: &[Step]) -> Self {
        self.init_script.borrow_mut().extend(steps.iter().cloned());
        self
    }

    fn start_steps(self, steps: &[Step]) -> Self {
        self.start_script.borrow_mut().extend(steps.iter().cloned());
        self
    }

    fn stop_steps(self, steps: &[Step]) -> Self {
        self.stop_script.borrow_mut().extend(steps.iter().cloned());
        self
    }

    fn calls(&self) -> Vec<String> {
        self.calls.borrow().clone()
    }

    fn play(script: &RefCell<VecDeque<Step>>) -> Result<(), ModuleError> {
        let step = script.borrow_mut().pop_front().unwrap_or(Step::Ok);
        match step {
            Step::Ok => Ok(()),
            Step::Fail(message) => Err(ModuleError::new(message)),
            Step::Panic(message) => panic!("{}", message),
        }
    }
}

#[async_trait::async_trait(?Send)]
impl EngineModule for ScriptedModule {
    async fn init(&self) -> Result<(), ModuleError> {
        self.calls.borrow_mut().push("init".to_string());
        tokio::task::yield_now().await;
        Self::play(&self.init_script)
    }

    async fn start(&self, url: &str) -> Result<(), ModuleError> {
        self.calls.borrow_mut().push(format!("start {url}"));
        tokio::task::yield_now().await;
        Self::play(&self.start_script)
    }

    fn stop(&self) -> Result<(), ModuleError> {
        self.calls.borrow_mut().push("stop".to_string());
        Self::play(&self.stop_script)
    }
}

fn loader(module: ScriptedModule) -> EngineLoader<ScriptedModule> {
    engine_logging::initialize_for_tests();
    EngineLoader::new(module, LoaderSettings::default())
}

#[tokio::test]
async fn successful_load_inits_then_starts() {
    let loader = loader(ScriptedModule::new());

    let outcome = loader.load("https://example.com/helmet.gltf").await;

    assert_eq!(outcome, LoadOutcome::Success);
    assert!(loader.is_initialized());
    assert_eq!(
        loader.module().calls(),
        vec!["init", "start https://example.com/helmet.gltf"]
    );
}

#[tokio::test]
async fn init_runs_once_across_loads() {
    let loader = loader(ScriptedModule::new());

    loader.load("a").await;
    loader.load("b").await;

    assert_eq!(loader.module().calls(), vec!["init", "start a", "start b"]);
}

#[tokio::test]
async fn failed_init_is_retried_on_next_load() {
    let loader = loader(ScriptedModule::new().init_steps(&[Step::Fail("wasm fetch failed")]));

    let first = loader.load("a").await;
    assert_eq!(
        first,
        LoadOutcome::Failure(LoadFailure {
            stage: LoadStage::Init,
            message: "wasm fetch failed".to_string(),
        })
    );
    assert!(!loader.is_initialized());

    let second = loader.load("a").await;
    assert_eq!(second, LoadOutcome::Success);
    assert_eq!(loader.module().calls(), vec!["init", "init", "start a"]);
}

#[tokio::test]
async fn marker_in_start_failure_is_suppressed() {
    let loader = loader(ScriptedModule::new().start_steps(&[Step::Fail(CONTROL_FLOW)]));

    let outcome = loader.load("a").await;

    assert_eq!(
        outcome,
        LoadOutcome::Suppressed {
            message: CONTROL_FLOW.to_string(),
        }
    );
}

#[tokio::test]
async fn marker_in_init_failure_is_suppressed() {
    let loader = loader(ScriptedModule::new().init_steps(&[Step::Fail(CONTROL_FLOW)]));

    let outcome = loader.load("a").await;

    assert!(matches!(outcome, LoadOutcome::Suppressed { .. }));
    assert_eq!(loader.module().calls(), vec!["init"]);
}

#[tokio::test]
async fn ordinary_failure_keeps_raw_message() {
    let loader = loader(ScriptedModule::new().start_steps(&[Step::Fail("network error")]));

    let outcome = loader.load("a").await;

    assert_eq!(
        outcome,
        LoadOutcome::Failure(LoadFailure {
            stage: LoadStage::Start,
            message: "network error".to_string(),
        })
    );
}

#[tokio::test]
async fn panicking_module_is_caught_at_the_boundary() {
    let loader = loader(ScriptedModule::new().start_steps(&[Step::Panic("renderer exploded")]));

    let outcome = loader.load("a").await;

    assert_eq!(
        outcome,
        LoadOutcome::Failure(LoadFailure {
            stage: LoadStage::Start,
            message: "renderer exploded".to_string(),
        })
    );
}

#[tokio::test]
async fn custom_marker_replaces_default() {
    engine_logging::initialize_for_tests();
    let module = ScriptedModule::new()
        .start_steps(&[Step::Fail(CONTROL_FLOW), Step::Fail("EXPECTED: unwinding")]);
    let loader = EngineLoader::new(
        module,
        LoaderSettings {
            suppression_marker: SuppressionMarker::new("EXPECTED:"),
        },
    );

    assert!(matches!(loader.load("a").await, LoadOutcome::Failure(_)));
    assert!(matches!(loader.load("a").await, LoadOutcome::Suppressed { .. }));
}

#[tokio::test]
async fn reset_stops_then_reinitializes() {
    let loader = loader(ScriptedModule::new());
    loader.load("a").await;

    loader.reset().await.expect("reset ok");

    assert!(loader.is_initialized());
    assert_eq!(
        loader.module().calls(),
        vec!["init", "start a", "stop", "init"]
    );
}

#[tokio::test]
async fn reset_reports_init_failure() {
    let loader = loader(ScriptedModule::new().init_steps(&[Step::Ok, Step::Fail("gpu lost")]));
    loader.load("a").await;

    let err = loader.reset().await.unwrap_err();

    assert_eq!(
        err,
        LoadFailure {
            stage: LoadStage::Init,
            message: "gpu lost".to_string(),
        }
    );
    assert!(!loader.is_initialized());
}

#[tokio::test]
async fn reset_aborts_when_stop_fails() {
    let loader = loader(ScriptedModule::new().stop_steps(&[Step::Fail("not running")]));

    let err = loader.reset().await.unwrap_err();

    assert_eq!(err.stage, LoadStage::Stop);
    assert_eq!(loader.module().calls(), vec!["stop"]);
}

#[tokio::test]
async fn stop_panic_is_caught() {
    let loader = loader(ScriptedModule::new().stop_steps(&[Step::Panic("no loop")]));

    let err = loader.stop().unwrap_err();

    assert_eq!(
        err,
        LoadFailure {
            stage: LoadStage::Stop,
            message: "no loop".to_string(),
        }
    );
}
