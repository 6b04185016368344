use crate::{ErrorInfo, LoadId, LoadRequest, LoadResultKind};

/// Observable load lifecycle, as read by presentation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LoadState {
    #[default]
    Idle,
    Loading,
    Started,
    Errored,
}

// Internal phase. Error details live inside `Errored` so they cannot outlive it.
#[derive(Debug, Clone, PartialEq, Eq)]
enum Phase {
    Idle,
    Loading { load_id: LoadId },
    Started { reload_pending: bool },
    Errored(ErrorInfo),
}

/// What the controller decided to do with one submit signal.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitDecision {
    /// A new load cycle begins; the adapter must be invoked exactly once.
    Start { load_id: LoadId, url: String },
    /// The signal had no effect.
    Discard,
    /// The engine is running; tear the whole context down instead of loading.
    ForceReload,
}

/// Finite state machine governing load cycles.
///
/// It is the only arbiter of concurrency: at most one load is in flight and
/// submits arriving meanwhile are dropped.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoadController {
    phase: Phase,
    next_load_id: LoadId,
}

impl Default for LoadController {
    fn default() -> Self {
        Self::new()
    }
}

impl LoadController {
    pub fn new() -> Self {
        Self {
            phase: Phase::Idle,
            next_load_id: 1,
        }
    }

    pub fn state(&self) -> LoadState {
        match self.phase {
            Phase::Idle => LoadState::Idle,
            Phase::Loading { .. } => LoadState::Loading,
            Phase::Started { .. } => LoadState::Started,
            Phase::Errored(_) => LoadState::Errored,
        }
    }

    pub fn error(&self) -> Option<&ErrorInfo> {
        match &self.phase {
            Phase::Errored(info) => Some(info),
            _ => None,
        }
    }

    /// Id of the load currently awaiting its outcome, if any.
    pub fn in_flight(&self) -> Option<LoadId> {
        match self.phase {
            Phase::Loading { load_id } => Some(load_id),
            _ => None,
        }
    }

    pub fn reload_pending(&self) -> bool {
        matches!(
            self.phase,
            Phase::Started {
                reload_pending: true
            }
        )
    }

    pub fn submit(&mut self, request: LoadRequest) -> SubmitDecision {
        match self.phase {
            Phase::Idle | Phase::Errored(_) => {
                let load_id = self.next_load_id;
                self.next_load_id += 1;
                self.phase = Phase::Loading { load_id };
                SubmitDecision::Start {
                    load_id,
                    url: request.url,
                }
            }
            Phase::Loading { .. } => SubmitDecision::Discard,
            // One restart per rebuilt context.
            Phase::Started {
                reload_pending: true,
            } => SubmitDecision::Discard,
            Phase::Started {
                reload_pending: false,
            } => {
                self.phase = Phase::Started {
                    reload_pending: true,
                };
                SubmitDecision::ForceReload
            }
        }
    }

    /// Applies the outcome of load `load_id`.
    ///
    /// Returns `false` when the outcome is stale (no such load in flight) and
    /// was ignored.
    pub fn complete(&mut self, load_id: LoadId, result: LoadResultKind) -> bool {
        if self.in_flight() != Some(load_id) {
            return false;
        }
        self.phase = match result {
            LoadResultKind::Success => Phase::Started {
                reload_pending: false,
            },
            LoadResultKind::Suppressed => Phase::Idle,
            LoadResultKind::Failed { message } => Phase::Errored(ErrorInfo { message }),
        };
        true
    }

    /// Records that an engine-reset restart could not bring the engine back.
    pub fn fail_reload(&mut self, message: String) -> bool {
        if !self.reload_pending() {
            return false;
        }
        self.phase = Phase::Errored(ErrorInfo { message });
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request(url: &str) -> LoadRequest {
        LoadRequest {
            url: url.to_string(),
        }
    }

    #[test]
    fn load_ids_increase_per_cycle() {
        let mut controller = LoadController::new();
        let first = controller.submit(request("a"));
        assert_eq!(
            first,
            SubmitDecision::Start {
                load_id: 1,
                url: "a".to_string()
            }
        );
        assert!(controller.complete(
            1,
            LoadResultKind::Failed {
                message: "boom".to_string()
            }
        ));
        let second = controller.submit(request("b"));
        assert_eq!(
            second,
            SubmitDecision::Start {
                load_id: 2,
                url: "b".to_string()
            }
        );
        assert_eq!(controller.error(), None);
    }

    #[test]
    fn stale_completion_is_ignored() {
        let mut controller = LoadController::new();
        controller.submit(request("a"));
        assert!(!controller.complete(7, LoadResultKind::Success));
        assert_eq!(controller.state(), LoadState::Loading);
        assert_eq!(controller.in_flight(), Some(1));
    }

    #[test]
    fn completion_outside_loading_is_ignored() {
        let mut controller = LoadController::new();
        assert!(!controller.complete(1, LoadResultKind::Success));
        assert_eq!(controller.state(), LoadState::Idle);
    }

    #[test]
    fn reload_failure_requires_pending_reload() {
        let mut controller = LoadController::new();
        assert!(!controller.fail_reload("nope".to_string()));
        assert_eq!(controller.state(), LoadState::Idle);
    }
}
