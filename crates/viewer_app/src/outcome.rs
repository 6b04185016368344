use viewer_core::LoadResultKind;
use viewer_engine::LoadOutcome;

/// Maps the adapter's outcome onto what the load controller consumes.
pub fn to_result_kind(outcome: LoadOutcome) -> LoadResultKind {
    match outcome {
        LoadOutcome::Success => LoadResultKind::Success,
        LoadOutcome::Suppressed { .. } => LoadResultKind::Suppressed,
        LoadOutcome::Failure(failure) => LoadResultKind::Failed {
            message: failure.message,
        },
    }
}
