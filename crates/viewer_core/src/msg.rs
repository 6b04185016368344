/// Result of one load cycle as the controller sees it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoadResultKind {
    Success,
    /// The engine reported a benign condition through its failure channel.
    Suppressed,
    Failed { message: String },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Msg {
    /// User edited the URL input.
    InputChanged(String),
    /// User pressed the action button.
    Submitted,
    /// Engine adapter resolved a load.
    LoadFinished {
        load_id: crate::LoadId,
        result: LoadResultKind,
    },
    /// Engine reset finished after a forced reload.
    ReloadFinished { result: Result<(), String> },
}
