#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    /// Ask the engine adapter to load `url`; report back with the same id.
    StartLoad { load_id: crate::LoadId, url: String },
    /// Discard and rebuild the whole engine context.
    ForceReload,
}
