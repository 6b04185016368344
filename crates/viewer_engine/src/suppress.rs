/// Text the engine puts in failures it raises purely for control flow.
pub const DEFAULT_SUPPRESSION_MARKER: &str = "Using exceptions for control flow,";

/// Substring that marks a failure message as benign.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SuppressionMarker(String);

impl Default for SuppressionMarker {
    fn default() -> Self {
        Self(DEFAULT_SUPPRESSION_MARKER.to_string())
    }
}

impl SuppressionMarker {
    pub fn new(marker: impl Into<String>) -> Self {
        Self(marker.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// An empty marker never matches, so every failure stays visible.
    pub fn matches(&self, message: &str) -> bool {
        !self.0.is_empty() && message.contains(&self.0)
    }
}
