//! Widget parameter resolution.
//!
//! The host hands the widget at most one configuration string, "topic, key".
//! Resolution is a pure function: no process-wide state, no failure mode.
//! Missing or empty segments degrade to the coded defaults field by field.

/// Topic used when none is supplied.
pub const DEFAULT_TOPIC: &str = "demoESP32";

/// Content key used when none is supplied.
pub const DEFAULT_KEY: &str = "status";

/// Resolved topic/key pair for one run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WidgetParams {
    pub topic: String,
    pub key: String,
}

impl WidgetParams {
    /// Resolve parameters from the raw widget parameter string.
    ///
    /// Splits on commas and trims each segment. The first segment is the
    /// topic, the second the key; anything past the second is ignored.
    pub fn resolve(raw: Option<&str>) -> Self {
        let segments: Vec<&str> = raw
            .map(|s| s.split(',').map(str::trim).collect())
            .unwrap_or_default();

        let topic = match segments.first() {
            Some(s) if !s.is_empty() => (*s).to_string(),
            _ => DEFAULT_TOPIC.to_string(),
        };

        let key = match segments.get(1) {
            Some(s) if !s.is_empty() => (*s).to_string(),
            _ => DEFAULT_KEY.to_string(),
        };

        Self { topic, key }
    }
}

impl Default for WidgetParams {
    fn default() -> Self {
        Self::resolve(None)
    }
}
