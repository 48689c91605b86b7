//! Active queue configuration.

use serde::{Deserialize, Serialize};

/// Default for whether in-flight event tracking is on.
fn default_hints_enabled() -> bool {
    true
}

/// Default pre-sized capacity for heap and timeline storage.
fn default_initial_capacity() -> usize {
    256
}

/// Configuration for the active queue.
///
/// # Example
///
/// ```rust
/// use activeq::config::ActiveQueueConfig;
///
/// let config = ActiveQueueConfig::new()
///     .with_hints_enabled(true)
///     .with_initial_capacity(1024);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ActiveQueueConfig {
    /// Whether pop records in-flight markers and the event-recording APIs
    /// touch the timeline. When false the queue degrades to a plain
    /// priority queue and the event APIs always return false.
    #[serde(default = "default_hints_enabled")]
    pub hints_enabled: bool,

    /// Number of heap and timeline slots to pre-allocate.
    #[serde(default = "default_initial_capacity")]
    pub initial_capacity: usize,
}

impl Default for ActiveQueueConfig {
    fn default() -> Self {
        Self {
            hints_enabled: default_hints_enabled(),
            initial_capacity: default_initial_capacity(),
        }
    }
}

impl ActiveQueueConfig {
    /// Create a configuration with default values.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Enable or disable in-flight event tracking.
    #[must_use]
    pub fn with_hints_enabled(mut self, hints_enabled: bool) -> Self {
        self.hints_enabled = hints_enabled;
        self
    }

    /// Set the pre-allocated capacity.
    #[must_use]
    pub fn with_initial_capacity(mut self, capacity: usize) -> Self {
        self.initial_capacity = capacity;
        self
    }

    /// Validate configuration values.
    ///
    /// # Errors
    ///
    /// Returns a description of the first invalid value.
    pub fn validate(&self) -> Result<(), String> {
        if self.initial_capacity == 0 {
            return Err("initial_capacity must be greater than 0".into());
        }
        Ok(())
    }

    /// Parse a configuration from a JSON string and validate it.
    ///
    /// # Errors
    ///
    /// Returns a description of the parse or validation failure.
    pub fn from_json_str(input: &str) -> Result<Self, String> {
        let config: Self = serde_json::from_str(input).map_err(|e| format!("parse error: {e}"))?;
        config.validate()?;
        Ok(config)
    }
}
