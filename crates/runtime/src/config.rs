//! Driver configuration and environment loading.
use std::env;

/// Limits the driver enforces while draining the action queue.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DriverConfig {
    /// Replacements followed within a single step before the chain is rejected.
    pub max_replacements: usize,
    /// Steps a single drain may take before it is aborted.
    pub max_steps_per_drain: usize,
}

impl DriverConfig {
    pub const DEFAULT_MAX_REPLACEMENTS: usize = 8;
    pub const DEFAULT_MAX_STEPS_PER_DRAIN: usize = 1024;

    pub const fn new() -> Self {
        Self {
            max_replacements: Self::DEFAULT_MAX_REPLACEMENTS,
            max_steps_per_drain: Self::DEFAULT_MAX_STEPS_PER_DRAIN,
        }
    }

    pub const fn with_max_replacements(mut self, max_replacements: usize) -> Self {
        self.max_replacements = max_replacements;
        self
    }

    pub const fn with_max_steps_per_drain(mut self, max_steps_per_drain: usize) -> Self {
        self.max_steps_per_drain = max_steps_per_drain;
        self
    }

    /// Construct configuration from process environment variables.
    ///
    /// Environment variables:
    /// - `ACTION_MAX_REPLACEMENTS` - Replacements per step (default: 8)
    /// - `ACTION_MAX_STEPS` - Steps per drain (default: 1024, minimum 1)
    pub fn from_env() -> Self {
        let mut config = Self::default();

        if let Some(limit) = read_env::<usize>("ACTION_MAX_REPLACEMENTS") {
            config.max_replacements = limit;
        }

        if let Some(limit) = read_env::<usize>("ACTION_MAX_STEPS") {
            config.max_steps_per_drain = limit.max(1);
        }

        config
    }
}

impl Default for DriverConfig {
    fn default() -> Self {
        Self::new()
    }
}

fn read_env<T>(key: &str) -> Option<T>
where
    T: std::str::FromStr,
{
    env::var(key).ok()?.parse().ok()
}
