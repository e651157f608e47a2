//! Converter configuration.

use std::time::Duration;

use thiserror::Error;

/// Environment variable overriding [`ConverterConfig::load_delay`], in milliseconds.
pub const LOAD_DELAY_ENV: &str = "FX_LOAD_DELAY_MS";

/// Longest simulated load accepted by [`ConverterConfig::validate`].
pub const MAX_LOAD_DELAY: Duration = Duration::from_secs(60);

/// Configuration error.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("Load delay {actual:?} exceeds maximum {max:?}")]
    LoadDelayTooLong { actual: Duration, max: Duration },
}

/// Configuration for building the rate table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConverterConfig {
    /// Time the rate source waits before handing back its rates.
    pub load_delay: Duration,
}

impl Default for ConverterConfig {
    fn default() -> Self {
        Self {
            load_delay: Duration::from_secs(5),
        }
    }
}

impl ConverterConfig {
    /// Configuration without any simulated load time.
    pub fn immediate() -> Self {
        Self {
            load_delay: Duration::ZERO,
        }
    }

    /// Load configuration from environment variables.
    pub fn from_env() -> Self {
        let mut config = Self::default();

        if let Ok(ms) = std::env::var(LOAD_DELAY_ENV) {
            if let Ok(ms) = ms.trim().parse::<u64>() {
                config.load_delay = Duration::from_millis(ms);
            }
        }

        config
    }

    /// Set the load delay.
    pub fn with_load_delay(mut self, delay: Duration) -> Self {
        self.load_delay = delay;
        self
    }

    /// Validate configuration.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.load_delay > MAX_LOAD_DELAY {
            return Err(ConfigError::LoadDelayTooLong {
                actual: self.load_delay,
                max: MAX_LOAD_DELAY,
            });
        }

        Ok(())
    }
}
