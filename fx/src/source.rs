//! Rate source traits and implementations.

use std::time::Duration;

use async_trait::async_trait;
use fxlookup_common::ExchangeRate;
use rust_decimal::Decimal;
use tracing::debug;

use crate::config::ConverterConfig;

/// Trait for sources that supply the rate table.
///
/// Loading happens once per converter and cannot fail.
#[async_trait]
pub trait RateSource: Send + Sync {
    /// Get the source name.
    fn name(&self) -> &str;

    /// Produce every rate, in table order.
    async fn load(&self) -> Vec<ExchangeRate>;
}

/// The built-in rates, in lookup order.
pub fn default_rates() -> Vec<ExchangeRate> {
    vec![
        ExchangeRate::new("YR", "SR", Decimal::ONE / Decimal::from(600)),
        ExchangeRate::new("YR", "USD", Decimal::ONE / Decimal::from(2273)),
        ExchangeRate::new("SR", "USD", Decimal::ONE / Decimal::new(375, 2)),
        // Kept verbatim: every other entry spells this currency "USD".
        ExchangeRate::new("US Dollar", "SR", Decimal::new(375, 2)),
    ]
}

/// Fixed in-memory rates, handed back after a simulated fetch.
#[derive(Debug, Clone)]
pub struct StaticRateSource {
    rates: Vec<ExchangeRate>,
    delay: Duration,
}

impl StaticRateSource {
    /// Built-in rates with the given load delay.
    pub fn new(delay: Duration) -> Self {
        Self::with_rates(default_rates(), delay)
    }

    /// Custom rates with the given load delay.
    pub fn with_rates(rates: Vec<ExchangeRate>, delay: Duration) -> Self {
        Self { rates, delay }
    }

    pub fn from_config(config: &ConverterConfig) -> Self {
        Self::new(config.load_delay)
    }

    pub fn delay(&self) -> Duration {
        self.delay
    }
}

impl Default for StaticRateSource {
    fn default() -> Self {
        Self::from_config(&ConverterConfig::default())
    }
}

#[async_trait]
impl RateSource for StaticRateSource {
    fn name(&self) -> &str {
        "STATIC"
    }

    async fn load(&self) -> Vec<ExchangeRate> {
        if !self.delay.is_zero() {
            debug!(delay_ms = self.delay.as_millis() as u64, "Simulating rate fetch");
            tokio::time::sleep(self.delay).await;
        }
        self.rates.clone()
    }
}

/// Mock rate source for testing.
#[cfg(any(test, feature = "test-utils"))]
pub struct MockRateSource {
    name: String,
    rates: Vec<ExchangeRate>,
    delay: Duration,
    loads: std::sync::atomic::AtomicUsize,
}

#[cfg(any(test, feature = "test-utils"))]
impl MockRateSource {
    /// Create a new mock source.
    pub fn new(name: impl Into<String>, rates: Vec<ExchangeRate>) -> Self {
        Self {
            name: name.into(),
            rates,
            delay: Duration::ZERO,
            loads: std::sync::atomic::AtomicUsize::new(0),
        }
    }

    /// Wait this long inside every load.
    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = delay;
        self
    }

    /// How many times `load` has been entered.
    pub fn load_count(&self) -> usize {
        self.loads.load(std::sync::atomic::Ordering::SeqCst)
    }
}

#[cfg(any(test, feature = "test-utils"))]
#[async_trait]
impl RateSource for MockRateSource {
    fn name(&self) -> &str {
        &self.name
    }

    async fn load(&self) -> Vec<ExchangeRate> {
        self.loads.fetch_add(1, std::sync::atomic::Ordering::SeqCst);
        if !self.delay.is_zero() {
            tokio::time::sleep(self.delay).await;
        }
        self.rates.clone()
    }
}
