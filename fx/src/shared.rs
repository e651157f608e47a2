//! Load-once access to a converter.

use std::sync::Arc;

use fxlookup_common::Currency;
use rust_decimal::Decimal;
use tokio::sync::OnceCell;
use tracing::warn;

use crate::config::ConverterConfig;
use crate::converter::CurrencyConverter;
use crate::error::FxResult;
use crate::source::{RateSource, StaticRateSource};

/// Owns a rate source and the converter built from it.
///
/// The first `get` runs the load; callers arriving meanwhile wait for it
/// and every caller receives the same converter. Nothing is loaded before
/// the first `get`.
pub struct SharedConverter {
    source: Arc<dyn RateSource>,
    cell: OnceCell<CurrencyConverter>,
}

impl SharedConverter {
    pub fn new(source: Arc<dyn RateSource>) -> Self {
        Self {
            source,
            cell: OnceCell::new(),
        }
    }

    /// Shared converter over the built-in rates.
    pub fn from_config(config: &ConverterConfig) -> Self {
        Self::new(Arc::new(StaticRateSource::from_config(config)))
    }

    /// Get the converter, loading it on first use.
    pub async fn get(&self) -> &CurrencyConverter {
        self.cell
            .get_or_init(|| CurrencyConverter::load(self.source.as_ref()))
            .await
    }

    /// Get the converter only if it has already been loaded.
    pub fn try_get(&self) -> Option<&CurrencyConverter> {
        self.cell.get()
    }

    pub fn is_initialized(&self) -> bool {
        self.cell.initialized()
    }

    /// Convert through the shared converter, loading it if needed.
    pub async fn convert(
        &self,
        base: &Currency,
        target: &Currency,
        amount: Decimal,
    ) -> FxResult<Decimal> {
        self.get().await.convert(base, target, amount)
    }
}

static INSTANCE: OnceCell<CurrencyConverter> = OnceCell::const_new();

/// Process-wide converter over the built-in rates.
///
/// Configured from the environment (see [`ConverterConfig::from_env`]) the
/// first time it is requested. An invalid configuration falls back to the
/// defaults.
pub async fn instance() -> &'static CurrencyConverter {
    INSTANCE
        .get_or_init(|| async {
            let mut config = ConverterConfig::from_env();
            if let Err(e) = config.validate() {
                warn!(error = %e, "Invalid converter configuration, using defaults");
                config = ConverterConfig::default();
            }

            let source = StaticRateSource::from_config(&config);
            CurrencyConverter::load(&source).await
        })
        .await
}

/// The process-wide converter, if something has already loaded it.
pub fn try_instance() -> Option<&'static CurrencyConverter> {
    INSTANCE.get()
}
