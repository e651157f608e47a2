//! FxLookup FX Engine
//!
//! Lookup-based currency conversion over a rate table that is loaded once
//! and never changes afterwards.
//!
//! # Features
//!
//! - Ordered rate table with first-match-wins lookups
//! - Pluggable rate sources with an injectable load delay
//! - Load-once shared converter, safe under concurrent first access
//! - Two-place rounding with midpoints away from zero
//!
//! # Example
//!
//! ```rust,ignore
//! use fxlookup_fx::{ConverterConfig, SharedConverter};
//! use fxlookup_common::Currency;
//!
//! let shared = SharedConverter::from_config(&ConverterConfig::from_env());
//!
//! // First call performs the load
//! let usd = shared
//!     .convert(&Currency::new("SR"), &Currency::new("USD"), dec!(100))
//!     .await?;
//! ```

pub mod config;
pub mod conversion;
pub mod converter;
pub mod error;
pub mod shared;
pub mod source;
pub mod table;

pub use config::{ConfigError, ConverterConfig, LOAD_DELAY_ENV};
pub use conversion::Conversion;
pub use converter::CurrencyConverter;
pub use error::{FxError, FxResult};
pub use shared::{instance, try_instance, SharedConverter};
pub use source::{default_rates, RateSource, StaticRateSource};
pub use table::RateTable;

#[cfg(any(test, feature = "test-utils"))]
pub use source::MockRateSource;
