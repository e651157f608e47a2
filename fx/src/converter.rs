//! Currency converter over a loaded rate table.

use std::time::Instant;

use fxlookup_common::{Currency, ExchangeRate, Money};
use rust_decimal::Decimal;
use tracing::{debug, info, instrument, warn};

use crate::conversion::Conversion;
use crate::error::{FxError, FxResult};
use crate::source::RateSource;
use crate::table::RateTable;

/// Converts amounts using direct table lookups.
///
/// The table is fixed once the converter exists, so `&CurrencyConverter` can
/// be shared across threads and tasks without locking.
#[derive(Debug, Clone)]
pub struct CurrencyConverter {
    table: RateTable,
    source: String,
}

impl CurrencyConverter {
    /// Build a converter from everything the source provides.
    #[instrument(skip(source), fields(source = source.name()))]
    pub async fn load(source: &dyn RateSource) -> Self {
        info!("Loading exchange rates");
        let started = Instant::now();

        let table = RateTable::new(source.load().await);

        info!(
            entries = table.len(),
            elapsed_ms = started.elapsed().as_millis() as u64,
            "Exchange rates loaded"
        );

        Self {
            table,
            source: source.name().to_string(),
        }
    }

    /// Build a converter over an existing table.
    pub fn from_table(table: RateTable) -> Self {
        Self {
            table,
            source: "TABLE".to_string(),
        }
    }

    /// Convert `amount` from `base` to `target`.
    ///
    /// Uses the first table entry for exactly `base` to `target`; the
    /// inverse pair and multi-hop paths are never consulted. The result is
    /// rounded to two places, midpoints away from zero.
    #[instrument(skip(self), fields(base = %base, target = %target, amount = %amount))]
    pub fn convert(&self, base: &Currency, target: &Currency, amount: Decimal) -> FxResult<Decimal> {
        let rate = self.rate_for(base, target)?;

        let converted = rate.apply(amount).ok_or_else(|| FxError::AmountOverflow {
            amount,
            base: base.clone(),
            target: target.clone(),
        })?;

        debug!(rate = %rate.rate(), converted = %converted, "Converted amount");
        Ok(converted)
    }

    /// Convert money into `target`, keeping a record of the conversion.
    pub fn convert_money(&self, amount: &Money, target: &Currency) -> FxResult<Conversion> {
        let rate = self.rate_for(&amount.currency, target)?.rate();
        let value = self.convert(&amount.currency, target, amount.value)?;

        Ok(Conversion::new(
            amount.clone(),
            Money::new(value, target.clone()),
            rate,
        ))
    }

    /// Get the entry `convert` would use.
    pub fn rate_for(&self, base: &Currency, target: &Currency) -> FxResult<&ExchangeRate> {
        self.table.find(base, target).ok_or_else(|| {
            warn!(base = %base, target = %target, "No exchange rate for pair");
            FxError::RateNotFound {
                base: base.clone(),
                target: target.clone(),
            }
        })
    }

    pub fn table(&self) -> &RateTable {
        &self.table
    }

    /// Name of the source the table came from.
    pub fn source(&self) -> &str {
        &self.source
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::source::{default_rates, MockRateSource};
    use proptest::prelude::*;
    use rust_decimal_macros::dec;

    fn setup_converter() -> CurrencyConverter {
        CurrencyConverter::from_table(RateTable::new(default_rates()))
    }

    fn c(code: &str) -> Currency {
        Currency::new(code)
    }

    #[test]
    fn test_convert_sr_to_usd() {
        let converter = setup_converter();

        let result = converter.convert(&c("SR"), &c("USD"), dec!(100)).unwrap();

        // 100 / 3.75 = 26.666...
        assert_eq!(result, dec!(26.67));
    }

    #[test]
    fn test_convert_yr_to_usd() {
        let converter = setup_converter();

        let result = converter.convert(&c("YR"), &c("USD"), dec!(100000)).unwrap();

        // 100000 / 2273 = 43.9947...
        assert_eq!(result, dec!(43.99));
    }

    #[test]
    fn test_small_result_rounds_to_zero() {
        let converter = setup_converter();

        let result = converter.convert(&c("YR"), &c("SR"), dec!(1)).unwrap();

        assert_eq!(result, dec!(0.00));
    }

    #[test]
    fn test_exact_rate_is_exact() {
        let converter = setup_converter();

        let result = converter.convert(&c("US Dollar"), &c("SR"), dec!(1)).unwrap();

        assert_eq!(result, dec!(3.75));
    }

    #[test]
    fn test_missing_pair() {
        let converter = setup_converter();

        let result = converter.convert(&c("SR"), &c("YR"), dec!(10));

        assert_eq!(
            result,
            Err(FxError::RateNotFound {
                base: c("SR"),
                target: c("YR"),
            })
        );
    }

    #[test]
    fn test_usd_alias_is_not_merged() {
        let converter = setup_converter();

        assert!(converter.convert(&c("USD"), &c("SR"), dec!(1)).is_err());
        assert!(converter.convert(&c("US Dollar"), &c("SR"), dec!(1)).is_ok());
    }

    #[test]
    fn test_midpoint_rounds_away_from_zero() {
        let converter = CurrencyConverter::from_table(RateTable::new(vec![ExchangeRate::new(
            "A",
            "B",
            dec!(1),
        )]));

        assert_eq!(converter.convert(&c("A"), &c("B"), dec!(2.345)).unwrap(), dec!(2.35));
        assert_eq!(converter.convert(&c("A"), &c("B"), dec!(-2.345)).unwrap(), dec!(-2.35));
    }

    #[test]
    fn test_duplicate_pair_uses_first_entry() {
        let converter = CurrencyConverter::from_table(RateTable::new(vec![
            ExchangeRate::new("A", "B", dec!(2)),
            ExchangeRate::new("A", "B", dec!(3)),
        ]));

        assert_eq!(converter.convert(&c("A"), &c("B"), dec!(10)).unwrap(), dec!(20));
    }

    #[test]
    fn test_overflow_is_an_error() {
        let converter = setup_converter();

        let result = converter.convert(&c("US Dollar"), &c("SR"), Decimal::MAX);

        assert!(matches!(result, Err(FxError::AmountOverflow { .. })));
    }

    #[test]
    fn test_convert_money_record() {
        let converter = setup_converter();
        let amount = Money::new(dec!(100), c("SR"));

        let conversion = converter.convert_money(&amount, &c("USD")).unwrap();

        assert_eq!(conversion.output, Money::new(dec!(26.67), c("USD")));
        assert_eq!(conversion.rate, Decimal::ONE / dec!(3.75));
        assert_eq!(conversion.to_string(), "100 SR= 26.67 USD");
    }

    #[tokio::test]
    async fn test_load_from_source() {
        let source = MockRateSource::new("mock", default_rates());

        let converter = CurrencyConverter::load(&source).await;

        assert_eq!(source.load_count(), 1);
        assert_eq!(converter.source(), "mock");
        assert_eq!(converter.table().len(), 4);
    }

    proptest! {
        #[test]
        fn prop_reverse_pair_always_missing(units in any::<i64>(), scale in 0u32..6) {
            let converter = setup_converter();
            let amount = Decimal::new(units, scale);

            let result = converter.convert(&c("USD"), &c("YR"), amount);

            prop_assert_eq!(
                result,
                Err(FxError::RateNotFound { base: c("USD"), target: c("YR") })
            );
        }

        #[test]
        fn prop_repeated_conversion_is_stable(units in any::<i64>(), scale in 0u32..6) {
            let converter = setup_converter();
            let amount = Decimal::new(units, scale);
            let before = converter.table().clone();

            let first = converter.convert(&c("SR"), &c("USD"), amount).unwrap();
            let second = converter.convert(&c("SR"), &c("USD"), amount).unwrap();

            prop_assert_eq!(first, second);
            prop_assert!(first.scale() <= 2);
            prop_assert_eq!(converter.table(), &before);
        }
    }
}
