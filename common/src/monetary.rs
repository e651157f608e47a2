//! Monetary types for FxLookup.

use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Number of decimal places every converted amount is rounded to.
pub const CONVERSION_DECIMAL_PLACES: u32 = 2;

/// Round a converted amount to [`CONVERSION_DECIMAL_PLACES`].
///
/// Midpoints round away from zero: `2.345` becomes `2.35` and `-2.345`
/// becomes `-2.35`. `Decimal::round_dp` would use banker's rounding here.
pub fn round_amount(value: Decimal) -> Decimal {
    value.round_dp_with_strategy(
        CONVERSION_DECIMAL_PLACES,
        RoundingStrategy::MidpointAwayFromZero,
    )
}

/// A monetary amount with currency.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Money {
    /// The amount value (high precision decimal).
    pub value: Decimal,
    /// Currency identifier.
    pub currency: Currency,
}

impl Money {
    /// Create a new Money instance.
    pub fn new(value: Decimal, currency: Currency) -> Self {
        Self { value, currency }
    }

    /// Create from a string value.
    pub fn from_str(value: &str, currency: Currency) -> Result<Self, rust_decimal::Error> {
        Ok(Self {
            value: value.parse()?,
            currency,
        })
    }

    /// Check if the amount is zero.
    pub fn is_zero(&self) -> bool {
        self.value.is_zero()
    }

    /// Check if the amount is negative.
    pub fn is_negative(&self) -> bool {
        self.value < Decimal::ZERO
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.value, self.currency)
    }
}

/// Currency identifier.
///
/// Stored exactly as given. `"usd"`, `"USD"` and `" USD"` are three
/// different currencies.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Currency(String);

impl Currency {
    /// Create a new currency from code.
    pub fn new(code: impl Into<String>) -> Self {
        Self(code.into())
    }

    /// Get the currency code.
    pub fn code(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Currency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for Currency {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

impl From<String> for Currency {
    fn from(s: String) -> Self {
        Self::new(s)
    }
}

/// A directed currency pair.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CurrencyPair {
    /// Currency the amount is denominated in.
    pub base: Currency,
    /// Currency the result is denominated in.
    pub quote: Currency,
}

impl CurrencyPair {
    /// Create a new currency pair.
    pub fn new(base: Currency, quote: Currency) -> Self {
        Self { base, quote }
    }

    /// Get the inverse pair.
    pub fn inverse(&self) -> Self {
        Self {
            base: self.quote.clone(),
            quote: self.base.clone(),
        }
    }

    /// Check whether this pair is exactly `base` to `quote`.
    pub fn matches(&self, base: &Currency, quote: &Currency) -> bool {
        self.base == *base && self.quote == *quote
    }
}

impl fmt::Display for CurrencyPair {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.base, self.quote)
    }
}

/// A single entry of a rate table.
///
/// `amount_in_target = amount_in_base * rate`. Fields are private so an
/// entry cannot change once built.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExchangeRate {
    pair: CurrencyPair,
    rate: Decimal,
}

impl ExchangeRate {
    /// Create a new exchange rate entry.
    pub fn new(base: impl Into<Currency>, target: impl Into<Currency>, rate: Decimal) -> Self {
        Self {
            pair: CurrencyPair::new(base.into(), target.into()),
            rate,
        }
    }

    pub fn pair(&self) -> &CurrencyPair {
        &self.pair
    }

    pub fn base(&self) -> &Currency {
        &self.pair.base
    }

    pub fn target(&self) -> &Currency {
        &self.pair.quote
    }

    pub fn rate(&self) -> Decimal {
        self.rate
    }

    /// Convert an amount of the base currency, rounded with [`round_amount`].
    ///
    /// Returns `None` if the product does not fit in a `Decimal`.
    pub fn apply(&self, amount: Decimal) -> Option<Decimal> {
        amount.checked_mul(self.rate).map(round_amount)
    }
}

impl fmt::Display for ExchangeRate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} @ {}", self.pair, self.rate)
    }
}
