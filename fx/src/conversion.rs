//! Conversion records.

use chrono::{DateTime, Utc};
use fxlookup_common::{CurrencyPair, Money};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

/// Represents a completed currency conversion.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Conversion {
    /// Unique conversion ID.
    pub id: Uuid,
    /// Input amount.
    pub input: Money,
    /// Output amount, already rounded.
    pub output: Money,
    /// Table rate that was applied.
    pub rate: Decimal,
    /// When the conversion was executed.
    pub executed_at: DateTime<Utc>,
}

impl Conversion {
    /// Create a new conversion record.
    pub fn new(input: Money, output: Money, rate: Decimal) -> Self {
        Self {
            id: Uuid::now_v7(),
            input,
            output,
            rate,
            executed_at: Utc::now(),
        }
    }

    /// Get the currency pair.
    pub fn pair(&self) -> CurrencyPair {
        CurrencyPair::new(self.input.currency.clone(), self.output.currency.clone())
    }
}

/// Renders `"{amount} {base}= {result} {target}"`.
impl fmt::Display for Conversion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {}= {} {}",
            self.input.value, self.input.currency, self.output.value, self.output.currency
        )
    }
}
