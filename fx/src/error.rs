//! FX error types.

use fxlookup_common::Currency;
use rust_decimal::Decimal;
use thiserror::Error;

/// Errors that can occur in the FX engine.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FxError {
    /// No table entry for the exact base/target pair.
    #[error("Exchange rate not found from {base} to {target}")]
    RateNotFound { base: Currency, target: Currency },

    /// The converted amount does not fit in a `Decimal`.
    #[error("Amount {amount} {base} overflows when converted to {target}")]
    AmountOverflow {
        amount: Decimal,
        base: Currency,
        target: Currency,
    },
}

impl FxError {
    /// Get error code for display and logging.
    pub fn error_code(&self) -> &'static str {
        match self {
            FxError::RateNotFound { .. } => "RATE_NOT_FOUND",
            FxError::AmountOverflow { .. } => "AMOUNT_OVERFLOW",
        }
    }
}

/// Result type for FX operations.
pub type FxResult<T> = Result<T, FxError>;
