use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use thiserror::Error;
use tracing::warn;

/// Largest accepted value for any monetary input: one thousand lakh crore
/// rupees.
///
/// Every intermediate sum and product stays far inside [`Decimal::MAX`]
/// below this bound, so evaluation can never overflow.
pub const MAX_AMOUNT: Decimal = dec!(1000000000000000);

/// Input rejected before any tax is computed.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ValidationError {
    /// A monetary amount was below zero.
    #[error("{field} must be non-negative, got {value}")]
    NegativeAmount { field: &'static str, value: Decimal },

    /// A monetary amount was above [`MAX_AMOUNT`].
    #[error("{field} must not exceed {max}, got {value}", max = MAX_AMOUNT)]
    AmountTooLarge { field: &'static str, value: Decimal },

    /// A projection sweep step was zero or negative.
    #[error("projection income step must be positive, got {0}")]
    NonPositiveStep(Decimal),
}

impl ValidationError {
    /// Accepts `value` when it lies in `0..=MAX_AMOUNT`.
    pub(crate) fn ensure_amount(
        field: &'static str,
        value: Decimal,
    ) -> Result<(), Self> {
        if value < Decimal::ZERO {
            warn!(field, value = %value, "rejecting negative amount");
            return Err(Self::NegativeAmount { field, value });
        }
        if value > MAX_AMOUNT {
            warn!(field, value = %value, "rejecting oversized amount");
            return Err(Self::AmountTooLarge { field, value });
        }
        Ok(())
    }
}
