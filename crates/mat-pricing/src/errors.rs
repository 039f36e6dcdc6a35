//! Pricing error types.

use thiserror::Error;

/// Errors produced by rate computation and conversions.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum PricingError {
    /// The curve is undefined with zero supply.
    #[error("Spot rate undefined: total supply is zero")]
    ZeroSupply,

    /// The inverse rate is undefined with an empty reserve.
    #[error("Inverse rate undefined: reserve is zero")]
    ZeroReserve,

    /// The buy rate truncated to zero; the reserve is too small relative
    /// to supply for a meaningful conversion.
    #[error("Buy rate truncated to zero")]
    ZeroRate,

    /// A sell would pay out less than the dust threshold.
    #[error("Exchange too small: payout {payout} below minimum {minimum}")]
    ExchangeTooSmall { payout: u128, minimum: u128 },

    /// Intermediate product exceeded 128 bits.
    #[error("Arithmetic overflow in pricing computation")]
    Overflow,
}
