//! # Exchange Rates
//!
//! Rate computation over the current `(total_supply, reserve)` pair.
//! Rates are nanoTON per MAT minor unit, scaled by [`RATE_SCALE`].

use mat_types::Coins;

use crate::errors::PricingError;
use crate::{BUY_MULTIPLIER, RATE_SCALE};

/// Spot rate: reserve per unit of supply, 9-decimal fixed point.
///
/// Defined only for `total_supply > 0`.
pub fn spot_rate_e9(total_supply: Coins, reserve: Coins) -> Result<u128, PricingError> {
    if total_supply == 0 {
        return Err(PricingError::ZeroSupply);
    }
    reserve
        .checked_mul(RATE_SCALE)
        .ok_or(PricingError::Overflow)
        .map(|scaled| scaled / total_supply)
}

/// Buy rate: spot plus the fixed premium.
pub fn buy_rate_e9(total_supply: Coins, reserve: Coins) -> Result<u128, PricingError> {
    let spot = spot_rate_e9(total_supply, reserve)?;
    spot.checked_mul(BUY_MULTIPLIER)
        .ok_or(PricingError::Overflow)
        .map(|scaled| scaled / 100)
}

/// Sell rate: exactly spot. The minter captures the buy/sell spread as
/// working capital, never as an explicit fee.
pub fn sell_rate_e9(total_supply: Coins, reserve: Coins) -> Result<u128, PricingError> {
    spot_rate_e9(total_supply, reserve)
}

/// Inverse rate for the read-only price query: MAT minor units per TON,
/// 9-decimal fixed point.
pub fn units_per_ton_e9(total_supply: Coins, reserve: Coins) -> Result<u128, PricingError> {
    if reserve == 0 {
        return Err(PricingError::ZeroReserve);
    }
    total_supply
        .checked_mul(RATE_SCALE)
        .ok_or(PricingError::Overflow)
        .map(|scaled| scaled / reserve)
}
