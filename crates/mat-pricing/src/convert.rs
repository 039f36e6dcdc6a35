//! # Conversions
//!
//! Payment-to-MAT and MAT-to-reserve conversions, plus the admin tax
//! split applied to every buy payment.

use mat_types::{Coins, ONE_TON};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::errors::PricingError;
use crate::rates::{buy_rate_e9, sell_rate_e9};
use crate::{INIT_MAT_PER_TON, MIN_EXCHANGE_OUT, RATE_SCALE, TAX_PERCENT};

/// Result of splitting a buy payment between the admin and the reserve.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BuySplit {
    /// Share forwarded to the admin immediately.
    pub admin_fee: Coins,
    /// Remainder credited to the reserve before conversion.
    pub net: Coins,
}

/// Split an incoming buy payment by the fixed tax percentage.
pub fn split_buy_payment(payment: Coins) -> Result<BuySplit, PricingError> {
    let admin_fee = payment
        .checked_mul(TAX_PERCENT)
        .ok_or(PricingError::Overflow)?
        / 100;
    Ok(BuySplit {
        admin_fee,
        net: payment - admin_fee,
    })
}

/// MAT minted for a net payment at the current buy rate.
///
/// The rate is taken against the state *before* the net payment is added
/// to the reserve; callers credit the reserve after conversion.
pub fn convert_buy(total_supply: Coins, reserve: Coins, net: Coins) -> Result<Coins, PricingError> {
    let rate = buy_rate_e9(total_supply, reserve)?;
    if rate == 0 {
        return Err(PricingError::ZeroRate);
    }
    net.checked_mul(RATE_SCALE)
        .ok_or(PricingError::Overflow)
        .map(|scaled| scaled / rate)
}

/// Reserve paid out for burning `amount` MAT at the current sell rate.
///
/// Payouts below [`MIN_EXCHANGE_OUT`] are rejected instead of producing
/// dust transfers.
pub fn convert_sell(
    total_supply: Coins,
    reserve: Coins,
    amount: Coins,
) -> Result<Coins, PricingError> {
    let rate = sell_rate_e9(total_supply, reserve)?;
    let payout = amount
        .checked_mul(rate)
        .ok_or(PricingError::Overflow)?
        / RATE_SCALE;
    if payout < MIN_EXCHANGE_OUT {
        debug!(amount, payout, "sell below dust threshold rejected");
        return Err(PricingError::ExchangeTooSmall {
            payout,
            minimum: MIN_EXCHANGE_OUT,
        });
    }
    Ok(payout)
}

/// Supply issued for the initial reserve deposit:
/// `INIT_MAT_PER_TON` minor units per whole TON, truncating.
pub fn initial_supply(deposit: Coins) -> Result<Coins, PricingError> {
    deposit
        .checked_mul(INIT_MAT_PER_TON)
        .ok_or(PricingError::Overflow)
        .map(|scaled| scaled / ONE_TON)
}
