//! # Pricing Engine
//!
//! Asymmetric bonding-curve pricing for Materia: the spot rate is
//! `reserve / supply` in 9-decimal fixed point, buys pay a fixed 60%
//! premium over spot, sells settle at spot. The spread stays in the
//! reserve as working capital; the only explicit fee is the admin tax
//! taken from every buy payment.
//!
//! All arithmetic is integer with division truncating toward zero. The
//! truncation is part of the protocol: every participant must derive the
//! same minted/returned amounts.

pub mod convert;
pub mod errors;
pub mod rates;

pub use convert::{convert_buy, convert_sell, initial_supply, split_buy_payment, BuySplit};
pub use errors::PricingError;
pub use rates::{buy_rate_e9, sell_rate_e9, spot_rate_e9, units_per_ton_e9};

/// Fixed-point scale: 9 fractional digits.
pub const RATE_SCALE: u128 = 1_000_000_000;

/// Buy premium over spot, in percent of spot.
pub const BUY_MULTIPLIER: u128 = 160;

/// Admin share of every buy payment, in percent.
pub const TAX_PERCENT: u128 = 30;

/// MAT minor units issued per whole TON deposited at initialization.
pub const INIT_MAT_PER_TON: u128 = 100_000;

/// Smallest reserve payout a sell may produce (nanoTON). Anything below
/// is rejected rather than paid out. Policy constant; the observed
/// protocol only fixes that such a floor exists.
pub const MIN_EXCHANGE_OUT: u128 = 100_000_000;
