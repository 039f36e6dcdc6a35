//! # Fee & Gas Policy Constants
//!
//! Fixed processing-cost policy shared by the minter and the wallets.
//! All values are nanoTON. These are protocol policy, not configuration.

use crate::entities::Coins;

/// Cost of forwarding one outbound message.
pub const FWD_FEE: Coins = 1_804_014;

/// Gas reserved for executing one handler.
pub const GAS_RESERVE: Coins = 15_000_000;

/// Minimum value a wallet keeps for its own storage.
pub const MIN_STORAGE_RESERVE: Coins = 10_000_000;

/// Minimum attached value for a wallet `transfer`:
/// two hops (credit + notification/excess) plus storage headroom.
pub fn transfer_min_value(forward_amount: Coins) -> Coins {
    2 * FWD_FEE + 2 * GAS_RESERVE + MIN_STORAGE_RESERVE + forward_amount
}

/// Minimum attached value for a wallet `burn`: one notification hop.
pub fn burn_min_value() -> Coins {
    FWD_FEE + 2 * GAS_RESERVE
}
