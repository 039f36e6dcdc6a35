//! Wallet entities.

use mat_types::{Address, CodeId, Coins};
use serde::{Deserialize, Serialize};

/// Read-only wallet snapshot for the query surface, matching the
/// standard wallet-data getter shape plus the experience extension.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct WalletData {
    /// Current MAT balance (nano units).
    pub balance: Coins,
    /// The owner account.
    pub owner: Address,
    /// The minter this wallet belongs to.
    pub minter: Address,
    /// Code the wallet was deployed with.
    pub wallet_code: CodeId,
    /// Accumulated experience.
    pub experience: u64,
}
