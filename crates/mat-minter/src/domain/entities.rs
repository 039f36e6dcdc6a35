//! Minter entities and configuration.

use mat_types::{Address, CodeId, Coins, ContentDescriptor, PublicKey, FWD_FEE, GAS_RESERVE};
use serde::{Deserialize, Serialize};

/// Minter policy configuration. Everything here is explicit and fixed at
/// deployment; nothing is inferred at runtime.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MinterConfig {
    /// Maximum age (seconds) of a signed payload's timestamp. The
    /// observed protocol fixes only that a window exists; the default is
    /// a deliberate, conservative choice.
    pub freshness_window_secs: u64,
    /// Smallest payment a buy will process (nanoTON).
    pub min_mint_payment: Coins,
    /// Required attached value for a discovery request (nanoTON).
    pub discovery_fee: Coins,
}

impl Default for MinterConfig {
    fn default() -> Self {
        Self {
            freshness_window_secs: 3_600,
            min_mint_payment: 100_000_000, // 0.1 TON
            discovery_fee: FWD_FEE + GAS_RESERVE,
        }
    }
}

/// Admin/key configuration record, replaced atomically as a whole on
/// `change_admin` / `update_pubkey` rather than mutated field by field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AdminRecord {
    /// Bumped on every replacement.
    pub version: u64,
    /// Current admin account.
    pub admin: Address,
    /// Current server public key; rotation takes effect immediately.
    pub server_pubkey: PublicKey,
}

impl AdminRecord {
    /// Successor record with a new admin.
    pub fn with_admin(&self, admin: Address) -> Self {
        Self {
            version: self.version + 1,
            admin,
            server_pubkey: self.server_pubkey,
        }
    }

    /// Successor record with a rotated server key.
    pub fn with_pubkey(&self, server_pubkey: PublicKey) -> Self {
        Self {
            version: self.version + 1,
            admin: self.admin,
            server_pubkey,
        }
    }
}

/// Read-only minter snapshot, the jetton-data getter shape.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MinterData {
    /// Current supply in nano units.
    pub total_supply: Coins,
    /// Always true; the curve never closes.
    pub mintable: bool,
    /// Current admin.
    pub admin: Address,
    /// Off-chain metadata reference.
    pub content: ContentDescriptor,
    /// Code id wallets are derived with.
    pub wallet_code: CodeId,
}
