//! # Core Domain Entities
//!
//! Defines the entities shared across the Materia ledger.
//!
//! ## Clusters
//!
//! - **Identity**: `Address`, `CodeId`, key/signature aliases
//! - **Amounts**: `Coins` (nano units), `QueryId`, `TxId`, `Timestamp`
//! - **Metadata**: `ContentDescriptor`

use serde::{Deserialize, Serialize};

/// A 32-byte hash (SHA-256).
pub type Hash = [u8; 32];

/// A 64-byte Ed25519 signature.
pub type Signature = [u8; 64];

/// A 32-byte Ed25519 public key.
pub type PublicKey = [u8; 32];

/// Amount in nano units (nanoTON for the base currency, nanoMAT for the
/// token). u128 comfortably holds every product formed by the pricing math.
pub type Coins = u128;

/// Caller-supplied message correlation id.
pub type QueryId = u64;

/// Single-use identifier for signed game-mint requests.
pub type TxId = u64;

/// Unix timestamp in seconds.
pub type Timestamp = u64;

/// Identifies the code wallets are deployed with. Opaque to the ledger
/// logic; it only feeds the wallet address derivation.
pub type CodeId = [u8; 32];

/// One whole TON in nano units.
pub const ONE_TON: Coins = 1_000_000_000;

/// The only workchain the ledger operates on.
pub const BASE_WORKCHAIN: i8 = 0;

/// A contract address: workchain plus a 256-bit account id.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Address {
    /// Workchain the account lives on. Everything Materia touches is on
    /// `BASE_WORKCHAIN`; foreign workchains are rejected at the boundaries.
    pub workchain: i8,
    /// 256-bit account id.
    pub hash: Hash,
}

impl Address {
    /// Create an address on the base workchain.
    pub fn new(hash: Hash) -> Self {
        Self {
            workchain: BASE_WORKCHAIN,
            hash,
        }
    }

    /// Create an address on an explicit workchain.
    pub fn on_workchain(workchain: i8, hash: Hash) -> Self {
        Self { workchain, hash }
    }

    /// Whether this address lives on the base workchain.
    pub fn is_base_workchain(&self) -> bool {
        self.workchain == BASE_WORKCHAIN
    }

    /// Canonical byte encoding: workchain byte followed by the account id.
    /// This is the form that enters signed payloads and address derivation.
    pub fn to_bytes(&self) -> [u8; 33] {
        let mut out = [0u8; 33];
        out[0] = self.workchain as u8;
        out[1..].copy_from_slice(&self.hash);
        out
    }
}

/// Opaque off-chain metadata reference held by the minter.
///
/// Mirrors the jetton metadata layout: a kind byte (0 = on-chain,
/// 1 = off-chain) and a URI.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct ContentDescriptor {
    /// Metadata kind discriminator.
    pub kind: u8,
    /// Location of the metadata document.
    pub uri: String,
}

impl ContentDescriptor {
    /// Off-chain metadata at the given URI.
    pub fn off_chain(uri: impl Into<String>) -> Self {
        Self {
            kind: 1,
            uri: uri.into(),
        }
    }
}
