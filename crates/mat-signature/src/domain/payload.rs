//! # Canonical Signed Payloads
//!
//! The off-chain server signs a SHA-256 digest of an ordered field
//! concatenation: the sender address (workchain byte + 256-bit account
//! id) followed by the unsigned 64-bit fields in the order the operation
//! defines them. Both sides must produce identical bytes, so the
//! encoding here is the normative one.

use mat_types::{Address, Hash, Timestamp, TxId};
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};

/// A payload the server signs on behalf of the game backend.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SignedPayload {
    /// Authorizes minting `amount` nanoMAT to `sender`'s wallet.
    GameMint {
        sender: Address,
        /// Minted amount; 64 bits on the wire, widened by the ledger.
        amount: u64,
        tx_id: TxId,
        timestamp: Timestamp,
    },
    /// Authorizes crediting experience to `sender`'s wallet.
    Experience {
        sender: Address,
        xp: u64,
        timestamp: Timestamp,
    },
}

impl SignedPayload {
    /// The timestamp carried inside the payload, for freshness checks.
    pub fn timestamp(&self) -> Timestamp {
        match self {
            Self::GameMint { timestamp, .. } | Self::Experience { timestamp, .. } => *timestamp,
        }
    }

    /// Canonical byte encoding: address, then u64 fields big-endian in
    /// operation order.
    pub fn canonical_bytes(&self) -> Vec<u8> {
        match self {
            Self::GameMint {
                sender,
                amount,
                tx_id,
                timestamp,
            } => {
                let mut out = Vec::with_capacity(33 + 24);
                out.extend_from_slice(&sender.to_bytes());
                out.extend_from_slice(&amount.to_be_bytes());
                out.extend_from_slice(&tx_id.to_be_bytes());
                out.extend_from_slice(&timestamp.to_be_bytes());
                out
            }
            Self::Experience {
                sender,
                xp,
                timestamp,
            } => {
                let mut out = Vec::with_capacity(33 + 16);
                out.extend_from_slice(&sender.to_bytes());
                out.extend_from_slice(&xp.to_be_bytes());
                out.extend_from_slice(&timestamp.to_be_bytes());
                out
            }
        }
    }

    /// SHA-256 digest of the canonical encoding; this is what gets signed.
    pub fn digest(&self) -> Hash {
        let mut hasher = Sha256::new();
        hasher.update(self.canonical_bytes());
        hasher.finalize().into()
    }
}
