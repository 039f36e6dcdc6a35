//! # Deterministic Wallet Address Derivation
//!
//! A wallet address is a pure function of `(minter, owner, wallet_code)`.
//! Both sides of the protocol recompute it instead of storing references:
//! the minter to route credits and authenticate burn notifications, each
//! wallet to authenticate peer transfers.

use sha2::{Digest, Sha256};

use crate::entities::{Address, CodeId};

/// Domain separator so wallet addresses can never collide with digests
/// computed elsewhere in the protocol.
const WALLET_ADDRESS_TAG: &[u8] = b"materia/wallet-address/v1";

/// Derive the deterministic wallet address for `owner` under `minter`.
///
/// The result always lives on the base workchain; owners on foreign
/// workchains have no wallet (callers answer discovery with a null
/// address in that case).
pub fn derive_wallet_address(minter: &Address, owner: &Address, wallet_code: &CodeId) -> Address {
    let mut hasher = Sha256::new();
    hasher.update(WALLET_ADDRESS_TAG);
    hasher.update(minter.to_bytes());
    hasher.update(owner.to_bytes());
    hasher.update(wallet_code);
    Address::new(hasher.finalize().into())
}
