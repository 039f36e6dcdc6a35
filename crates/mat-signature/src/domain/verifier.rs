//! # Ed25519 Verification
//!
//! Stateless verification of detached server signatures, plus the
//! keypair wrapper used by tests and deployment tooling to stand in for
//! the off-chain signing server.

use ed25519_dalek::{Signer, SigningKey, Verifier, VerifyingKey};
use mat_types::{PublicKey, Signature};
use zeroize::Zeroize;

use super::errors::SignatureError;
use super::payload::SignedPayload;

/// Verify a detached signature over `payload` against the server key.
///
/// Pure and side-effect free; freshness and replay ordering are enforced
/// by the caller.
pub fn verify_payload(
    pubkey: &PublicKey,
    payload: &SignedPayload,
    signature: &Signature,
) -> Result<(), SignatureError> {
    let verifying_key =
        VerifyingKey::from_bytes(pubkey).map_err(|_| SignatureError::InvalidPublicKey)?;
    let sig = ed25519_dalek::Signature::from_bytes(signature);
    verifying_key
        .verify(&payload.digest(), &sig)
        .map_err(|_| SignatureError::VerificationFailed)
}

/// Server-side Ed25519 keypair.
///
/// Mirrors the off-chain signer; the ledger itself only ever holds the
/// public half.
pub struct ServerKeyPair {
    signing_key: SigningKey,
}

impl ServerKeyPair {
    /// Generate a random keypair.
    pub fn generate() -> Self {
        Self {
            signing_key: SigningKey::generate(&mut rand::thread_rng()),
        }
    }

    /// Rebuild from a 32-byte secret seed.
    pub fn from_seed(seed: [u8; 32]) -> Self {
        Self {
            signing_key: SigningKey::from_bytes(&seed),
        }
    }

    /// The public key the minter stores.
    pub fn public_key(&self) -> PublicKey {
        self.signing_key.verifying_key().to_bytes()
    }

    /// Sign a payload digest (deterministic, no RNG involved).
    pub fn sign(&self, payload: &SignedPayload) -> Signature {
        self.signing_key.sign(&payload.digest()).to_bytes()
    }
}

impl Drop for ServerKeyPair {
    fn drop(&mut self) {
        let mut bytes = self.signing_key.to_bytes();
        bytes.zeroize();
    }
}
