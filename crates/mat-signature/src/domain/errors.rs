//! Signature and replay error types.

use thiserror::Error;

/// Errors from signature verification.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum SignatureError {
    /// The stored server key is not a valid Ed25519 point.
    #[error("Invalid server public key")]
    InvalidPublicKey,

    /// The signature does not verify against the payload digest.
    #[error("Signature verification failed")]
    VerificationFailed,
}

/// Errors from the replay guard.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ReplayError {
    /// The transaction id was already consumed; permanently rejected.
    #[error("Transaction id {0} already used")]
    AlreadyConsumed(u64),

    /// The guard reached its documented capacity cap and fails closed.
    #[error("Replay guard full: {cap} ids tracked")]
    CapacityExhausted { cap: usize },
}
