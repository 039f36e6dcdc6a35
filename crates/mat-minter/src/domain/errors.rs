//! Minter error types.
//!
//! Every error aborts the message atomically; the host bounces the
//! attached value to the sender. Nothing here leaves the state machine
//! stuck: the next message is processed independently.

use mat_pricing::PricingError;
use mat_signature::{ReplayError, SignatureError};
use mat_types::Coins;
use thiserror::Error;

/// Errors a minter handler can reject a message with.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum MinterError {
    /// Operation requires an initialized minter.
    #[error("Minter not initialized")]
    NotInitialized,

    /// `init_minter` may run exactly once.
    #[error("Minter already initialized")]
    AlreadyInitialized,

    /// Buy payment below the minimal processing fee.
    #[error("Amount too low: {attached} below minimum {minimum}")]
    AmountTooLow { attached: Coins, minimum: Coins },

    /// Replay: the txId was consumed before.
    #[error("Transaction id {0} already used")]
    TxIdAlreadyUsed(u64),

    /// The replay guard is at its documented capacity.
    #[error("Replay guard capacity exhausted")]
    ReplayCapacityExhausted,

    /// Signature does not verify against the current server key.
    #[error("Invalid signature")]
    InvalidSignature,

    /// Signature is valid but its timestamp is outside the freshness
    /// window.
    #[error("Signature expired: age {age}s exceeds window {window}s")]
    SignatureExpired { age: u64, window: u64 },

    /// Pubkey rotation attempted by a non-admin.
    #[error("Access denied")]
    AccessDenied,

    /// Admin change attempted by a non-admin.
    #[error("Sender is not the admin")]
    NotAdmin,

    /// Sell payout below the dust threshold.
    #[error("Exchange too small: payout {payout} below minimum {minimum}")]
    ExchangeTooSmall { payout: Coins, minimum: Coins },

    /// Discovery request underpays the reply fee.
    #[error("Discovery fee not matched: need {minimum}, got {attached}")]
    DiscoveryFeeNotMatched { attached: Coins, minimum: Coins },

    /// Burn notification from something that cannot be a wallet.
    #[error("Invalid sender for burn notification")]
    InvalidSender,

    /// Burn notification sender is not the claimed owner's wallet.
    #[error("Unauthorized burn notification")]
    UnouthorizedBurn,

    /// Supply/reserve accounting would underflow; the notification does
    /// not match any outstanding debit.
    #[error("Balance error: cannot settle {needed} against {available}")]
    BalanceError { needed: Coins, available: Coins },

    /// Body decoded but carries out-of-range field values.
    #[error("Invalid payload")]
    InvalidPayload,

    /// Pricing failed for a structural reason (zero supply/rate,
    /// overflow) rather than a dust payout.
    #[error("Pricing error: {0}")]
    Pricing(PricingError),
}

impl From<PricingError> for MinterError {
    fn from(err: PricingError) -> Self {
        match err {
            PricingError::ExchangeTooSmall { payout, minimum } => {
                Self::ExchangeTooSmall { payout, minimum }
            }
            other => Self::Pricing(other),
        }
    }
}

impl From<ReplayError> for MinterError {
    fn from(err: ReplayError) -> Self {
        match err {
            ReplayError::AlreadyConsumed(id) => Self::TxIdAlreadyUsed(id),
            ReplayError::CapacityExhausted { .. } => Self::ReplayCapacityExhausted,
        }
    }
}

impl From<SignatureError> for MinterError {
    fn from(_: SignatureError) -> Self {
        Self::InvalidSignature
    }
}
