//! Wallet error types.
//!
//! Any error aborts the whole message atomically; the host bounces the
//! attached value back to the sender.

use mat_types::Coins;
use thiserror::Error;

/// Errors a wallet handler can reject a message with.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum WalletError {
    /// Only the owner may move or burn funds.
    #[error("Sender is not the wallet owner")]
    NotOwner,

    /// Debit larger than the current balance.
    #[error("Balance error: need {needed}, have {available}")]
    BalanceError { needed: Coins, available: Coins },

    /// Attached value cannot cover a transfer's forwarding chain.
    #[error("Not enough TON attached: need more than {minimum}, got {attached}")]
    NotEnoughTon { minimum: Coins, attached: Coins },

    /// Attached value cannot cover a burn's notification hop.
    #[error("Not enough gas attached: need more than {minimum}, got {attached}")]
    NotEnoughGas { minimum: Coins, attached: Coins },

    /// Credit sender is neither the minter nor a sibling wallet.
    #[error("Sender is not a valid wallet of this minter")]
    NotValidWallet,

    /// Experience updates come from the minter only.
    #[error("Invalid sender for experience update")]
    InvalidSender,

    /// Sender lives outside the base workchain.
    #[error("Wrong workchain: {0}")]
    WrongWorkchain(i8),

    /// A custom payload that should carry a payout did not decode.
    #[error("Invalid burn payload")]
    InvalidPayload,
}
