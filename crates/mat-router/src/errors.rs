//! Routing error types.

use mat_minter::MinterError;
use mat_protocol::CodecError;
use mat_wallet::WalletError;
use thiserror::Error;

/// Errors raised while decoding and dispatching an inbound message.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum RouterError {
    /// The op code is not part of the protocol.
    #[error("Unknown op code {0:#010x}")]
    UnknownOp(u32),

    /// The op code is known but this instance does not accept it.
    #[error("Op {0:#010x} not accepted by this contract")]
    UnexpectedOp(u32),

    /// The body failed to decode as the fields the op requires.
    #[error("Invalid message payload")]
    InvalidPayload,

    /// The minter rejected the message.
    #[error(transparent)]
    Minter(#[from] MinterError),

    /// The wallet rejected the message.
    #[error(transparent)]
    Wallet(#[from] WalletError),
}

impl From<CodecError> for RouterError {
    fn from(err: CodecError) -> Self {
        match err {
            CodecError::UnknownOp(op) => RouterError::UnknownOp(op),
            _ => RouterError::InvalidPayload,
        }
    }
}
