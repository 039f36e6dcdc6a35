//! # Wallet Subsystem
//!
//! Per-owner balance/experience ledger. A wallet never talks to another
//! wallet's memory: every cross-contract effect is an outbound message,
//! and a failed outbound comes back as a bounce that compensates the
//! optimistic local debit.

pub mod domain;

pub use domain::entities::WalletData;
pub use domain::errors::WalletError;
pub use domain::wallet::WalletStateMachine;
