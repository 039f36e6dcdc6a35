//! # Minter Subsystem
//!
//! The singleton state machine behind Materia: total supply, reserve
//! mirror, admin/key configuration, replay tracking, and every minter
//! operation from initialization to burn settlement.
//!
//! Cross-contract effects are never atomic: the minter completes its own
//! transition and emits messages; the wallet side reconciles when they
//! arrive. Supply equals the sum of wallet balances only in quiescent
//! states.

pub mod domain;

pub use domain::entities::{AdminRecord, MinterConfig, MinterData};
pub use domain::errors::MinterError;
pub use domain::minter::MinterStateMachine;
