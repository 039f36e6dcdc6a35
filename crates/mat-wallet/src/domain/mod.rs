//! # Domain Layer - Wallet Subsystem
//!
//! Pure state-machine logic over local wallet state.

pub mod entities;
pub mod errors;
pub mod wallet;

pub use entities::*;
pub use errors::*;
pub use wallet::*;
