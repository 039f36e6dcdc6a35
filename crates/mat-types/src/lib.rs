//! # Shared Types Crate
//!
//! Domain entities shared by every Materia subsystem: addresses, amounts,
//! key material aliases, the deterministic wallet-address derivation, and
//! the fixed fee/gas policy constants.
//!
//! ## Design Principles
//!
//! - **Single Source of Truth**: all cross-crate types are defined here.
//! - **Recomputation over traversal**: a wallet address is always derived
//!   from `(minter, owner, wallet_code)`, never stored as a pointer.

pub mod address;
pub mod entities;
pub mod fees;

pub use address::derive_wallet_address;
pub use entities::*;
pub use fees::*;
