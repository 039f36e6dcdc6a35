//! # Domain Layer - Minter Subsystem

pub mod entities;
pub mod errors;
pub mod minter;

pub use entities::*;
pub use errors::*;
pub use minter::*;
