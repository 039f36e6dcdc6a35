//! # Domain Layer - Signature Subsystem
//!
//! Pure verification and replay-tracking logic.

pub mod errors;
pub mod payload;
pub mod replay;
pub mod verifier;

pub use errors::*;
pub use payload::*;
pub use replay::*;
pub use verifier::*;
