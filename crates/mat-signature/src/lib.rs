//! # Signature & Replay Subsystem
//!
//! Verifies detached Ed25519 signatures over canonically-encoded payloads
//! against the minter's current server public key, and tracks consumed
//! single-use transaction ids.
//!
//! ## Architecture
//!
//! - **Domain Layer** (`domain/`): pure logic, no I/O
//!   - `payload`: canonical field encoding + SHA-256 digest
//!   - `verifier`: stateless verification, server keypair for signing
//!   - `replay`: consumed-txId guard
//!
//! ## Ordering Contract
//!
//! Verification itself is pure and side-effect free. The *caller* (the
//! minter) is responsible for the significant check order:
//! replay, then signature validity, then freshness.

pub mod domain;

pub use domain::errors::{ReplayError, SignatureError};
pub use domain::payload::SignedPayload;
pub use domain::replay::{ReplayGuard, TxIdSnapshot, MAX_TRACKED_IDS};
pub use domain::verifier::{verify_payload, ServerKeyPair};
