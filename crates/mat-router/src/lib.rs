//! # Message Router
//!
//! The composition layer between the host runtime and the state
//! machines. An inbound envelope arrives as raw bytes; the router
//! decodes the op code and fields, applies the envelope-level guards
//! (workchain, bounce flag), and dispatches to the right handler on a
//! minter or wallet instance.
//!
//! The router owns no state of its own. A rejected message surfaces the
//! state machine's error unchanged so the host can bounce the value
//! back to the sender.

pub mod errors;
pub mod router;

pub use errors::RouterError;
pub use router::{route_minter, route_wallet};
