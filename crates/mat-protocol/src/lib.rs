//! # Materia Message Protocol
//!
//! Operation codes, the field-level wire codec, typed message bodies,
//! and the inbound/outbound envelopes exchanged between the minter and
//! the wallets.
//!
//! The encoding is a flat, big-endian field concatenation: explicit bit
//! widths, tagged optionals, no padding. Anything below the field level
//! (cells, refs) belongs to the host runtime and is out of scope.

pub mod codec;
pub mod envelope;
pub mod messages;
pub mod ops;

pub use codec::{ByteReader, ByteWriter, CodecError};
pub use envelope::{Inbound, Outbound};
pub use messages::MessageBody;
