//! # Message Envelopes
//!
//! The envelope is the sole wrapper for inter-contract traffic. Inbound
//! carries what the host runtime hands a contract: raw body bytes, the
//! authenticated sender, the attached value, and the bounced flag.
//! Outbound is what a handler emits back to the host for delivery.

use mat_types::{Address, Coins};
use serde::{Deserialize, Serialize};

use crate::messages::MessageBody;

/// A message as delivered to a contract instance.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Inbound {
    /// Authenticated sender; set by the host runtime, never by the payload.
    pub sender: Address,
    /// Value attached to the message (nanoTON).
    pub value: Coins,
    /// True when this is a failed outbound coming back.
    pub bounced: bool,
    /// Encoded body bytes.
    pub body: Vec<u8>,
}

impl Inbound {
    /// Plain (non-bounced) message.
    pub fn new(sender: Address, value: Coins, body: Vec<u8>) -> Self {
        Self {
            sender,
            value,
            bounced: false,
            body,
        }
    }

    /// The bounce of a failed delivery: same body, value returned, flag set.
    pub fn bounced(sender: Address, value: Coins, body: Vec<u8>) -> Self {
        Self {
            sender,
            value,
            bounced: true,
            body,
        }
    }
}

/// A message a handler asks the host to deliver.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Outbound {
    /// Destination contract.
    pub dest: Address,
    /// Value to attach (nanoTON).
    pub value: Coins,
    /// Whether a failed delivery should bounce back to us.
    pub bounce: bool,
    /// Typed body; `None` is a plain value transfer with an empty body.
    pub body: Option<MessageBody>,
}

impl Outbound {
    /// A bounceable protocol message.
    pub fn message(dest: Address, value: Coins, body: MessageBody) -> Self {
        Self {
            dest,
            value,
            bounce: true,
            body: Some(body),
        }
    }

    /// A plain value transfer (admin fee, sell payout); non-bounceable so
    /// funds are not returned if the recipient is frozen.
    pub fn value_transfer(dest: Address, value: Coins) -> Self {
        Self {
            dest,
            value,
            bounce: false,
            body: None,
        }
    }

    /// Encoded body bytes for delivery, empty for plain transfers.
    pub fn body_bytes(&self) -> Vec<u8> {
        self.body.as_ref().map(MessageBody::encode).unwrap_or_default()
    }
}
