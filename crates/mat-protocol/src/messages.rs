//! # Typed Message Bodies
//!
//! One variant per protocol operation, encoding to and decoding from the
//! flat wire format. Field order matches the protocol listing exactly;
//! both directions are implemented so that every participant re-derives
//! identical bytes.

use mat_types::{Address, Coins, PublicKey, QueryId, Signature, Timestamp, TxId};
use serde::{Deserialize, Serialize};
use serde_with::{serde_as, Bytes};

use crate::codec::{ByteReader, ByteWriter, CodecError};
use crate::ops;

/// A decoded message body.
#[serde_as]
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum MessageBody {
    /// One-shot minter initialization; the attached value is the reserve
    /// deposit.
    InitMinter {
        query_id: QueryId,
        deposit: Coins,
        server_pubkey: PublicKey,
    },
    /// Buy MAT with the attached payment.
    Mint { query_id: QueryId },
    /// Server-signed game mint.
    MintFromGame {
        query_id: QueryId,
        amount: Coins,
        tx_id: TxId,
        timestamp: Timestamp,
        #[serde_as(as = "Bytes")]
        signature: Signature,
    },
    /// Server-signed experience credit, proxied to the sender's wallet.
    ReceiveExperience {
        query_id: QueryId,
        xp: u64,
        timestamp: Timestamp,
        #[serde_as(as = "Bytes")]
        signature: Signature,
    },
    /// Sell MAT back to the reserve.
    MateriaToTon { query_id: QueryId, amount: Coins },
    /// Minter-to-wallet experience credit, post-verification.
    AddExperience { query_id: QueryId, xp: u64 },
    /// Admin: rotate the server public key.
    UpdatePubkey {
        query_id: QueryId,
        new_pubkey: PublicKey,
    },
    /// Admin: hand over adminship.
    ChangeAdmin {
        query_id: QueryId,
        new_admin: Address,
    },
    /// Wallet address discovery request.
    ProvideWalletAddress {
        query_id: QueryId,
        owner: Address,
        include_address: bool,
    },
    /// Discovery reply; `wallet` is null for owners that cannot have one.
    TakeWalletAddress {
        query_id: QueryId,
        wallet: Option<Address>,
        owner: Option<Address>,
    },
    /// Owner-initiated wallet-to-wallet transfer; `to` is the destination
    /// owner, not their wallet.
    Transfer {
        query_id: QueryId,
        amount: Coins,
        to: Address,
        response: Address,
        custom_payload: Option<Vec<u8>>,
        forward_amount: Coins,
        forward_payload: Option<Vec<u8>>,
    },
    /// Credit between wallets (or from the minter, with `from` null).
    InternalTransfer {
        query_id: QueryId,
        amount: Coins,
        from: Option<Address>,
        response: Option<Address>,
        forward_amount: Coins,
        forward_payload: Option<Vec<u8>>,
    },
    /// Burn request to a wallet; a minter-initiated burn carries the
    /// precomputed sell payout in `custom_payload`.
    Burn {
        query_id: QueryId,
        amount: Coins,
        response: Address,
        custom_payload: Option<Vec<u8>>,
    },
    /// Wallet-to-minter burn confirmation; `excess_amount` echoes the
    /// payout carried by a minter-initiated burn, zero otherwise.
    BurnNotification {
        query_id: QueryId,
        amount: Coins,
        owner: Address,
        response: Option<Address>,
        excess_amount: Coins,
    },
    /// Delivered to the destination owner when a transfer forwards value.
    TransferNotification {
        query_id: QueryId,
        amount: Coins,
        from: Address,
        forward_payload: Option<Vec<u8>>,
    },
    /// Leftover value refund.
    Excesses { query_id: QueryId },
}

impl MessageBody {
    /// The operation code this body travels under.
    pub fn op(&self) -> u32 {
        match self {
            Self::InitMinter { .. } => ops::INIT_MINTER,
            Self::Mint { .. } => ops::MINT,
            Self::MintFromGame { .. } => ops::MINT_FROM_GAME,
            Self::ReceiveExperience { .. } => ops::RECEIVE_EXPERIENCE,
            Self::MateriaToTon { .. } => ops::MATERIA_TO_TON,
            Self::AddExperience { .. } => ops::ADD_EXPERIENCE,
            Self::UpdatePubkey { .. } => ops::UPDATE_PUBKEY,
            Self::ChangeAdmin { .. } => ops::CHANGE_ADMIN,
            Self::ProvideWalletAddress { .. } => ops::PROVIDE_WALLET_ADDRESS,
            Self::TakeWalletAddress { .. } => ops::TAKE_WALLET_ADDRESS,
            Self::Transfer { .. } => ops::TRANSFER,
            Self::InternalTransfer { .. } => ops::INTERNAL_TRANSFER,
            Self::Burn { .. } => ops::BURN,
            Self::BurnNotification { .. } => ops::BURN_NOTIFICATION,
            Self::TransferNotification { .. } => ops::TRANSFER_NOTIFICATION,
            Self::Excesses { .. } => ops::EXCESSES,
        }
    }

    /// Encode to wire bytes: op code, then the fields in protocol order.
    pub fn encode(&self) -> Vec<u8> {
        let mut w = ByteWriter::new();
        w.write_u32(self.op());
        match self {
            Self::InitMinter {
                query_id,
                deposit,
                server_pubkey,
            } => {
                w.write_u64(*query_id)
                    .write_coins(*deposit)
                    .write_pubkey(server_pubkey);
            }
            Self::Mint { query_id } | Self::Excesses { query_id } => {
                w.write_u64(*query_id);
            }
            Self::MintFromGame {
                query_id,
                amount,
                tx_id,
                timestamp,
                signature,
            } => {
                w.write_u64(*query_id)
                    .write_coins(*amount)
                    .write_u64(*tx_id)
                    .write_u64(*timestamp)
                    .write_signature(signature);
            }
            Self::ReceiveExperience {
                query_id,
                xp,
                timestamp,
                signature,
            } => {
                w.write_u64(*query_id)
                    .write_u64(*xp)
                    .write_u64(*timestamp)
                    .write_signature(signature);
            }
            Self::MateriaToTon { query_id, amount } => {
                w.write_u64(*query_id).write_coins(*amount);
            }
            Self::AddExperience { query_id, xp } => {
                w.write_u64(*query_id).write_u64(*xp);
            }
            Self::UpdatePubkey {
                query_id,
                new_pubkey,
            } => {
                w.write_u64(*query_id).write_pubkey(new_pubkey);
            }
            Self::ChangeAdmin {
                query_id,
                new_admin,
            } => {
                w.write_u64(*query_id).write_address(new_admin);
            }
            Self::ProvideWalletAddress {
                query_id,
                owner,
                include_address,
            } => {
                w.write_u64(*query_id)
                    .write_address(owner)
                    .write_bool(*include_address);
            }
            Self::TakeWalletAddress {
                query_id,
                wallet,
                owner,
            } => {
                w.write_u64(*query_id)
                    .write_opt_address(wallet.as_ref())
                    .write_opt_address(owner.as_ref());
            }
            Self::Transfer {
                query_id,
                amount,
                to,
                response,
                custom_payload,
                forward_amount,
                forward_payload,
            } => {
                w.write_u64(*query_id)
                    .write_coins(*amount)
                    .write_address(to)
                    .write_address(response)
                    .write_opt_blob(custom_payload.as_deref())
                    .write_coins(*forward_amount)
                    .write_opt_blob(forward_payload.as_deref());
            }
            Self::InternalTransfer {
                query_id,
                amount,
                from,
                response,
                forward_amount,
                forward_payload,
            } => {
                w.write_u64(*query_id)
                    .write_coins(*amount)
                    .write_opt_address(from.as_ref())
                    .write_opt_address(response.as_ref())
                    .write_coins(*forward_amount)
                    .write_opt_blob(forward_payload.as_deref());
            }
            Self::Burn {
                query_id,
                amount,
                response,
                custom_payload,
            } => {
                w.write_u64(*query_id)
                    .write_coins(*amount)
                    .write_address(response)
                    .write_opt_blob(custom_payload.as_deref());
            }
            Self::BurnNotification {
                query_id,
                amount,
                owner,
                response,
                excess_amount,
            } => {
                w.write_u64(*query_id)
                    .write_coins(*amount)
                    .write_address(owner)
                    .write_opt_address(response.as_ref())
                    .write_coins(*excess_amount);
            }
            Self::TransferNotification {
                query_id,
                amount,
                from,
                forward_payload,
            } => {
                w.write_u64(*query_id)
                    .write_coins(*amount)
                    .write_address(from)
                    .write_opt_blob(forward_payload.as_deref());
            }
        }
        w.finish()
    }

    /// Decode wire bytes. Strict: unknown ops, bad tags, and trailing
    /// bytes are errors.
    pub fn decode(bytes: &[u8]) -> Result<Self, CodecError> {
        let mut r = ByteReader::new(bytes);
        let op = r.read_u32()?;
        let body = match op {
            ops::INIT_MINTER => Self::InitMinter {
                query_id: r.read_u64()?,
                deposit: r.read_coins()?,
                server_pubkey: r.read_pubkey()?,
            },
            ops::MINT => Self::Mint {
                query_id: r.read_u64()?,
            },
            ops::MINT_FROM_GAME => Self::MintFromGame {
                query_id: r.read_u64()?,
                amount: r.read_coins()?,
                tx_id: r.read_u64()?,
                timestamp: r.read_u64()?,
                signature: r.read_signature()?,
            },
            ops::RECEIVE_EXPERIENCE => Self::ReceiveExperience {
                query_id: r.read_u64()?,
                xp: r.read_u64()?,
                timestamp: r.read_u64()?,
                signature: r.read_signature()?,
            },
            ops::MATERIA_TO_TON => Self::MateriaToTon {
                query_id: r.read_u64()?,
                amount: r.read_coins()?,
            },
            ops::ADD_EXPERIENCE => Self::AddExperience {
                query_id: r.read_u64()?,
                xp: r.read_u64()?,
            },
            ops::UPDATE_PUBKEY => Self::UpdatePubkey {
                query_id: r.read_u64()?,
                new_pubkey: r.read_pubkey()?,
            },
            ops::CHANGE_ADMIN => Self::ChangeAdmin {
                query_id: r.read_u64()?,
                new_admin: r.read_address()?,
            },
            ops::PROVIDE_WALLET_ADDRESS => Self::ProvideWalletAddress {
                query_id: r.read_u64()?,
                owner: r.read_address()?,
                include_address: r.read_bool()?,
            },
            ops::TAKE_WALLET_ADDRESS => Self::TakeWalletAddress {
                query_id: r.read_u64()?,
                wallet: r.read_opt_address()?,
                owner: r.read_opt_address()?,
            },
            ops::TRANSFER => Self::Transfer {
                query_id: r.read_u64()?,
                amount: r.read_coins()?,
                to: r.read_address()?,
                response: r.read_address()?,
                custom_payload: r.read_opt_blob()?,
                forward_amount: r.read_coins()?,
                forward_payload: r.read_opt_blob()?,
            },
            ops::INTERNAL_TRANSFER => Self::InternalTransfer {
                query_id: r.read_u64()?,
                amount: r.read_coins()?,
                from: r.read_opt_address()?,
                response: r.read_opt_address()?,
                forward_amount: r.read_coins()?,
                forward_payload: r.read_opt_blob()?,
            },
            ops::BURN => Self::Burn {
                query_id: r.read_u64()?,
                amount: r.read_coins()?,
                response: r.read_address()?,
                custom_payload: r.read_opt_blob()?,
            },
            ops::BURN_NOTIFICATION => Self::BurnNotification {
                query_id: r.read_u64()?,
                amount: r.read_coins()?,
                owner: r.read_address()?,
                response: r.read_opt_address()?,
                excess_amount: r.read_coins()?,
            },
            ops::TRANSFER_NOTIFICATION => Self::TransferNotification {
                query_id: r.read_u64()?,
                amount: r.read_coins()?,
                from: r.read_address()?,
                forward_payload: r.read_opt_blob()?,
            },
            ops::EXCESSES => Self::Excesses {
                query_id: r.read_u64()?,
            },
            other => return Err(CodecError::UnknownOp(other)),
        };
        r.expect_end()?;
        Ok(body)
    }
}

/// Encode a sell payout for the custom payload of a minter-initiated burn.
pub fn encode_payout_payload(payout: Coins) -> Vec<u8> {
    payout.to_be_bytes().to_vec()
}

/// Decode a payout payload written by [`encode_payout_payload`].
pub fn decode_payout_payload(bytes: &[u8]) -> Result<Coins, CodecError> {
    let mut r = ByteReader::new(bytes);
    let payout = r.read_coins()?;
    r.expect_end()?;
    Ok(payout)
}
