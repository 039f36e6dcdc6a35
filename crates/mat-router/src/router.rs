//! # Decode and Dispatch
//!
//! Two entry points, one per contract kind. Both take the raw inbound
//! envelope, decode the typed body, and call the matching handler.
//! An empty body is a plain value transfer and is accepted silently; the
//! host credits the value, there is nothing for the logic to do.

use mat_minter::MinterStateMachine;
use mat_protocol::{Inbound, MessageBody, Outbound};
use mat_types::Timestamp;
use mat_wallet::{WalletError, WalletStateMachine};
use tracing::{debug, warn};

use crate::errors::RouterError;

/// Route an inbound message to a minter instance.
///
/// `now` is the host-supplied wall clock used for signature freshness.
pub fn route_minter(
    minter: &mut MinterStateMachine,
    inbound: &Inbound,
    now: Timestamp,
) -> Result<Vec<Outbound>, RouterError> {
    if inbound.bounced {
        // Wallet credits target derived addresses and deploy lazily, so
        // a minter-emitted message has no failure path to compensate.
        warn!(sender = ?inbound.sender, "ignoring bounced message at minter");
        return Ok(Vec::new());
    }
    if inbound.body.is_empty() {
        return Ok(Vec::new());
    }

    let body = MessageBody::decode(&inbound.body)?;
    debug!(op = body.op(), value = inbound.value, "minter dispatch");
    let out = match body {
        MessageBody::InitMinter {
            query_id,
            deposit,
            server_pubkey,
        } => minter.handle_init_minter(&inbound.sender, inbound.value, query_id, deposit, server_pubkey)?,
        MessageBody::Mint { query_id } => {
            minter.handle_mint(&inbound.sender, inbound.value, query_id)?
        }
        MessageBody::MintFromGame {
            query_id,
            amount,
            tx_id,
            timestamp,
            signature,
        } => minter.handle_mint_from_game(
            &inbound.sender,
            query_id,
            amount,
            tx_id,
            timestamp,
            &signature,
            now,
        )?,
        MessageBody::ReceiveExperience {
            query_id,
            xp,
            timestamp,
            signature,
        } => minter.handle_receive_experience(
            &inbound.sender,
            inbound.value,
            query_id,
            xp,
            timestamp,
            &signature,
            now,
        )?,
        MessageBody::MateriaToTon { query_id, amount } => {
            minter.handle_materia_to_ton(&inbound.sender, inbound.value, query_id, amount)?
        }
        MessageBody::UpdatePubkey { new_pubkey, .. } => {
            minter.handle_update_pubkey(&inbound.sender, new_pubkey)?
        }
        MessageBody::ChangeAdmin { new_admin, .. } => {
            minter.handle_change_admin(&inbound.sender, new_admin)?
        }
        MessageBody::ProvideWalletAddress {
            query_id,
            owner,
            include_address,
        } => minter.handle_provide_wallet_address(
            &inbound.sender,
            inbound.value,
            query_id,
            &owner,
            include_address,
        )?,
        MessageBody::BurnNotification {
            amount,
            owner,
            response,
            excess_amount,
            ..
        } => minter.handle_burn_notification(
            &inbound.sender,
            amount,
            &owner,
            response.as_ref(),
            excess_amount,
        )?,
        MessageBody::Excesses { .. } => Vec::new(),
        other => return Err(RouterError::UnexpectedOp(other.op())),
    };
    Ok(out)
}

/// Route an inbound message to a wallet instance.
pub fn route_wallet(
    wallet: &mut WalletStateMachine,
    inbound: &Inbound,
) -> Result<Vec<Outbound>, RouterError> {
    if !inbound.sender.is_base_workchain() {
        return Err(RouterError::Wallet(WalletError::WrongWorkchain(
            inbound.sender.workchain,
        )));
    }
    if inbound.bounced {
        // A bounce never produces further messages; it may restore a
        // debit if the failed body carried one.
        if let Ok(body) = MessageBody::decode(&inbound.body) {
            wallet.handle_bounce(&body);
        }
        return Ok(Vec::new());
    }
    if inbound.body.is_empty() {
        return Ok(Vec::new());
    }

    let body = MessageBody::decode(&inbound.body)?;
    debug!(op = body.op(), value = inbound.value, "wallet dispatch");
    let out = match body {
        MessageBody::Transfer {
            query_id,
            amount,
            to,
            response,
            custom_payload: _,
            forward_amount,
            forward_payload,
        } => wallet.handle_transfer(
            &inbound.sender,
            inbound.value,
            query_id,
            amount,
            &to,
            &response,
            forward_amount,
            forward_payload,
        )?,
        MessageBody::InternalTransfer {
            query_id,
            amount,
            from,
            response,
            forward_amount,
            forward_payload,
        } => wallet.handle_internal_transfer(
            &inbound.sender,
            inbound.value,
            query_id,
            amount,
            from.as_ref(),
            response.as_ref(),
            forward_amount,
            forward_payload,
        )?,
        MessageBody::Burn {
            query_id,
            amount,
            response,
            custom_payload,
        } => wallet.handle_burn(
            &inbound.sender,
            inbound.value,
            query_id,
            amount,
            &response,
            custom_payload.as_deref(),
        )?,
        MessageBody::AddExperience { xp, .. } => {
            wallet.handle_receive_experience(&inbound.sender, xp)?;
            Vec::new()
        }
        MessageBody::Excesses { .. } => Vec::new(),
        other => return Err(RouterError::UnexpectedOp(other.op())),
    };
    Ok(out)
}
