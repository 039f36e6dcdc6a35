//! # Wallet State Machine
//!
//! One instance per owner, processing one inbound message at a time to
//! completion. Handlers follow a strict validate-before-mutate
//! discipline: every precondition is checked before the first state
//! write, so a rejected message leaves the wallet untouched.
//!
//! ## Value accounting
//!
//! Each emitted hop consumes one `FWD_FEE` and the handler reserves
//! `GAS_RESERVE` for itself; whatever remains travels with the outbound
//! message. The fee floors in `mat_types::fees` guarantee the chain
//! cannot run dry mid-flight.

use mat_protocol::messages::{decode_payout_payload, MessageBody};
use mat_protocol::Outbound;
use mat_types::{
    burn_min_value, derive_wallet_address, transfer_min_value, Address, CodeId, Coins, QueryId,
    FWD_FEE, GAS_RESERVE,
};
use serde::{Deserialize, Serialize};
use tracing::debug;

use super::entities::WalletData;
use super::errors::WalletError;

/// Per-owner balance/experience ledger.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WalletStateMachine {
    /// Fixed at creation.
    owner: Address,
    /// Immutable back-reference to the minter; not an ownership edge.
    minter: Address,
    /// Code id feeding the address derivation.
    wallet_code: CodeId,
    /// MAT balance in nano units.
    balance: Coins,
    /// Accumulated experience.
    experience: u64,
}

impl WalletStateMachine {
    /// A fresh wallet: zero balance, zero experience. The host deploys
    /// one lazily the first time a credit targets its derived address.
    pub fn new(owner: Address, minter: Address, wallet_code: CodeId) -> Self {
        Self {
            owner,
            minter,
            wallet_code,
            balance: 0,
            experience: 0,
        }
    }

    /// The deterministic address this wallet lives at.
    pub fn address(&self) -> Address {
        derive_wallet_address(&self.minter, &self.owner, &self.wallet_code)
    }

    pub fn owner(&self) -> &Address {
        &self.owner
    }

    pub fn minter(&self) -> &Address {
        &self.minter
    }

    pub fn balance(&self) -> Coins {
        self.balance
    }

    pub fn experience(&self) -> u64 {
        self.experience
    }

    /// Read-only snapshot for the query surface.
    pub fn wallet_data(&self) -> WalletData {
        WalletData {
            balance: self.balance,
            owner: self.owner,
            minter: self.minter,
            wallet_code: self.wallet_code,
            experience: self.experience,
        }
    }

    /// Owner-initiated transfer to another owner's wallet.
    ///
    /// Debits locally and trusts the emitted `internal_transfer` (or its
    /// bounce) to settle the destination side.
    #[allow(clippy::too_many_arguments)]
    pub fn handle_transfer(
        &mut self,
        sender: &Address,
        value: Coins,
        query_id: QueryId,
        amount: Coins,
        to: &Address,
        response: &Address,
        forward_amount: Coins,
        forward_payload: Option<Vec<u8>>,
    ) -> Result<Vec<Outbound>, WalletError> {
        if sender != &self.owner {
            return Err(WalletError::NotOwner);
        }
        if amount > self.balance {
            return Err(WalletError::BalanceError {
                needed: amount,
                available: self.balance,
            });
        }
        let minimum = transfer_min_value(forward_amount);
        if value <= minimum {
            return Err(WalletError::NotEnoughTon {
                minimum,
                attached: value,
            });
        }

        self.balance -= amount;
        let dest_wallet = derive_wallet_address(&self.minter, to, &self.wallet_code);
        debug!(query_id, amount, "transfer debited");
        Ok(vec![Outbound::message(
            dest_wallet,
            value - FWD_FEE - GAS_RESERVE,
            MessageBody::InternalTransfer {
                query_id,
                amount,
                from: Some(self.owner),
                response: Some(*response),
                forward_amount,
                forward_payload,
            },
        )])
    }

    /// Inbound credit from the minter or a sibling wallet.
    #[allow(clippy::too_many_arguments)]
    pub fn handle_internal_transfer(
        &mut self,
        sender: &Address,
        value: Coins,
        query_id: QueryId,
        amount: Coins,
        from: Option<&Address>,
        response: Option<&Address>,
        forward_amount: Coins,
        forward_payload: Option<Vec<u8>>,
    ) -> Result<Vec<Outbound>, WalletError> {
        let authorized = *sender == self.minter
            || from.is_some_and(|owner| {
                *sender == derive_wallet_address(&self.minter, owner, &self.wallet_code)
            });
        if !authorized {
            return Err(WalletError::NotValidWallet);
        }

        self.balance = self
            .balance
            .checked_add(amount)
            .ok_or(WalletError::BalanceError {
                needed: amount,
                available: self.balance,
            })?;

        let mut out = Vec::new();
        if forward_amount > 0 {
            out.push(Outbound::message(
                self.owner,
                forward_amount,
                MessageBody::TransferNotification {
                    query_id,
                    amount,
                    from: from.copied().unwrap_or(self.minter),
                    forward_payload,
                },
            ));
        }
        let leftover = value.saturating_sub(forward_amount + GAS_RESERVE);
        if leftover > 0 {
            if let Some(response) = response {
                out.push(Outbound::message(
                    *response,
                    leftover,
                    MessageBody::Excesses { query_id },
                ));
            }
        }
        Ok(out)
    }

    /// Burn; initiated by the owner, or by the minter for a sell. A
    /// minter-initiated burn carries the sell payout in the custom
    /// payload, echoed back untouched as `excess_amount`.
    pub fn handle_burn(
        &mut self,
        sender: &Address,
        value: Coins,
        query_id: QueryId,
        amount: Coins,
        response: &Address,
        custom_payload: Option<&[u8]>,
    ) -> Result<Vec<Outbound>, WalletError> {
        if sender != &self.owner && sender != &self.minter {
            return Err(WalletError::NotOwner);
        }
        if amount > self.balance {
            return Err(WalletError::BalanceError {
                needed: amount,
                available: self.balance,
            });
        }
        let minimum = burn_min_value();
        if value <= minimum {
            return Err(WalletError::NotEnoughGas {
                minimum,
                attached: value,
            });
        }
        let excess_amount = match custom_payload {
            Some(bytes) => {
                decode_payout_payload(bytes).map_err(|_| WalletError::InvalidPayload)?
            }
            None => 0,
        };

        self.balance -= amount;
        debug!(amount, excess_amount, "burn debited, notifying minter");
        Ok(vec![Outbound::message(
            self.minter,
            value - GAS_RESERVE,
            MessageBody::BurnNotification {
                query_id,
                amount,
                owner: self.owner,
                response: Some(*response),
                excess_amount,
            },
        )])
    }

    /// Experience credit, proxied through the minter after signature
    /// verification there.
    pub fn handle_receive_experience(
        &mut self,
        sender: &Address,
        xp: u64,
    ) -> Result<(), WalletError> {
        if sender != &self.minter {
            return Err(WalletError::InvalidSender);
        }
        self.experience = self.experience.saturating_add(xp);
        Ok(())
    }

    /// Compensate an optimistic debit whose message came back. Only the
    /// two debit-carrying bodies revert anything; other bounces are
    /// value-only and touch no wallet state.
    pub fn handle_bounce(&mut self, body: &MessageBody) {
        match body {
            MessageBody::InternalTransfer { amount, .. }
            | MessageBody::BurnNotification { amount, .. } => {
                self.balance = self.balance.saturating_add(*amount);
                debug!(amount, "bounced debit restored");
            }
            _ => {}
        }
    }
}
