//! # Minter State Machine
//!
//! Singleton contract logic: uninitialized until `init_minter`, then
//! initialized forever. Handlers validate every precondition before the
//! first state write; a rejected message leaves supply, reserve, admin
//! record, and the replay guard exactly as they were.
//!
//! ## Check order for signed game mints
//!
//! Replay, then signature validity, then freshness. A stale signature
//! replaying a consumed txId must surface as replay, not as a
//! cryptographic failure; a fresh signature with an old timestamp must
//! pass verification before being rejected as stale. The txId is
//! recorded only after all three checks pass.

use mat_pricing::{convert_buy, convert_sell, initial_supply, split_buy_payment, units_per_ton_e9};
use mat_protocol::messages::encode_payout_payload;
use mat_protocol::{MessageBody, Outbound};
use mat_signature::{verify_payload, ReplayGuard, SignedPayload, TxIdSnapshot};
use mat_types::{
    derive_wallet_address, Address, CodeId, Coins, ContentDescriptor, PublicKey, QueryId,
    Signature, Timestamp, TxId, GAS_RESERVE,
};
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use super::entities::{AdminRecord, MinterConfig, MinterData};
use super::errors::MinterError;

/// Global supply/reserve/admin/key state machine.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MinterStateMachine {
    /// Own contract address; feeds wallet derivation and message routing.
    address: Address,
    config: MinterConfig,
    content: ContentDescriptor,
    wallet_code: CodeId,
    /// `None` until `init_minter` runs.
    admin_record: Option<AdminRecord>,
    /// Total supply in nanoMAT.
    total_supply: Coins,
    /// Mirror of the host-held reserve balance (nanoTON). Tracks
    /// deposits and payouts only; gas accounting is host-side.
    reserve: Coins,
    replay: ReplayGuard,
}

impl MinterStateMachine {
    /// An undeployed minter; everything except `init_minter` is rejected
    /// until initialization.
    pub fn new(
        address: Address,
        content: ContentDescriptor,
        wallet_code: CodeId,
        config: MinterConfig,
    ) -> Self {
        Self {
            address,
            config,
            content,
            wallet_code,
            admin_record: None,
            total_supply: 0,
            reserve: 0,
            replay: ReplayGuard::new(),
        }
    }

    // =========================================================================
    // READ-ONLY QUERIES
    // =========================================================================

    pub fn address(&self) -> &Address {
        &self.address
    }

    pub fn is_initialized(&self) -> bool {
        self.admin_record.is_some()
    }

    pub fn total_supply(&self) -> Coins {
        self.total_supply
    }

    pub fn reserve(&self) -> Coins {
        self.reserve
    }

    pub fn admin_record(&self) -> Option<&AdminRecord> {
        self.admin_record.as_ref()
    }

    /// The jetton-data getter shape.
    pub fn minter_data(&self) -> Result<MinterData, MinterError> {
        let record = self.record()?;
        Ok(MinterData {
            total_supply: self.total_supply,
            mintable: true,
            admin: record.admin,
            content: self.content.clone(),
            wallet_code: self.wallet_code,
        })
    }

    /// Inverse spot rate for the price query: MAT units per TON,
    /// 9-decimal fixed point.
    pub fn price_units_per_ton_e9(&self) -> Result<u128, MinterError> {
        units_per_ton_e9(self.total_supply, self.reserve).map_err(MinterError::from)
    }

    /// Consumed-txId listing for the query surface.
    pub fn tx_id_snapshot(&self) -> TxIdSnapshot {
        self.replay.snapshot()
    }

    /// Deterministic wallet address for `owner` under this minter.
    pub fn wallet_address_of(&self, owner: &Address) -> Address {
        derive_wallet_address(&self.address, owner, &self.wallet_code)
    }

    fn record(&self) -> Result<&AdminRecord, MinterError> {
        self.admin_record.as_ref().ok_or(MinterError::NotInitialized)
    }

    // =========================================================================
    // OPERATIONS
    // =========================================================================

    /// One-shot initialization: sender becomes admin, the deposit seeds
    /// the reserve, and the derived initial supply is credited to the
    /// deployer's wallet.
    pub fn handle_init_minter(
        &mut self,
        sender: &Address,
        value: Coins,
        query_id: QueryId,
        deposit: Coins,
        server_pubkey: PublicKey,
    ) -> Result<Vec<Outbound>, MinterError> {
        if self.admin_record.is_some() {
            return Err(MinterError::AlreadyInitialized);
        }
        if value < deposit {
            return Err(MinterError::AmountTooLow {
                attached: value,
                minimum: deposit,
            });
        }

        let supply = initial_supply(deposit)?;
        self.admin_record = Some(AdminRecord {
            version: 0,
            admin: *sender,
            server_pubkey,
        });
        self.total_supply = supply;
        self.reserve = deposit;
        info!(deposit, supply, "minter initialized");

        Ok(vec![self.credit_wallet(sender, query_id, supply)])
    }

    /// Buy MAT with the attached payment at the premium rate. The admin
    /// tax leaves immediately; the net payment joins the reserve.
    pub fn handle_mint(
        &mut self,
        sender: &Address,
        value: Coins,
        query_id: QueryId,
    ) -> Result<Vec<Outbound>, MinterError> {
        let record = self.record()?;
        let admin = record.admin;
        if value < self.config.min_mint_payment {
            return Err(MinterError::AmountTooLow {
                attached: value,
                minimum: self.config.min_mint_payment,
            });
        }

        let split = split_buy_payment(value)?;
        let minted = convert_buy(self.total_supply, self.reserve, split.net)?;

        self.total_supply += minted;
        self.reserve += split.net;
        debug!(payment = value, minted, admin_fee = split.admin_fee, "buy processed");

        Ok(vec![
            Outbound::value_transfer(admin, split.admin_fee),
            self.credit_wallet(sender, query_id, minted),
        ])
    }

    /// Server-authorized mint from a game event.
    #[allow(clippy::too_many_arguments)]
    pub fn handle_mint_from_game(
        &mut self,
        sender: &Address,
        query_id: QueryId,
        amount: Coins,
        tx_id: TxId,
        timestamp: Timestamp,
        signature: &Signature,
        now: Timestamp,
    ) -> Result<Vec<Outbound>, MinterError> {
        let record = self.record()?;

        // 1) Replay before anything else.
        if self.replay.contains(tx_id) {
            return Err(MinterError::TxIdAlreadyUsed(tx_id));
        }

        // 2) Signature validity against the current key.
        let wire_amount = u64::try_from(amount).map_err(|_| MinterError::InvalidPayload)?;
        let payload = SignedPayload::GameMint {
            sender: *sender,
            amount: wire_amount,
            tx_id,
            timestamp,
        };
        verify_payload(&record.server_pubkey, &payload, signature)?;

        // 3) Freshness last.
        self.check_freshness(timestamp, now)?;

        // All checks passed; now, and only now, mutate.
        self.replay.consume(tx_id)?;
        self.total_supply += amount;
        debug!(tx_id, amount, "game mint accepted");

        Ok(vec![self.credit_wallet(sender, query_id, amount)])
    }

    /// Server-authorized experience credit, forwarded to the sender's
    /// wallet after verification. No replay id exists for this payload;
    /// validity is checked before freshness, mirroring the mint path.
    pub fn handle_receive_experience(
        &mut self,
        sender: &Address,
        value: Coins,
        query_id: QueryId,
        xp: u64,
        timestamp: Timestamp,
        signature: &Signature,
        now: Timestamp,
    ) -> Result<Vec<Outbound>, MinterError> {
        let record = self.record()?;
        let payload = SignedPayload::Experience {
            sender: *sender,
            xp,
            timestamp,
        };
        verify_payload(&record.server_pubkey, &payload, signature)?;
        self.check_freshness(timestamp, now)?;

        Ok(vec![Outbound::message(
            self.wallet_address_of(sender),
            value.saturating_sub(GAS_RESERVE),
            MessageBody::AddExperience { query_id, xp },
        )])
    }

    /// Sell: validate the payout against the dust threshold, then ask
    /// the seller's wallet to burn. Supply and reserve settle when the
    /// burn notification returns; nothing is mutated here.
    pub fn handle_materia_to_ton(
        &mut self,
        sender: &Address,
        value: Coins,
        query_id: QueryId,
        amount: Coins,
    ) -> Result<Vec<Outbound>, MinterError> {
        self.record()?;
        let payout = convert_sell(self.total_supply, self.reserve, amount)?;
        debug!(amount, payout, "sell accepted, requesting burn");

        Ok(vec![Outbound::message(
            self.wallet_address_of(sender),
            value.saturating_sub(GAS_RESERVE),
            MessageBody::Burn {
                query_id,
                amount,
                response: *sender,
                custom_payload: Some(encode_payout_payload(payout)),
            },
        )])
    }

    /// Rotate the server public key. Takes effect immediately: any
    /// signature under the old key fails from this message on.
    pub fn handle_update_pubkey(
        &mut self,
        sender: &Address,
        new_pubkey: PublicKey,
    ) -> Result<Vec<Outbound>, MinterError> {
        let record = self.record()?;
        if sender != &record.admin {
            return Err(MinterError::AccessDenied);
        }
        self.admin_record = Some(record.with_pubkey(new_pubkey));
        info!("server pubkey rotated");
        Ok(Vec::new())
    }

    /// Hand adminship to a new account.
    pub fn handle_change_admin(
        &mut self,
        sender: &Address,
        new_admin: Address,
    ) -> Result<Vec<Outbound>, MinterError> {
        let record = self.record()?;
        if sender != &record.admin {
            return Err(MinterError::NotAdmin);
        }
        self.admin_record = Some(record.with_admin(new_admin));
        info!("admin changed");
        Ok(Vec::new())
    }

    /// Discovery: resolve an owner to its deterministic wallet address.
    /// Owners outside the base workchain are answered with a null
    /// address, not an error.
    pub fn handle_provide_wallet_address(
        &mut self,
        sender: &Address,
        value: Coins,
        query_id: QueryId,
        owner: &Address,
        include_address: bool,
    ) -> Result<Vec<Outbound>, MinterError> {
        self.record()?;
        if value < self.config.discovery_fee {
            return Err(MinterError::DiscoveryFeeNotMatched {
                attached: value,
                minimum: self.config.discovery_fee,
            });
        }
        let wallet = owner
            .is_base_workchain()
            .then(|| self.wallet_address_of(owner));

        Ok(vec![Outbound::message(
            *sender,
            value.saturating_sub(GAS_RESERVE),
            MessageBody::TakeWalletAddress {
                query_id,
                wallet,
                owner: include_address.then_some(*owner),
            },
        )])
    }

    /// Burn confirmation from a wallet: the only place supply decreases.
    /// The echoed excess is the sell payout computed at request time; it
    /// leaves the reserve here.
    pub fn handle_burn_notification(
        &mut self,
        sender: &Address,
        amount: Coins,
        owner: &Address,
        response: Option<&Address>,
        excess_amount: Coins,
    ) -> Result<Vec<Outbound>, MinterError> {
        self.record()?;
        if !sender.is_base_workchain() {
            return Err(MinterError::InvalidSender);
        }
        if sender != &self.wallet_address_of(owner) {
            return Err(MinterError::UnouthorizedBurn);
        }
        let new_supply =
            self.total_supply
                .checked_sub(amount)
                .ok_or(MinterError::BalanceError {
                    needed: amount,
                    available: self.total_supply,
                })?;
        let new_reserve =
            self.reserve
                .checked_sub(excess_amount)
                .ok_or(MinterError::BalanceError {
                    needed: excess_amount,
                    available: self.reserve,
                })?;

        self.total_supply = new_supply;
        self.reserve = new_reserve;
        debug!(amount, excess_amount, "burn settled");

        let mut out = Vec::new();
        if excess_amount > 0 {
            out.push(Outbound::value_transfer(
                *response.unwrap_or(owner),
                excess_amount,
            ));
        }
        Ok(out)
    }

    // =========================================================================
    // INTERNAL
    // =========================================================================

    /// Credit message to an owner's derived wallet. Carries one gas
    /// reserve for the wallet's handler; the host deploys the wallet
    /// lazily if it does not exist yet.
    fn credit_wallet(&self, owner: &Address, query_id: QueryId, amount: Coins) -> Outbound {
        Outbound::message(
            self.wallet_address_of(owner),
            GAS_RESERVE,
            MessageBody::InternalTransfer {
                query_id,
                amount,
                from: None,
                response: Some(*owner),
                forward_amount: 0,
                forward_payload: None,
            },
        )
    }

    fn check_freshness(&self, timestamp: Timestamp, now: Timestamp) -> Result<(), MinterError> {
        let age = now.saturating_sub(timestamp);
        let window = self.config.freshness_window_secs;
        if age > window {
            return Err(MinterError::SignatureExpired { age, window });
        }
        Ok(())
    }
}
