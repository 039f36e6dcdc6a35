//! Wallet-to-wallet transfer choreography: lazy destination deploy,
//! notifications, excess refunds, and ownership guards.

use mat_protocol::MessageBody;
use mat_router::RouterError;
use mat_types::{transfer_min_value, ONE_TON};
use mat_wallet::WalletError;

use super::{alice, bob, setup};
use crate::harness::Ledger;

/// Initialized ledger with `alice()` holding a bought balance.
fn funded() -> (Ledger, u128) {
    let (mut ledger, _) = setup();
    ledger
        .send_minter(alice(), 1_000 * ONE_TON, MessageBody::Mint { query_id: 1 })
        .unwrap();
    let balance = ledger.balance_of(&alice());
    (ledger, balance)
}

fn transfer_body(amount: u128, forward_amount: u128) -> MessageBody {
    MessageBody::Transfer {
        query_id: 7,
        amount,
        to: bob(),
        response: alice(),
        custom_payload: None,
        forward_amount,
        forward_payload: None,
    }
}

// =============================================================================
// HAPPY PATH
// =============================================================================

#[test]
fn transfer_deploys_destination_and_moves_balance() {
    let (mut ledger, balance) = funded();
    assert!(ledger.wallet(&bob()).is_none());

    ledger.register(bob());
    ledger
        .send_wallet(
            alice(),
            alice(),
            transfer_min_value(0) + 1,
            transfer_body(balance / 4, 0),
        )
        .unwrap();

    assert_eq!(ledger.balance_of(&alice()), balance - balance / 4);
    assert_eq!(ledger.balance_of(&bob()), balance / 4);
    assert_eq!(ledger.circulating(), ledger.minter().total_supply());
    // Leftover gas returned to the response address as excesses.
    assert!(ledger
        .notices
        .iter()
        .any(|(dest, body)| *dest == alice()
            && matches!(body, MessageBody::Excesses { query_id: 7 })));
}

#[test]
fn forwarded_transfer_notifies_the_recipient() {
    let (mut ledger, balance) = funded();
    ledger.register(bob());
    let forward = ONE_TON / 10;
    ledger
        .send_wallet(
            alice(),
            alice(),
            transfer_min_value(forward) + 1,
            transfer_body(balance / 4, forward),
        )
        .unwrap();

    let notice = ledger
        .notices
        .iter()
        .find(|(dest, _)| *dest == bob())
        .map(|(_, body)| body)
        .expect("recipient notified");
    match notice {
        MessageBody::TransferNotification { amount, from, .. } => {
            assert_eq!(*amount, balance / 4);
            assert_eq!(*from, alice());
        }
        other => panic!("wrong notice: {other:?}"),
    }
}

// =============================================================================
// GUARDS
// =============================================================================

#[test]
fn only_the_owner_may_transfer() {
    let (mut ledger, balance) = funded();
    let err = ledger
        .send_wallet(
            bob(),
            alice(),
            transfer_min_value(0) + 1,
            transfer_body(balance / 4, 0),
        )
        .unwrap_err();
    assert_eq!(err, RouterError::Wallet(WalletError::NotOwner));
    assert_eq!(ledger.balance_of(&alice()), balance);
}

#[test]
fn underfunded_transfer_rejected_without_debit() {
    let (mut ledger, balance) = funded();
    let err = ledger
        .send_wallet(alice(), alice(), 1_000, transfer_body(balance / 4, 0))
        .unwrap_err();
    assert!(matches!(
        err,
        RouterError::Wallet(WalletError::NotEnoughTon { .. })
    ));
    assert_eq!(ledger.balance_of(&alice()), balance);
}

#[test]
fn overdrawn_transfer_rejected() {
    let (mut ledger, balance) = funded();
    let err = ledger
        .send_wallet(
            alice(),
            alice(),
            transfer_min_value(0) + 1,
            transfer_body(balance + 1, 0),
        )
        .unwrap_err();
    assert!(matches!(
        err,
        RouterError::Wallet(WalletError::BalanceError { .. })
    ));
    assert_eq!(ledger.balance_of(&alice()), balance);
}
