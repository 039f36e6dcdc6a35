//! Server-signed flows (game mints, experience), admin operations, and
//! wallet discovery, all driven through encoded messages.

use mat_minter::MinterError;
use mat_protocol::MessageBody;
use mat_router::RouterError;
use mat_signature::{ServerKeyPair, SignedPayload};
use mat_types::{Address, Signature, ONE_TON};

use super::{admin, alice, bob, setup};
use crate::harness::Ledger;

fn game_mint_sig(keys: &ServerKeyPair, ledger: &Ledger, amount: u64, tx_id: u64) -> Signature {
    keys.sign(&SignedPayload::GameMint {
        sender: alice(),
        amount,
        tx_id,
        timestamp: ledger.now(),
    })
}

fn game_mint_body(ledger: &Ledger, amount: u64, tx_id: u64, signature: Signature) -> MessageBody {
    MessageBody::MintFromGame {
        query_id: tx_id,
        amount: amount as u128,
        tx_id,
        timestamp: ledger.now(),
        signature,
    }
}

// =============================================================================
// GAME MINTS
// =============================================================================

#[test]
fn signed_mint_credits_the_player() {
    let (mut ledger, keys) = setup();
    let supply = ledger.minter().total_supply();

    let sig = game_mint_sig(&keys, &ledger, 5_000_000, 1);
    ledger
        .send_minter(alice(), ONE_TON, game_mint_body(&ledger, 5_000_000, 1, sig))
        .unwrap();

    assert_eq!(ledger.balance_of(&alice()), 5_000_000);
    assert_eq!(ledger.minter().total_supply(), supply + 5_000_000);
    assert_eq!(ledger.circulating(), ledger.minter().total_supply());
}

#[test]
fn replayed_mint_rejected_once_consumed() {
    let (mut ledger, keys) = setup();
    let sig = game_mint_sig(&keys, &ledger, 5_000_000, 1);
    let body = game_mint_body(&ledger, 5_000_000, 1, sig);
    ledger.send_minter(alice(), ONE_TON, body.clone()).unwrap();

    let err = ledger.send_minter(alice(), ONE_TON, body).unwrap_err();
    assert_eq!(err, RouterError::Minter(MinterError::TxIdAlreadyUsed(1)));
    assert_eq!(ledger.balance_of(&alice()), 5_000_000);
}

#[test]
fn stale_signature_expires_but_id_stays_free() {
    let (mut ledger, keys) = setup();
    let sig = game_mint_sig(&keys, &ledger, 5_000_000, 1);
    let body = game_mint_body(&ledger, 5_000_000, 1, sig);

    ledger.advance_time(100_000);
    let err = ledger.send_minter(alice(), ONE_TON, body).unwrap_err();
    assert!(matches!(
        err,
        RouterError::Minter(MinterError::SignatureExpired { .. })
    ));

    // Re-signed for the current clock, the same id goes through.
    let sig = game_mint_sig(&keys, &ledger, 5_000_000, 1);
    ledger
        .send_minter(alice(), ONE_TON, game_mint_body(&ledger, 5_000_000, 1, sig))
        .unwrap();
    assert_eq!(ledger.balance_of(&alice()), 5_000_000);
}

#[test]
fn forged_signature_rejected() {
    let (mut ledger, _) = setup();
    let other_keys = ServerKeyPair::generate();
    let sig = game_mint_sig(&other_keys, &ledger, 5_000_000, 1);
    let err = ledger
        .send_minter(alice(), ONE_TON, game_mint_body(&ledger, 5_000_000, 1, sig))
        .unwrap_err();
    assert_eq!(err, RouterError::Minter(MinterError::InvalidSignature));
    assert_eq!(ledger.balance_of(&alice()), 0);
}

// =============================================================================
// EXPERIENCE
// =============================================================================

#[test]
fn experience_flows_through_to_the_wallet() {
    let (mut ledger, keys) = setup();
    let sig = keys.sign(&SignedPayload::Experience {
        sender: alice(),
        xp: 250,
        timestamp: ledger.now(),
    });
    ledger
        .send_minter(
            alice(),
            ONE_TON,
            MessageBody::ReceiveExperience {
                query_id: 1,
                xp: 250,
                timestamp: ledger.now(),
                signature: sig,
            },
        )
        .unwrap();
    assert_eq!(ledger.experience_of(&alice()), 250);

    // Experience accumulates across grants.
    let sig = keys.sign(&SignedPayload::Experience {
        sender: alice(),
        xp: 50,
        timestamp: ledger.now(),
    });
    ledger
        .send_minter(
            alice(),
            ONE_TON,
            MessageBody::ReceiveExperience {
                query_id: 2,
                xp: 50,
                timestamp: ledger.now(),
                signature: sig,
            },
        )
        .unwrap();
    assert_eq!(ledger.experience_of(&alice()), 300);
}

#[test]
fn experience_with_wrong_key_rejected() {
    let (mut ledger, _) = setup();
    let other_keys = ServerKeyPair::generate();
    let sig = other_keys.sign(&SignedPayload::Experience {
        sender: alice(),
        xp: 250,
        timestamp: ledger.now(),
    });
    let err = ledger
        .send_minter(
            alice(),
            ONE_TON,
            MessageBody::ReceiveExperience {
                query_id: 1,
                xp: 250,
                timestamp: ledger.now(),
                signature: sig,
            },
        )
        .unwrap_err();
    assert_eq!(err, RouterError::Minter(MinterError::InvalidSignature));
    assert_eq!(ledger.experience_of(&alice()), 0);
}

// =============================================================================
// ADMIN OPERATIONS
// =============================================================================

#[test]
fn pubkey_rotation_swaps_the_trusted_signer() {
    let (mut ledger, old_keys) = setup();
    let new_keys = ServerKeyPair::generate();
    ledger
        .send_minter(
            admin(),
            ONE_TON,
            MessageBody::UpdatePubkey {
                query_id: 1,
                new_pubkey: new_keys.public_key(),
            },
        )
        .unwrap();

    let old_sig = game_mint_sig(&old_keys, &ledger, 1_000, 1);
    assert_eq!(
        ledger
            .send_minter(alice(), ONE_TON, game_mint_body(&ledger, 1_000, 1, old_sig))
            .unwrap_err(),
        RouterError::Minter(MinterError::InvalidSignature)
    );

    let new_sig = game_mint_sig(&new_keys, &ledger, 1_000, 1);
    ledger
        .send_minter(alice(), ONE_TON, game_mint_body(&ledger, 1_000, 1, new_sig))
        .unwrap();
    assert_eq!(ledger.balance_of(&alice()), 1_000);
}

#[test]
fn changed_admin_collects_the_buy_tax() {
    let (mut ledger, _) = setup();
    ledger
        .send_minter(
            admin(),
            ONE_TON,
            MessageBody::ChangeAdmin {
                query_id: 1,
                new_admin: bob(),
            },
        )
        .unwrap();

    ledger
        .send_minter(alice(), 100 * ONE_TON, MessageBody::Mint { query_id: 2 })
        .unwrap();
    assert_eq!(ledger.payouts_to(&admin()), 0);
    assert_eq!(ledger.payouts_to(&bob()), 30 * ONE_TON);
}

#[test]
fn non_admin_operations_denied() {
    let (mut ledger, keys) = setup();
    assert_eq!(
        ledger
            .send_minter(
                alice(),
                ONE_TON,
                MessageBody::UpdatePubkey {
                    query_id: 1,
                    new_pubkey: keys.public_key(),
                },
            )
            .unwrap_err(),
        RouterError::Minter(MinterError::AccessDenied)
    );
    assert_eq!(
        ledger
            .send_minter(
                alice(),
                ONE_TON,
                MessageBody::ChangeAdmin {
                    query_id: 1,
                    new_admin: alice(),
                },
            )
            .unwrap_err(),
        RouterError::Minter(MinterError::NotAdmin)
    );
}

// =============================================================================
// DISCOVERY
// =============================================================================

#[test]
fn discovery_returns_the_derived_wallet_address() {
    let (mut ledger, _) = setup();
    let expected = ledger.minter().wallet_address_of(&bob());
    ledger
        .send_minter(
            alice(),
            ONE_TON,
            MessageBody::ProvideWalletAddress {
                query_id: 9,
                owner: bob(),
                include_address: true,
            },
        )
        .unwrap();

    let notice = ledger
        .notices
        .iter()
        .find(|(dest, _)| *dest == alice())
        .map(|(_, body)| body)
        .expect("reply delivered");
    match notice {
        MessageBody::TakeWalletAddress {
            query_id,
            wallet,
            owner,
        } => {
            assert_eq!(*query_id, 9);
            assert_eq!(*wallet, Some(expected));
            assert_eq!(*owner, Some(bob()));
        }
        other => panic!("wrong reply: {other:?}"),
    }
}

#[test]
fn discovery_for_a_foreign_owner_is_null() {
    let (mut ledger, _) = setup();
    ledger
        .send_minter(
            alice(),
            ONE_TON,
            MessageBody::ProvideWalletAddress {
                query_id: 9,
                owner: Address::on_workchain(-1, [0x99; 32]),
                include_address: false,
            },
        )
        .unwrap();
    let notice = ledger
        .notices
        .iter()
        .find(|(dest, _)| *dest == alice())
        .map(|(_, body)| body)
        .expect("reply delivered");
    assert!(matches!(
        notice,
        MessageBody::TakeWalletAddress {
            wallet: None,
            owner: None,
            ..
        }
    ));
}
