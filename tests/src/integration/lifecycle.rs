//! Init, buy, and sell settlement across the minter and the wallets.

use mat_minter::MinterError;
use mat_pricing::{convert_buy, convert_sell, split_buy_payment, INIT_MAT_PER_TON, TAX_PERCENT};
use mat_protocol::MessageBody;
use mat_router::RouterError;
use mat_types::ONE_TON;

use super::{admin, alice, setup};

// =============================================================================
// INITIALIZATION
// =============================================================================

#[test]
fn init_seeds_reserve_and_deployer_wallet() {
    let (ledger, _) = setup();

    assert_eq!(ledger.minter().total_supply(), 100 * INIT_MAT_PER_TON);
    assert_eq!(ledger.minter().reserve(), 100 * ONE_TON);
    // The whole initial supply sits in the deployer's wallet.
    assert_eq!(ledger.balance_of(&admin()), 100 * INIT_MAT_PER_TON);
    assert_eq!(ledger.circulating(), ledger.minter().total_supply());
}

#[test]
fn second_init_rejected() {
    let (mut ledger, keys) = setup();
    let err = ledger
        .send_minter(
            alice(),
            ONE_TON,
            MessageBody::InitMinter {
                query_id: 1,
                deposit: ONE_TON,
                server_pubkey: keys.public_key(),
            },
        )
        .unwrap_err();
    assert_eq!(err, RouterError::Minter(MinterError::AlreadyInitialized));
}

// =============================================================================
// BUY
// =============================================================================

#[test]
fn buy_credits_wallet_and_taxes_admin() {
    let (mut ledger, _) = setup();
    let supply = ledger.minter().total_supply();
    let reserve = ledger.minter().reserve();

    let payment = 1_000 * ONE_TON;
    ledger
        .send_minter(alice(), payment, MessageBody::Mint { query_id: 1 })
        .unwrap();

    let split = split_buy_payment(payment).unwrap();
    let minted = convert_buy(supply, reserve, split.net).unwrap();

    assert_eq!(split.admin_fee, payment * TAX_PERCENT / 100);
    assert_eq!(ledger.payouts_to(&admin()), split.admin_fee);
    assert_eq!(ledger.balance_of(&alice()), minted);
    assert_eq!(ledger.minter().total_supply(), supply + minted);
    assert_eq!(ledger.minter().reserve(), reserve + split.net);
    assert_eq!(ledger.circulating(), ledger.minter().total_supply());
}

#[test]
fn successive_buys_pay_a_rising_price() {
    let (mut ledger, _) = setup();
    ledger
        .send_minter(alice(), 1_000 * ONE_TON, MessageBody::Mint { query_id: 1 })
        .unwrap();
    let first = ledger.balance_of(&alice());
    ledger
        .send_minter(alice(), 1_000 * ONE_TON, MessageBody::Mint { query_id: 2 })
        .unwrap();
    let second = ledger.balance_of(&alice()) - first;

    // Same payment, higher reserve-per-unit: strictly fewer units.
    assert!(second < first, "{second} >= {first}");
}

// =============================================================================
// SELL
// =============================================================================

#[test]
fn sell_settles_through_burn_notification() {
    let (mut ledger, _) = setup();
    ledger
        .send_minter(alice(), 1_000 * ONE_TON, MessageBody::Mint { query_id: 1 })
        .unwrap();

    let supply = ledger.minter().total_supply();
    let reserve = ledger.minter().reserve();
    let balance = ledger.balance_of(&alice());
    let amount = balance / 2;
    let expected = convert_sell(supply, reserve, amount).unwrap();

    ledger
        .send_minter(
            alice(),
            ONE_TON,
            MessageBody::MateriaToTon {
                query_id: 2,
                amount,
            },
        )
        .unwrap();

    assert_eq!(ledger.balance_of(&alice()), balance - amount);
    assert_eq!(ledger.minter().total_supply(), supply - amount);
    assert_eq!(ledger.minter().reserve(), reserve - expected);
    assert_eq!(ledger.payouts_to(&alice()), expected);
    assert_eq!(ledger.circulating(), ledger.minter().total_supply());
}

#[test]
fn dust_sell_rejected_outright() {
    let (mut ledger, _) = setup();
    let err = ledger
        .send_minter(
            alice(),
            ONE_TON,
            MessageBody::MateriaToTon {
                query_id: 1,
                amount: 1,
            },
        )
        .unwrap_err();
    assert!(matches!(
        err,
        RouterError::Minter(MinterError::ExchangeTooSmall { .. })
    ));
}

#[test]
fn overdrawn_sell_bounces_without_side_effects() {
    let (mut ledger, _) = setup();
    ledger
        .send_minter(alice(), 1_000 * ONE_TON, MessageBody::Mint { query_id: 1 })
        .unwrap();

    let supply = ledger.minter().total_supply();
    let reserve = ledger.minter().reserve();
    let balance = ledger.balance_of(&alice());
    let payouts_before = ledger.payouts_to(&alice());

    // The minter prices the sell against global state; the wallet is the
    // one that knows the seller cannot cover it. The burn bounces and
    // the ledger is unchanged.
    ledger
        .send_minter(
            alice(),
            ONE_TON,
            MessageBody::MateriaToTon {
                query_id: 2,
                amount: balance * 2,
            },
        )
        .unwrap();

    assert_eq!(ledger.balance_of(&alice()), balance);
    assert_eq!(ledger.minter().total_supply(), supply);
    assert_eq!(ledger.minter().reserve(), reserve);
    assert_eq!(ledger.payouts_to(&alice()), payouts_before);
}

#[test]
fn buy_sell_round_trip_keeps_the_spread_in_reserve() {
    let (mut ledger, _) = setup();
    let reserve_start = ledger.minter().reserve();

    ledger
        .send_minter(alice(), 1_000 * ONE_TON, MessageBody::Mint { query_id: 1 })
        .unwrap();
    let bought = ledger.balance_of(&alice());
    ledger
        .send_minter(
            alice(),
            ONE_TON,
            MessageBody::MateriaToTon {
                query_id: 2,
                amount: bought,
            },
        )
        .unwrap();

    // Everything sold back: supply is at its initial level and the
    // payout was below the net payment, so the reserve grew.
    assert_eq!(ledger.balance_of(&alice()), 0);
    assert!(ledger.minter().reserve() > reserve_start);
    let paid = ledger.payouts_to(&alice());
    assert!(paid > 0 && paid < 1_000 * ONE_TON);
    assert_eq!(ledger.circulating(), ledger.minter().total_supply());
}
