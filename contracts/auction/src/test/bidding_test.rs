use crate::errors::Error;
use crate::test::{advance_ledger, setup_test, DURATION};
use soroban_sdk::vec;

#[test]
fn test_first_bid_becomes_current_best() {
    let (_env, client, _, alice, _, token) = setup_test();

    client.place_bid(&alice, &1000);

    assert_eq!(client.get_current_best(), (Some(alice.clone()), 1000));
    assert_eq!(client.get_bidder_total(&alice), 1000);
    assert_eq!(token.balance(&alice), 999_000);
    assert_eq!(token.balance(&client.address), 1000);

    let history = client.get_bid_history();
    assert_eq!(history.len(), 1);
    let record = history.get(0).unwrap();
    assert_eq!(record.bidder, alice);
    assert_eq!(record.amount, 1000);
}

#[test]
fn test_non_positive_bid_rejected() {
    let (_env, client, _, alice, _, _) = setup_test();

    assert_eq!(
        client.try_place_bid(&alice, &0),
        Err(Ok(Error::InvalidAmount))
    );
    assert_eq!(
        client.try_place_bid(&alice, &-5),
        Err(Ok(Error::InvalidAmount))
    );
}

#[test]
fn test_bid_at_deadline_rejected() {
    let (env, client, _, alice, _, _) = setup_test();

    advance_ledger(&env, DURATION);
    assert_eq!(
        client.try_place_bid(&alice, &1000),
        Err(Ok(Error::AuctionClosed))
    );
}

#[test]
fn test_leader_cannot_raise_own_bid() {
    let (_env, client, _, alice, _, _) = setup_test();

    client.place_bid(&alice, &1000);
    assert_eq!(
        client.try_place_bid(&alice, &2000),
        Err(Ok(Error::AlreadyHighestBidder))
    );
}

#[test]
fn test_bid_not_beating_required_rejected() {
    let (_env, client, _, alice, bob, _) = setup_test();

    client.place_bid(&alice, &1000);

    // required is 1000 * 105 / 100 = 1050, strictly exceeded only at 1051
    assert_eq!(
        client.try_place_bid(&bob, &1050),
        Err(Ok(Error::BidTooLow))
    );

    client.place_bid(&bob, &1051);
    assert_eq!(client.get_current_best(), (Some(bob.clone()), 1051));
}

#[test]
fn test_required_amount_truncates() {
    let (_env, client, _, alice, bob, _) = setup_test();

    // 10 * 105 / 100 truncates to 10, so 11 already qualifies
    client.place_bid(&alice, &10);
    assert_eq!(client.try_place_bid(&bob, &10), Err(Ok(Error::BidTooLow)));

    client.place_bid(&bob, &11);
    assert_eq!(client.get_current_best(), (Some(bob.clone()), 11));
}

#[test]
fn test_cumulative_total_competes() {
    let (_env, client, _, alice, bob, _) = setup_test();

    client.place_bid(&alice, &1000);
    client.place_bid(&bob, &1100);

    // alice already has 1000 in escrow; 200 more beats 1100 * 105 / 100 = 1155
    client.place_bid(&alice, &200);

    assert_eq!(client.get_current_best(), (Some(alice.clone()), 1200));
    assert_eq!(client.get_bidder_total(&alice), 1200);
    assert_eq!(client.get_bid_history().len(), 3);
}

#[test]
fn test_per_bidder_history_records_raw_values() {
    let (env, client, _, alice, bob, _) = setup_test();

    client.place_bid(&alice, &1000);
    client.place_bid(&bob, &1100);
    client.place_bid(&alice, &200);

    assert_eq!(client.get_bidder_bids(&alice), vec![&env, 1000, 200]);
    assert_eq!(client.get_bidder_bids(&bob), vec![&env, 1100]);
}

#[test]
fn test_snipe_bid_extends_deadline() {
    let (env, client, _, alice, bob, _) = setup_test();

    client.place_bid(&alice, &1000);

    // 200 seconds left, inside the 300 second window
    advance_ledger(&env, DURATION - 200);
    client.place_bid(&bob, &1100);

    assert_eq!(client.get_deadline(), DURATION + 300);
    assert_eq!(client.get_time_remaining(), 500);
}

#[test]
fn test_early_bid_keeps_deadline() {
    let (env, client, _, alice, bob, _) = setup_test();

    client.place_bid(&alice, &1000);

    advance_ledger(&env, 1000);
    client.place_bid(&bob, &1100);

    assert_eq!(client.get_deadline(), DURATION);
}

#[test]
fn test_opening_bid_never_extends() {
    let (env, client, _, alice, _, _) = setup_test();

    advance_ledger(&env, DURATION - 100);
    client.place_bid(&alice, &1000);

    assert_eq!(client.get_deadline(), DURATION);
    assert_eq!(client.get_time_remaining(), 100);
}

#[test]
fn test_escrow_sum_matches_contract_balance() {
    let (_env, client, _, alice, bob, token) = setup_test();

    client.place_bid(&alice, &1000);
    assert_eq!(
        client.get_bidder_total(&alice) + client.get_bidder_total(&bob),
        token.balance(&client.address)
    );

    client.place_bid(&bob, &1100);
    assert_eq!(
        client.get_bidder_total(&alice) + client.get_bidder_total(&bob),
        token.balance(&client.address)
    );

    client.place_bid(&alice, &200);
    assert_eq!(
        client.get_bidder_total(&alice) + client.get_bidder_total(&bob),
        token.balance(&client.address)
    );
}
