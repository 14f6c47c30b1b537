use crate::types::{Auction, BidRecord, DataKey};
use soroban_sdk::{Address, Env, Vec};

pub fn has_auction(e: &Env) -> bool {
    e.storage().instance().has(&DataKey::Auction)
}

pub fn get_auction(e: &Env) -> Option<Auction> {
    e.storage().instance().get(&DataKey::Auction)
}

pub fn save_auction(e: &Env, auction: &Auction) {
    e.storage().instance().set(&DataKey::Auction, auction);
}

pub fn get_bid_history(e: &Env) -> Vec<BidRecord> {
    e.storage()
        .persistent()
        .get(&DataKey::BidHistory)
        .unwrap_or(Vec::new(e))
}

pub fn push_bid_record(e: &Env, record: BidRecord) {
    let mut history = get_bid_history(e);
    history.push_back(record);
    e.storage().persistent().set(&DataKey::BidHistory, &history);
}

pub fn get_escrow(e: &Env, bidder: &Address) -> i128 {
    let key = DataKey::Escrow(bidder.clone());
    e.storage().persistent().get(&key).unwrap_or(0)
}

pub fn set_escrow(e: &Env, bidder: &Address, amount: i128) {
    let key = DataKey::Escrow(bidder.clone());
    e.storage().persistent().set(&key, &amount);
}

pub fn clear_escrow(e: &Env, bidder: &Address) {
    let key = DataKey::Escrow(bidder.clone());
    e.storage().persistent().remove(&key);
}

pub fn get_bidder_bids(e: &Env, bidder: &Address) -> Vec<i128> {
    let key = DataKey::BidderBids(bidder.clone());
    e.storage().persistent().get(&key).unwrap_or(Vec::new(e))
}

pub fn push_bidder_bid(e: &Env, bidder: &Address, amount: i128) {
    let key = DataKey::BidderBids(bidder.clone());
    let mut bids = get_bidder_bids(e, bidder);
    bids.push_back(amount);
    e.storage().persistent().set(&key, &bids);
}

pub fn get_pending(e: &Env, bidder: &Address) -> i128 {
    let key = DataKey::Pending(bidder.clone());
    e.storage().persistent().get(&key).unwrap_or(0)
}

pub fn add_pending(e: &Env, bidder: &Address, amount: i128) {
    let key = DataKey::Pending(bidder.clone());
    let total = get_pending(e, bidder) + amount;
    e.storage().persistent().set(&key, &total);
}

pub fn clear_pending(e: &Env, bidder: &Address) {
    let key = DataKey::Pending(bidder.clone());
    e.storage().persistent().remove(&key);
}
