use soroban_sdk::{contracttype, Address};

#[contracttype]
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum AuctionStatus {
    Open = 0,
    Ended = 1,
}

/// Singleton auction state. `owner` and `token` are fixed at
/// initialization; `deadline` only ever grows via the anti-snipe
/// extension, and `best_amount` is monotonically non-decreasing.
#[contracttype]
#[derive(Clone, Debug, PartialEq)]
pub struct Auction {
    pub owner: Address,
    pub token: Address,
    pub created_at: u64,
    pub deadline: u64,
    pub status: AuctionStatus,
    pub best_bidder: Option<Address>,
    pub best_amount: i128,
}

/// One entry of the append-only bid history. `amount` is the cumulative
/// total that became the current best, not the raw value sent.
#[contracttype]
#[derive(Clone, Debug, PartialEq)]
pub struct BidRecord {
    pub bidder: Address,
    pub amount: i128,
    pub timestamp: u64,
}

#[contracttype]
pub enum DataKey {
    Auction,
    BidHistory,
    Escrow(Address),
    BidderBids(Address),
    Pending(Address),
}
