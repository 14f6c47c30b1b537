use soroban_sdk::contracterror;

/// Error codes for the escrow auction contract.
#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum Error {
    /// Contract has already been initialized
    AlreadyInitialized = 1,
    /// Contract has not been initialized
    NotInitialized = 2,
    /// Auction duration must be nonzero
    InvalidDuration = 3,
    /// Bidding window has closed
    AuctionClosed = 4,
    /// Bid value must be positive
    InvalidAmount = 5,
    /// Caller already holds the current best bid
    AlreadyHighestBidder = 6,
    /// Cumulative bid does not beat the required minimum
    BidTooLow = 7,
    /// Caller is not the auction owner
    NotAuthorized = 8,
    /// Auction has not been finalized yet
    AuctionStillOpen = 9,
    /// Auction was already finalized
    AlreadyFinalized = 10,
    /// Auction received no bids
    NoBids = 11,
    /// No pending withdrawal balance for caller
    NothingToClaim = 12,
    /// Current best bidder cannot withdraw excess
    CannotWithdrawAsLeader = 13,
    /// Caller has no escrow above the required amount
    NoExcess = 14,
}
