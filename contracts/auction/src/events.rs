use soroban_sdk::{contractevent, Address};

/// Event emitted when the auction is created
#[contractevent]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct InitializedEventData {
    #[topic]
    pub owner: Address,
    pub deadline: u64,
}

/// Event emitted when a bid is accepted; `total` is the bidder's
/// cumulative escrowed amount after the bid
#[contractevent]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct BidAcceptedEventData {
    #[topic]
    pub bidder: Address,
    pub total: i128,
}

/// Event emitted when a bidder's escrow above the required amount
/// becomes eligible for withdrawal
#[contractevent]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ExcessAvailableEventData {
    #[topic]
    pub bidder: Address,
    pub amount: i128,
}

/// Event emitted when the auction is finalized
#[contractevent]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct AuctionEndedEventData {
    #[topic]
    pub winner: Address,
    pub amount: i128,
}

/// Event emitted when a losing bidder is refunded during finalization
#[contractevent]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct DepositRefundedEventData {
    #[topic]
    pub bidder: Address,
    pub amount: i128,
}

/// Event emitted when a pending withdrawal is claimed
#[contractevent]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct DepositWithdrawnEventData {
    #[topic]
    pub bidder: Address,
    pub amount: i128,
}

/// Event emitted when escrow above the required amount is withdrawn
/// before the deadline
#[contractevent]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct PartialRefundEventData {
    #[topic]
    pub bidder: Address,
    pub amount: i128,
}

/// Event emitted when the owner sweeps the remaining balance
#[contractevent]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct EmergencyWithdrawalEventData {
    #[topic]
    pub owner: Address,
    pub amount: i128,
}
