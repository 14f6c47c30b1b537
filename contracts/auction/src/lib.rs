#![no_std]

mod errors;
mod events;
mod storage;
mod types;

#[cfg(test)]
mod test;

use soroban_sdk::{contract, contractimpl, token, Address, Env, Vec};

use crate::errors::Error;
use crate::events::*;
use crate::storage::*;
use crate::types::{Auction, AuctionStatus, BidRecord};

// ============================================================================
// Constants
// ============================================================================

/// Percentage a new cumulative bid must beat the current best by
const MIN_INCREMENT_PCT: i128 = 5;

/// Commission percentage retained from the winner payout and every refund
const COMMISSION_RATE_PCT: i128 = 2;

/// Window before the deadline in which a best-raising bid extends it,
/// and the length of that extension, in seconds
const TIME_EXTENSION_SECS: u64 = 300;

/// Number of ledgers in a day (assuming ~5 second block time)
const DAY_IN_LEDGERS: u32 = 17280;

/// TTL extension amount for instance storage (30 days)
const INSTANCE_TTL_AMOUNT: u32 = 30 * DAY_IN_LEDGERS;

/// TTL threshold before extending (29 days)
const INSTANCE_TTL_THRESHOLD: u32 = INSTANCE_TTL_AMOUNT - DAY_IN_LEDGERS;

// ============================================================================
// Contract
// ============================================================================

/// Single-auction escrow ledger.
///
/// Every bidder's cumulative contribution stays escrowed in the contract
/// until the owner finalizes: the winning amount (minus commission) goes to
/// the owner and every other bidder is refunded (minus commission) in the
/// same call. Bids arriving inside the closing window push the deadline
/// back to deter sniping.
#[contract]
pub struct EscrowAuction;

#[contractimpl]
impl EscrowAuction {
    /// Create the auction. The deadline is `duration_seconds` from now;
    /// commission rate, minimum increment and anti-snipe extension are
    /// fixed policy constants.
    ///
    /// # Errors
    /// * `Error::AlreadyInitialized` - If the auction was already created
    /// * `Error::InvalidDuration` - If `duration_seconds` is zero
    pub fn initialize(
        e: &Env,
        owner: Address,
        token: Address,
        duration_seconds: u64,
    ) -> Result<(), Error> {
        owner.require_auth();

        if has_auction(e) {
            return Err(Error::AlreadyInitialized);
        }

        if duration_seconds == 0 {
            return Err(Error::InvalidDuration);
        }

        let now = e.ledger().timestamp();
        let auction = Auction {
            owner: owner.clone(),
            token,
            created_at: now,
            deadline: now + duration_seconds,
            status: AuctionStatus::Open,
            best_bidder: None,
            best_amount: 0,
        };

        save_auction(e, &auction);
        Self::extend_instance_ttl(e);

        InitializedEventData {
            owner,
            deadline: auction.deadline,
        }
        .publish(e);

        Ok(())
    }

    /// Place a bid. `amount` is transferred into escrow and added to the
    /// bidder's cumulative total; the cumulative total is what competes
    /// against the current best.
    ///
    /// The first bid sets the opening price outright. Any later bid must
    /// bring the bidder's total strictly above the current best plus the
    /// minimum increment, and a best-raising bid inside the closing window
    /// pushes the deadline back by `TIME_EXTENSION_SECS`.
    ///
    /// # Errors
    /// * `Error::AuctionClosed` - If the deadline has passed
    /// * `Error::InvalidAmount` - If `amount` is not positive
    /// * `Error::AlreadyHighestBidder` - If the caller holds the current best
    /// * `Error::BidTooLow` - If the new total does not beat the required minimum
    pub fn place_bid(e: &Env, bidder: Address, amount: i128) -> Result<(), Error> {
        bidder.require_auth();

        let mut auction = get_auction(e).ok_or(Error::NotInitialized)?;
        let now = e.ledger().timestamp();

        if auction.status != AuctionStatus::Open || now >= auction.deadline {
            return Err(Error::AuctionClosed);
        }

        if amount <= 0 {
            return Err(Error::InvalidAmount);
        }

        let prior = get_escrow(e, &bidder);
        let opening = auction.best_amount == 0;
        let mut excess = 0i128;

        if !opening {
            if auction.best_bidder.as_ref() == Some(&bidder) {
                return Err(Error::AlreadyHighestBidder);
            }

            let required = min_required(auction.best_amount);
            if prior + amount <= required {
                return Err(Error::BidTooLow);
            }

            // Escrow already above the requirement stays put; it only
            // becomes eligible for withdraw_excess.
            if prior > required {
                excess = prior - required;
            }
        }

        let token_client = token::Client::new(e, &auction.token);
        token_client.transfer(&bidder, &e.current_contract_address(), &amount);

        let new_total = prior + amount;
        set_escrow(e, &bidder, new_total);
        push_bidder_bid(e, &bidder, amount);

        if new_total > auction.best_amount {
            auction.best_bidder = Some(bidder.clone());
            auction.best_amount = new_total;
            push_bid_record(
                e,
                BidRecord {
                    bidder: bidder.clone(),
                    amount: new_total,
                    timestamp: now,
                },
            );

            // Anti-snipe: the opening bid never moves the deadline.
            if !opening && auction.deadline - now <= TIME_EXTENSION_SECS {
                auction.deadline += TIME_EXTENSION_SECS;
            }
        }

        save_auction(e, &auction);
        Self::extend_instance_ttl(e);

        BidAcceptedEventData {
            bidder: bidder.clone(),
            total: new_total,
        }
        .publish(e);

        if excess > 0 {
            ExcessAvailableEventData {
                bidder,
                amount: excess,
            }
            .publish(e);
        }

        Ok(())
    }

    /// Finalize the auction (owner only, after the deadline). Pays the
    /// winning amount minus commission to the owner, then refunds every
    /// other bidder their escrow minus commission in one pass.
    ///
    /// Each bidder is refunded exactly once even if they raised the best
    /// bid several times; a refund transfer that fails is credited to the
    /// bidder's pending withdrawals instead of aborting the pass.
    ///
    /// # Errors
    /// * `Error::NotAuthorized` - If the caller is not the owner
    /// * `Error::AuctionStillOpen` - If the deadline has not passed
    /// * `Error::AlreadyFinalized` - If the auction was already finalized
    /// * `Error::NoBids` - If nothing was ever bid
    pub fn finalize(e: &Env, caller: Address) -> Result<(), Error> {
        caller.require_auth();

        let mut auction = get_auction(e).ok_or(Error::NotInitialized)?;

        if caller != auction.owner {
            return Err(Error::NotAuthorized);
        }

        let now = e.ledger().timestamp();
        if now < auction.deadline {
            return Err(Error::AuctionStillOpen);
        }

        if auction.status != AuctionStatus::Open {
            return Err(Error::AlreadyFinalized);
        }

        let winner = auction.best_bidder.clone().ok_or(Error::NoBids)?;

        // Status flips before any funds leave the contract.
        auction.status = AuctionStatus::Ended;
        save_auction(e, &auction);

        let token_client = token::Client::new(e, &auction.token);
        let contract_address = e.current_contract_address();

        let payout = auction.best_amount - commission_of(auction.best_amount);
        clear_escrow(e, &winner);
        token_client.transfer(&contract_address, &auction.owner, &payout);

        AuctionEndedEventData {
            winner: winner.clone(),
            amount: auction.best_amount,
        }
        .publish(e);

        // Refund pass over the bid history. Duplicate entries for a bidder
        // are skipped by the zero-escrow check, so each distinct bidder is
        // paid at most once.
        let history = get_bid_history(e);
        for record in history.iter() {
            if record.bidder == winner {
                continue;
            }

            let escrow = get_escrow(e, &record.bidder);
            if escrow == 0 {
                continue;
            }

            let refund = escrow - commission_of(escrow);
            clear_escrow(e, &record.bidder);

            // A recipient that rejects the transfer keeps a claimable
            // credit; the remaining refunds still go through.
            if token_client
                .try_transfer(&contract_address, &record.bidder, &refund)
                .is_err()
            {
                add_pending(e, &record.bidder, refund);
            } else {
                DepositRefundedEventData {
                    bidder: record.bidder.clone(),
                    amount: refund,
                }
                .publish(e);
            }
        }

        Self::extend_instance_ttl(e);
        Ok(())
    }

    /// Claim a refund that could not be pushed during finalization.
    ///
    /// # Errors
    /// * `Error::AuctionStillOpen` - If the auction has not been finalized
    /// * `Error::NothingToClaim` - If the caller has no pending balance
    pub fn claim_refund(e: &Env, caller: Address) -> Result<(), Error> {
        caller.require_auth();

        let auction = get_auction(e).ok_or(Error::NotInitialized)?;

        if auction.status != AuctionStatus::Ended {
            return Err(Error::AuctionStillOpen);
        }

        let pending = get_pending(e, &caller);
        if pending == 0 {
            return Err(Error::NothingToClaim);
        }

        // Cleared before the transfer so a re-entering callee sees zero.
        clear_pending(e, &caller);

        let token_client = token::Client::new(e, &auction.token);
        token_client.transfer(&e.current_contract_address(), &caller, &pending);

        Self::extend_instance_ttl(e);

        DepositWithdrawnEventData {
            bidder: caller,
            amount: pending,
        }
        .publish(e);

        Ok(())
    }

    /// Withdraw the portion of the caller's escrow above what is required
    /// to remain a compliant bid. The requirement is recomputed against
    /// the live current best, so the withdrawable amount shrinks as later
    /// bids raise the bar.
    ///
    /// # Errors
    /// * `Error::AuctionClosed` - If the deadline has passed
    /// * `Error::CannotWithdrawAsLeader` - If the caller holds the current best
    /// * `Error::NoExcess` - If nothing is withdrawable
    pub fn withdraw_excess(e: &Env, caller: Address) -> Result<(), Error> {
        caller.require_auth();

        let auction = get_auction(e).ok_or(Error::NotInitialized)?;
        let now = e.ledger().timestamp();

        if auction.status != AuctionStatus::Open || now >= auction.deadline {
            return Err(Error::AuctionClosed);
        }

        if auction.best_bidder.as_ref() == Some(&caller) {
            return Err(Error::CannotWithdrawAsLeader);
        }

        let required = min_required(auction.best_amount);
        let escrow = get_escrow(e, &caller);
        let excess = escrow - required;

        if excess <= 0 {
            return Err(Error::NoExcess);
        }

        set_escrow(e, &caller, required);

        let token_client = token::Client::new(e, &auction.token);
        token_client.transfer(&e.current_contract_address(), &caller, &excess);

        Self::extend_instance_ttl(e);

        PartialRefundEventData {
            bidder: caller,
            amount: excess,
        }
        .publish(e);

        Ok(())
    }

    /// Sweep the contract's entire remaining balance to the owner.
    /// Backstop for funds stranded by failed refunds and for retained
    /// commissions, not a routine path.
    ///
    /// # Errors
    /// * `Error::NotAuthorized` - If the caller is not the owner
    /// * `Error::AuctionStillOpen` - If the auction has not been finalized
    pub fn emergency_withdraw(e: &Env, caller: Address) -> Result<(), Error> {
        caller.require_auth();

        let auction = get_auction(e).ok_or(Error::NotInitialized)?;

        if caller != auction.owner {
            return Err(Error::NotAuthorized);
        }

        if auction.status != AuctionStatus::Ended {
            return Err(Error::AuctionStillOpen);
        }

        let token_client = token::Client::new(e, &auction.token);
        let contract_address = e.current_contract_address();
        let balance = token_client.balance(&contract_address);

        if balance > 0 {
            token_client.transfer(&contract_address, &auction.owner, &balance);
        }

        EmergencyWithdrawalEventData {
            owner: auction.owner,
            amount: balance,
        }
        .publish(e);

        Ok(())
    }

    // ========================================================================
    // Queries
    // ========================================================================

    /// Current best bid as (bidder, cumulative amount); (None, 0) before
    /// the first bid
    pub fn get_current_best(e: &Env) -> Result<(Option<Address>, i128), Error> {
        let auction = get_auction(e).ok_or(Error::NotInitialized)?;
        Ok((auction.best_bidder, auction.best_amount))
    }

    /// Ordered history of every change of the current best
    pub fn get_bid_history(e: &Env) -> Result<Vec<BidRecord>, Error> {
        if !has_auction(e) {
            return Err(Error::NotInitialized);
        }
        Ok(get_bid_history(e))
    }

    /// Seconds until the deadline, 0 once it has passed
    pub fn get_time_remaining(e: &Env) -> Result<u64, Error> {
        let auction = get_auction(e).ok_or(Error::NotInitialized)?;
        let now = e.ledger().timestamp();
        Ok(auction.deadline.saturating_sub(now))
    }

    /// Raw values of every bid a bidder has placed, in order
    pub fn get_bidder_bids(e: &Env, bidder: Address) -> Vec<i128> {
        get_bidder_bids(e, &bidder)
    }

    /// A bidder's cumulative escrowed total
    pub fn get_bidder_total(e: &Env, bidder: Address) -> i128 {
        get_escrow(e, &bidder)
    }

    /// A bidder's balance claimable via `claim_refund`
    pub fn get_pending_withdrawal(e: &Env, bidder: Address) -> i128 {
        get_pending(e, &bidder)
    }

    pub fn get_deadline(e: &Env) -> Result<u64, Error> {
        let auction = get_auction(e).ok_or(Error::NotInitialized)?;
        Ok(auction.deadline)
    }

    pub fn get_owner(e: &Env) -> Result<Address, Error> {
        let auction = get_auction(e).ok_or(Error::NotInitialized)?;
        Ok(auction.owner)
    }

    pub fn is_ended(e: &Env) -> Result<bool, Error> {
        let auction = get_auction(e).ok_or(Error::NotInitialized)?;
        Ok(auction.status == AuctionStatus::Ended)
    }

    // ========================================================================
    // Internal helpers
    // ========================================================================

    /// Extend the TTL of instance storage.
    /// Called internally during state-changing operations.
    fn extend_instance_ttl(e: &Env) {
        e.storage()
            .instance()
            .extend_ttl(INSTANCE_TTL_THRESHOLD, INSTANCE_TTL_AMOUNT);
    }
}

/// Cumulative total a new bid must strictly exceed, truncating division
fn min_required(best_amount: i128) -> i128 {
    best_amount * (100 + MIN_INCREMENT_PCT) / 100
}

fn commission_of(amount: i128) -> i128 {
    amount * COMMISSION_RATE_PCT / 100
}
