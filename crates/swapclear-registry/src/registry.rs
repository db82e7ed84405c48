//! The auction registry: record store and transition controller in one.
//!
//! The registry holds custody of every OPEN/CLAIMED auction's escrow under
//! its own account in the token bank. Transitions are strictly serial:
//! each operation either completes in full or fails with a typed error and
//! no state change — there are no in-flight intermediate states.
//!
//! Time gating uses one boundary policy throughout: the still-valid window
//! is strict (`now < deadline`), the elapsed window is inclusive
//! (`now >= deadline`), so the instant a period elapses the opposing
//! action becomes available with no overlap and no gap.

use std::collections::HashMap;

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use swapclear_assets::TokenBank;
use swapclear_types::{
    AccountId, Auction, AuctionConfig, AuctionEvent, AuctionId, AuctionStatus, Result, SwapError,
};

/// Owns all auction records and applies every legal transition.
pub struct AuctionRegistry {
    /// The registry's own custody account in the token bank. Escrow is
    /// held here from creation until the terminal transition.
    custody: AccountId,
    /// Timing configuration, fixed at construction.
    config: AuctionConfig,
    /// All auctions ever created, keyed by id. Never pruned: terminal
    /// records remain as an immutable audit record.
    auctions: HashMap<AuctionId, Auction>,
    /// The id the next created auction will receive.
    next_id: AuctionId,
    /// Append-only event log, in transition order.
    events: Vec<AuctionEvent>,
}

impl AuctionRegistry {
    /// Create an empty registry custodied by `custody`.
    #[must_use]
    pub fn new(custody: AccountId, config: AuctionConfig) -> Self {
        Self {
            custody,
            config,
            auctions: HashMap::new(),
            next_id: AuctionId::FIRST,
            events: Vec::new(),
        }
    }

    // =====================================================================
    // Operations
    // =====================================================================

    /// Create an auction: escrow `input_amount` of `input_asset` from
    /// `owner` and open the record for claiming.
    ///
    /// The owner must have approved the registry's custody account for at
    /// least `input_amount` beforehand.
    ///
    /// # Errors
    /// - [`SwapError::InvalidAmount`] if either amount is not positive
    /// - [`SwapError::InsufficientAllowance`] /
    ///   [`SwapError::InsufficientBalance`] from the escrow pull
    #[allow(clippy::too_many_arguments)]
    pub fn create_auction(
        &mut self,
        bank: &mut TokenBank,
        owner: AccountId,
        now: DateTime<Utc>,
        input_asset: &str,
        output_asset: &str,
        input_amount: Decimal,
        min_output_amount: Decimal,
    ) -> Result<AuctionId> {
        if input_amount <= Decimal::ZERO {
            return Err(SwapError::InvalidAmount {
                reason: format!("input amount must be positive, got {input_amount}"),
            });
        }
        if min_output_amount <= Decimal::ZERO {
            return Err(SwapError::InvalidAmount {
                reason: format!("min output amount must be positive, got {min_output_amount}"),
            });
        }

        // Pull the escrow before touching registry state: if the transfer
        // fails, no record exists and no id was consumed.
        bank.transfer_from(input_asset, self.custody, owner, self.custody, input_amount)?;

        let id = self.next_id;
        self.next_id = self.next_id.next();

        let auction = Auction::new(
            id,
            owner,
            input_asset.to_string(),
            output_asset.to_string(),
            input_amount,
            min_output_amount,
            now,
        );
        self.auctions.insert(id, auction);

        self.events.push(AuctionEvent::Created {
            id,
            input_asset: input_asset.to_string(),
            output_asset: output_asset.to_string(),
            input_amount,
            min_output_amount,
            created_at: now,
            status: AuctionStatus::Open,
        });
        tracing::info!(
            auction = %id,
            %owner,
            input_asset,
            %input_amount,
            output_asset,
            %min_output_amount,
            "auction created"
        );

        Ok(id)
    }

    /// Commit `claimer` to fill the auction. No asset movement occurs:
    /// the claimer's obligation is enforced at settlement.
    ///
    /// # Errors
    /// Precondition order: [`SwapError::AuctionDoesNotExist`],
    /// [`SwapError::AuctionIsNotOpen`], [`SwapError::AuctionPeriodPassed`].
    pub fn claim_auction(
        &mut self,
        id: AuctionId,
        claimer: AccountId,
        now: DateTime<Utc>,
    ) -> Result<()> {
        let auction_period = self.config.auction_period();
        let auction = self
            .auctions
            .get_mut(&id)
            .ok_or(SwapError::AuctionDoesNotExist(id))?;

        if auction.status != AuctionStatus::Open {
            return Err(SwapError::AuctionIsNotOpen {
                id,
                status: auction.status,
            });
        }
        if now >= auction.claim_deadline(auction_period) {
            return Err(SwapError::AuctionPeriodPassed { id });
        }

        auction.mark_claimed(claimer, now)?;

        self.events.push(AuctionEvent::Claimed {
            id,
            claimer,
            claimed_at: now,
            status: AuctionStatus::Claimed,
        });
        tracing::info!(auction = %id, %claimer, "auction claimed");

        Ok(())
    }

    /// Settle the auction: release the escrow to the claimer and deliver
    /// `min_output_amount` of the output asset from the claimer to the
    /// owner. All-or-nothing — both transfers are verified against the
    /// bank before either balance moves.
    ///
    /// The claimer must have approved the registry's custody account for
    /// at least `min_output_amount` of the output asset.
    ///
    /// # Errors
    /// Precondition order: [`SwapError::AuctionDoesNotExist`],
    /// [`SwapError::AuctionIsNotClaimed`], [`SwapError::InvalidClaimer`],
    /// [`SwapError::ChallengePeriodInProgress`], then the transfer errors.
    pub fn settle_auction(
        &mut self,
        bank: &mut TokenBank,
        id: AuctionId,
        caller: AccountId,
        now: DateTime<Utc>,
    ) -> Result<()> {
        let auction = self
            .auctions
            .get(&id)
            .ok_or(SwapError::AuctionDoesNotExist(id))?;

        if auction.status != AuctionStatus::Claimed {
            return Err(SwapError::AuctionIsNotClaimed {
                id,
                status: auction.status,
            });
        }
        if auction.claimer != Some(caller) {
            return Err(SwapError::InvalidClaimer { id });
        }
        match auction.settlement_unlock(self.config.challenge_period()) {
            Some(unlock) if now >= unlock => {}
            _ => return Err(SwapError::ChallengePeriodInProgress { id }),
        }

        let owner = auction.owner;
        let input_asset = auction.input_asset.clone();
        let output_asset = auction.output_asset.clone();
        let input_amount = auction.input_amount;
        let min_output_amount = auction.min_output_amount;

        // Check phase: verify both legs before mutating either balance,
        // surfacing the same typed errors the transfers would raise.
        let approved = bank.allowance(&output_asset, caller, self.custody);
        if approved < min_output_amount {
            return Err(SwapError::InsufficientAllowance {
                needed: min_output_amount,
                approved,
            });
        }
        let claimer_output = bank.balance_of(&output_asset, caller);
        if claimer_output < min_output_amount {
            return Err(SwapError::InsufficientBalance {
                needed: min_output_amount,
                available: claimer_output,
            });
        }
        let escrowed = bank.balance_of(&input_asset, self.custody);
        if escrowed < input_amount {
            return Err(SwapError::InsufficientBalance {
                needed: input_amount,
                available: escrowed,
            });
        }

        // Commit phase: both legs are now guaranteed to succeed.
        bank.transfer(&input_asset, self.custody, caller, input_amount)?;
        bank.transfer_from(&output_asset, self.custody, caller, owner, min_output_amount)?;

        let auction = self
            .auctions
            .get_mut(&id)
            .ok_or(SwapError::AuctionDoesNotExist(id))?;
        auction.mark_settled()?;

        self.events.push(AuctionEvent::Settled {
            id,
            status: AuctionStatus::Settled,
        });
        tracing::info!(
            auction = %id,
            claimer = %caller,
            %input_amount,
            %min_output_amount,
            "auction settled"
        );

        Ok(())
    }

    /// Return the escrow to the owner of a still-OPEN auction whose
    /// auction period has elapsed.
    ///
    /// # Errors
    /// Precondition order: [`SwapError::AuctionDoesNotExist`],
    /// [`SwapError::OnlyAuctionOwner`], then a single
    /// [`SwapError::AuctionIsNotExpired`] covering both "still inside the
    /// auction period" and "no longer OPEN".
    pub fn reclaim_auction_funds(
        &mut self,
        bank: &mut TokenBank,
        id: AuctionId,
        caller: AccountId,
        now: DateTime<Utc>,
    ) -> Result<()> {
        let auction = self
            .auctions
            .get(&id)
            .ok_or(SwapError::AuctionDoesNotExist(id))?;

        if auction.owner != caller {
            return Err(SwapError::OnlyAuctionOwner { id });
        }
        if auction.status != AuctionStatus::Open
            || now < auction.claim_deadline(self.config.auction_period())
        {
            return Err(SwapError::AuctionIsNotExpired { id });
        }

        let input_asset = auction.input_asset.clone();
        let input_amount = auction.input_amount;

        bank.transfer(&input_asset, self.custody, caller, input_amount)?;

        let auction = self
            .auctions
            .get_mut(&id)
            .ok_or(SwapError::AuctionDoesNotExist(id))?;
        auction.mark_expired()?;

        self.events.push(AuctionEvent::FundsReclaimed {
            id,
            status: AuctionStatus::Expired,
        });
        tracing::info!(auction = %id, owner = %caller, %input_amount, "auction funds reclaimed");

        Ok(())
    }

    // =====================================================================
    // Queries (never mutate, never fail)
    // =====================================================================

    /// Look up an auction by id. Unknown ids return `None` — the registry
    /// never fabricates a default record, and id 0 is never assigned.
    #[must_use]
    pub fn auction(&self, id: AuctionId) -> Option<&Auction> {
        self.auctions.get(&id)
    }

    /// Number of auctions ever created (terminal records included).
    #[must_use]
    pub fn auction_count(&self) -> usize {
        self.auctions.len()
    }

    /// The id the next created auction will receive.
    #[must_use]
    pub fn next_auction_id(&self) -> AuctionId {
        self.next_id
    }

    /// The append-only event log, in transition order.
    #[must_use]
    pub fn events(&self) -> &[AuctionEvent] {
        &self.events
    }

    /// The registry's custody account in the token bank.
    #[must_use]
    pub fn custody_account(&self) -> AccountId {
        self.custody
    }

    /// The timing configuration this registry was constructed with.
    #[must_use]
    pub fn config(&self) -> &AuctionConfig {
        &self.config
    }
}
