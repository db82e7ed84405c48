//! # Auction — the escrow-and-match record
//!
//! One `Auction` is a single one-to-one swap offer: the owner escrows
//! `input_amount` of `input_asset` and advertises `min_output_amount` of
//! `output_asset` as the minimum acceptable fill.
//!
//! ## State Machine
//!
//! ```text
//!   ┌──────┐   claim    ┌─────────┐   settle   ┌─────────┐
//!   │ OPEN ├───────────▶│ CLAIMED ├───────────▶│ SETTLED │
//!   └──┬───┘            └─────────┘            └─────────┘
//!      │ reclaim (after auction period)
//!      ▼
//!   ┌─────────┐
//!   │ EXPIRED │
//!   └─────────┘
//! ```
//!
//! Transitions are **monotonic**: nothing ever returns to OPEN, a CLAIMED
//! auction can never expire, and SETTLED/EXPIRED are terminal. Terminal
//! records are never deleted — they remain as an immutable audit record.

use chrono::{DateTime, Duration, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::{AccountId, Asset, AuctionId, Result, SwapError};

/// The lifecycle state of an auction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AuctionStatus {
    /// Escrow is held; any party may claim until the auction period ends.
    Open,
    /// A claimer is committed. Settlement unlocks after the challenge period.
    Claimed,
    /// Escrow released to the claimer, output delivered to the owner.
    /// **Terminal.**
    Settled,
    /// The auction period elapsed unclaimed; escrow returned to the owner.
    /// **Terminal.**
    Expired,
}

impl AuctionStatus {
    /// Can this status transition to the given target status?
    #[must_use]
    pub fn can_transition_to(&self, target: Self) -> bool {
        matches!(
            (self, target),
            (Self::Open, Self::Claimed | Self::Expired) | (Self::Claimed, Self::Settled)
        )
    }

    /// Whether this status admits no further transitions.
    #[must_use]
    pub fn is_terminal(&self) -> bool {
        matches!(self, Self::Settled | Self::Expired)
    }
}

impl std::fmt::Display for AuctionStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Open => write!(f, "OPEN"),
            Self::Claimed => write!(f, "CLAIMED"),
            Self::Settled => write!(f, "SETTLED"),
            Self::Expired => write!(f, "EXPIRED"),
        }
    }
}

/// A single swap offer tracked by the registry.
///
/// `input_amount` and `min_output_amount` are fixed at creation and never
/// change. `claimer` and `claimed_at` are `None` while OPEN, set exactly
/// once at the CLAIMED transition, and never cleared afterwards.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Auction {
    /// Sequential identifier, unique and immutable once assigned.
    pub id: AuctionId,
    /// Asset the owner escrowed into registry custody.
    pub input_asset: Asset,
    /// Asset the claimer must deliver at settlement.
    pub output_asset: Asset,
    /// Escrowed quantity of `input_asset` (> 0).
    pub input_amount: Decimal,
    /// Minimum quantity of `output_asset` the claimer must deliver (> 0).
    pub min_output_amount: Decimal,
    /// When the create operation was accepted.
    pub created_at: DateTime<Utc>,
    /// When the auction was claimed; `None` while OPEN.
    pub claimed_at: Option<DateTime<Utc>>,
    /// The creator. Only party who may reclaim.
    pub owner: AccountId,
    /// The committed counterparty; `None` while OPEN. Only party who may
    /// settle.
    pub claimer: Option<AccountId>,
    /// Current lifecycle state.
    pub status: AuctionStatus,
}

impl Auction {
    /// Create a fresh OPEN auction record.
    #[must_use]
    pub fn new(
        id: AuctionId,
        owner: AccountId,
        input_asset: Asset,
        output_asset: Asset,
        input_amount: Decimal,
        min_output_amount: Decimal,
        created_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            input_asset,
            output_asset,
            input_amount,
            min_output_amount,
            created_at,
            claimed_at: None,
            owner,
            claimer: None,
            status: AuctionStatus::Open,
        }
    }

    /// The instant the auction period ends.
    ///
    /// Claims are valid strictly before this instant; reclaims become valid
    /// at this instant. No overlap, no gap. A period too large to represent
    /// saturates at the maximum instant: claims stay open, reclaims never
    /// unlock.
    #[must_use]
    pub fn claim_deadline(&self, auction_period: Duration) -> DateTime<Utc> {
        self.created_at
            .checked_add_signed(auction_period)
            .unwrap_or(DateTime::<Utc>::MAX_UTC)
    }

    /// The instant settlement unlocks, if the auction has been claimed.
    /// Saturates at the maximum instant like [`Auction::claim_deadline`].
    #[must_use]
    pub fn settlement_unlock(&self, challenge_period: Duration) -> Option<DateTime<Utc>> {
        self.claimed_at.map(|claimed| {
            claimed
                .checked_add_signed(challenge_period)
                .unwrap_or(DateTime::<Utc>::MAX_UTC)
        })
    }

    /// Transition OPEN → CLAIMED, recording the claimer and claim time.
    ///
    /// # Errors
    /// Returns [`SwapError::AuctionIsNotOpen`] if the auction is not OPEN.
    pub fn mark_claimed(&mut self, claimer: AccountId, now: DateTime<Utc>) -> Result<()> {
        if !self.status.can_transition_to(AuctionStatus::Claimed) {
            return Err(SwapError::AuctionIsNotOpen {
                id: self.id,
                status: self.status,
            });
        }
        self.claimer = Some(claimer);
        self.claimed_at = Some(now);
        self.status = AuctionStatus::Claimed;
        Ok(())
    }

    /// Transition CLAIMED → SETTLED.
    ///
    /// # Errors
    /// Returns [`SwapError::AuctionIsNotClaimed`] if the auction is not
    /// CLAIMED.
    pub fn mark_settled(&mut self) -> Result<()> {
        if !self.status.can_transition_to(AuctionStatus::Settled) {
            return Err(SwapError::AuctionIsNotClaimed {
                id: self.id,
                status: self.status,
            });
        }
        self.status = AuctionStatus::Settled;
        Ok(())
    }

    /// Transition OPEN → EXPIRED.
    ///
    /// # Errors
    /// Returns [`SwapError::AuctionIsNotExpired`] if the auction is not
    /// OPEN (a CLAIMED or terminal auction can never expire).
    pub fn mark_expired(&mut self) -> Result<()> {
        if !self.status.can_transition_to(AuctionStatus::Expired) {
            return Err(SwapError::AuctionIsNotExpired { id: self.id });
        }
        self.status = AuctionStatus::Expired;
        Ok(())
    }
}

/// Dummy auction for testing. **Never use in production.**
#[cfg(test)]
impl Auction {
    /// Create a dummy OPEN auction for unit tests.
    pub fn dummy(id: AuctionId, owner: AccountId, created_at: DateTime<Utc>) -> Self {
        Self::new(
            id,
            owner,
            "WETH".to_string(),
            "USDC".to_string(),
            Decimal::new(10, 0),
            Decimal::new(10_000, 0),
            created_at,
        )
    }
}
