//! Error types for the swapclear settlement engine.
//!
//! All errors use the `SC_ERR_` prefix convention for easy grepping in logs.
//! Error codes are grouped by subsystem:
//! - 1xx: Auction state machine errors
//! - 2xx: Asset transfer errors
//!
//! Every error is a caller-correctable precondition violation: no failure
//! mutates registry or asset state, and nothing is retried internally.

use rust_decimal::Decimal;
use thiserror::Error;

use crate::{AuctionId, AuctionStatus};

/// Central error enum for all swapclear operations.
#[derive(Debug, Error)]
pub enum SwapError {
    // =================================================================
    // Auction State Machine Errors (1xx)
    // =================================================================
    /// No auction with this id was ever created.
    #[error("SC_ERR_100: Auction does not exist: {0}")]
    AuctionDoesNotExist(AuctionId),

    /// A claim was attempted on an auction that is not OPEN.
    #[error("SC_ERR_101: Auction {id} is not open: status is {status}")]
    AuctionIsNotOpen { id: AuctionId, status: AuctionStatus },

    /// A claim was attempted at or after the end of the auction period.
    #[error("SC_ERR_102: Auction period has passed for {id}")]
    AuctionPeriodPassed { id: AuctionId },

    /// A reclaim was attempted on an auction that is not OPEN-and-elapsed.
    /// Covers both "still inside the auction period" and "already claimed
    /// or terminal" — neither can ever satisfy the reclaim precondition.
    #[error("SC_ERR_103: Auction {id} is not expired")]
    AuctionIsNotExpired { id: AuctionId },

    /// Only the auction owner may reclaim escrowed funds.
    #[error("SC_ERR_104: Caller is not the owner of auction {id}")]
    OnlyAuctionOwner { id: AuctionId },

    /// A settle was attempted on an auction that is not CLAIMED.
    #[error("SC_ERR_105: Auction {id} is not claimed: status is {status}")]
    AuctionIsNotClaimed { id: AuctionId, status: AuctionStatus },

    /// Only the recorded claimer may settle the auction.
    #[error("SC_ERR_106: Caller is not the claimer of auction {id}")]
    InvalidClaimer { id: AuctionId },

    /// A settle was attempted before the challenge period elapsed.
    #[error("SC_ERR_107: Challenge period still in progress for {id}")]
    ChallengePeriodInProgress { id: AuctionId },

    // =================================================================
    // Asset Transfer Errors (2xx)
    // =================================================================
    /// Not enough balance to perform the transfer.
    #[error("SC_ERR_200: Insufficient balance: need {needed}, have {available}")]
    InsufficientBalance { needed: Decimal, available: Decimal },

    /// Not enough allowance granted to the spender.
    #[error("SC_ERR_201: Insufficient allowance: need {needed}, approved {approved}")]
    InsufficientAllowance { needed: Decimal, approved: Decimal },

    /// An amount failed validation (zero or negative).
    #[error("SC_ERR_202: Invalid amount: {reason}")]
    InvalidAmount { reason: String },

    /// Supply conservation invariant violated — critical safety alert.
    #[error("SC_ERR_210: Supply invariant violation: {reason}")]
    SupplyInvariantViolation { reason: String },
}

/// Crate-wide `Result` alias.
pub type Result<T> = std::result::Result<T, SwapError>;
