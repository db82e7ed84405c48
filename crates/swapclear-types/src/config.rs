//! Configuration for the swapclear registry.

use chrono::Duration;
use serde::{Deserialize, Serialize};

use crate::constants;

/// Timing configuration for the auction state machine.
///
/// Fixed at registry construction ("deployment"); never mutated at runtime.
/// Both periods are expressed in milliseconds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuctionConfig {
    /// Window after creation within which a claim must occur. Once it
    /// elapses, a still-OPEN auction becomes reclaimable by its owner.
    pub auction_period_ms: u64,
    /// Mandatory delay after a claim before the claimer may settle. Gives
    /// any external verification/dispute process a window to act before
    /// settlement becomes irreversible.
    pub challenge_period_ms: u64,
}

impl AuctionConfig {
    /// The auction period as a [`chrono::Duration`].
    #[must_use]
    pub fn auction_period(&self) -> Duration {
        Duration::milliseconds(i64::try_from(self.auction_period_ms).unwrap_or(i64::MAX))
    }

    /// The challenge period as a [`chrono::Duration`].
    #[must_use]
    pub fn challenge_period(&self) -> Duration {
        Duration::milliseconds(i64::try_from(self.challenge_period_ms).unwrap_or(i64::MAX))
    }
}

impl Default for AuctionConfig {
    fn default() -> Self {
        Self {
            auction_period_ms: constants::DEFAULT_AUCTION_PERIOD_MS,
            challenge_period_ms: constants::DEFAULT_CHALLENGE_PERIOD_MS,
        }
    }
}
