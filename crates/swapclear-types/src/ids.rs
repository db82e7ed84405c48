//! Identifiers used throughout swapclear.
//!
//! Auction ids are small sequential integers assigned by the registry;
//! account identities are opaque comparable UUIDv7 values passed explicitly
//! into every operation (no ambient "current caller").

use std::fmt;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

// ---------------------------------------------------------------------------
// AuctionId
// ---------------------------------------------------------------------------

/// Sequential auction identifier.
///
/// Assigned by the registry at creation: the first auction is id 1, ids
/// increase by one per creation, and an id is never reused. Id 0 is never
/// assigned, so it can safely stand for "no auction" in external systems.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Ord, PartialOrd, Serialize, Deserialize)]
pub struct AuctionId(pub u64);

impl AuctionId {
    /// The id the registry assigns to the first auction.
    pub const FIRST: Self = Self(crate::constants::FIRST_AUCTION_ID);

    /// The next id in sequence.
    #[must_use]
    pub fn next(self) -> Self {
        Self(self.0 + 1)
    }
}

impl fmt::Display for AuctionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "auction:{}", self.0)
    }
}

// ---------------------------------------------------------------------------
// AccountId
// ---------------------------------------------------------------------------

/// Opaque identity of a party interacting with the registry.
///
/// Owners, claimers, and the registry's own custody account are all
/// `AccountId`s. Equality comparison is the only operation the engine
/// performs on identities.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Ord, PartialOrd, Serialize, Deserialize)]
pub struct AccountId(pub Uuid);

impl AccountId {
    #[must_use]
    pub fn new() -> Self {
        Self(Uuid::now_v7())
    }

    #[must_use]
    pub fn from_bytes(bytes: [u8; 16]) -> Self {
        Self(Uuid::from_bytes(bytes))
    }
}

impl Default for AccountId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for AccountId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

// ---------------------------------------------------------------------------
// Asset
// ---------------------------------------------------------------------------

/// Type alias for asset identifiers (e.g., "WETH", "USDC").
pub type Asset = String;

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
