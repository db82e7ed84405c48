//! Observable event records for the swapclear audit trail.
//!
//! Every successful state transition emits exactly one [`AuctionEvent`]
//! into the registry's append-only log. Events are consumed by external
//! auditors and indexers — the engine itself never reads them back.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::{AccountId, Asset, AuctionId, AuctionStatus};

/// One observable record per successful registry transition.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum AuctionEvent {
    /// An auction was created and its input escrowed.
    Created {
        id: AuctionId,
        input_asset: Asset,
        output_asset: Asset,
        input_amount: Decimal,
        min_output_amount: Decimal,
        created_at: DateTime<Utc>,
        status: AuctionStatus,
    },
    /// A counterparty committed to fill the auction.
    Claimed {
        id: AuctionId,
        claimer: AccountId,
        claimed_at: DateTime<Utc>,
        status: AuctionStatus,
    },
    /// The fill became final; escrow released, output delivered.
    Settled { id: AuctionId, status: AuctionStatus },
    /// The auction period elapsed unclaimed; escrow returned to the owner.
    FundsReclaimed { id: AuctionId, status: AuctionStatus },
}

impl AuctionEvent {
    /// The auction this event belongs to.
    #[must_use]
    pub fn auction_id(&self) -> AuctionId {
        match self {
            Self::Created { id, .. }
            | Self::Claimed { id, .. }
            | Self::Settled { id, .. }
            | Self::FundsReclaimed { id, .. } => *id,
        }
    }

    /// The auction status resulting from the transition.
    #[must_use]
    pub fn status(&self) -> AuctionStatus {
        match self {
            Self::Created { status, .. }
            | Self::Claimed { status, .. }
            | Self::Settled { status, .. }
            | Self::FundsReclaimed { status, .. } => *status,
        }
    }

    /// Stable label for log grepping.
    #[must_use]
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Created { .. } => "AUCTION_CREATED",
            Self::Claimed { .. } => "AUCTION_CLAIMED",
            Self::Settled { .. } => "AUCTION_SETTLED",
            Self::FundsReclaimed { .. } => "AUCTION_FUNDS_CLAIMED",
        }
    }

    /// SHA-256 digest over the canonical JSON encoding, hex-encoded.
    ///
    /// Lets an external auditor fingerprint the log without re-parsing it.
    #[must_use]
    pub fn digest(&self) -> String {
        use sha2::{Digest, Sha256};
        let mut hasher = Sha256::new();
        hasher.update(b"swapclear:event:v1:");
        // Serialization of these variants cannot fail: no maps, no floats.
        hasher.update(serde_json::to_vec(self).unwrap_or_default());
        hex::encode(hasher.finalize())
    }
}

impl std::fmt::Display for AuctionEvent {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {} -> {}", self.kind(), self.auction_id(), self.status())
    }
}
