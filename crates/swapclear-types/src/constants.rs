//! System-wide constants for the swapclear settlement engine.

/// Id assigned to the first auction ever created. Id 0 is never assigned.
pub const FIRST_AUCTION_ID: u64 = 1;

/// Default auction period in milliseconds: the window after creation during
/// which a claim may occur (24 hours).
pub const DEFAULT_AUCTION_PERIOD_MS: u64 = 86_400_000;

/// Default challenge period in milliseconds: the mandatory delay between a
/// claim and settlement becoming available (1 hour).
pub const DEFAULT_CHALLENGE_PERIOD_MS: u64 = 3_600_000;

/// Version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Engine name.
pub const ENGINE_NAME: &str = "swapclear";
