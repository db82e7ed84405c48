//! # swapclear-registry
//!
//! The **Auction Registry & State Machine** — the only crate in this
//! workspace with non-trivial logic. It owns every auction record,
//! validates and applies every transition, and performs the associated
//! asset movements through the [`swapclear_assets::TokenBank`]
//! collaborator.
//!
//! ## Operation Flow
//!
//! ```text
//! caller ──▶ AuctionRegistry::{create,claim,settle,reclaim}
//!               │ lookup by id
//!               │ check caller identity, status, elapsed time
//!               ├─ fail: typed SwapError, no state change
//!               └─ ok:   apply transition + move balances + emit event
//! ```
//!
//! Every operation takes the caller identity and the current time as
//! explicit parameters: the registry never reads a wall clock and has no
//! ambient "current caller", which keeps the time-gated logic
//! deterministic and replayable in tests.

pub mod registry;

pub use registry::AuctionRegistry;
