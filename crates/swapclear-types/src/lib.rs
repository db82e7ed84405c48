//! # swapclear-types
//!
//! Shared types, errors, and configuration for the **swapclear** settlement
//! engine.
//!
//! This crate is the leaf dependency of the workspace — every other crate
//! depends on it. It defines:
//!
//! - **Identifiers**: [`AuctionId`], [`AccountId`], [`Asset`]
//! - **Auction model**: [`Auction`], [`AuctionStatus`]
//! - **Event model**: [`AuctionEvent`]
//! - **Configuration**: [`AuctionConfig`]
//! - **Errors**: [`SwapError`] with `SC_ERR_` prefix codes
//! - **Constants**: system-wide defaults

pub mod auction;
pub mod config;
pub mod constants;
pub mod error;
pub mod event;
pub mod ids;

// Re-export all primary types at crate root for ergonomic imports:
//   use swapclear_types::{Auction, AuctionStatus, SwapError, ...};

pub use auction::*;
pub use config::*;
pub use error::*;
pub use event::*;
pub use ids::*;

// Constants are accessed via `swapclear_types::constants::FOO`
// (not re-exported to avoid name collisions).
