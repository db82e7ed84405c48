//! # swapclear-assets
//!
//! The fungible-token collaborator for the swapclear registry.
//!
//! The registry treats assets as external services exposing only
//! `balance_of`, `transfer`, and `transfer_from`. This crate provides the
//! in-process implementation of those services: [`TokenBank`], holding
//! per-(asset, account) balances with ERC20-style allowances. Every
//! mutation is atomic — either the full operation succeeds or the bank is
//! unchanged — and the bank tracks net issuance per asset so supply
//! conservation (Σ balances == mints − burns) can be verified at any
//! point.

pub mod token_bank;

pub use token_bank::TokenBank;
