//! Fungible token balances and allowances.
//!
//! One `TokenBank` holds every asset the engine touches, keyed by
//! (asset, account). Semantics follow the ERC20 surface the registry
//! depends on: `transfer` fails on insufficient balance, `transfer_from`
//! checks the spender's allowance before the holder's balance, and spent
//! allowance is deducted. All mutations are check-before-write: a failed
//! operation leaves the bank untouched.
//!
//! The bank also tracks net issuance per asset (mints minus burns).
//! Transfers only ever move balances between accounts, so the invariant
//! ```text
//! ∀ asset: Σ balances == net issuance
//! ```
//! must hold after every operation; [`TokenBank::verify_supply`] checks
//! it. If it ever breaks, value was created or destroyed somewhere it
//! must not be.

use std::collections::HashMap;

use rust_decimal::Decimal;
use swapclear_types::{AccountId, Asset, Result, SwapError};

/// In-process implementation of the fungible asset services.
pub struct TokenBank {
    /// Per-(asset, holder) balances.
    balances: HashMap<(Asset, AccountId), Decimal>,
    /// Per-(asset, holder, spender) allowances. Absolute grants, not
    /// incremental: `approve` overwrites.
    allowances: HashMap<(Asset, AccountId, AccountId), Decimal>,
    /// Net issuance per asset: mints minus burns. Transfers never touch
    /// this.
    issued: HashMap<Asset, Decimal>,
}

impl TokenBank {
    /// Create an empty bank.
    #[must_use]
    pub fn new() -> Self {
        Self {
            balances: HashMap::new(),
            allowances: HashMap::new(),
            issued: HashMap::new(),
        }
    }

    /// Issue `amount` of `asset` to `to`. Test/provisioning glue — the
    /// registry never mints.
    ///
    /// # Errors
    /// Returns [`SwapError::InvalidAmount`] if `amount` is negative.
    pub fn mint(&mut self, asset: &str, to: AccountId, amount: Decimal) -> Result<()> {
        ensure_non_negative(amount)?;
        self.credit(asset, to, amount);
        *self
            .issued
            .entry(asset.to_string())
            .or_insert(Decimal::ZERO) += amount;
        Ok(())
    }

    /// Destroy `amount` of `asset` held by `from`.
    ///
    /// # Errors
    /// - [`SwapError::InvalidAmount`] if `amount` is negative
    /// - [`SwapError::InsufficientBalance`] if `from` holds less than
    ///   `amount`
    pub fn burn(&mut self, asset: &str, from: AccountId, amount: Decimal) -> Result<()> {
        ensure_non_negative(amount)?;
        let available = self.balance_of_inner(asset, from);
        if available < amount {
            return Err(SwapError::InsufficientBalance {
                needed: amount,
                available,
            });
        }
        self.debit(asset, from, amount);
        *self
            .issued
            .entry(asset.to_string())
            .or_insert(Decimal::ZERO) -= amount;
        Ok(())
    }

    /// Balance of `holder` in `asset`. Unknown holders have zero.
    #[must_use]
    pub fn balance_of(&self, asset: &str, holder: AccountId) -> Decimal {
        self.balance_of_inner(asset, holder)
    }

    /// Grant `spender` the right to move up to `amount` of `holder`'s
    /// `asset`. Overwrites any previous grant.
    ///
    /// # Errors
    /// Returns [`SwapError::InvalidAmount`] if `amount` is negative.
    pub fn approve(
        &mut self,
        asset: &str,
        holder: AccountId,
        spender: AccountId,
        amount: Decimal,
    ) -> Result<()> {
        ensure_non_negative(amount)?;
        self.allowances
            .insert((asset.to_string(), holder, spender), amount);
        Ok(())
    }

    /// Remaining allowance granted by `holder` to `spender` for `asset`.
    #[must_use]
    pub fn allowance(&self, asset: &str, holder: AccountId, spender: AccountId) -> Decimal {
        self.allowances
            .get(&(asset.to_string(), holder, spender))
            .copied()
            .unwrap_or(Decimal::ZERO)
    }

    /// Move `amount` of `asset` from `from` to `to`.
    ///
    /// # Errors
    /// - [`SwapError::InvalidAmount`] if `amount` is negative
    /// - [`SwapError::InsufficientBalance`] if `from` holds less than
    ///   `amount`
    pub fn transfer(
        &mut self,
        asset: &str,
        from: AccountId,
        to: AccountId,
        amount: Decimal,
    ) -> Result<()> {
        ensure_non_negative(amount)?;
        let available = self.balance_of_inner(asset, from);
        if available < amount {
            return Err(SwapError::InsufficientBalance {
                needed: amount,
                available,
            });
        }
        self.debit(asset, from, amount);
        self.credit(asset, to, amount);
        Ok(())
    }

    /// Move `amount` of `asset` from `from` to `to` on behalf of `spender`,
    /// consuming `spender`'s allowance.
    ///
    /// Allowance is checked before balance, and both are verified before
    /// either is mutated.
    ///
    /// # Errors
    /// - [`SwapError::InvalidAmount`] if `amount` is negative
    /// - [`SwapError::InsufficientAllowance`] if the grant is too small
    /// - [`SwapError::InsufficientBalance`] if `from` holds less than
    ///   `amount`
    pub fn transfer_from(
        &mut self,
        asset: &str,
        spender: AccountId,
        from: AccountId,
        to: AccountId,
        amount: Decimal,
    ) -> Result<()> {
        ensure_non_negative(amount)?;
        let approved = self.allowance(asset, from, spender);
        if approved < amount {
            return Err(SwapError::InsufficientAllowance {
                needed: amount,
                approved,
            });
        }
        let available = self.balance_of_inner(asset, from);
        if available < amount {
            return Err(SwapError::InsufficientBalance {
                needed: amount,
                available,
            });
        }

        self.allowances
            .insert((asset.to_string(), from, spender), approved - amount);
        self.debit(asset, from, amount);
        self.credit(asset, to, amount);
        Ok(())
    }

    /// Total supply of an asset (sum of all holders' balances).
    #[must_use]
    pub fn total_supply(&self, asset: &str) -> Decimal {
        self.balances
            .iter()
            .filter(|((a, _), _)| a == asset)
            .map(|(_, amount)| *amount)
            .sum()
    }

    /// Net issuance of an asset: mints minus burns.
    #[must_use]
    pub fn net_issuance(&self, asset: &str) -> Decimal {
        self.issued.get(asset).copied().unwrap_or(Decimal::ZERO)
    }

    /// Verify supply conservation for a given asset: the sum of all
    /// holder balances must equal the net issuance.
    ///
    /// # Errors
    /// Returns [`SwapError::SupplyInvariantViolation`] if they differ.
    pub fn verify_supply(&self, asset: &str) -> Result<()> {
        let actual = self.total_supply(asset);
        let expected = self.net_issuance(asset);
        if actual != expected {
            return Err(SwapError::SupplyInvariantViolation {
                reason: format!(
                    "Asset {asset}: balances sum to {actual} but net issuance is {expected}"
                ),
            });
        }
        Ok(())
    }

    fn balance_of_inner(&self, asset: &str, holder: AccountId) -> Decimal {
        self.balances
            .get(&(asset.to_string(), holder))
            .copied()
            .unwrap_or(Decimal::ZERO)
    }

    fn debit(&mut self, asset: &str, holder: AccountId, amount: Decimal) {
        *self
            .balances
            .entry((asset.to_string(), holder))
            .or_insert(Decimal::ZERO) -= amount;
    }

    fn credit(&mut self, asset: &str, holder: AccountId, amount: Decimal) {
        *self
            .balances
            .entry((asset.to_string(), holder))
            .or_insert(Decimal::ZERO) += amount;
    }
}

impl Default for TokenBank {
    fn default() -> Self {
        Self::new()
    }
}

fn ensure_non_negative(amount: Decimal) -> Result<()> {
    if amount < Decimal::ZERO {
        return Err(SwapError::InvalidAmount {
            reason: format!("amount must not be negative, got {amount}"),
        });
    }
    Ok(())
}
