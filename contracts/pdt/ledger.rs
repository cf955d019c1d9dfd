use ink::storage::Mapping;

use crate::model::{AccountId, Balance, Error, Result};

/// Balances plus total supply. The only place balances are written.
///
/// Every mutator computes all new values before its first write, so a
/// failed call never leaves a partial update behind.
#[ink::storage_item]
#[derive(Default, Debug)]
pub struct Ledger {
    total_supply: Balance,
    balances: Mapping<AccountId, Balance>,
}

impl Ledger {
    pub fn total_supply(&self) -> Balance {
        self.total_supply
    }

    pub fn balance_of(&self, owner: AccountId) -> Balance {
        self.balances.get(owner).unwrap_or(0)
    }

    /// Creates `amount` new units on `to`. Role checks belong to the caller.
    pub fn mint(&mut self, to: AccountId, amount: Balance) -> Result<()> {
        if amount == 0 {
            return Err(Error::InvalidAmount)
        }
        let new_total = self.total_supply.checked_add(amount).ok_or(Error::InvalidAmount)?;
        let new_to = self.balance_of(to).checked_add(amount).ok_or(Error::InvalidAmount)?;

        self.total_supply = new_total;
        self.balances.insert(to, &new_to);
        Ok(())
    }

    /// Moves `amount` from `from` to `to`. A self-transfer only checks the balance.
    pub fn transfer(&mut self, from: AccountId, to: AccountId, amount: Balance) -> Result<()> {
        let from_bal = self.balance_of(from);
        if from_bal < amount {
            return Err(Error::InsufficientBalance)
        }
        if from == to || amount == 0 {
            return Ok(())
        }
        let new_from = from_bal - amount;
        let new_to = self.balance_of(to).checked_add(amount).ok_or(Error::InvalidAmount)?;

        self.balances.insert(from, &new_from);
        self.balances.insert(to, &new_to);
        Ok(())
    }

    pub fn burn(&mut self, from: AccountId, amount: Balance) -> Result<()> {
        let from_bal = self.balance_of(from);
        if from_bal < amount {
            return Err(Error::InsufficientBalance)
        }
        // sum of balances == supply, so this only trips on corrupted state
        let new_total = self.total_supply.checked_sub(amount).ok_or(Error::InvalidAmount)?;

        self.balances.insert(from, &(from_bal - amount));
        self.total_supply = new_total;
        Ok(())
    }
}
