use crate::error::{GardenError, Result};
use serde::{Deserialize, Serialize};

/// The shared coin balance. Spends are all-or-nothing.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CoinLedger {
    balance: u64,
}

impl CoinLedger {
    #[must_use]
    pub fn new(balance: u64) -> Self {
        Self { balance }
    }

    #[must_use]
    pub fn balance(&self) -> u64 {
        self.balance
    }

    #[must_use]
    pub fn can_afford(&self, amount: u64) -> bool {
        self.balance >= amount
    }

    /// Adds coins and returns the new balance.
    pub fn credit(&mut self, amount: u64) -> u64 {
        self.balance = self.balance.saturating_add(amount);
        self.balance
    }

    /// Deducts `amount` or fails without touching the balance.
    pub fn try_spend(&mut self, amount: u64) -> Result<u64> {
        if !self.can_afford(amount) {
            return Err(GardenError::insufficient_funds(amount, self.balance));
        }
        self.balance -= amount;
        Ok(self.balance)
    }

    pub fn reset(&mut self) {
        self.balance = 0;
    }
}
