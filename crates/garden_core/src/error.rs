//! Recoverable failures of garden and ledger operations.
//!
//! Every operation validates before it mutates, so an `Err` always means
//! the state is exactly as it was before the call.

use chrono::NaiveDate;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GardenError {
    #[error("Not enough coins: need {required}, have {available}")]
    InsufficientFunds { required: u64, available: u64 },

    #[error("Garden full! Remove a plant or make space")]
    GardenFull,

    #[error("Slot {index} out of range (garden has {slot_count} slots)")]
    InvalidSlotIndex { index: usize, slot_count: usize },

    #[error("Unknown organism: {0}")]
    UnknownOrganism(String),

    #[error("Entry {index} out of range (ledger has {len} entries)")]
    InvalidEntryIndex { index: usize, len: usize },

    #[error("Daily bonus already claimed on {0}")]
    DailyBonusClaimed(NaiveDate),
}

impl GardenError {
    #[must_use]
    pub fn insufficient_funds(required: u64, available: u64) -> Self {
        Self::InsufficientFunds {
            required,
            available,
        }
    }

    #[must_use]
    pub fn invalid_slot(index: usize, slot_count: usize) -> Self {
        Self::InvalidSlotIndex { index, slot_count }
    }

    #[must_use]
    pub fn unknown_organism<S: Into<String>>(id: S) -> Self {
        Self::UnknownOrganism(id.into())
    }
}

pub type Result<T> = std::result::Result<T, GardenError>;
