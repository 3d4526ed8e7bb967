//! Core data structures shared by the Pixel Garden crates.

pub mod data;

pub use data::finance::{EntryKind, FinanceEntry};
pub use data::garden::{GardenSlot, Plant, MAX_VITALITY};
pub use data::organism::{OrganismDefinition, Rgba};
pub use data::state::{SaveState, Settings};
