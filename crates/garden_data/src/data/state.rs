use super::finance::FinanceEntry;
use super::garden::GardenSlot;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Settings {
    pub dark: bool,
}

/// Everything persisted between runs: coins, garden, ledger and settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SaveState {
    pub coins: u64,
    #[serde(default)]
    pub garden: Vec<GardenSlot>,
    #[serde(default)]
    pub entries: Vec<FinanceEntry>,
    #[serde(default)]
    pub settings: Settings,
    #[serde(default)]
    pub last_daily: Option<NaiveDate>,
}

impl SaveState {
    /// A new game with `slot_count` empty slots.
    pub fn fresh(slot_count: usize, starting_coins: u64) -> Self {
        Self {
            coins: starting_coins,
            garden: vec![GardenSlot::Empty; slot_count],
            entries: Vec::new(),
            settings: Settings::default(),
            last_daily: None,
        }
    }

    pub fn occupied_count(&self) -> usize {
        self.garden.iter().filter(|s| !s.is_empty()).count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fresh_state() {
        let state = SaveState::fresh(3, 30);
        assert_eq!(state.coins, 30);
        assert_eq!(state.garden.len(), 3);
        assert_eq!(state.occupied_count(), 0);
        assert!(state.last_daily.is_none());
    }

    #[test]
    fn test_missing_sections_default() {
        let state: SaveState = serde_json::from_str(r#"{"coins": 7}"#).unwrap();
        assert_eq!(state.coins, 7);
        assert!(state.garden.is_empty());
        assert!(!state.settings.dark);
    }
}
