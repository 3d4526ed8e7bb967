use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Upper bound for `health` and `hunger`.
pub const MAX_VITALITY: u8 = 100;

/// A living organism occupying a garden slot.
///
/// `health` and `hunger` are kept in `[0, MAX_VITALITY]` by every engine
/// operation; `level` starts at 1.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Plant {
    /// Weak reference into the organism catalog.
    pub organism_id: String,
    pub health: u8,
    pub hunger: u8,
    pub age: u64,
    pub level: u8,
    pub acquired_at: DateTime<Utc>,
}

impl Plant {
    pub fn sprouted(organism_id: impl Into<String>, acquired_at: DateTime<Utc>) -> Self {
        Self {
            organism_id: organism_id.into(),
            health: MAX_VITALITY,
            hunger: MAX_VITALITY,
            age: 0,
            level: 1,
            acquired_at,
        }
    }

    /// `(health + hunger) / 2`, kept fractional.
    #[must_use]
    pub fn happiness(&self) -> f64 {
        (f64::from(self.health) + f64::from(self.hunger)) / 2.0
    }
}

/// One garden position. Persisted as `null` or a plant object.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(from = "Option<Plant>", into = "Option<Plant>")]
pub enum GardenSlot {
    #[default]
    Empty,
    Occupied(Plant),
}

impl GardenSlot {
    #[must_use]
    pub fn is_empty(&self) -> bool {
        matches!(self, GardenSlot::Empty)
    }

    pub fn plant(&self) -> Option<&Plant> {
        match self {
            GardenSlot::Occupied(plant) => Some(plant),
            GardenSlot::Empty => None,
        }
    }

    pub fn plant_mut(&mut self) -> Option<&mut Plant> {
        match self {
            GardenSlot::Occupied(plant) => Some(plant),
            GardenSlot::Empty => None,
        }
    }

    /// Empties the slot, returning whatever was planted.
    pub fn take(&mut self) -> Option<Plant> {
        match std::mem::take(self) {
            GardenSlot::Occupied(plant) => Some(plant),
            GardenSlot::Empty => None,
        }
    }
}

impl From<Option<Plant>> for GardenSlot {
    fn from(value: Option<Plant>) -> Self {
        value.map_or(GardenSlot::Empty, GardenSlot::Occupied)
    }
}

impl From<GardenSlot> for Option<Plant> {
    fn from(value: GardenSlot) -> Self {
        match value {
            GardenSlot::Occupied(plant) => Some(plant),
            GardenSlot::Empty => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sprouted_defaults() {
        let plant = Plant::sprouted("sprout", Utc::now());
        assert_eq!(plant.health, 100);
        assert_eq!(plant.hunger, 100);
        assert_eq!(plant.age, 0);
        assert_eq!(plant.level, 1);
        assert_eq!(plant.happiness(), 100.0);
    }

    #[test]
    fn test_slot_serializes_as_null_or_object() {
        let slots = vec![
            GardenSlot::Occupied(Plant::sprouted("bloom", Utc::now())),
            GardenSlot::Empty,
        ];
        let json = serde_json::to_value(&slots).unwrap();
        assert!(json[1].is_null());
        assert_eq!(json[0]["organism_id"], "bloom");

        let back: Vec<GardenSlot> = serde_json::from_value(json).unwrap();
        assert_eq!(back, slots);
    }

    #[test]
    fn test_take_empties_slot() {
        let mut slot = GardenSlot::Occupied(Plant::sprouted("cactus", Utc::now()));
        assert!(slot.take().is_some());
        assert!(slot.is_empty());
        assert!(slot.take().is_none());
    }
}
