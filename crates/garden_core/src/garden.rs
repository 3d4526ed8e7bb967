//! The garden simulation: a fixed row of slots, each empty or holding a
//! plant whose health, hunger, age and level evolve through player actions
//! and a periodic tick.
//!
//! All operations validate first and mutate second. A returned `Err` means
//! nothing changed; an empty slot is a silent no-op.

use crate::catalog::OrganismCatalog;
use crate::config::RulesConfig;
use crate::error::{GardenError, Result};
use crate::ledger::CoinLedger;
use crate::sprite::{generate_sprite, Sprite};
use chrono::Utc;
use garden_data::{GardenSlot, Plant, MAX_VITALITY};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// Coins and slots: the mutable part of the garden.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GardenState {
    ledger: CoinLedger,
    slots: Vec<GardenSlot>,
}

impl GardenState {
    pub fn new(coins: u64, slot_count: usize) -> Self {
        Self {
            ledger: CoinLedger::new(coins),
            slots: vec![GardenSlot::Empty; slot_count],
        }
    }

    /// Rebuilds state from persisted parts, repairing anything out of range:
    /// the slot array is resized to `slot_count`, vitals are clamped and
    /// levels forced into `1..=max_level`.
    pub fn restore(coins: u64, mut slots: Vec<GardenSlot>, slot_count: usize, max_level: u8) -> Self {
        if slots.len() > slot_count {
            let dropped = slots[slot_count..].iter().filter(|s| !s.is_empty()).count();
            if dropped > 0 {
                tracing::warn!(dropped, slot_count, "Saved garden has more plants than slots");
            }
        }
        slots.resize(slot_count, GardenSlot::Empty);
        for plant in slots.iter_mut().filter_map(GardenSlot::plant_mut) {
            plant.health = plant.health.min(MAX_VITALITY);
            plant.hunger = plant.hunger.min(MAX_VITALITY);
            plant.level = plant.level.clamp(1, max_level.max(1));
        }
        Self {
            ledger: CoinLedger::new(coins),
            slots,
        }
    }

    #[must_use]
    pub fn coins(&self) -> u64 {
        self.ledger.balance()
    }

    pub fn ledger(&self) -> &CoinLedger {
        &self.ledger
    }

    pub fn slots(&self) -> &[GardenSlot] {
        &self.slots
    }

    pub fn slot_count(&self) -> usize {
        self.slots.len()
    }

    pub fn plant(&self, index: usize) -> Option<&Plant> {
        self.slots.get(index).and_then(GardenSlot::plant)
    }

    pub fn first_empty(&self) -> Option<usize> {
        self.slots.iter().position(GardenSlot::is_empty)
    }

    pub fn into_parts(self) -> (u64, Vec<GardenSlot>) {
        (self.ledger.balance(), self.slots)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HarvestOutcome {
    pub coins: u64,
    pub leveled_up: bool,
}

/// What a single tick did.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TickReport {
    pub plants: usize,
    /// `(slot, coins)` for every passive payout.
    pub income: Vec<(usize, u64)>,
}

impl TickReport {
    pub fn coins_awarded(&self) -> u64 {
        self.income.iter().map(|(_, c)| c).sum()
    }
}

/// `max(1, round(level * happiness / 50))`.
#[must_use]
pub fn harvest_reward(level: u8, happiness: f64) -> u64 {
    ((f64::from(level) * happiness / 50.0).round() as u64).max(1)
}

/// `max(1, round(level / 2))`.
#[must_use]
pub fn passive_reward(level: u8) -> u64 {
    ((f64::from(level) * 0.5).round() as u64).max(1)
}

fn restore(value: u8, amount: u8) -> u8 {
    value.saturating_add(amount).min(MAX_VITALITY)
}

fn deplete(value: u8, amount: u8, floor: u8) -> u8 {
    value.saturating_sub(amount).max(floor)
}

/// Owns the garden state and applies the rules to it.
pub struct Garden {
    state: GardenState,
    catalog: OrganismCatalog,
    rules: RulesConfig,
    rng: ChaCha8Rng,
}

impl Garden {
    pub fn new(
        state: GardenState,
        catalog: OrganismCatalog,
        rules: RulesConfig,
        seed: Option<u64>,
    ) -> Self {
        let rng = if let Some(seed) = seed {
            ChaCha8Rng::seed_from_u64(seed)
        } else {
            ChaCha8Rng::from_entropy()
        };
        Self {
            state,
            catalog,
            rules,
            rng,
        }
    }

    pub fn state(&self) -> &GardenState {
        &self.state
    }

    pub fn catalog(&self) -> &OrganismCatalog {
        &self.catalog
    }

    pub fn rules(&self) -> &RulesConfig {
        &self.rules
    }

    #[must_use]
    pub fn coins(&self) -> u64 {
        self.state.coins()
    }

    pub fn ledger_mut(&mut self) -> &mut CoinLedger {
        &mut self.state.ledger
    }

    pub fn plant(&self, index: usize) -> Option<&Plant> {
        self.state.plant(index)
    }

    /// Empties every slot and zeroes the balance.
    pub fn reset(&mut self) {
        self.state.ledger.reset();
        self.state.slots.fill(GardenSlot::Empty);
    }

    fn slot_mut(&mut self, index: usize) -> Result<&mut GardenSlot> {
        let slot_count = self.state.slots.len();
        self.state
            .slots
            .get_mut(index)
            .ok_or_else(|| GardenError::invalid_slot(index, slot_count))
    }

    /// Buys `organism_id` into the first empty slot and returns its index.
    pub fn purchase(&mut self, organism_id: &str) -> Result<usize> {
        let price = self
            .catalog
            .get(organism_id)
            .ok_or_else(|| GardenError::unknown_organism(organism_id))?
            .price;
        if !self.state.ledger.can_afford(price) {
            return Err(GardenError::insufficient_funds(price, self.coins()));
        }
        let index = self.state.first_empty().ok_or(GardenError::GardenFull)?;

        self.state.ledger.try_spend(price)?;
        self.state.slots[index] = GardenSlot::Occupied(Plant::sprouted(organism_id, Utc::now()));
        Ok(index)
    }

    /// Returns `Ok(false)` when the slot is empty.
    pub fn water(&mut self, index: usize) -> Result<bool> {
        let amount = self.rules.water_health;
        Ok(self.slot_mut(index)?.plant_mut().is_some_and(|plant| {
            plant.health = restore(plant.health, amount);
            plant.age += 1;
            true
        }))
    }

    /// Returns `Ok(false)` when the slot is empty.
    pub fn feed(&mut self, index: usize) -> Result<bool> {
        let amount = self.rules.feed_hunger;
        Ok(self.slot_mut(index)?.plant_mut().is_some_and(|plant| {
            plant.hunger = restore(plant.hunger, amount);
            plant.age += 1;
            true
        }))
    }

    pub fn harvest(&mut self, index: usize) -> Result<Option<HarvestOutcome>> {
        let slot_count = self.state.slots.len();
        let slot = self
            .state
            .slots
            .get_mut(index)
            .ok_or_else(|| GardenError::invalid_slot(index, slot_count))?;
        let Some(plant) = slot.plant_mut() else {
            return Ok(None);
        };
        let rules = &self.rules;

        let coins = harvest_reward(plant.level, plant.happiness());
        let before = plant.level;
        if self.rng.gen::<f64>() < rules.level_up_chance {
            plant.level = plant.level.saturating_add(1).min(rules.max_level);
        }
        let leveled_up = plant.level > before;
        plant.health = deplete(
            plant.health,
            rules.harvest_health_penalty,
            rules.harvest_health_floor,
        );
        plant.hunger = deplete(plant.hunger, rules.harvest_hunger_penalty, 0);

        self.state.ledger.credit(coins);
        Ok(Some(HarvestOutcome { coins, leveled_up }))
    }

    /// Removing an empty slot is a no-op returning `Ok(None)`.
    pub fn remove(&mut self, index: usize) -> Result<Option<Plant>> {
        Ok(self.slot_mut(index)?.take())
    }

    /// Advances every occupied slot by one step.
    ///
    /// Vitals only ever fall here, and a plant at zero health and hunger
    /// stays in its slot until removed.
    pub fn tick(&mut self) -> TickReport {
        let mut report = TickReport::default();
        for (index, slot) in self.state.slots.iter_mut().enumerate() {
            let Some(plant) = slot.plant_mut() else {
                continue;
            };
            report.plants += 1;
            plant.age += 1;
            plant.health = deplete(plant.health, self.rules.tick_health_decay, 0);
            plant.hunger = deplete(plant.hunger, self.rules.tick_hunger_decay, 0);

            if plant.happiness() > self.rules.passive_happiness_threshold
                && self.rng.gen::<f64>() < self.rules.passive_income_chance
            {
                let coins = passive_reward(plant.level);
                self.state.ledger.credit(coins);
                report.income.push((index, coins));
            }
        }
        report
    }

    /// Sprite for the plant in `index`, or `None` if the slot is empty.
    pub fn render(&self, index: usize) -> Option<Sprite> {
        self.plant(index)
            .map(|plant| generate_sprite(self.catalog.resolve(&plant.organism_id), plant.level))
    }

    pub fn into_state(self) -> GardenState {
        self.state
    }
}
