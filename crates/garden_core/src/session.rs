//! The single owner of all mutable game state.
//!
//! A [`Session`] ties the garden engine, the coin ledger and the finance
//! book together and writes a snapshot to its [`StateStore`] after every
//! operation that changed something. Store failures are logged and
//! swallowed; they never fail the operation that triggered them.

use crate::catalog::OrganismCatalog;
use crate::config::{AppConfig, RewardsConfig};
use crate::error::{GardenError, Result};
use crate::finance::FinanceBook;
use crate::garden::{Garden, GardenState, HarvestOutcome, TickReport};
use crate::metrics::GardenMetrics;
use crate::sprite::Sprite;
use chrono::NaiveDate;
use garden_data::{FinanceEntry, Plant, SaveState, Settings};
use std::cell::{Cell, RefCell};

/// Where snapshots go between runs.
pub trait StateStore {
    /// `Ok(None)` means nothing has been saved yet.
    fn load(&self) -> anyhow::Result<Option<SaveState>>;
    fn save(&self, state: &SaveState) -> anyhow::Result<()>;
}

/// Volatile store for tests and hosts that persist snapshots themselves.
#[derive(Debug, Default)]
pub struct MemoryStore {
    state: RefCell<Option<SaveState>>,
    writes: Cell<usize>,
    fail_writes: Cell<bool>,
}

impl MemoryStore {
    pub fn with_state(state: SaveState) -> Self {
        Self {
            state: RefCell::new(Some(state)),
            ..Self::default()
        }
    }

    pub fn saved(&self) -> Option<SaveState> {
        self.state.borrow().clone()
    }

    pub fn writes(&self) -> usize {
        self.writes.get()
    }

    /// Makes every subsequent `save` fail.
    pub fn set_fail_writes(&self, fail: bool) {
        self.fail_writes.set(fail);
    }
}

impl StateStore for MemoryStore {
    fn load(&self) -> anyhow::Result<Option<SaveState>> {
        Ok(self.state.borrow().clone())
    }

    fn save(&self, state: &SaveState) -> anyhow::Result<()> {
        anyhow::ensure!(!self.fail_writes.get(), "memory store is read-only");
        *self.state.borrow_mut() = Some(state.clone());
        self.writes.set(self.writes.get() + 1);
        Ok(())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ImportMode {
    Replace,
    Append,
}

pub struct Session<S: StateStore> {
    garden: Garden,
    book: FinanceBook,
    settings: Settings,
    last_daily: Option<NaiveDate>,
    rewards: RewardsConfig,
    store: S,
    metrics: GardenMetrics,
}

impl<S: StateStore> Session<S> {
    /// Loads from `store`, starting a fresh game if there is nothing usable.
    pub fn open(config: &AppConfig, catalog: OrganismCatalog, store: S) -> Self {
        let saved = match store.load() {
            Ok(Some(state)) => {
                tracing::info!(
                    coins = state.coins,
                    plants = state.occupied_count(),
                    entries = state.entries.len(),
                    "Loaded saved garden"
                );
                state
            }
            Ok(None) => SaveState::fresh(config.garden.slot_count, config.garden.starting_coins),
            Err(e) => {
                tracing::warn!(error = %e, "Failed to load save, starting a fresh garden");
                SaveState::fresh(config.garden.slot_count, config.garden.starting_coins)
            }
        };
        Self::from_state(config, catalog, store, saved)
    }

    pub fn from_state(
        config: &AppConfig,
        catalog: OrganismCatalog,
        store: S,
        saved: SaveState,
    ) -> Self {
        let state = GardenState::restore(
            saved.coins,
            saved.garden,
            config.garden.slot_count,
            config.rules.max_level,
        );
        Self {
            garden: Garden::new(state, catalog, config.rules.clone(), config.garden.seed),
            book: FinanceBook::new(saved.entries),
            settings: saved.settings,
            last_daily: saved.last_daily,
            rewards: config.rewards.clone(),
            store,
            metrics: GardenMetrics::new(),
        }
    }

    pub fn snapshot(&self) -> SaveState {
        SaveState {
            coins: self.garden.coins(),
            garden: self.garden.state().slots().to_vec(),
            entries: self.book.entries().to_vec(),
            settings: self.settings.clone(),
            last_daily: self.last_daily,
        }
    }

    /// Best-effort write of the current snapshot.
    pub fn persist(&self) {
        if let Err(e) = self.store.save(&self.snapshot()) {
            self.metrics.record_save_failure();
            tracing::warn!(error = %e, "Failed to persist garden state");
        }
    }

    #[must_use]
    pub fn coins(&self) -> u64 {
        self.garden.coins()
    }

    pub fn garden(&self) -> &Garden {
        &self.garden
    }

    pub fn catalog(&self) -> &OrganismCatalog {
        self.garden.catalog()
    }

    pub fn plant(&self, index: usize) -> Option<&Plant> {
        self.garden.plant(index)
    }

    pub fn book(&self) -> &FinanceBook {
        &self.book
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    pub fn last_daily(&self) -> Option<NaiveDate> {
        self.last_daily
    }

    pub fn metrics(&self) -> &GardenMetrics {
        &self.metrics
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn purchase(&mut self, organism_id: &str) -> Result<usize> {
        let slot = self.garden.purchase(organism_id)?;
        self.metrics.record_purchase();
        tracing::info!(organism_id, slot, coins = self.coins(), "Purchased plant");
        self.persist();
        Ok(slot)
    }

    pub fn water(&mut self, slot: usize) -> Result<bool> {
        let watered = self.garden.water(slot)?;
        if watered {
            self.persist();
        }
        Ok(watered)
    }

    pub fn feed(&mut self, slot: usize) -> Result<bool> {
        let fed = self.garden.feed(slot)?;
        if fed {
            self.persist();
        }
        Ok(fed)
    }

    pub fn harvest(&mut self, slot: usize) -> Result<Option<HarvestOutcome>> {
        let outcome = self.garden.harvest(slot)?;
        if let Some(o) = outcome {
            self.metrics.record_harvest(o.coins);
            tracing::info!(slot, coins = o.coins, leveled_up = o.leveled_up, "Harvested");
            self.persist();
        }
        Ok(outcome)
    }

    pub fn remove(&mut self, slot: usize) -> Result<Option<Plant>> {
        let removed = self.garden.remove(slot)?;
        if let Some(plant) = &removed {
            tracing::info!(slot, organism_id = %plant.organism_id, "Removed plant");
            self.persist();
        }
        Ok(removed)
    }

    pub fn tick(&mut self) -> TickReport {
        let report = self.garden.tick();
        self.metrics.record_tick(&report);
        tracing::debug!(plants = report.plants, coins = report.coins_awarded(), "Tick");
        if report.plants > 0 {
            self.persist();
        }
        report
    }

    pub fn render(&self, slot: usize) -> Option<Sprite> {
        self.garden.render(slot)
    }

    /// Books a new entry and pays the entry reward. Returns its index.
    pub fn add_entry(&mut self, entry: FinanceEntry) -> usize {
        let index = self.book.add(entry);
        self.garden.ledger_mut().credit(self.rewards.entry_reward);
        self.persist();
        index
    }

    pub fn edit_entry(&mut self, index: usize, entry: FinanceEntry) -> Result<()> {
        self.book.edit(index, entry)?;
        self.persist();
        Ok(())
    }

    pub fn remove_entry(&mut self, index: usize) -> Result<FinanceEntry> {
        let removed = self.book.remove(index)?;
        self.persist();
        Ok(removed)
    }

    /// Imports entries without paying per-entry rewards. Returns the count.
    pub fn import_entries(&mut self, entries: Vec<FinanceEntry>, mode: ImportMode) -> usize {
        let count = entries.len();
        match mode {
            ImportMode::Replace => self.book.replace_all(entries),
            ImportMode::Append => self.book.extend(entries),
        }
        tracing::info!(count, ?mode, "Imported finance entries");
        self.persist();
        count
    }

    /// Pays the daily bonus once per calendar day.
    pub fn claim_daily(&mut self, today: NaiveDate) -> Result<u64> {
        if self.last_daily == Some(today) {
            return Err(GardenError::DailyBonusClaimed(today));
        }
        let bonus = self.rewards.daily_bonus;
        self.garden.ledger_mut().credit(bonus);
        self.last_daily = Some(today);
        self.persist();
        Ok(bonus)
    }

    /// Wipes the ledger, the garden and the coin balance.
    pub fn clear_all(&mut self) {
        self.book.clear();
        self.garden.reset();
        tracing::info!("Cleared all data");
        self.persist();
    }

    pub fn toggle_dark(&mut self) -> bool {
        self.settings.dark = !self.settings.dark;
        self.persist();
        self.settings.dark
    }
}
