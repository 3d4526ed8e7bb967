use garden_core::{AppConfig, MemoryStore, OrganismCatalog, Session};
use garden_data::SaveState;

#[allow(dead_code)]
pub struct GardenBuilder {
    config: AppConfig,
    catalog: OrganismCatalog,
    saved: Option<SaveState>,
}

#[allow(dead_code)]
impl GardenBuilder {
    pub fn new() -> Self {
        let mut config = AppConfig::default();
        config.garden.seed = Some(42);
        Self {
            config,
            catalog: OrganismCatalog::builtin(),
            saved: None,
        }
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.config.garden.seed = Some(seed);
        self
    }

    pub fn with_coins(mut self, coins: u64) -> Self {
        self.config.garden.starting_coins = coins;
        self
    }

    /// No passive income and no level-ups: every outcome is fixed.
    pub fn without_chance(mut self) -> Self {
        self.config.rules.passive_income_chance = 0.0;
        self.config.rules.level_up_chance = 0.0;
        self
    }

    pub fn with_config<F>(mut self, modifier: F) -> Self
    where
        F: FnOnce(&mut AppConfig),
    {
        modifier(&mut self.config);
        self
    }

    pub fn with_saved(mut self, saved: SaveState) -> Self {
        self.saved = Some(saved);
        self
    }

    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    pub fn build(self) -> Session<MemoryStore> {
        let store = self.saved.map(MemoryStore::with_state).unwrap_or_default();
        Session::open(&self.config, self.catalog, store)
    }
}

impl Default for GardenBuilder {
    fn default() -> Self {
        Self::new()
    }
}
