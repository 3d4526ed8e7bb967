//! The static shop catalog of purchasable organisms.

use garden_data::{OrganismDefinition, Rgba};

const PINK: Rgba = Rgba::rgb(0xFF, 0xD1, 0xE8);
const MINT: Rgba = Rgba::rgb(0xCF, 0xFF, 0xE4);
const LEAF: Rgba = Rgba::rgb(0x8E, 0xE7, 0xB8);
const SKY: Rgba = Rgba::rgb(0xD1, 0xEE, 0xFF);
const LILAC: Rgba = Rgba::rgb(0xE8, 0xD1, 0xFF);
const ROSE: Rgba = Rgba::rgb(0xFF, 0xB3, 0xC6);

/// Immutable id -> definition mapping, built once at startup.
///
/// Slots hold organism ids, not definitions, so lookups that miss fall
/// back to the first entry instead of failing.
#[derive(Debug, Clone)]
pub struct OrganismCatalog {
    entries: Vec<OrganismDefinition>,
    fallback: OrganismDefinition,
}

impl Default for OrganismCatalog {
    fn default() -> Self {
        Self::builtin()
    }
}

impl OrganismCatalog {
    pub fn new(entries: Vec<OrganismDefinition>) -> Self {
        let fallback = entries.first().cloned().unwrap_or_else(Self::sprout);
        Self { entries, fallback }
    }

    /// Sprout, Bloom and Cactus.
    pub fn builtin() -> Self {
        Self::new(vec![
            Self::sprout(),
            OrganismDefinition::new("bloom", "Bloom", 25, vec![LILAC, PINK, ROSE, SKY], 10),
            OrganismDefinition::new("cactus", "Cactus", 20, vec![SKY, MINT, PINK, LILAC], 8),
        ])
    }

    fn sprout() -> OrganismDefinition {
        OrganismDefinition::new("sprout", "Sprout", 10, vec![PINK, MINT, LEAF, SKY], 8)
    }

    pub fn get(&self, id: &str) -> Option<&OrganismDefinition> {
        self.entries.iter().find(|d| d.id == id)
    }

    /// Like [`get`](Self::get), but never fails.
    pub fn resolve(&self, id: &str) -> &OrganismDefinition {
        self.get(id).unwrap_or(&self.fallback)
    }

    pub fn iter(&self) -> impl Iterator<Item = &OrganismDefinition> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_entries() {
        let catalog = OrganismCatalog::builtin();
        assert_eq!(catalog.len(), 3);
        let bloom = catalog.get("bloom").unwrap();
        assert_eq!(bloom.price, 25);
        assert_eq!(bloom.size, 10);
        assert_eq!(catalog.get("cactus").unwrap().price, 20);
        assert_eq!(catalog.get("sprout").unwrap().palette[2], LEAF);
    }

    #[test]
    fn test_dangling_id_resolves_to_fallback() {
        let catalog = OrganismCatalog::builtin();
        assert!(catalog.get("orchid").is_none());
        assert_eq!(catalog.resolve("orchid").id, "sprout");
    }

    #[test]
    fn test_empty_catalog_still_resolves() {
        let catalog = OrganismCatalog::new(Vec::new());
        assert!(catalog.is_empty());
        assert_eq!(catalog.resolve("anything").id, "sprout");
    }
}
