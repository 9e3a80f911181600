//! Monster species reference data.
//!
//! Immutable catalog mapping species names to base combat stats and the
//! progression level at which the species becomes a valid quest target.
//! Not user state; the engine is handed one catalog at composition time.

use serde::{Deserialize, Serialize};

/// Base combat stats for a species.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SpeciesStats {
    pub base_health: i64,
    pub base_attack: i64,
}

/// One species in the catalog.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SpeciesEntry {
    pub name: String,
    pub stats: SpeciesStats,
    /// Progression level at which this species unlocks as a quest target.
    pub unlock_level: u32,
}

/// Immutable species catalog.
#[derive(Debug, Clone)]
pub struct SpeciesCatalog {
    entries: Vec<SpeciesEntry>,
    fallback: String,
}

impl SpeciesCatalog {
    /// Build a catalog from entries. `fallback` is used when no species is
    /// unlocked anywhere at or below a requested level.
    pub fn new(entries: Vec<SpeciesEntry>, fallback: impl Into<String>) -> Self {
        Self {
            entries,
            fallback: fallback.into(),
        }
    }

    pub fn stats(&self, name: &str) -> Option<SpeciesStats> {
        self.entries
            .iter()
            .find(|e| e.name == name)
            .map(|e| e.stats)
    }

    /// The species unlocked at exactly this progression level.
    pub fn unlocked_at(&self, level: u32) -> Option<&str> {
        self.entries
            .iter()
            .find(|e| e.unlock_level == level)
            .map(|e| e.name.as_str())
    }

    pub fn fallback(&self) -> &str {
        &self.fallback
    }
}

impl Default for SpeciesCatalog {
    /// The stock catalog shipped with the game.
    fn default() -> Self {
        let entry = |name: &str, health: i64, attack: i64, unlock: u32| SpeciesEntry {
            name: name.to_string(),
            stats: SpeciesStats {
                base_health: health,
                base_attack: attack,
            },
            unlock_level: unlock,
        };
        Self::new(
            vec![
                entry("小火龍", 39, 52, 1),
                entry("傑尼龜", 44, 48, 3),
                entry("妙蛙種子", 45, 49, 5),
                entry("皮卡丘", 35, 55, 8),
                entry("伊布", 55, 55, 12),
                entry("卡比獸", 160, 110, 16),
                entry("快龍", 91, 134, 20),
            ],
            "小火龍",
        )
    }
}
