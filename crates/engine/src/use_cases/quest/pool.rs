//! Quest target pool.
//!
//! Derives the set of species an actor can be assigned hunts against from
//! the catalog's unlock levels.

use beastbound_domain::SpeciesCatalog;

/// Species eligible as quest targets for the given progression level.
///
/// For each level up to the actor's, takes the species unlocked at exactly
/// that level, or the nearest defined unlock below it, or the catalog
/// fallback when nothing is defined anywhere below. Deduplicated, catalog
/// discovery order preserved.
pub fn eligible_species(catalog: &SpeciesCatalog, progression_level: u32) -> Vec<String> {
    let max_pool_level = progression_level.max(1);
    let mut pool: Vec<String> = Vec::new();
    for level in 1..=max_pool_level {
        let found = (1..=level)
            .rev()
            .find_map(|candidate| catalog.unlocked_at(candidate))
            .unwrap_or_else(|| catalog.fallback());
        if !pool.iter().any(|name| name == found) {
            pool.push(found.to_string());
        }
    }
    pool
}
