//! Quest reward formula.
//!
//! Deterministic-with-jitter gold/xp computation. The operation order is
//! load-bearing for reward-value tests: jitter is applied to the full float
//! product, the result is truncated, xp is derived from the truncated gold,
//! and the minimum clamp comes last.

use beastbound_domain::{SpeciesCatalog, SpeciesStats};

use crate::infrastructure::ports::RandomPort;

/// Floor for both gold and xp.
const MIN_REWARD: i64 = 10;

/// Base stats assumed for a species missing from the catalog.
const DEFAULT_STATS: SpeciesStats = SpeciesStats {
    base_health: 100,
    base_attack: 100,
};

/// Gold/xp pair fixed at quest generation time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Reward {
    pub gold: i64,
    pub xp: i64,
}

/// Compute the reward for hunting `kill_count` monsters of `species` at
/// `level`. Golden quests pay five times the base.
pub fn compute_reward(
    catalog: &SpeciesCatalog,
    random: &dyn RandomPort,
    species: &str,
    level: u32,
    kill_count: u32,
    golden: bool,
) -> Reward {
    let stats = catalog.stats(species).unwrap_or(DEFAULT_STATS);
    let species_score = (stats.base_health + stats.base_attack) as f64 / 4.0;
    let level_multiplier = 1.0 + f64::from(level) * 0.15;
    let quantity_bonus = if kill_count <= 1 {
        1.0
    } else {
        1.0 + f64::from(kill_count - 1) * 0.2
    };

    let mut base_gold = species_score * level_multiplier * f64::from(kill_count) * quantity_bonus;
    if golden {
        base_gold *= 5.0;
    }

    let jitter = random.gen_jitter(0.9, 1.1);
    let gold = (base_gold * jitter).trunc() as i64;
    let xp = (gold as f64 * 0.8).floor() as i64;

    Reward {
        gold: gold.max(MIN_REWARD),
        xp: xp.max(MIN_REWARD),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::clock::FixedRandom;
    use beastbound_domain::SpeciesEntry;

    fn unit_jitter() -> FixedRandom {
        FixedRandom {
            value: 0,
            jitter: 1.0,
        }
    }

    #[test]
    fn unknown_species_uses_default_stats() {
        // speciesScore = (100+100)/4 = 50, levelMultiplier = 1.15,
        // baseGold = 57.5, truncated at unit jitter to 57.
        let catalog = SpeciesCatalog::default();
        let reward = compute_reward(&catalog, &unit_jitter(), "小拉達", 1, 1, false);
        assert_eq!(reward, Reward { gold: 57, xp: 45 });
    }

    #[test]
    fn jitter_bounds_for_the_baseline_quest() {
        let catalog = SpeciesCatalog::default();
        let low = compute_reward(
            &catalog,
            &FixedRandom {
                value: 0,
                jitter: 0.9,
            },
            "小拉達",
            1,
            1,
            false,
        );
        let high = compute_reward(
            &catalog,
            &FixedRandom {
                value: 0,
                jitter: 1.1,
            },
            "小拉達",
            1,
            1,
            false,
        );
        assert_eq!(low.gold, 51);
        assert_eq!(high.gold, 63);
        assert_eq!(low.xp, (low.gold as f64 * 0.8).floor() as i64);
        assert_eq!(high.xp, (high.gold as f64 * 0.8).floor() as i64);
    }

    #[test]
    fn golden_pays_five_times_the_base() {
        let catalog = SpeciesCatalog::default();
        let normal = compute_reward(&catalog, &unit_jitter(), "小拉達", 1, 1, false);
        let golden = compute_reward(&catalog, &unit_jitter(), "小拉達", 1, 1, true);
        assert_eq!(golden.gold, normal.gold * 5 + 2); // 287.5 truncates to 287
        assert_eq!(golden.xp, (golden.gold as f64 * 0.8).floor() as i64);
    }

    #[test]
    fn kill_count_applies_the_quantity_bonus() {
        // 50 * 1.15 * 3 * 1.4 = 241.5 -> 241
        let catalog = SpeciesCatalog::default();
        let reward = compute_reward(&catalog, &unit_jitter(), "小拉達", 1, 3, false);
        assert_eq!(reward.gold, 241);
        assert_eq!(reward.xp, 192);
    }

    #[test]
    fn rewards_clamp_to_the_minimum() {
        let catalog = SpeciesCatalog::new(
            vec![SpeciesEntry {
                name: "綠毛蟲".to_string(),
                stats: SpeciesStats {
                    base_health: 4,
                    base_attack: 4,
                },
                unlock_level: 1,
            }],
            "綠毛蟲",
        );
        // speciesScore = 2, baseGold = 2.3 -> clamped to the floor.
        let reward = compute_reward(&catalog, &unit_jitter(), "綠毛蟲", 1, 1, false);
        assert_eq!(reward, Reward { gold: 10, xp: 10 });
    }

    #[test]
    fn catalog_stats_shift_the_reward() {
        // 皮卡丘: (35+55)/4 = 22.5, * 1.15 = 25.875 -> 25
        let catalog = SpeciesCatalog::default();
        let reward = compute_reward(&catalog, &unit_jitter(), "皮卡丘", 1, 1, false);
        assert_eq!(reward.gold, 25);
        assert_eq!(reward.xp, 20);
    }
}
