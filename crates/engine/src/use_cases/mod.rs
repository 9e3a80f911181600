//! Use cases - the engine's operations, one module per area.

pub mod duel;
pub mod gacha;
pub mod quest;

#[cfg(test)]
pub(crate) mod test_support;

pub use duel::{AttackOutcome, DuelError, DuelOps};
pub use gacha::{DrawResult, GachaError, GachaOps};
pub use quest::{
    compute_reward, eligible_species, AbandonResult, ClaimResult, QuestError, QuestOps, Reward,
};
