//! Domain entities.

mod actor;
mod gacha;
mod quest;
mod species;

pub use actor::Actor;
pub use gacha::{GachaPrize, GachaTable};
pub use quest::{Quest, QuestKind, QuestLog, MAX_ACTIVE_QUESTS, QUEST_LOG_SCHEMA};
pub use species::{SpeciesCatalog, SpeciesEntry, SpeciesStats};
