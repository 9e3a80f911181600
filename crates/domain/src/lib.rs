extern crate self as beastbound_domain;

pub mod entities;
pub mod error;
pub mod ids;
pub mod value_objects;

pub use entities::{
    Actor, GachaPrize, GachaTable, Quest, QuestKind, QuestLog, SpeciesCatalog, SpeciesEntry,
    SpeciesStats, MAX_ACTIVE_QUESTS, QUEST_LOG_SCHEMA,
};
pub use error::DomainError;
pub use ids::{ActorId, QuestId};
pub use value_objects::{InventoryCounters, PairKey, INVENTORY_SCHEMA};
