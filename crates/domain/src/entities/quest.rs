//! Quest entity and the per-actor quest log.
//!
//! Quests are generated by the engine's ledger refill and removed on claim
//! or abandon; they never transition through intermediate states. Reward
//! values are fixed at generation time and never recomputed.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::DomainError;
use crate::ids::QuestId;

/// Maximum active quests an actor holds at rest.
pub const MAX_ACTIVE_QUESTS: usize = 3;

/// Current serialized shape of [`QuestLog`].
pub const QUEST_LOG_SCHEMA: u32 = 1;

/// Rarity of a quest.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum QuestKind {
    Normal,
    /// Rare variant: single kill, amplified reward.
    Golden,
}

/// A hunt assignment against one monster species.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Quest {
    pub id: QuestId,
    pub species: String,
    pub target_level: u32,
    pub required_kills: u32,
    pub progress: u32,
    pub gold: i64,
    pub xp: i64,
    pub kind: QuestKind,
    pub accepted_at: DateTime<Utc>,
}

impl Quest {
    /// Whether enough kills have been recorded to claim the reward.
    pub fn is_complete(&self) -> bool {
        self.progress >= self.required_kills
    }
}

/// An actor's active quests, persisted as an opaque text column with an
/// explicit schema version.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QuestLog {
    #[serde(default = "default_schema")]
    pub schema: u32,
    #[serde(default)]
    pub quests: Vec<Quest>,
}

fn default_schema() -> u32 {
    QUEST_LOG_SCHEMA
}

impl Default for QuestLog {
    fn default() -> Self {
        Self {
            schema: QUEST_LOG_SCHEMA,
            quests: Vec::new(),
        }
    }
}

impl QuestLog {
    pub fn len(&self) -> usize {
        self.quests.len()
    }

    pub fn is_empty(&self) -> bool {
        self.quests.is_empty()
    }

    /// How many slots a refill should fill.
    pub fn missing_slots(&self) -> usize {
        MAX_ACTIVE_QUESTS.saturating_sub(self.quests.len())
    }

    pub fn get(&self, id: QuestId) -> Option<&Quest> {
        self.quests.iter().find(|q| q.id == id)
    }

    /// Remove and return the quest with the given id, if present.
    pub fn remove(&mut self, id: QuestId) -> Option<Quest> {
        let index = self.quests.iter().position(|q| q.id == id)?;
        Some(self.quests.remove(index))
    }

    /// Append a quest, enforcing the at-rest capacity.
    pub fn push(&mut self, quest: Quest) -> Result<(), DomainError> {
        if self.quests.len() >= MAX_ACTIVE_QUESTS {
            return Err(DomainError::constraint(format!(
                "quest log holds at most {MAX_ACTIVE_QUESTS} quests"
            )));
        }
        self.quests.push(quest);
        Ok(())
    }
}
