//! Actor entity - a player account with combat and economy attributes.
//!
//! The actor's `health`/`attack` are the combat stats of its active
//! companion; duels read and mutate them directly. `quest_log` and
//! `inventory` are persisted by the actor store as opaque text columns.

use serde::{Deserialize, Serialize};

use crate::entities::quest::QuestLog;
use crate::ids::ActorId;
use crate::value_objects::InventoryCounters;

/// A player account.
///
/// Data-carrying struct with public fields; the engine's use cases enforce
/// the business rules (turn order, ledger capacity, costs).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Actor {
    pub id: ActorId,
    pub name: String,
    pub health: i64,
    pub max_health: i64,
    pub attack: i64,
    pub money: i64,
    pub experience: i64,
    pub progression_level: u32,
    pub companion_progression_level: u32,
    pub companion_experience: i64,
    pub quest_log: QuestLog,
    pub inventory: InventoryCounters,
}

impl Actor {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            id: ActorId::new(),
            name: name.into(),
            health: 100,
            max_health: 100,
            attack: 10,
            money: 0,
            experience: 0,
            progression_level: 1,
            companion_progression_level: 1,
            companion_experience: 0,
            quest_log: QuestLog::default(),
            inventory: InventoryCounters::default(),
        }
    }

    pub fn with_id(mut self, id: ActorId) -> Self {
        self.id = id;
        self
    }

    pub fn with_money(mut self, money: i64) -> Self {
        self.money = money;
        self
    }

    pub fn with_attack(mut self, attack: i64) -> Self {
        self.attack = attack;
        self
    }

    pub fn with_health(mut self, health: i64) -> Self {
        self.health = health;
        self.max_health = self.max_health.max(health);
        self
    }

    pub fn with_progression_level(mut self, level: u32) -> Self {
        self.progression_level = level;
        self
    }

    /// Apply incoming damage, flooring health at zero.
    pub fn take_damage(&mut self, amount: i64) {
        self.health = (self.health - amount).max(0);
    }

    /// Whether this actor has been knocked out.
    pub fn is_fainted(&self) -> bool {
        self.health == 0
    }
}
