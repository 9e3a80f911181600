//! Quest ledger use cases.
//!
//! Maintains each actor's up-to-3 active quests: refill from the eligible
//! species pool, claim completed quests, abandon unwanted ones. Ledger
//! mutations for one actor are serialized by a per-actor lock; different
//! actors never contend.

mod error;
mod pool;
mod reward;
mod types;

pub use error::QuestError;
pub use pool::eligible_species;
pub use reward::{compute_reward, Reward};
pub use types::{AbandonResult, ClaimResult};

use std::sync::Arc;

use dashmap::DashMap;
use tokio::sync::Mutex;

use beastbound_domain::{
    Actor, ActorId, Quest, QuestId, QuestKind, QuestLog, SpeciesCatalog,
};

use crate::infrastructure::ports::{ActorRepo, ClockPort, NotificationPort, RandomPort};

/// Fee for abandoning a quest.
const ABANDON_COST: i64 = 1000;

/// Chance (percent) that a generated quest is golden.
const GOLDEN_CHANCE_PERCENT: i32 = 5;

/// Quest ledger operations.
pub struct QuestOps {
    actors: Arc<dyn ActorRepo>,
    notifications: Arc<dyn NotificationPort>,
    random: Arc<dyn RandomPort>,
    clock: Arc<dyn ClockPort>,
    catalog: SpeciesCatalog,
    locks: DashMap<ActorId, Arc<Mutex<()>>>,
}

impl QuestOps {
    pub fn new(
        actors: Arc<dyn ActorRepo>,
        notifications: Arc<dyn NotificationPort>,
        random: Arc<dyn RandomPort>,
        clock: Arc<dyn ClockPort>,
        catalog: SpeciesCatalog,
    ) -> Self {
        Self {
            actors,
            notifications,
            random,
            clock,
            catalog,
            locks: DashMap::new(),
        }
    }

    /// Top the actor's ledger back up to capacity and return it.
    pub async fn refill(&self, actor_id: ActorId) -> Result<QuestLog, QuestError> {
        let lock = self.lock_for(actor_id);
        let _guard = lock.lock().await;

        let mut actor = self.require_actor(actor_id).await?;
        let missing = actor.quest_log.missing_slots();
        if missing == 0 {
            return Ok(actor.quest_log);
        }

        let candidates = eligible_species(&self.catalog, actor.progression_level);
        for _ in 0..missing {
            let quest = self.generate_quest(&actor, &candidates);
            actor.quest_log.push(quest)?;
        }
        self.actors.save(&actor).await?;

        tracing::info!(
            actor_id = %actor_id,
            added = missing,
            total = actor.quest_log.len(),
            "Quest ledger refilled"
        );
        Ok(actor.quest_log)
    }

    /// Claim a completed quest: grant gold, xp to both experience counters,
    /// and for golden quests a golden emblem; remove the quest.
    pub async fn claim(
        &self,
        actor_id: ActorId,
        quest_id: QuestId,
    ) -> Result<ClaimResult, QuestError> {
        let lock = self.lock_for(actor_id);
        let _guard = lock.lock().await;

        let mut actor = self.require_actor(actor_id).await?;
        let quest = actor
            .quest_log
            .get(quest_id)
            .ok_or(QuestError::QuestNotFound(quest_id))?;
        if !quest.is_complete() {
            return Err(QuestError::Incomplete);
        }

        // Single save at the end keeps the grant all-or-nothing.
        let quest = actor
            .quest_log
            .remove(quest_id)
            .ok_or(QuestError::QuestNotFound(quest_id))?;
        actor.money += quest.gold;
        actor.experience += quest.xp;
        actor.companion_experience += quest.xp;
        if quest.kind == QuestKind::Golden {
            actor.inventory.golden_emblems += 1;
        }
        self.actors.save(&actor).await?;

        tracing::info!(
            actor_id = %actor_id,
            quest_id = %quest_id,
            gold = quest.gold,
            xp = quest.xp,
            kind = ?quest.kind,
            "Quest claimed"
        );
        self.notifications
            .send_to(
                actor_id,
                &format!(
                    "Quest complete: {} x{} hunted, {} gold and {} xp earned",
                    quest.species, quest.required_kills, quest.gold, quest.xp
                ),
            )
            .await;
        if quest.kind == QuestKind::Golden {
            self.notifications
                .broadcast(&format!("{} completed a golden quest!", actor.name))
                .await;
        }

        Ok(ClaimResult {
            gold: quest.gold,
            xp: quest.xp,
            kind: quest.kind,
        })
    }

    /// Abandon a quest for a fee; no reward is granted.
    pub async fn abandon(
        &self,
        actor_id: ActorId,
        quest_id: QuestId,
    ) -> Result<AbandonResult, QuestError> {
        let lock = self.lock_for(actor_id);
        let _guard = lock.lock().await;

        let mut actor = self.require_actor(actor_id).await?;
        // Fee check comes first: a broke actor is told about the fee even
        // for a quest id that does not exist.
        if actor.money < ABANDON_COST {
            return Err(QuestError::InsufficientFunds {
                required: ABANDON_COST,
                available: actor.money,
            });
        }
        actor
            .quest_log
            .remove(quest_id)
            .ok_or(QuestError::QuestNotFound(quest_id))?;
        actor.money -= ABANDON_COST;
        self.actors.save(&actor).await?;

        tracing::info!(
            actor_id = %actor_id,
            quest_id = %quest_id,
            fee = ABANDON_COST,
            "Quest abandoned"
        );
        self.notifications
            .send_to(actor_id, &format!("Quest abandoned for {ABANDON_COST} gold"))
            .await;

        Ok(AbandonResult {
            remaining_money: actor.money,
        })
    }

    fn generate_quest(&self, actor: &Actor, candidates: &[String]) -> Quest {
        let pick = if candidates.len() > 1 {
            self.random.gen_range(0, candidates.len() as i32 - 1) as usize
        } else {
            0
        };
        let species = candidates
            .get(pick)
            .map(String::as_str)
            .unwrap_or_else(|| self.catalog.fallback());

        let target_level = actor.progression_level.max(1);
        let golden = self.random.gen_range(1, 100) <= GOLDEN_CHANCE_PERCENT;
        let required_kills = if golden {
            1
        } else {
            self.random.gen_range(1, 3) as u32
        };
        let reward = compute_reward(
            &self.catalog,
            self.random.as_ref(),
            species,
            target_level,
            required_kills,
            golden,
        );

        Quest {
            id: QuestId::from_uuid(self.random.gen_uuid()),
            species: species.to_string(),
            target_level,
            required_kills,
            progress: 0,
            gold: reward.gold,
            xp: reward.xp,
            kind: if golden {
                QuestKind::Golden
            } else {
                QuestKind::Normal
            },
            accepted_at: self.clock.now(),
        }
    }

    fn lock_for(&self, id: ActorId) -> Arc<Mutex<()>> {
        let entry = self
            .locks
            .entry(id)
            .or_insert_with(|| Arc::new(Mutex::new(())));
        Arc::clone(entry.value())
    }

    async fn require_actor(&self, id: ActorId) -> Result<Actor, QuestError> {
        self.actors
            .get(id)
            .await?
            .ok_or(QuestError::ActorNotFound(id))
    }
}
