//! Gacha drawing use case.
//!
//! Single weighted draw from a fixed-cost prize catalog. The draw walks the
//! table in catalog order accumulating weights; the first prize whose
//! cumulative weight reaches the rolled value wins.

mod error;

pub use error::GachaError;

use std::sync::Arc;

use beastbound_domain::{Actor, ActorId, GachaPrize, GachaTable};

use crate::infrastructure::ports::{ActorRepo, NotificationPort, RandomPort};

/// Result of a draw.
#[derive(Debug, Clone)]
pub struct DrawResult {
    pub prize: GachaPrize,
    pub cost: i64,
    pub remaining_money: i64,
}

/// Gacha drawing operations.
pub struct GachaOps {
    actors: Arc<dyn ActorRepo>,
    notifications: Arc<dyn NotificationPort>,
    random: Arc<dyn RandomPort>,
    tables: Vec<GachaTable>,
}

impl GachaOps {
    pub fn new(
        actors: Arc<dyn ActorRepo>,
        notifications: Arc<dyn NotificationPort>,
        random: Arc<dyn RandomPort>,
        tables: Vec<GachaTable>,
    ) -> Self {
        Self {
            actors,
            notifications,
            random,
            tables,
        }
    }

    /// Draw once from the named table, deducting its cost first and adding
    /// the prize's base strength to the actor's companion attack.
    pub async fn draw(&self, actor_id: ActorId, table: &str) -> Result<DrawResult, GachaError> {
        let table = self
            .tables
            .iter()
            .find(|t| t.name == table)
            .ok_or_else(|| GachaError::UnknownTable(table.to_string()))?;

        let mut actor = self.require_actor(actor_id).await?;
        if actor.money < table.cost {
            return Err(GachaError::InsufficientFunds {
                required: table.cost,
                available: actor.money,
            });
        }

        let roll = self.random.gen_range(1, 100);
        let prize =
            select_prize(table, roll).ok_or_else(|| GachaError::UnknownTable(table.name.clone()))?;

        actor.money -= table.cost;
        actor.attack += prize.base_strength;
        self.actors.save(&actor).await?;

        tracing::info!(
            actor_id = %actor_id,
            table = %table.name,
            roll,
            prize = %prize.name,
            "Gacha drawn"
        );
        self.notifications
            .broadcast(&format!("{} drew {} from the gacha!", actor.name, prize.name))
            .await;

        Ok(DrawResult {
            prize: prize.clone(),
            cost: table.cost,
            remaining_money: actor.money,
        })
    }

    async fn require_actor(&self, id: ActorId) -> Result<Actor, GachaError> {
        self.actors
            .get(id)
            .await?
            .ok_or(GachaError::ActorNotFound(id))
    }
}

/// First prize whose cumulative weight reaches the roll; falls back to the
/// first entry when the weights sum below the rolled value. None only for
/// an empty table.
fn select_prize(table: &GachaTable, roll: i32) -> Option<&GachaPrize> {
    let mut cumulative = 0i32;
    for prize in &table.prizes {
        cumulative += prize.weight as i32;
        if cumulative >= roll {
            return Some(prize);
        }
    }
    table.prizes.first()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::clock::FixedRandom;
    use crate::infrastructure::memory::InMemoryActorRepo;
    use crate::use_cases::test_support::RecordingSink;

    fn ops_with_roll(repo: Arc<InMemoryActorRepo>, roll: i32) -> (GachaOps, Arc<RecordingSink>) {
        let sink = Arc::new(RecordingSink::default());
        let ops = GachaOps::new(
            repo,
            sink.clone(),
            Arc::new(FixedRandom {
                value: roll,
                jitter: 1.0,
            }),
            vec![GachaTable::standard()],
        );
        (ops, sink)
    }

    #[test]
    fn roll_of_one_selects_the_first_prize() {
        let table = GachaTable::standard();
        assert_eq!(select_prize(&table, 1).expect("prize").name, "小拉達");
    }

    #[test]
    fn roll_of_one_hundred_selects_the_last_prize() {
        let table = GachaTable::standard();
        assert_eq!(select_prize(&table, 100).expect("prize").name, "快龍");
    }

    #[test]
    fn boundary_rolls_respect_cumulative_weights() {
        // Standard weights: 40 / 30 / 20 / 7 / 3.
        let table = GachaTable::standard();
        assert_eq!(select_prize(&table, 40).expect("prize").name, "小拉達");
        assert_eq!(select_prize(&table, 41).expect("prize").name, "波波");
        assert_eq!(select_prize(&table, 70).expect("prize").name, "波波");
        assert_eq!(select_prize(&table, 71).expect("prize").name, "皮卡丘");
        assert_eq!(select_prize(&table, 97).expect("prize").name, "卡比獸");
        assert_eq!(select_prize(&table, 98).expect("prize").name, "快龍");
    }

    #[test]
    fn underweight_table_defaults_to_the_first_entry() {
        let mut table = GachaTable::standard();
        table.prizes.truncate(2); // weights now sum to 70
        assert_eq!(select_prize(&table, 99).expect("prize").name, "小拉達");
    }

    #[tokio::test]
    async fn draw_deducts_cost_and_boosts_the_companion() {
        let repo = Arc::new(InMemoryActorRepo::new());
        let actor = beastbound_domain::Actor::new("Ash")
            .with_money(1500)
            .with_attack(10);
        repo.seed(&actor).expect("seed");
        let (ops, sink) = ops_with_roll(repo.clone(), 100);

        let result = ops.draw(actor.id, "standard").await.expect("draw");
        assert_eq!(result.prize.name, "快龍");
        assert_eq!(result.cost, 1000);
        assert_eq!(result.remaining_money, 500);

        let saved = repo.get(actor.id).await.expect("get").expect("present");
        assert_eq!(saved.money, 500);
        assert_eq!(saved.attack, 40);
        assert!(sink.messages().iter().any(|m| m.contains("快龍")));
    }

    #[tokio::test]
    async fn draw_without_funds_fails_and_changes_nothing() {
        let repo = Arc::new(InMemoryActorRepo::new());
        let actor = beastbound_domain::Actor::new("Ash").with_money(999);
        repo.seed(&actor).expect("seed");
        let (ops, sink) = ops_with_roll(repo.clone(), 1);

        assert!(matches!(
            ops.draw(actor.id, "standard").await,
            Err(GachaError::InsufficientFunds {
                required: 1000,
                available: 999,
            })
        ));

        let saved = repo.get(actor.id).await.expect("get").expect("present");
        assert_eq!(saved.money, 999);
        assert!(sink.messages().is_empty());
    }

    #[tokio::test]
    async fn unknown_table_fails() {
        let repo = Arc::new(InMemoryActorRepo::new());
        let actor = beastbound_domain::Actor::new("Ash").with_money(5000);
        repo.seed(&actor).expect("seed");
        let (ops, _) = ops_with_roll(repo, 1);

        assert!(matches!(
            ops.draw(actor.id, "premium").await,
            Err(GachaError::UnknownTable(name)) if name == "premium"
        ));
    }

    #[tokio::test]
    async fn unknown_actor_fails() {
        let repo = Arc::new(InMemoryActorRepo::new());
        let (ops, _) = ops_with_roll(repo, 1);
        let ghost = ActorId::new();
        assert!(matches!(
            ops.draw(ghost, "standard").await,
            Err(GachaError::ActorNotFound(id)) if id == ghost
        ));
    }
}
