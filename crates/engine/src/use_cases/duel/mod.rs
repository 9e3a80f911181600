//! Duel turn-arbitration use cases.
//!
//! Serializes combat between exactly two actors so attacks alternate
//! strictly even under concurrent submission. Sessions live in a sharded
//! concurrent map keyed by the canonical pair; each session carries its own
//! async mutex, so simultaneous attacks on the same pair are serialized
//! while unrelated duels never contend.

mod error;
mod session;

pub use error::DuelError;
pub use session::{AttackOutcome, DuelSession};

use std::sync::Arc;

use dashmap::DashMap;
use tokio::sync::Mutex;

use beastbound_domain::{Actor, ActorId, PairKey};

use crate::infrastructure::ports::{ActorRepo, NotificationPort};

/// Share of the loser's money transferred to the winner.
const SPOILS_DIVISOR: i64 = 10;

/// Duel session registry.
pub struct DuelOps {
    actors: Arc<dyn ActorRepo>,
    notifications: Arc<dyn NotificationPort>,
    sessions: DashMap<PairKey, Arc<Mutex<DuelSession>>>,
}

impl DuelOps {
    pub fn new(actors: Arc<dyn ActorRepo>, notifications: Arc<dyn NotificationPort>) -> Self {
        Self {
            actors,
            notifications,
            sessions: DashMap::new(),
        }
    }

    /// Start (or restart) a duel with the initiator holding the first turn.
    ///
    /// Always resets an existing session for the pair; the displaced session
    /// is tombstoned so a task still holding it cannot write through it.
    pub async fn start(&self, initiator: ActorId, target: ActorId) -> Result<(), DuelError> {
        let initiator_actor = self.require_actor(initiator).await?;
        let target_actor = self.require_actor(target).await?;

        let pair = PairKey::new(initiator, target);
        let session = Arc::new(Mutex::new(DuelSession::new(pair, initiator)));
        if let Some(displaced) = self.sessions.insert(pair, session) {
            displaced.lock().await.ended = true;
        }

        tracing::info!(
            initiator = %initiator,
            target = %target,
            "Duel started"
        );
        self.notifications
            .broadcast(&format!(
                "{} challenged {} to a duel!",
                initiator_actor.name, target_actor.name
            ))
            .await;
        Ok(())
    }

    /// Submit an attack.
    ///
    /// Creates the session on first contact (recovery after restart); the
    /// first attack for a missing session is unconditionally accepted.
    /// Otherwise fails with [`DuelError::OutOfTurn`] unless the attacker
    /// holds the turn.
    pub async fn attack(
        &self,
        attacker_id: ActorId,
        defender_id: ActorId,
    ) -> Result<AttackOutcome, DuelError> {
        // Resolve both actors before touching the registry so a NotFound
        // leaves session state unchanged.
        self.require_actor(attacker_id).await?;
        self.require_actor(defender_id).await?;

        let pair = PairKey::new(attacker_id, defender_id);
        loop {
            let cell = {
                let entry = self
                    .sessions
                    .entry(pair)
                    .or_insert_with(|| Arc::new(Mutex::new(DuelSession::new(pair, attacker_id))));
                Arc::clone(entry.value())
            };
            let mut session = cell.lock().await;
            if session.ended {
                // Destroyed or displaced between lookup and lock; re-read.
                drop(session);
                continue;
            }

            if session.turn_holder != attacker_id {
                return Err(DuelError::OutOfTurn);
            }

            // Re-read both records under the pair lock so an attack
            // serialized behind another never writes stale state.
            let mut attacker = self.require_actor(attacker_id).await?;
            let mut defender = self.require_actor(defender_id).await?;

            let damage = attacker.attack;
            defender.take_damage(damage);

            if defender.is_fainted() {
                let spoils = defender.money / SPOILS_DIVISOR;
                defender.money -= spoils;
                attacker.money += spoils;
                self.actors.save(&defender).await?;
                self.actors.save(&attacker).await?;
                session.ended = true;
                drop(session);
                self.sessions.remove(&pair);

                tracing::info!(
                    winner = %attacker_id,
                    loser = %defender_id,
                    damage,
                    spoils,
                    "Duel ended"
                );
                self.notifications
                    .broadcast(&format!(
                        "{} defeated {} and claimed {} gold!",
                        attacker.name, defender.name, spoils
                    ))
                    .await;
                return Ok(AttackOutcome::Victory { damage, spoils });
            }

            // Flip the turn only after the defender's record is persisted.
            self.actors.save(&defender).await?;
            session.turn_holder = defender_id;

            tracing::info!(
                attacker = %attacker_id,
                defender = %defender_id,
                damage,
                defender_health = defender.health,
                "Attack landed"
            );
            self.notifications
                .broadcast(&format!(
                    "{} hit {} for {} damage ({} HP left)",
                    attacker.name, defender.name, damage, defender.health
                ))
                .await;
            return Ok(AttackOutcome::Continued {
                damage,
                defender_health: defender.health,
                next_turn: defender_id,
            });
        }
    }

    /// Current turn holder for a pair, if a session exists. Exposed for
    /// request handlers that render duel state.
    pub async fn turn_holder(&self, a: ActorId, b: ActorId) -> Option<ActorId> {
        let cell = {
            let entry = self.sessions.get(&PairKey::new(a, b))?;
            Arc::clone(entry.value())
        };
        let session = cell.lock().await;
        if session.ended {
            None
        } else {
            Some(session.turn_holder)
        }
    }

    async fn require_actor(&self, id: ActorId) -> Result<Actor, DuelError> {
        self.actors
            .get(id)
            .await?
            .ok_or(DuelError::ActorNotFound(id))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::memory::InMemoryActorRepo;
    use crate::use_cases::test_support::RecordingSink;

    fn fighter(name: &str, health: i64, attack: i64, money: i64) -> Actor {
        Actor::new(name)
            .with_health(health)
            .with_attack(attack)
            .with_money(money)
    }

    fn ops_with(actors: &[&Actor]) -> (Arc<DuelOps>, Arc<InMemoryActorRepo>, Arc<RecordingSink>) {
        let repo = Arc::new(InMemoryActorRepo::new());
        for actor in actors {
            repo.seed(actor).expect("seed");
        }
        let sink = Arc::new(RecordingSink::default());
        let ops = Arc::new(DuelOps::new(repo.clone(), sink.clone()));
        (ops, repo, sink)
    }

    #[tokio::test]
    async fn start_gives_initiator_the_turn() {
        let a = fighter("Ash", 100, 10, 0);
        let b = fighter("Misty", 100, 10, 0);
        let (ops, _, sink) = ops_with(&[&a, &b]);

        ops.start(a.id, b.id).await.expect("start");

        assert_eq!(ops.turn_holder(a.id, b.id).await, Some(a.id));
        assert!(matches!(
            ops.attack(b.id, a.id).await,
            Err(DuelError::OutOfTurn)
        ));
        assert!(sink.messages().iter().any(|m| m.contains("challenged")));
    }

    #[tokio::test]
    async fn first_attack_without_start_is_accepted() {
        let a = fighter("Ash", 100, 10, 0);
        let b = fighter("Misty", 100, 10, 0);
        let (ops, repo, _) = ops_with(&[&a, &b]);

        let outcome = ops.attack(a.id, b.id).await.expect("attack accepted");
        assert_eq!(
            outcome,
            AttackOutcome::Continued {
                damage: 10,
                defender_health: 90,
                next_turn: b.id,
            }
        );
        let saved = repo.get(b.id).await.expect("get").expect("present");
        assert_eq!(saved.health, 90);
    }

    #[tokio::test]
    async fn turns_alternate_strictly() {
        let a = fighter("Ash", 1000, 10, 0);
        let b = fighter("Misty", 1000, 10, 0);
        let (ops, _, _) = ops_with(&[&a, &b]);

        ops.start(a.id, b.id).await.expect("start");
        for round in 0..6 {
            let (attacker, defender) = if round % 2 == 0 { (&a, &b) } else { (&b, &a) };
            // Same side again must be rejected before the opponent moves.
            match ops.attack(attacker.id, defender.id).await.expect("in turn") {
                AttackOutcome::Continued { next_turn, .. } => assert_eq!(next_turn, defender.id),
                other => panic!("unexpected outcome: {other:?}"),
            }
            assert!(matches!(
                ops.attack(attacker.id, defender.id).await,
                Err(DuelError::OutOfTurn)
            ));
        }
    }

    #[tokio::test]
    async fn out_of_turn_leaves_state_unchanged() {
        let a = fighter("Ash", 100, 10, 0);
        let b = fighter("Misty", 100, 10, 0);
        let (ops, repo, _) = ops_with(&[&a, &b]);

        ops.start(a.id, b.id).await.expect("start");
        assert!(matches!(
            ops.attack(b.id, a.id).await,
            Err(DuelError::OutOfTurn)
        ));

        let saved = repo.get(a.id).await.expect("get").expect("present");
        assert_eq!(saved.health, 100);
        assert_eq!(ops.turn_holder(a.id, b.id).await, Some(a.id));
    }

    #[tokio::test]
    async fn unknown_actor_fails_without_creating_a_session() {
        let a = fighter("Ash", 100, 10, 0);
        let ghost = ActorId::new();
        let (ops, _, _) = ops_with(&[&a]);

        assert!(matches!(
            ops.attack(a.id, ghost).await,
            Err(DuelError::ActorNotFound(id)) if id == ghost
        ));
        assert_eq!(ops.turn_holder(a.id, ghost).await, None);
    }

    #[tokio::test]
    async fn victory_transfers_a_tenth_and_destroys_the_session() {
        let a = fighter("Ash", 100, 50, 100);
        let b = fighter("Misty", 40, 10, 1234);
        let (ops, repo, sink) = ops_with(&[&a, &b]);

        ops.start(a.id, b.id).await.expect("start");
        let outcome = ops.attack(a.id, b.id).await.expect("finishing blow");
        assert_eq!(
            outcome,
            AttackOutcome::Victory {
                damage: 50,
                spoils: 123,
            }
        );

        let winner = repo.get(a.id).await.expect("get").expect("present");
        let loser = repo.get(b.id).await.expect("get").expect("present");
        assert_eq!(winner.money, 223);
        assert_eq!(loser.money, 1111);
        assert_eq!(loser.health, 0);
        assert_eq!(ops.turn_holder(a.id, b.id).await, None);
        assert!(sink.messages().iter().any(|m| m.contains("defeated")));

        // Next attack for the pair starts a fresh session, loser goes first.
        let outcome = ops.attack(b.id, a.id).await.expect("fresh session");
        assert!(matches!(outcome, AttackOutcome::Continued { .. }));
    }

    #[tokio::test]
    async fn restart_resets_the_turn_holder() {
        let a = fighter("Ash", 100, 10, 0);
        let b = fighter("Misty", 100, 10, 0);
        let (ops, _, _) = ops_with(&[&a, &b]);

        ops.start(a.id, b.id).await.expect("start");
        ops.attack(a.id, b.id).await.expect("attack");
        assert_eq!(ops.turn_holder(a.id, b.id).await, Some(b.id));

        // Restarting puts the initiator back on turn.
        ops.start(a.id, b.id).await.expect("restart");
        assert_eq!(ops.turn_holder(a.id, b.id).await, Some(a.id));
    }

    #[tokio::test]
    async fn simultaneous_attacks_are_serialized_per_pair() {
        // With the turn on A, the pair lock admits the submissions one at a
        // time: A's attack always lands, and B's either raced in first (and
        // was rejected) or observed the flipped turn afterwards. Never zero
        // accepted attacks, never a lost or double-applied update.
        for _ in 0..50 {
            let a = fighter("Ash", 1000, 10, 0);
            let b = fighter("Misty", 1000, 10, 0);
            let (ops, repo, _) = ops_with(&[&a, &b]);
            ops.start(a.id, b.id).await.expect("start");

            let ops_a = ops.clone();
            let ops_b = ops.clone();
            let (a_id, b_id) = (a.id, b.id);
            let first = tokio::spawn(async move { ops_a.attack(a_id, b_id).await });
            let second = tokio::spawn(async move { ops_b.attack(b_id, a_id).await });
            let first = first.await.expect("join");
            let second = second.await.expect("join");

            assert!(first.is_ok(), "turn holder's attack must be accepted");
            let health_a = repo.get(a_id).await.expect("get").expect("present").health;
            let health_b = repo.get(b_id).await.expect("get").expect("present").health;
            match second {
                // B was serialized after A's accepted attack.
                Ok(_) => {
                    assert_eq!((health_a, health_b), (990, 990));
                    assert_eq!(ops.turn_holder(a_id, b_id).await, Some(a_id));
                }
                // B raced in while A still held the turn.
                Err(DuelError::OutOfTurn) => {
                    assert_eq!((health_a, health_b), (1000, 990));
                    assert_eq!(ops.turn_holder(a_id, b_id).await, Some(b_id));
                }
                Err(other) => panic!("unexpected error: {other}"),
            }
        }
    }

    #[tokio::test]
    async fn distinct_pairs_do_not_interfere() {
        let a = fighter("Ash", 100, 10, 0);
        let b = fighter("Misty", 100, 10, 0);
        let c = fighter("Brock", 100, 10, 0);
        let d = fighter("Gary", 100, 10, 0);
        let (ops, _, _) = ops_with(&[&a, &b, &c, &d]);

        ops.start(a.id, b.id).await.expect("start ab");
        ops.start(c.id, d.id).await.expect("start cd");
        ops.attack(a.id, b.id).await.expect("ab attack");

        // The other duel still waits on its own initiator.
        assert_eq!(ops.turn_holder(c.id, d.id).await, Some(c.id));
    }
}
