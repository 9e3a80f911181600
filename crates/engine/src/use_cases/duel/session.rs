//! Duel session state.

use beastbound_domain::{ActorId, PairKey};

/// Live state of one duel, keyed by the canonical pair.
///
/// `ended` tombstones a session that has been destroyed or displaced while
/// another task still holds its mutex; such a task re-reads the registry
/// instead of writing through the detached state.
#[derive(Debug)]
pub struct DuelSession {
    pub pair: PairKey,
    pub turn_holder: ActorId,
    pub ended: bool,
}

impl DuelSession {
    pub fn new(pair: PairKey, turn_holder: ActorId) -> Self {
        debug_assert!(pair.contains(turn_holder));
        Self {
            pair,
            turn_holder,
            ended: false,
        }
    }
}

/// Result of an accepted attack.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AttackOutcome {
    /// Defender still stands; the turn has passed to them.
    Continued {
        damage: i64,
        defender_health: i64,
        next_turn: ActorId,
    },
    /// Defender fainted; the session is destroyed and the spoils moved.
    Victory { damage: i64, spoils: i64 },
}
