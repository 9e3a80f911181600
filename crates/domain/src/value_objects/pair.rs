//! Canonical unordered pair of actors.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::ids::ActorId;

/// An unordered pair of actor ids, normalized so the smaller uuid comes
/// first. Used as the lookup key for duel sessions: `PairKey::new(a, b)`
/// and `PairKey::new(b, a)` are equal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PairKey {
    first: ActorId,
    second: ActorId,
}

impl PairKey {
    pub fn new(a: ActorId, b: ActorId) -> Self {
        if a <= b {
            Self {
                first: a,
                second: b,
            }
        } else {
            Self {
                first: b,
                second: a,
            }
        }
    }

    pub fn first(&self) -> ActorId {
        self.first
    }

    pub fn second(&self) -> ActorId {
        self.second
    }

    /// Whether the given actor is one of the pair.
    pub fn contains(&self, id: ActorId) -> bool {
        self.first == id || self.second == id
    }

    /// The other member of the pair, or None if `id` is not a member.
    pub fn other(&self, id: ActorId) -> Option<ActorId> {
        if id == self.first {
            Some(self.second)
        } else if id == self.second {
            Some(self.first)
        } else {
            None
        }
    }
}

impl fmt::Display for PairKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}<->{}", self.first, self.second)
    }
}
