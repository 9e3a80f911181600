//! In-memory actor store.
//!
//! DashMap-backed implementation of [`ActorRepo`] for tests and embedders
//! running without a database. Rows are stored as serialized JSON text,
//! matching the shape of the real store's opaque columns.

use async_trait::async_trait;
use beastbound_domain::{Actor, ActorId};
use dashmap::DashMap;

use crate::infrastructure::ports::{ActorRepo, RepoError};

/// Concurrent in-memory actor rows.
pub struct InMemoryActorRepo {
    rows: DashMap<ActorId, String>,
}

impl InMemoryActorRepo {
    pub fn new() -> Self {
        Self {
            rows: DashMap::new(),
        }
    }

    /// Seed an actor, returning its id.
    pub fn seed(&self, actor: &Actor) -> Result<ActorId, RepoError> {
        let row = serde_json::to_string(actor).map_err(RepoError::serialization)?;
        self.rows.insert(actor.id, row);
        Ok(actor.id)
    }
}

impl Default for InMemoryActorRepo {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ActorRepo for InMemoryActorRepo {
    async fn get(&self, id: ActorId) -> Result<Option<Actor>, RepoError> {
        match self.rows.get(&id) {
            Some(row) => {
                let actor = serde_json::from_str(row.value()).map_err(RepoError::serialization)?;
                Ok(Some(actor))
            }
            None => Ok(None),
        }
    }

    async fn save(&self, actor: &Actor) -> Result<(), RepoError> {
        let row = serde_json::to_string(actor).map_err(RepoError::serialization)?;
        self.rows.insert(actor.id, row);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn round_trips_an_actor() {
        let repo = InMemoryActorRepo::new();
        let actor = Actor::new("Ash").with_money(500);
        repo.seed(&actor).expect("seed");

        let loaded = repo.get(actor.id).await.expect("get").expect("present");
        assert_eq!(loaded.name, "Ash");
        assert_eq!(loaded.money, 500);
    }

    #[tokio::test]
    async fn unknown_id_is_none() {
        let repo = InMemoryActorRepo::new();
        assert!(repo.get(ActorId::new()).await.expect("get").is_none());
    }
}
