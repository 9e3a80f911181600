//! Repository port traits for actor storage.

use async_trait::async_trait;
use beastbound_domain::{Actor, ActorId};

use super::error::RepoError;

/// Actor persistence port.
///
/// The backing store owns the actor's monetary/experience fields; the engine
/// loads, mutates, and saves whole records. `get` returns `Ok(None)` for an
/// unknown id so callers can map it to their own error kind.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ActorRepo: Send + Sync {
    async fn get(&self, id: ActorId) -> Result<Option<Actor>, RepoError>;
    async fn save(&self, actor: &Actor) -> Result<(), RepoError>;
}
