//! Connection management for notification observers.
//!
//! Tracks connected observers and fans announcements out to them. The
//! in-process implementation of the notification sink consumed by the use
//! cases; a gateway hands each observer's sender half to `register`.

use std::collections::HashMap;

use async_trait::async_trait;
use tokio::sync::{mpsc, RwLock};

use beastbound_domain::ActorId;

use crate::infrastructure::ports::NotificationPort;

/// Manages all connected observers.
///
/// Delivery is best-effort: an observer whose channel is closed or full is
/// dropped from the registry, and the broadcast continues to the rest.
pub struct ConnectionManager {
    observers: RwLock<HashMap<ActorId, mpsc::Sender<String>>>,
}

impl ConnectionManager {
    pub fn new() -> Self {
        Self {
            observers: RwLock::new(HashMap::new()),
        }
    }

    /// Register an observer for an actor, replacing any previous handle.
    pub async fn register(&self, actor_id: ActorId, sender: mpsc::Sender<String>) {
        let mut observers = self.observers.write().await;
        observers.insert(actor_id, sender);
        tracing::debug!(actor_id = %actor_id, "Observer registered");
    }

    /// Unregister an actor's observer.
    pub async fn unregister(&self, actor_id: ActorId) {
        let mut observers = self.observers.write().await;
        if observers.remove(&actor_id).is_some() {
            tracing::debug!(actor_id = %actor_id, "Observer unregistered");
        }
    }

    /// Actors with a connected observer.
    pub async fn list_online(&self) -> Vec<ActorId> {
        let observers = self.observers.read().await;
        observers.keys().copied().collect()
    }

    /// Drop observers whose deliveries failed.
    async fn evict(&self, dead: Vec<ActorId>) {
        if dead.is_empty() {
            return;
        }
        let mut observers = self.observers.write().await;
        for actor_id in dead {
            if observers.remove(&actor_id).is_some() {
                tracing::warn!(actor_id = %actor_id, "Observer dropped after failed delivery");
            }
        }
    }
}

impl Default for ConnectionManager {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl NotificationPort for ConnectionManager {
    async fn broadcast(&self, text: &str) {
        let dead: Vec<ActorId> = {
            let observers = self.observers.read().await;
            observers
                .iter()
                .filter(|(_, sender)| sender.try_send(text.to_string()).is_err())
                .map(|(actor_id, _)| *actor_id)
                .collect()
        };
        self.evict(dead).await;
    }

    async fn send_to(&self, actor_id: ActorId, text: &str) {
        let failed = {
            let observers = self.observers.read().await;
            match observers.get(&actor_id) {
                Some(sender) => sender.try_send(text.to_string()).is_err(),
                None => false,
            }
        };
        if failed {
            self.evict(vec![actor_id]).await;
        }
    }
}
