//! External service ports.

use async_trait::async_trait;
use beastbound_domain::ActorId;

use super::error::AuthError;

/// Notification sink consumed by the use cases.
///
/// Delivery is best-effort: a failed delivery to one observer must not fail
/// the whole broadcast.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait NotificationPort: Send + Sync {
    /// Announce to every connected observer.
    async fn broadcast(&self, text: &str);
    /// Deliver to one actor's observer, if connected.
    async fn send_to(&self, actor_id: ActorId, text: &str);
}

/// Resolves a request credential to the acting actor.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait AuthPort: Send + Sync {
    async fn resolve(&self, credential: &str) -> Result<ActorId, AuthError>;
}
