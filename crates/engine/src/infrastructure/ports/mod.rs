//! Port traits for infrastructure boundaries.
//!
//! These are the ONLY abstractions in the engine. Everything else is
//! concrete types. Ports exist for:
//! - Actor storage (the persistence collaborator is out of scope here)
//! - Notification delivery (swap in-process fanout for a message bus)
//! - Credential resolution
//! - Clock/Random (for testing)

mod error;
mod external;
mod repos;
mod testing;

pub use error::{AuthError, RepoError};
pub use external::{AuthPort, NotificationPort};
pub use repos::ActorRepo;
pub use testing::{ClockPort, RandomPort};

// Test-only mocks (only available during test builds)
#[cfg(test)]
pub use external::{MockAuthPort, MockNotificationPort};
#[cfg(test)]
pub use repos::MockActorRepo;
#[cfg(test)]
pub use testing::MockClockPort;
