//! Quest ledger errors.

use beastbound_domain::{ActorId, DomainError, QuestId};

use crate::infrastructure::ports::RepoError;

/// Errors that can occur during quest operations.
#[derive(Debug, thiserror::Error)]
pub enum QuestError {
    #[error("Actor not found: {0}")]
    ActorNotFound(ActorId),
    #[error("Quest not found: {0}")]
    QuestNotFound(QuestId),
    /// Claim attempted before the kill requirement is met.
    #[error("Quest is not complete yet")]
    Incomplete,
    #[error("Insufficient funds: need {required}, have {available}")]
    InsufficientFunds { required: i64, available: i64 },
    #[error("Validation error: {0}")]
    Validation(#[from] DomainError),
    #[error("Repository error: {0}")]
    Repo(#[from] RepoError),
}
