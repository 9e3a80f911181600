//! Duel operation errors.

use beastbound_domain::ActorId;

use crate::infrastructure::ports::RepoError;

/// Errors that can occur during duel operations.
#[derive(Debug, thiserror::Error)]
pub enum DuelError {
    #[error("Actor not found: {0}")]
    ActorNotFound(ActorId),
    /// Attack submitted by the non-active party. Non-fatal; retry after the
    /// opponent moves.
    #[error("Not your turn")]
    OutOfTurn,
    #[error("Repository error: {0}")]
    Repo(#[from] RepoError),
}
