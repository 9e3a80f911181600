//! Gacha operation errors.

use beastbound_domain::ActorId;

use crate::infrastructure::ports::RepoError;

/// Errors that can occur during gacha draws.
#[derive(Debug, thiserror::Error)]
pub enum GachaError {
    #[error("Actor not found: {0}")]
    ActorNotFound(ActorId),
    #[error("Unknown gacha table: {0}")]
    UnknownTable(String),
    #[error("Insufficient funds: need {required}, have {available}")]
    InsufficientFunds { required: i64, available: i64 },
    #[error("Repository error: {0}")]
    Repo(#[from] RepoError),
}
