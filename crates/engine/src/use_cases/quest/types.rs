//! Quest operation result types.

use beastbound_domain::QuestKind;

/// Result of claiming a completed quest.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClaimResult {
    pub gold: i64,
    pub xp: i64,
    pub kind: QuestKind,
}

/// Result of abandoning a quest.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AbandonResult {
    /// Money remaining after the abandon fee.
    pub remaining_money: i64,
}
