//! Typed inventory counters.
//!
//! The actor store persists this as an opaque text column; the explicit
//! `schema` field lets future shapes migrate old rows instead of guessing
//! at untyped JSON.

use serde::{Deserialize, Serialize};

/// Current serialized shape of [`InventoryCounters`].
pub const INVENTORY_SCHEMA: u32 = 1;

/// Consumable counters carried by an actor.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InventoryCounters {
    /// Serialized-shape version.
    #[serde(default = "default_schema")]
    pub schema: u32,
    /// Earned by claiming golden quests.
    #[serde(default)]
    pub golden_emblems: u32,
}

fn default_schema() -> u32 {
    INVENTORY_SCHEMA
}

impl Default for InventoryCounters {
    fn default() -> Self {
        Self {
            schema: INVENTORY_SCHEMA,
            golden_emblems: 0,
        }
    }
}
