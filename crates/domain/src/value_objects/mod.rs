//! Value objects - small invariant-carrying types.

mod inventory;
mod pair;

pub use inventory::{InventoryCounters, INVENTORY_SCHEMA};
pub use pair::PairKey;
