//! Gacha prize catalogs.
//!
//! Static weighted reference data; drawing logic lives in the engine.

use serde::{Deserialize, Serialize};

/// One entry in a gacha table.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GachaPrize {
    pub name: String,
    /// Weight out of 100; selection accumulates weights in catalog order.
    pub weight: u32,
    /// Added to the winner's companion attack stat.
    pub base_strength: i64,
    /// Client-side image reference.
    pub image: String,
}

/// A fixed-cost prize catalog.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GachaTable {
    pub name: String,
    pub cost: i64,
    pub prizes: Vec<GachaPrize>,
}

impl GachaTable {
    /// The stock table shipped with the game. Weights sum to 100.
    pub fn standard() -> Self {
        let prize = |name: &str, weight: u32, strength: i64| GachaPrize {
            name: name.to_string(),
            weight,
            base_strength: strength,
            image: format!("/static/gacha/{name}.png"),
        };
        Self {
            name: "standard".to_string(),
            cost: 1000,
            prizes: vec![
                prize("小拉達", 40, 2),
                prize("波波", 30, 4),
                prize("皮卡丘", 20, 8),
                prize("卡比獸", 7, 15),
                prize("快龍", 3, 30),
            ],
        }
    }
}
