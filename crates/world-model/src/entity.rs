//! Declared attributes and persisted state for summoned entities.
//!
//! Entities have no deterministic key: the identity is a random token
//! minted at creation and embedded as the entity's CustomName. The token
//! is the only handle the remote side will ever answer to, so the state
//! record must carry it; position and type may be absent after an import.

use crate::attr::Attr;
use crate::position::Position;
use crate::values::WoolColor;
use serde::{Deserialize, Serialize};

/// An arbitrary entity summoned by type.
#[derive(Debug, Clone, Deserialize)]
pub struct EntityAttrs {
    #[serde(rename = "type")]
    pub entity_type: String,
    pub position: Position,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EntityState {
    pub id: String,
    #[serde(rename = "type", default)]
    pub entity_type: Option<String>,
    #[serde(default)]
    pub position: Option<Position>,
}

/// A sheep with wool color and sheared flag.
#[derive(Debug, Clone, Deserialize)]
pub struct SheepAttrs {
    pub position: Position,
    pub color: WoolColor,
    #[serde(default)]
    pub sheared: Attr<bool>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SheepState {
    pub id: String,
    #[serde(default)]
    pub position: Option<Position>,
    #[serde(default)]
    pub color: Option<WoolColor>,
    #[serde(default)]
    pub sheared: bool,
}

/// A zombie with behavior flags and health.
#[derive(Debug, Clone, Deserialize)]
pub struct ZombieAttrs {
    pub position: Position,
    #[serde(default)]
    pub is_baby: Attr<bool>,
    #[serde(default)]
    pub can_break_doors: Attr<bool>,
    #[serde(default)]
    pub can_pick_up_loot: Attr<bool>,
    #[serde(default)]
    pub persistence_required: Attr<bool>,
    #[serde(default)]
    pub health: Attr<f64>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ZombieState {
    pub id: String,
    #[serde(default)]
    pub position: Option<Position>,
    #[serde(default)]
    pub is_baby: bool,
    #[serde(default)]
    pub can_break_doors: bool,
    #[serde(default)]
    pub can_pick_up_loot: bool,
    #[serde(default)]
    pub persistence_required: bool,
    #[serde(default = "default_health")]
    pub health: f64,
}

fn default_health() -> f64 {
    20.0
}
