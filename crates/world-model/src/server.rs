//! Declared attributes and persisted state for server-level kinds:
//! teams, memberships, operator grants, and the global settings that
//! carry a prior-value snapshot.

use crate::attr::Attr;
use serde::{Deserialize, Serialize};

/// A scoreboard team and its optional display options.
#[derive(Debug, Clone, Deserialize)]
pub struct TeamAttrs {
    pub name: String,
    #[serde(default)]
    pub display_name: Attr<String>,
    #[serde(default)]
    pub color: Attr<String>,
    #[serde(default)]
    pub friendly_fire: Attr<bool>,
    #[serde(default)]
    pub see_friendly_invisibles: Attr<bool>,
    #[serde(default)]
    pub nametag_visibility: Attr<String>,
    #[serde(default)]
    pub collision_rule: Attr<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TeamState {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub display_name: Option<String>,
    #[serde(default)]
    pub color: Option<String>,
    #[serde(default)]
    pub friendly_fire: Option<bool>,
    #[serde(default)]
    pub see_friendly_invisibles: Option<bool>,
    #[serde(default)]
    pub nametag_visibility: Option<String>,
    #[serde(default)]
    pub collision_rule: Option<String>,
}

/// One member added to a team. Exactly one of `player`, `selector` and
/// `entity_id` must be set; the lifecycle controller enforces this
/// before any command is issued.
#[derive(Debug, Clone, Deserialize)]
pub struct TeamMemberAttrs {
    pub team: String,
    #[serde(default)]
    pub player: Attr<String>,
    #[serde(default)]
    pub selector: Attr<String>,
    #[serde(default)]
    pub entity_id: Attr<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TeamMemberState {
    pub id: String,
    pub team: String,
    #[serde(default)]
    pub player: Option<String>,
    #[serde(default)]
    pub selector: Option<String>,
    #[serde(default)]
    pub entity_id: Option<String>,
}

/// Operator status for one player.
#[derive(Debug, Clone, Deserialize)]
pub struct OpAttrs {
    pub player: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OpState {
    pub id: String,
    pub player: String,
}

/// A named game rule. `value` is a string: `true`/`false` for boolean
/// rules or an integer for numeric ones.
#[derive(Debug, Clone, Deserialize)]
pub struct GameruleAttrs {
    pub name: String,
    pub value: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GameruleState {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub value: String,
    /// Value observed before the most recent write; replayed on removal.
    #[serde(default)]
    pub previous_value: Option<String>,
}

/// The server default game mode, or one player's mode when `player` is
/// set.
#[derive(Debug, Clone, Deserialize)]
pub struct GamemodeAttrs {
    pub mode: String,
    #[serde(default)]
    pub player: Attr<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GamemodeState {
    pub id: String,
    pub mode: String,
    #[serde(default)]
    pub player: Option<String>,
    /// Mode observed before the most recent write; replayed on removal.
    #[serde(default)]
    pub previous_mode: Option<String>,
}

/// Whether the world time is locked to permanent day.
#[derive(Debug, Clone, Deserialize)]
pub struct DaylockAttrs {
    pub enabled: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DaylockState {
    pub id: String,
    pub enabled: bool,
    /// `doDaylightCycle` value observed before the most recent write.
    #[serde(default)]
    pub previous_cycle: Option<String>,
}
