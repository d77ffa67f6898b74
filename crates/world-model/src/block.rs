//! Declared attributes and persisted state for block-shaped kinds.
//!
//! Attribute structs are what the host's payload deserializes into;
//! state structs are the flat records handed back for persistence. State
//! must be sufficient on its own to recompute the identity and rebuild
//! every removal command, so position (and direction for beds) is always
//! concrete even for imported objects where the material is unknown.

use crate::attr::Attr;
use crate::position::{Position, Region};
use crate::values::{ChestSize, Direction, StairHalf, StairShape};
use serde::{Deserialize, Serialize};

/// A single block of some material.
#[derive(Debug, Clone, Deserialize)]
pub struct BlockAttrs {
    pub material: String,
    pub position: Position,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BlockState {
    pub id: String,
    /// Unset when the object was imported by identity alone.
    #[serde(default)]
    pub material: Option<String>,
    pub position: Position,
}

/// A stairs block with orientation and shape.
#[derive(Debug, Clone, Deserialize)]
pub struct StairsAttrs {
    pub material: String,
    pub position: Position,
    pub facing: Direction,
    pub half: StairHalf,
    pub shape: StairShape,
    #[serde(default)]
    pub waterlogged: Attr<bool>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StairsState {
    pub id: String,
    #[serde(default)]
    pub material: Option<String>,
    pub position: Position,
    #[serde(default)]
    pub facing: Option<Direction>,
    #[serde(default)]
    pub half: Option<StairHalf>,
    #[serde(default)]
    pub shape: Option<StairShape>,
    #[serde(default)]
    pub waterlogged: bool,
}

/// A single or double chest anchored at `position`; the second half of a
/// double chest sits at x+1.
#[derive(Debug, Clone, Deserialize)]
pub struct ChestAttrs {
    pub position: Position,
    #[serde(default)]
    pub size: ChestSize,
    #[serde(default)]
    pub trapped: Attr<bool>,
    #[serde(default)]
    pub waterlogged: Attr<bool>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChestState {
    pub id: String,
    pub position: Position,
    #[serde(default)]
    pub size: ChestSize,
    #[serde(default)]
    pub trapped: bool,
    #[serde(default)]
    pub waterlogged: bool,
}

/// A bed: the declared position is the FOOT, the head sits one block in
/// the facing direction.
#[derive(Debug, Clone, Deserialize)]
pub struct BedAttrs {
    pub material: String,
    pub position: Position,
    pub direction: Direction,
    #[serde(default)]
    pub occupied: Attr<bool>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BedState {
    pub id: String,
    #[serde(default)]
    pub material: Option<String>,
    pub position: Position,
    pub direction: Direction,
    #[serde(default)]
    pub occupied: bool,
}

/// A cuboid region filled with one material.
#[derive(Debug, Clone, Deserialize)]
pub struct FillAttrs {
    pub material: String,
    pub start: Position,
    pub end: Position,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FillState {
    pub id: String,
    pub material: String,
    #[serde(flatten)]
    pub region: Region,
}
