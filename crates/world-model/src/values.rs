//! Closed enumerations used across the managed kinds.

use crate::error::Error;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Horizontal facing for directional blocks (beds, stairs).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    North,
    South,
    East,
    West,
}

impl Direction {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::North => "north",
            Self::South => "south",
            Self::East => "east",
            Self::West => "west",
        }
    }

    /// Whole-block offset one step in this direction. Z decreases to the
    /// north and increases to the south; X increases to the east.
    pub fn step(&self) -> (i64, i64) {
        match self {
            Self::North => (0, -1),
            Self::South => (0, 1),
            Self::East => (1, 0),
            Self::West => (-1, 0),
        }
    }
}

impl FromStr for Direction {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Error> {
        match s.trim().to_ascii_lowercase().as_str() {
            "north" => Ok(Self::North),
            "south" => Ok(Self::South),
            "east" => Ok(Self::East),
            "west" => Ok(Self::West),
            _ => Err(Error::UnknownDirection {
                value: s.to_string(),
            }),
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Vertical half for stairs blocks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StairHalf {
    Top,
    Bottom,
}

impl StairHalf {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Top => "top",
            Self::Bottom => "bottom",
        }
    }
}

/// Stair shape block-state value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StairShape {
    Straight,
    InnerLeft,
    InnerRight,
    OuterLeft,
    OuterRight,
}

impl StairShape {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Straight => "straight",
            Self::InnerLeft => "inner_left",
            Self::InnerRight => "inner_right",
            Self::OuterLeft => "outer_left",
            Self::OuterRight => "outer_right",
        }
    }
}

/// Single or double chest.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChestSize {
    #[default]
    Single,
    Double,
}

/// Server game mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GameMode {
    Survival,
    Creative,
    Adventure,
    Spectator,
}

impl GameMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Survival => "survival",
            Self::Creative => "creative",
            Self::Adventure => "adventure",
            Self::Spectator => "spectator",
        }
    }

    /// Map the numeric `playerGameType` value the server reports.
    pub fn from_ordinal(n: i64) -> Option<Self> {
        match n {
            0 => Some(Self::Survival),
            1 => Some(Self::Creative),
            2 => Some(Self::Adventure),
            3 => Some(Self::Spectator),
            _ => None,
        }
    }
}

impl FromStr for GameMode {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Error> {
        match s.trim().to_ascii_lowercase().as_str() {
            "survival" => Ok(Self::Survival),
            "creative" => Ok(Self::Creative),
            "adventure" => Ok(Self::Adventure),
            "spectator" => Ok(Self::Spectator),
            _ => Err(Error::UnknownGameMode {
                value: s.to_string(),
            }),
        }
    }
}

impl fmt::Display for GameMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// How a team membership names its target.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MemberKind {
    Player,
    Selector,
    Entity,
}

impl MemberKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Player => "player",
            Self::Selector => "selector",
            Self::Entity => "entity",
        }
    }
}

impl FromStr for MemberKind {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Error> {
        match s {
            "player" => Ok(Self::Player),
            "selector" => Ok(Self::Selector),
            "entity" => Ok(Self::Entity),
            _ => Err(Error::UnknownMemberKind {
                value: s.to_string(),
            }),
        }
    }
}

impl fmt::Display for MemberKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Sheep wool colors, with their NBT color ids.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WoolColor {
    White,
    Orange,
    Magenta,
    LightBlue,
    Yellow,
    Lime,
    Pink,
    Gray,
    LightGray,
    Cyan,
    Purple,
    Blue,
    Brown,
    Green,
    Red,
    Black,
}

impl WoolColor {
    /// The numeric color id the summon NBT expects.
    pub fn nbt_id(&self) -> u8 {
        match self {
            Self::White => 0,
            Self::Orange => 1,
            Self::Magenta => 2,
            Self::LightBlue => 3,
            Self::Yellow => 4,
            Self::Lime => 5,
            Self::Pink => 6,
            Self::Gray => 7,
            Self::LightGray => 8,
            Self::Cyan => 9,
            Self::Purple => 10,
            Self::Blue => 11,
            Self::Brown => 12,
            Self::Green => 13,
            Self::Red => 14,
            Self::Black => 15,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn direction_round_trips_through_str() {
        for d in [
            Direction::North,
            Direction::South,
            Direction::East,
            Direction::West,
        ] {
            assert_eq!(d.as_str().parse::<Direction>().unwrap(), d);
        }
    }

    #[test]
    fn direction_rejects_unknown_values() {
        assert!("up".parse::<Direction>().is_err());
    }

    #[test]
    fn direction_steps_follow_compass() {
        assert_eq!(Direction::North.step(), (0, -1));
        assert_eq!(Direction::South.step(), (0, 1));
        assert_eq!(Direction::East.step(), (1, 0));
        assert_eq!(Direction::West.step(), (-1, 0));
    }

    #[test]
    fn game_mode_parses_case_insensitively() {
        assert_eq!(" Creative ".parse::<GameMode>().unwrap(), GameMode::Creative);
        assert!("peaceful".parse::<GameMode>().is_err());
    }

    #[test]
    fn game_mode_maps_ordinals() {
        assert_eq!(GameMode::from_ordinal(0), Some(GameMode::Survival));
        assert_eq!(GameMode::from_ordinal(3), Some(GameMode::Spectator));
        assert_eq!(GameMode::from_ordinal(4), None);
    }

    #[test]
    fn member_kind_fails_closed() {
        assert!("bogus".parse::<MemberKind>().is_err());
        // Case matters: identity segments are stored lowercase.
        assert!("Player".parse::<MemberKind>().is_err());
    }

    #[test]
    fn wool_color_ids_span_the_palette() {
        assert_eq!(WoolColor::White.nbt_id(), 0);
        assert_eq!(WoolColor::LightBlue.nbt_id(), 3);
        assert_eq!(WoolColor::Black.nbt_id(), 15);
    }
}
