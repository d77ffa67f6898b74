//! World coordinates
//!
//! Positions are declared as floating-point values but every command
//! grammar that addresses blocks takes integers. The coercion policy is
//! truncation toward zero, applied identically on every call so create
//! and update never disagree about which block a coordinate names.

use serde::{Deserialize, Serialize};

/// A point in the world.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Position {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl Position {
    pub fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }

    /// Block X coordinate, truncated toward zero.
    pub fn block_x(&self) -> i64 {
        self.x as i64
    }

    /// Block Y coordinate, truncated toward zero.
    pub fn block_y(&self) -> i64 {
        self.y as i64
    }

    /// Block Z coordinate, truncated toward zero.
    pub fn block_z(&self) -> i64 {
        self.z as i64
    }

    /// The position shifted by whole blocks on the X/Z plane.
    pub fn offset(&self, dx: i64, dz: i64) -> Self {
        Self {
            x: (self.block_x() + dx) as f64,
            y: self.block_y() as f64,
            z: (self.block_z() + dz) as f64,
        }
    }
}

/// An inclusive cuboid region between two corners.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Region {
    pub start: Position,
    pub end: Position,
}

impl Region {
    pub fn new(start: Position, end: Position) -> Self {
        Self { start, end }
    }
}
