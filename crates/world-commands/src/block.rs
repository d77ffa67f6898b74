//! setblock / fill command builders and block-state encoding.

use crate::AIR;
use world_model::{ChestSize, Direction, Position, Region, StairHalf, StairShape};

/// Which block of a two-block bed a command addresses.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BedPart {
    Foot,
    Head,
}

impl BedPart {
    fn as_str(&self) -> &'static str {
        match self {
            Self::Foot => "foot",
            Self::Head => "head",
        }
    }
}

/// Which half of a chest a command addresses.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChestHalf {
    Single,
    Left,
    Right,
}

impl ChestHalf {
    fn as_str(&self) -> &'static str {
        match self {
            Self::Single => "single",
            Self::Left => "left",
            Self::Right => "right",
        }
    }
}

/// `setblock <x> <y> <z> <block>`
pub fn set_block(pos: &Position, block: &str) -> String {
    format!(
        "setblock {} {} {} {}",
        pos.block_x(),
        pos.block_y(),
        pos.block_z(),
        block
    )
}

/// `setblock <x> <y> <z> minecraft:air`
pub fn clear_block(pos: &Position) -> String {
    set_block(pos, AIR)
}

/// `fill <x1> <y1> <z1> <x2> <y2> <z2> <material>`
pub fn fill_region(region: &Region, material: &str) -> String {
    format!(
        "fill {} {} {} {} {} {} {}",
        region.start.block_x(),
        region.start.block_y(),
        region.start.block_z(),
        region.end.block_x(),
        region.end.block_y(),
        region.end.block_z(),
        material
    )
}

/// Fill the region with air.
pub fn clear_region(region: &Region) -> String {
    fill_region(region, AIR)
}

/// `material[facing=..,half=..,shape=..,waterlogged=..]`
pub fn stairs_block(
    material: &str,
    facing: Direction,
    half: StairHalf,
    shape: StairShape,
    waterlogged: bool,
) -> String {
    format!(
        "{}[facing={},half={},shape={},waterlogged={}]",
        material,
        facing.as_str(),
        half.as_str(),
        shape.as_str(),
        waterlogged
    )
}

/// Chest block with its half and waterlogged flag encoded; trapped
/// chests are a different material entirely.
pub fn chest_block(trapped: bool, half: ChestHalf, waterlogged: bool) -> String {
    let material = if trapped {
        "minecraft:trapped_chest"
    } else {
        "minecraft:chest"
    };
    format!(
        "{}[type={},waterlogged={}]",
        material,
        half.as_str(),
        waterlogged
    )
}

/// Bed block carrying facing, part, and occupied flag.
pub fn bed_block(material: &str, facing: Direction, part: BedPart, occupied: bool) -> String {
    format!(
        "{}[facing={},part={},occupied={}]",
        material,
        facing.as_str(),
        part.as_str(),
        occupied
    )
}

/// The single chest half applicable for a given size and slot.
pub fn chest_halves(size: ChestSize) -> Vec<ChestHalf> {
    match size {
        ChestSize::Single => vec![ChestHalf::Single],
        ChestSize::Double => vec![ChestHalf::Left, ChestHalf::Right],
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn set_block_truncates_fractional_coordinates() {
        let cmd = set_block(&Position::new(10.9, 64.0, -3.7), "minecraft:stone");
        assert_eq!(cmd, "setblock 10 64 -3 minecraft:stone");
    }

    #[test]
    fn clear_block_places_air() {
        let cmd = clear_block(&Position::new(1.0, 2.0, 3.0));
        assert_eq!(cmd, "setblock 1 2 3 minecraft:air");
    }

    #[test]
    fn fill_region_spans_both_corners() {
        let region = Region::new(Position::new(0.0, 64.0, 0.0), Position::new(4.0, 68.0, 4.0));
        assert_eq!(
            fill_region(&region, "minecraft:stone"),
            "fill 0 64 0 4 68 4 minecraft:stone"
        );
    }

    #[test]
    fn stairs_block_encodes_all_state() {
        let block = stairs_block(
            "minecraft:oak_stairs",
            Direction::East,
            StairHalf::Bottom,
            StairShape::InnerLeft,
            true,
        );
        assert_eq!(
            block,
            "minecraft:oak_stairs[facing=east,half=bottom,shape=inner_left,waterlogged=true]"
        );
    }

    #[test]
    fn chest_block_switches_material_when_trapped() {
        assert_eq!(
            chest_block(false, ChestHalf::Single, false),
            "minecraft:chest[type=single,waterlogged=false]"
        );
        assert_eq!(
            chest_block(true, ChestHalf::Left, true),
            "minecraft:trapped_chest[type=left,waterlogged=true]"
        );
    }

    #[test]
    fn bed_block_encodes_part_and_occupancy() {
        assert_eq!(
            bed_block("minecraft:red_bed", Direction::North, BedPart::Head, false),
            "minecraft:red_bed[facing=north,part=head,occupied=false]"
        );
    }
}
