//! Coordinate-bearing identifier grammars.
//!
//! Positional identifiers join a kind prefix and three block
//! coordinates with `-`. A negative coordinate contributes its own
//! `-`, so `block--5-64-3` places the block at x = -5. The parser
//! treats an empty segment as a sign for the number that follows.

use world_model::{Position, Region};

use crate::error::{Error, Result};

/// `<prefix>-<x>-<y>-<z>`
pub fn positional(prefix: &str, pos: &Position) -> String {
    format!(
        "{}-{}-{}-{}",
        prefix,
        pos.block_x(),
        pos.block_y(),
        pos.block_z()
    )
}

/// `<prefix>-<x>-<y>-<z>-<suffix>` (bed identifiers carry a direction).
pub fn positional_with_suffix(prefix: &str, pos: &Position, suffix: &str) -> String {
    format!("{}-{}", positional(prefix, pos), suffix)
}

fn strip_prefix<'a>(prefix: &'static str, id: &'a str) -> Result<&'a str> {
    id.strip_prefix(prefix)
        .and_then(|rest| rest.strip_prefix('-'))
        .ok_or_else(|| Error::WrongPrefix {
            prefix,
            id: id.to_string(),
        })
}

fn scan_coords(body: &str, id: &str) -> Result<Vec<i64>> {
    let bad = || Error::BadCoordinates { id: id.to_string() };
    let mut coords = Vec::new();
    let mut negative = false;
    for segment in body.split('-') {
        if segment.is_empty() {
            if negative {
                return Err(bad());
            }
            negative = true;
            continue;
        }
        let magnitude: i64 = segment.parse().map_err(|_| bad())?;
        coords.push(if negative { -magnitude } else { magnitude });
        negative = false;
    }
    if negative {
        return Err(bad());
    }
    Ok(coords)
}

/// Parse `<prefix>-<x>-<y>-<z>` back into a block position.
pub fn parse_positional(prefix: &'static str, id: &str) -> Result<Position> {
    let body = strip_prefix(prefix, id)?;
    match scan_coords(body, id)?[..] {
        [x, y, z] => Ok(Position::new(x as f64, y as f64, z as f64)),
        _ => Err(Error::BadCoordinates { id: id.to_string() }),
    }
}

/// Parse `<prefix>-<x>-<y>-<z>-<suffix>`; the suffix is the trailing
/// non-numeric segment.
pub fn parse_positional_with_suffix(prefix: &'static str, id: &str) -> Result<(Position, String)> {
    let body = strip_prefix(prefix, id)?;
    let (coords, suffix) = body.rsplit_once('-').ok_or_else(|| Error::MissingDirection {
        id: id.to_string(),
    })?;
    if suffix.is_empty() || suffix.chars().any(|c| c.is_ascii_digit()) {
        return Err(Error::MissingDirection { id: id.to_string() });
    }
    match scan_coords(coords, id)?[..] {
        [x, y, z] => Ok((Position::new(x as f64, y as f64, z as f64), suffix.to_string())),
        _ => Err(Error::BadCoordinates { id: id.to_string() }),
    }
}

/// `<material>|x,y,z->x,y,z`
pub fn region(material: &str, region: &Region) -> String {
    format!(
        "{}|{},{},{}->{},{},{}",
        material,
        region.start.block_x(),
        region.start.block_y(),
        region.start.block_z(),
        region.end.block_x(),
        region.end.block_y(),
        region.end.block_z()
    )
}

fn parse_corner(text: &str, id: &str) -> Result<Position> {
    let parts: Vec<i64> = text
        .split(',')
        .map(|p| p.parse())
        .collect::<std::result::Result<_, _>>()
        .map_err(|_| Error::BadRegion { id: id.to_string() })?;
    match parts[..] {
        [x, y, z] => Ok(Position::new(x as f64, y as f64, z as f64)),
        _ => Err(Error::BadRegion { id: id.to_string() }),
    }
}

/// Parse `<material>|x,y,z->x,y,z` into the material and region.
pub fn parse_region(id: &str) -> Result<(String, Region)> {
    let bad = || Error::BadRegion { id: id.to_string() };
    let (material, corners) = id.split_once('|').ok_or_else(bad)?;
    if material.is_empty() {
        return Err(bad());
    }
    let (start, end) = corners.split_once("->").ok_or_else(bad)?;
    Ok((
        material.to_string(),
        Region {
            start: parse_corner(start, id)?,
            end: parse_corner(end, id)?,
        },
    ))
}
