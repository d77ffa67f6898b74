//! Pure command-string builders for the remote command grammar.
//!
//! Every function here maps typed attributes to exactly one command
//! string. Nothing performs I/O, holds state, or fails: callers validate
//! attributes before formatting. Fractional coordinates truncate toward
//! zero (see [`world_model::Position`]) so repeated calls with the same
//! attributes always produce byte-identical commands.

pub mod block;
pub mod entity;
pub mod server;
pub mod team;

pub use block::{
    bed_block, chest_block, chest_halves, clear_block, clear_region, fill_region, set_block, stairs_block,
    BedPart, ChestHalf,
};
pub use entity::{kill_by_name, kill_named, summon, summon_sheep, summon_zombie, ZombieFlags};
pub use server::{
    default_gamemode, default_gamemode_query, daylock_cycle, deop, gamerule_get, gamerule_set, op,
    player_gamemode, player_gamemode_query, time_set_day,
};
pub use team::{
    entity_selector, team_add, team_display, team_join, team_leave, team_modify, team_remove,
};

/// Block materials used for clearing placed blocks and regions.
pub const AIR: &str = "minecraft:air";
