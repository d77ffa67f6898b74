//! summon / kill command builders.
//!
//! Summoned entities carry their identity token as the CustomName text
//! component. The token is the only handle the remote side answers to,
//! so every later command selects on `name=<token>`.

use world_model::{Position, WoolColor};

fn custom_name(token: &str) -> String {
    format!(r#"CustomName:'{{"text":"{}"}}'"#, token)
}

fn nbt_bool(value: bool) -> &'static str {
    if value { "1b" } else { "0b" }
}

/// `summon <type> <x> <y> <z> {CustomName:'{"text":"<token>"}'}`
pub fn summon(entity_type: &str, pos: &Position, token: &str) -> String {
    format!(
        "summon {} {} {} {} {{{}}}",
        entity_type,
        pos.block_x(),
        pos.block_y(),
        pos.block_z(),
        custom_name(token)
    )
}

/// Summon a sheep with wool color and sheared state in the NBT payload.
pub fn summon_sheep(pos: &Position, token: &str, color: WoolColor, sheared: bool) -> String {
    format!(
        "summon minecraft:sheep {} {} {} {{{},Color:{},Sheared:{}}}",
        pos.block_x(),
        pos.block_y(),
        pos.block_z(),
        custom_name(token),
        color.nbt_id(),
        nbt_bool(sheared)
    )
}

/// Behavior flags and health for a summoned zombie.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ZombieFlags {
    pub is_baby: bool,
    pub can_break_doors: bool,
    pub can_pick_up_loot: bool,
    pub persistence_required: bool,
    pub health: f64,
}

/// Summon a zombie with its full NBT flag set.
pub fn summon_zombie(pos: &Position, token: &str, flags: &ZombieFlags) -> String {
    format!(
        "summon minecraft:zombie {} {} {} {{{},IsBaby:{},CanBreakDoors:{},CanPickUpLoot:{},PersistenceRequired:{},Health:{}f}}",
        pos.block_x(),
        pos.block_y(),
        pos.block_z(),
        custom_name(token),
        nbt_bool(flags.is_baby),
        nbt_bool(flags.can_break_doors),
        nbt_bool(flags.can_pick_up_loot),
        nbt_bool(flags.persistence_required),
        flags.health
    )
}

/// `kill @e[type=<type>,name=<token>]`
pub fn kill_named(entity_type: &str, token: &str) -> String {
    format!("kill @e[type={},name={}]", entity_type, token)
}

/// Token-only kill selector, for entities whose type is unknown (e.g.
/// imported by identity alone).
pub fn kill_by_name(token: &str) -> String {
    format!("kill @e[name={}]", token)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn summon_embeds_token_as_custom_name() {
        let cmd = summon(
            "minecraft:armor_stand",
            &Position::new(1.0, 64.0, -2.0),
            "abc-123",
        );
        assert_eq!(
            cmd,
            r#"summon minecraft:armor_stand 1 64 -2 {CustomName:'{"text":"abc-123"}'}"#
        );
    }

    #[test]
    fn summon_sheep_carries_color_and_sheared() {
        let cmd = summon_sheep(&Position::new(0.0, 64.0, 0.0), "tok", WoolColor::Red, true);
        assert_eq!(
            cmd,
            r#"summon minecraft:sheep 0 64 0 {CustomName:'{"text":"tok"}',Color:14,Sheared:1b}"#
        );
    }

    #[test]
    fn summon_zombie_carries_all_flags() {
        let flags = ZombieFlags {
            is_baby: true,
            can_break_doors: false,
            can_pick_up_loot: true,
            persistence_required: false,
            health: 20.0,
        };
        let cmd = summon_zombie(&Position::new(5.0, 70.0, 5.0), "tok", &flags);
        assert_eq!(
            cmd,
            r#"summon minecraft:zombie 5 70 5 {CustomName:'{"text":"tok"}',IsBaby:1b,CanBreakDoors:0b,CanPickUpLoot:1b,PersistenceRequired:0b,Health:20f}"#
        );
    }

    #[test]
    fn kill_selectors_target_the_token() {
        assert_eq!(
            kill_named("minecraft:sheep", "tok"),
            "kill @e[type=minecraft:sheep,name=tok]"
        );
        assert_eq!(kill_by_name("tok"), "kill @e[name=tok]");
    }
}
