//! Server-level command builders: gamerules, operator grants, game
//! modes, and the day/night cycle.

use world_model::GameMode;

/// `gamerule <name>` with no value queries the current setting.
pub fn gamerule_get(name: &str) -> String {
    format!("gamerule {}", name)
}

pub fn gamerule_set(name: &str, value: &str) -> String {
    format!("gamerule {} {}", name, value)
}

pub fn op(player: &str) -> String {
    format!("op {}", player)
}

pub fn deop(player: &str) -> String {
    format!("deop {}", player)
}

/// Bare `defaultgamemode` reports the current server default.
pub fn default_gamemode_query() -> String {
    "defaultgamemode".to_string()
}

pub fn default_gamemode(mode: GameMode) -> String {
    format!("defaultgamemode {}", mode.as_str())
}

/// `data get entity <player> playerGameType` yields the mode ordinal.
pub fn player_gamemode_query(player: &str) -> String {
    format!("data get entity {} playerGameType", player)
}

pub fn player_gamemode(mode: GameMode, player: &str) -> String {
    format!("gamemode {} {}", mode.as_str(), player)
}

/// `gamerule doDaylightCycle <bool>`; locking the cycle means setting
/// doDaylightCycle to false.
pub fn daylock_cycle(cycle_enabled: bool) -> String {
    format!("gamerule doDaylightCycle {}", cycle_enabled)
}

pub fn time_set_day() -> String {
    "time set day".to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn gamerule_commands() {
        assert_eq!(gamerule_get("keepInventory"), "gamerule keepInventory");
        assert_eq!(
            gamerule_set("keepInventory", "true"),
            "gamerule keepInventory true"
        );
        assert_eq!(gamerule_set("randomTickSpeed", "7"), "gamerule randomTickSpeed 7");
    }

    #[test]
    fn op_commands() {
        assert_eq!(op("Steve"), "op Steve");
        assert_eq!(deop("Steve"), "deop Steve");
    }

    #[test]
    fn gamemode_commands() {
        assert_eq!(default_gamemode_query(), "defaultgamemode");
        assert_eq!(default_gamemode(GameMode::Creative), "defaultgamemode creative");
        assert_eq!(
            player_gamemode_query("Alex"),
            "data get entity Alex playerGameType"
        );
        assert_eq!(
            player_gamemode(GameMode::Survival, "Alex"),
            "gamemode survival Alex"
        );
    }

    #[test]
    fn daylock_commands() {
        assert_eq!(daylock_cycle(false), "gamerule doDaylightCycle false");
        assert_eq!(daylock_cycle(true), "gamerule doDaylightCycle true");
        assert_eq!(time_set_day(), "time set day");
    }
}
