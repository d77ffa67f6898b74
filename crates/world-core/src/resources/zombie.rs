//! Zombie lifecycle.

use serde_json::Value;
use world_commands::{kill_named, summon_zombie, ZombieFlags};
use world_ident::entity_token;
use world_model::{ZombieAttrs, ZombieState};

use crate::error::{Result, Warning};
use crate::registry::Lifecycle;
use crate::resources::{decode_attrs, decode_state, exec, try_undo};
use crate::transport::CommandExecutor;

const ZOMBIE_TYPE: &str = "minecraft:zombie";
const DEFAULT_HEALTH: f64 = 20.0;

pub struct ZombieKind;

fn flags_of(attrs: &ZombieAttrs) -> ZombieFlags {
    ZombieFlags {
        is_baby: attrs.is_baby.resolve(false),
        can_break_doors: attrs.can_break_doors.resolve(false),
        can_pick_up_loot: attrs.can_pick_up_loot.resolve(false),
        persistence_required: attrs.persistence_required.resolve(false),
        health: attrs.health.resolve(DEFAULT_HEALTH),
    }
}

fn state_of(id: String, attrs: &ZombieAttrs) -> ZombieState {
    let flags = flags_of(attrs);
    ZombieState {
        id,
        position: Some(attrs.position),
        is_baby: flags.is_baby,
        can_break_doors: flags.can_break_doors,
        can_pick_up_loot: flags.can_pick_up_loot,
        persistence_required: flags.persistence_required,
        health: flags.health,
    }
}

impl Lifecycle for ZombieKind {
    fn kind(&self) -> &'static str {
        "zombie"
    }

    fn create(&self, tx: &mut dyn CommandExecutor, attrs: Value) -> Result<Value> {
        let attrs: ZombieAttrs = decode_attrs(attrs)?;
        let token = entity_token();
        exec(
            tx,
            &summon_zombie(&attrs.position, &token, &flags_of(&attrs)),
            "summoning zombie",
        )?;
        Ok(serde_json::to_value(state_of(token, &attrs))?)
    }

    fn update(&self, _tx: &mut dyn CommandExecutor, prior: Value, attrs: Value) -> Result<Value> {
        let prior: ZombieState = serde_json::from_value(prior)?;
        let attrs: ZombieAttrs = decode_attrs(attrs)?;
        Ok(serde_json::to_value(state_of(prior.id, &attrs))?)
    }

    fn remove(&self, tx: &mut dyn CommandExecutor, state: Value) -> Vec<Warning> {
        let state: ZombieState = match decode_state(state, "removing zombie") {
            Ok(state) => state,
            Err(warning) => return vec![warning],
        };
        try_undo(tx, &kill_named(ZOMBIE_TYPE, &state.id), "removing zombie")
            .into_iter()
            .collect()
    }

    fn import(&self, id: &str) -> Result<Value> {
        let state = ZombieState {
            id: id.to_string(),
            position: None,
            is_baby: false,
            can_break_doors: false,
            can_pick_up_loot: false,
            persistence_required: false,
            health: DEFAULT_HEALTH,
        };
        Ok(serde_json::to_value(state)?)
    }
}
