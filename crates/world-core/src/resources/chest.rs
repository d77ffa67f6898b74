//! Chest lifecycle.
//!
//! A double chest is a composite of two placements: the left half at the
//! declared position and the right half one block along +x. Creation
//! compensates a half-applied pair; update re-applies without rollback.

use serde_json::Value;
use world_commands::{chest_block, chest_halves, clear_block, set_block, ChestHalf};
use world_ident::{parse_positional, positional};
use world_model::{ChestAttrs, ChestSize, ChestState, Position};

use crate::composite::{apply_all, apply_forward, undo_all, PlannedCommand};
use crate::error::{Result, Warning};
use crate::registry::Lifecycle;
use crate::resources::{decode_attrs, decode_state};
use crate::transport::CommandExecutor;

const KIND: &str = "chest";

pub struct ChestKind;

fn half_position(base: &Position, half: ChestHalf) -> Position {
    match half {
        ChestHalf::Right => base.offset(1, 0),
        _ => *base,
    }
}

fn half_label(half: ChestHalf) -> &'static str {
    match half {
        ChestHalf::Single => "single chest",
        ChestHalf::Left => "left half",
        ChestHalf::Right => "right half",
    }
}

fn plan(position: &Position, size: ChestSize, trapped: bool, waterlogged: bool) -> Vec<PlannedCommand> {
    chest_halves(size)
        .into_iter()
        .map(|half| {
            let pos = half_position(position, half);
            PlannedCommand::new(
                half_label(half),
                set_block(&pos, &chest_block(trapped, half, waterlogged)),
                clear_block(&pos),
            )
        })
        .collect()
}

fn state_of(id: String, attrs: ChestAttrs) -> ChestState {
    ChestState {
        id,
        position: attrs.position,
        size: attrs.size,
        trapped: attrs.trapped.resolve(false),
        waterlogged: attrs.waterlogged.resolve(false),
    }
}

impl Lifecycle for ChestKind {
    fn kind(&self) -> &'static str {
        KIND
    }

    fn create(&self, tx: &mut dyn CommandExecutor, attrs: Value) -> Result<Value> {
        let attrs: ChestAttrs = decode_attrs(attrs)?;
        let parts = plan(
            &attrs.position,
            attrs.size,
            attrs.trapped.resolve(false),
            attrs.waterlogged.resolve(false),
        );
        apply_all(tx, &parts, "placing chest")?;
        let id = positional(KIND, &attrs.position);
        Ok(serde_json::to_value(state_of(id, attrs))?)
    }

    fn update(&self, tx: &mut dyn CommandExecutor, prior: Value, attrs: Value) -> Result<Value> {
        let prior: ChestState = serde_json::from_value(prior)?;
        let attrs: ChestAttrs = decode_attrs(attrs)?;
        let parts = plan(
            &attrs.position,
            attrs.size,
            attrs.trapped.resolve(false),
            attrs.waterlogged.resolve(false),
        );
        apply_forward(tx, &parts, "updating chest")?;
        Ok(serde_json::to_value(state_of(prior.id, attrs))?)
    }

    fn remove(&self, tx: &mut dyn CommandExecutor, state: Value) -> Vec<Warning> {
        let state: ChestState = match decode_state(state, "removing chest") {
            Ok(state) => state,
            Err(warning) => return vec![warning],
        };
        let parts = plan(&state.position, state.size, state.trapped, state.waterlogged);
        undo_all(tx, &parts, "removing chest")
    }

    fn import(&self, id: &str) -> Result<Value> {
        let position = parse_positional(KIND, id)?;
        let state = ChestState {
            id: id.to_string(),
            position,
            size: ChestSize::Single,
            trapped: false,
            waterlogged: false,
        };
        Ok(serde_json::to_value(state)?)
    }
}
