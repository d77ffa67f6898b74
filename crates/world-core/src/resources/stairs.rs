//! Stairs block lifecycle.

use serde_json::Value;
use world_commands::{clear_block, set_block, stairs_block};
use world_ident::{parse_positional, positional};
use world_model::{StairsAttrs, StairsState};

use crate::error::{Result, Warning};
use crate::registry::Lifecycle;
use crate::resources::{decode_attrs, decode_state, exec, try_undo};
use crate::transport::CommandExecutor;

const KIND: &str = "stairs";

pub struct StairsKind;

fn place_command(attrs: &StairsAttrs) -> String {
    let block = stairs_block(
        &attrs.material,
        attrs.facing,
        attrs.half,
        attrs.shape,
        attrs.waterlogged.resolve(false),
    );
    set_block(&attrs.position, &block)
}

fn state_of(id: String, attrs: StairsAttrs) -> StairsState {
    StairsState {
        id,
        waterlogged: attrs.waterlogged.resolve(false),
        material: Some(attrs.material),
        position: attrs.position,
        facing: Some(attrs.facing),
        half: Some(attrs.half),
        shape: Some(attrs.shape),
    }
}

impl Lifecycle for StairsKind {
    fn kind(&self) -> &'static str {
        KIND
    }

    fn create(&self, tx: &mut dyn CommandExecutor, attrs: Value) -> Result<Value> {
        let attrs: StairsAttrs = decode_attrs(attrs)?;
        exec(tx, &place_command(&attrs), "placing stairs")?;
        let id = positional(KIND, &attrs.position);
        Ok(serde_json::to_value(state_of(id, attrs))?)
    }

    fn update(&self, tx: &mut dyn CommandExecutor, prior: Value, attrs: Value) -> Result<Value> {
        let prior: StairsState = serde_json::from_value(prior)?;
        let attrs: StairsAttrs = decode_attrs(attrs)?;
        exec(tx, &place_command(&attrs), "updating stairs")?;
        Ok(serde_json::to_value(state_of(prior.id, attrs))?)
    }

    fn remove(&self, tx: &mut dyn CommandExecutor, state: Value) -> Vec<Warning> {
        let state: StairsState = match decode_state(state, "removing stairs") {
            Ok(state) => state,
            Err(warning) => return vec![warning],
        };
        try_undo(tx, &clear_block(&state.position), "removing stairs")
            .into_iter()
            .collect()
    }

    fn import(&self, id: &str) -> Result<Value> {
        let position = parse_positional(KIND, id)?;
        let state = StairsState {
            id: id.to_string(),
            material: None,
            position,
            facing: None,
            half: None,
            shape: None,
            waterlogged: false,
        };
        Ok(serde_json::to_value(state)?)
    }
}
