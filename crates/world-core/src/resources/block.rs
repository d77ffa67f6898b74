//! Single block lifecycle.

use serde_json::Value;
use world_commands::{clear_block, set_block};
use world_ident::{parse_positional, positional};
use world_model::{BlockAttrs, BlockState};

use crate::error::{Result, Warning};
use crate::registry::Lifecycle;
use crate::resources::{decode_attrs, decode_state, exec, try_undo};
use crate::transport::CommandExecutor;

const KIND: &str = "block";

pub struct BlockKind;

impl Lifecycle for BlockKind {
    fn kind(&self) -> &'static str {
        KIND
    }

    fn create(&self, tx: &mut dyn CommandExecutor, attrs: Value) -> Result<Value> {
        let attrs: BlockAttrs = decode_attrs(attrs)?;
        exec(tx, &set_block(&attrs.position, &attrs.material), "placing block")?;
        let state = BlockState {
            id: positional(KIND, &attrs.position),
            material: Some(attrs.material),
            position: attrs.position,
        };
        Ok(serde_json::to_value(state)?)
    }

    fn update(&self, tx: &mut dyn CommandExecutor, prior: Value, attrs: Value) -> Result<Value> {
        let prior: BlockState = serde_json::from_value(prior)?;
        let attrs: BlockAttrs = decode_attrs(attrs)?;
        exec(tx, &set_block(&attrs.position, &attrs.material), "updating block")?;
        let state = BlockState {
            id: prior.id,
            material: Some(attrs.material),
            position: attrs.position,
        };
        Ok(serde_json::to_value(state)?)
    }

    fn remove(&self, tx: &mut dyn CommandExecutor, state: Value) -> Vec<Warning> {
        let state: BlockState = match decode_state(state, "removing block") {
            Ok(state) => state,
            Err(warning) => return vec![warning],
        };
        try_undo(tx, &clear_block(&state.position), "removing block")
            .into_iter()
            .collect()
    }

    fn import(&self, id: &str) -> Result<Value> {
        let position = parse_positional(KIND, id)?;
        let state = BlockState {
            id: id.to_string(),
            material: None,
            position,
        };
        Ok(serde_json::to_value(state)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;
    use crate::world_test_utils::ScriptedTransport;

    #[test]
    fn create_places_and_persists() {
        let mut tx = ScriptedTransport::new();
        let state = BlockKind
            .create(
                &mut tx,
                json!({"material": "minecraft:stone", "position": {"x": 10, "y": 64, "z": -3}}),
            )
            .unwrap();
        assert_eq!(tx.sent(), &["setblock 10 64 -3 minecraft:stone"]);
        assert_eq!(state["id"], "block-10-64--3");
        assert_eq!(state["material"], "minecraft:stone");
    }

    #[test]
    fn failed_create_persists_nothing() {
        let mut tx = ScriptedTransport::new().fail_on("setblock", "down");
        let err = BlockKind
            .create(
                &mut tx,
                json!({"material": "minecraft:stone", "position": {"x": 0, "y": 0, "z": 0}}),
            )
            .unwrap_err();
        assert!(err.to_string().contains("placing block"));
    }

    #[test]
    fn remove_clears_the_block() {
        let mut tx = ScriptedTransport::new();
        let warnings = BlockKind.remove(
            &mut tx,
            json!({"id": "block-1-2-3", "position": {"x": 1, "y": 2, "z": 3}}),
        );
        assert!(warnings.is_empty());
        assert_eq!(tx.sent(), &["setblock 1 2 3 minecraft:air"]);
    }

    #[test]
    fn remove_failure_is_a_warning() {
        let mut tx = ScriptedTransport::new().fail_on("setblock", "down");
        let warnings = BlockKind.remove(
            &mut tx,
            json!({"id": "block-1-2-3", "position": {"x": 1, "y": 2, "z": 3}}),
        );
        assert_eq!(warnings.len(), 1);
    }

    #[test]
    fn import_recovers_position_without_material() {
        let state = BlockKind.import("block--5-64-3").unwrap();
        assert_eq!(state["position"]["x"], -5.0);
        assert_eq!(state["material"], Value::Null);
    }
}
