//! Sheep lifecycle.

use serde_json::Value;
use world_commands::{kill_named, summon_sheep};
use world_ident::entity_token;
use world_model::{SheepAttrs, SheepState};

use crate::error::{Result, Warning};
use crate::registry::Lifecycle;
use crate::resources::{decode_attrs, decode_state, exec, try_undo};
use crate::transport::CommandExecutor;

const SHEEP_TYPE: &str = "minecraft:sheep";

pub struct SheepKind;

impl Lifecycle for SheepKind {
    fn kind(&self) -> &'static str {
        "sheep"
    }

    fn create(&self, tx: &mut dyn CommandExecutor, attrs: Value) -> Result<Value> {
        let attrs: SheepAttrs = decode_attrs(attrs)?;
        let token = entity_token();
        let sheared = attrs.sheared.resolve(false);
        exec(
            tx,
            &summon_sheep(&attrs.position, &token, attrs.color, sheared),
            "summoning sheep",
        )?;
        let state = SheepState {
            id: token,
            position: Some(attrs.position),
            color: Some(attrs.color),
            sheared,
        };
        Ok(serde_json::to_value(state)?)
    }

    fn update(&self, _tx: &mut dyn CommandExecutor, prior: Value, attrs: Value) -> Result<Value> {
        let prior: SheepState = serde_json::from_value(prior)?;
        let attrs: SheepAttrs = decode_attrs(attrs)?;
        let state = SheepState {
            id: prior.id,
            position: Some(attrs.position),
            color: Some(attrs.color),
            sheared: attrs.sheared.resolve(false),
        };
        Ok(serde_json::to_value(state)?)
    }

    fn remove(&self, tx: &mut dyn CommandExecutor, state: Value) -> Vec<Warning> {
        let state: SheepState = match decode_state(state, "removing sheep") {
            Ok(state) => state,
            Err(warning) => return vec![warning],
        };
        try_undo(tx, &kill_named(SHEEP_TYPE, &state.id), "removing sheep")
            .into_iter()
            .collect()
    }

    fn import(&self, id: &str) -> Result<Value> {
        let state = SheepState {
            id: id.to_string(),
            position: None,
            color: None,
            sheared: false,
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
    fn create_summons_with_color_and_sheared() {
        let mut tx = ScriptedTransport::new();
        let state = SheepKind
            .create(
                &mut tx,
                json!({"position": {"x": 0, "y": 64, "z": 0}, "color": "red", "sheared": true}),
            )
            .unwrap();
        let token = state["id"].as_str().unwrap();
        assert_eq!(
            tx.sent(),
            &[format!(
                r#"summon minecraft:sheep 0 64 0 {{CustomName:'{{"text":"{token}"}}',Color:14,Sheared:1b}}"#
            )]
        );
        assert_eq!(state["sheared"], true);
    }

    #[test]
    fn remove_kills_by_token() {
        let mut tx = ScriptedTransport::new();
        let state = SheepKind.import("tok").unwrap();
        assert!(SheepKind.remove(&mut tx, state).is_empty());
        assert_eq!(tx.sent(), &["kill @e[type=minecraft:sheep,name=tok]"]);
    }
}
