//! Generic summoned entity lifecycle.
//!
//! A fresh random token becomes the entity's CustomName at creation and
//! doubles as its identity; every later command selects on the token.
//! Type and position are immutable, so update only echoes attributes
//! back into state.

use serde_json::Value;
use world_commands::{kill_by_name, kill_named, summon};
use world_ident::entity_token;
use world_model::{EntityAttrs, EntityState};

use crate::error::{Error, Result, Warning};
use crate::registry::Lifecycle;
use crate::resources::{decode_attrs, decode_state, exec, try_undo};
use crate::transport::CommandExecutor;

pub struct EntityKind;

impl Lifecycle for EntityKind {
    fn kind(&self) -> &'static str {
        "entity"
    }

    fn create(&self, tx: &mut dyn CommandExecutor, attrs: Value) -> Result<Value> {
        let attrs: EntityAttrs = decode_attrs(attrs)?;
        if attrs.entity_type.trim().is_empty() {
            return Err(Error::validation("entity type cannot be empty"));
        }
        let token = entity_token();
        exec(
            tx,
            &summon(&attrs.entity_type, &attrs.position, &token),
            "summoning entity",
        )?;
        let state = EntityState {
            id: token,
            entity_type: Some(attrs.entity_type),
            position: Some(attrs.position),
        };
        Ok(serde_json::to_value(state)?)
    }

    fn update(&self, _tx: &mut dyn CommandExecutor, prior: Value, attrs: Value) -> Result<Value> {
        let prior: EntityState = serde_json::from_value(prior)?;
        let attrs: EntityAttrs = decode_attrs(attrs)?;
        let state = EntityState {
            id: prior.id,
            entity_type: Some(attrs.entity_type),
            position: Some(attrs.position),
        };
        Ok(serde_json::to_value(state)?)
    }

    fn remove(&self, tx: &mut dyn CommandExecutor, state: Value) -> Vec<Warning> {
        let state: EntityState = match decode_state(state, "removing entity") {
            Ok(state) => state,
            Err(warning) => return vec![warning],
        };
        let command = match state.entity_type.as_deref() {
            Some(entity_type) => kill_named(entity_type, &state.id),
            None => kill_by_name(&state.id),
        };
        try_undo(tx, &command, "removing entity").into_iter().collect()
    }

    fn import(&self, id: &str) -> Result<Value> {
        if id.trim().is_empty() {
            return Err(Error::validation("entity identifier cannot be empty"));
        }
        let state = EntityState {
            id: id.to_string(),
            entity_type: None,
            position: None,
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
    fn create_summons_with_a_fresh_token() {
        let mut tx = ScriptedTransport::new();
        let state = EntityKind
            .create(
                &mut tx,
                json!({"type": "minecraft:armor_stand", "position": {"x": 1, "y": 64, "z": 1}}),
            )
            .unwrap();
        let token = state["id"].as_str().unwrap();
        assert_eq!(token.len(), 36);
        assert_eq!(
            tx.sent(),
            &[format!(
                r#"summon minecraft:armor_stand 1 64 1 {{CustomName:'{{"text":"{token}"}}'}}"#
            )]
        );
    }

    #[test]
    fn empty_type_is_rejected_before_any_command() {
        let mut tx = ScriptedTransport::new();
        let err = EntityKind
            .create(&mut tx, json!({"type": " ", "position": {"x": 0, "y": 0, "z": 0}}))
            .unwrap_err();
        assert!(matches!(err, Error::Validation { .. }));
        assert!(tx.sent().is_empty());
    }

    #[test]
    fn remove_kills_by_type_and_token() {
        let mut tx = ScriptedTransport::new();
        let state = json!({"id": "tok", "type": "minecraft:cow"});
        assert!(EntityKind.remove(&mut tx, state).is_empty());
        assert_eq!(tx.sent(), &["kill @e[type=minecraft:cow,name=tok]"]);
    }

    #[test]
    fn imported_entity_is_killed_by_token_alone() {
        let mut tx = ScriptedTransport::new();
        let state = EntityKind.import("tok").unwrap();
        assert!(EntityKind.remove(&mut tx, state).is_empty());
        assert_eq!(tx.sent(), &["kill @e[name=tok]"]);
    }
}
