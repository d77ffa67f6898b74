//! Operator grant lifecycle.

use serde_json::Value;
use world_commands::{deop, op};
use world_model::{OpAttrs, OpState};

use crate::error::{Error, Result, Warning};
use crate::registry::Lifecycle;
use crate::resources::{decode_attrs, decode_state, exec, try_undo};
use crate::transport::CommandExecutor;

pub struct OpKind;

fn validated_player(player: &str) -> Result<String> {
    let player = player.trim().to_string();
    if player.is_empty() {
        return Err(Error::validation("player cannot be empty or whitespace"));
    }
    Ok(player)
}

impl Lifecycle for OpKind {
    fn kind(&self) -> &'static str {
        "op"
    }

    fn create(&self, tx: &mut dyn CommandExecutor, attrs: Value) -> Result<Value> {
        let attrs: OpAttrs = decode_attrs(attrs)?;
        let player = validated_player(&attrs.player)?;
        exec(tx, &op(&player), "granting operator")?;
        let state = OpState {
            id: player.clone(),
            player,
        };
        Ok(serde_json::to_value(state)?)
    }

    fn update(&self, tx: &mut dyn CommandExecutor, prior: Value, attrs: Value) -> Result<Value> {
        let prior: OpState = serde_json::from_value(prior)?;
        let attrs: OpAttrs = decode_attrs(attrs)?;
        let player = validated_player(&attrs.player)?;
        exec(tx, &op(&player), "granting operator")?;
        let state = OpState {
            id: prior.id,
            player,
        };
        Ok(serde_json::to_value(state)?)
    }

    fn remove(&self, tx: &mut dyn CommandExecutor, state: Value) -> Vec<Warning> {
        let state: OpState = match decode_state(state, "revoking operator") {
            Ok(state) => state,
            Err(warning) => return vec![warning],
        };
        try_undo(tx, &deop(&state.player), "revoking operator")
            .into_iter()
            .collect()
    }

    fn import(&self, id: &str) -> Result<Value> {
        let player = validated_player(id)?;
        let state = OpState {
            id: player.clone(),
            player,
        };
        Ok(serde_json::to_value(state)?)
    }
}
