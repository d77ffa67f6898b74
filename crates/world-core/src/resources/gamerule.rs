//! Game rule lifecycle.
//!
//! Values are strings: an integer or `true`/`false`. The prior value is
//! captured best-effort before every write and replayed at removal;
//! with no snapshot, removal writes nothing.

use serde_json::Value;
use world_commands::{gamerule_get, gamerule_set};
use world_model::{GameruleAttrs, GameruleState};

use crate::error::{Error, Result, Warning};
use crate::registry::Lifecycle;
use crate::resources::{decode_attrs, decode_state, exec};
use crate::snapshot;
use crate::transport::CommandExecutor;

pub struct GameruleKind;

/// Normalize a declared rule value, rejecting anything that is neither
/// an integer nor a boolean.
fn normalize_value(value: &str) -> Result<String> {
    let value = value.trim();
    if value.parse::<i64>().is_ok() {
        return Ok(value.to_string());
    }
    snapshot::parse_bool_value(value).ok_or_else(|| {
        Error::validation(format!(
            "value {value:?} is neither an integer nor true/false"
        ))
    })
}

fn validated(attrs: GameruleAttrs) -> Result<(String, String)> {
    let name = attrs.name.trim().to_string();
    if name.is_empty() {
        return Err(Error::validation("gamerule name cannot be empty"));
    }
    let value = normalize_value(&attrs.value)?;
    Ok((name, value))
}

impl Lifecycle for GameruleKind {
    fn kind(&self) -> &'static str {
        "gamerule"
    }

    fn create(&self, tx: &mut dyn CommandExecutor, attrs: Value) -> Result<Value> {
        let attrs: GameruleAttrs = decode_attrs(attrs)?;
        let (name, value) = validated(attrs)?;
        let previous = snapshot::capture(tx, &gamerule_get(&name), snapshot::parse_rule_reply);
        exec(tx, &gamerule_set(&name, &value), "setting gamerule")?;
        let state = GameruleState {
            id: name.clone(),
            name,
            value,
            previous_value: previous,
        };
        Ok(serde_json::to_value(state)?)
    }

    fn update(&self, tx: &mut dyn CommandExecutor, prior: Value, attrs: Value) -> Result<Value> {
        let prior: GameruleState = serde_json::from_value(prior)?;
        let attrs: GameruleAttrs = decode_attrs(attrs)?;
        let (name, value) = validated(attrs)?;
        // ratchet: the snapshot tracks the value immediately before the
        // latest write, falling back to the stored one if the read fails
        let previous = snapshot::capture(tx, &gamerule_get(&name), snapshot::parse_rule_reply)
            .or(prior.previous_value);
        exec(tx, &gamerule_set(&name, &value), "setting gamerule")?;
        let state = GameruleState {
            id: prior.id,
            name,
            value,
            previous_value: previous,
        };
        Ok(serde_json::to_value(state)?)
    }

    fn remove(&self, tx: &mut dyn CommandExecutor, state: Value) -> Vec<Warning> {
        let state: GameruleState = match decode_state(state, "restoring gamerule") {
            Ok(state) => state,
            Err(warning) => return vec![warning],
        };
        let Some(previous) = state.previous_value else {
            return Vec::new();
        };
        snapshot::restore(
            tx,
            &gamerule_set(&state.name, &previous),
            "restoring gamerule",
        )
        .into_iter()
        .collect()
    }

    fn import(&self, id: &str) -> Result<Value> {
        let name = id.trim();
        if name.is_empty() {
            return Err(Error::validation("gamerule name cannot be empty"));
        }
        let state = GameruleState {
            id: name.to_string(),
            name: name.to_string(),
            value: String::new(),
            previous_value: None,
        };
        Ok(serde_json::to_value(state)?)
    }
}
