//! Daylock lifecycle, a singleton controlling the day/night cycle.
//!
//! Enabling locks the time to day: the daylight cycle rule goes false
//! and the time is set to day. The prior cycle value is captured before
//! every write and replayed at removal.

use serde_json::Value;
use world_commands::{daylock_cycle, gamerule_get, time_set_day};
use world_ident::DEFAULT_ID;
use world_model::{DaylockAttrs, DaylockState};

use crate::error::{Error, Result, Warning};
use crate::registry::Lifecycle;
use crate::resources::{decode_attrs, decode_state, exec};
use crate::snapshot;
use crate::transport::CommandExecutor;

const CYCLE_RULE: &str = "doDaylightCycle";

pub struct DaylockKind;

fn capture_cycle(tx: &mut dyn CommandExecutor) -> Option<String> {
    snapshot::capture(tx, &gamerule_get(CYCLE_RULE), |reply| {
        snapshot::parse_rule_reply(reply).and_then(|v| snapshot::parse_bool_value(&v))
    })
}

fn apply(tx: &mut dyn CommandExecutor, enabled: bool) -> Result<()> {
    if enabled {
        exec(tx, &daylock_cycle(false), "enabling daylock")?;
        exec(tx, &time_set_day(), "enabling daylock")?;
    } else {
        exec(tx, &daylock_cycle(true), "disabling daylock")?;
    }
    Ok(())
}

impl Lifecycle for DaylockKind {
    fn kind(&self) -> &'static str {
        "daylock"
    }

    fn create(&self, tx: &mut dyn CommandExecutor, attrs: Value) -> Result<Value> {
        let attrs: DaylockAttrs = decode_attrs(attrs)?;
        let previous = capture_cycle(tx);
        apply(tx, attrs.enabled)?;
        let state = DaylockState {
            id: DEFAULT_ID.to_string(),
            enabled: attrs.enabled,
            previous_cycle: previous,
        };
        Ok(serde_json::to_value(state)?)
    }

    fn update(&self, tx: &mut dyn CommandExecutor, prior: Value, attrs: Value) -> Result<Value> {
        let prior: DaylockState = serde_json::from_value(prior)?;
        let attrs: DaylockAttrs = decode_attrs(attrs)?;
        let previous = capture_cycle(tx).or(prior.previous_cycle);
        apply(tx, attrs.enabled)?;
        let state = DaylockState {
            id: prior.id,
            enabled: attrs.enabled,
            previous_cycle: previous,
        };
        Ok(serde_json::to_value(state)?)
    }

    fn remove(&self, tx: &mut dyn CommandExecutor, state: Value) -> Vec<Warning> {
        let state: DaylockState = match decode_state(state, "restoring daylight cycle") {
            Ok(state) => state,
            Err(warning) => return vec![warning],
        };
        let Some(previous) = state.previous_cycle else {
            return Vec::new();
        };
        let cycle_enabled = previous == "true";
        snapshot::restore(
            tx,
            &daylock_cycle(cycle_enabled),
            "restoring daylight cycle",
        )
        .into_iter()
        .collect()
    }

    fn import(&self, id: &str) -> Result<Value> {
        if id != DEFAULT_ID {
            return Err(Error::validation(format!(
                "daylock identifier must be {DEFAULT_ID:?}, got {id:?}"
            )));
        }
        let state = DaylockState {
            id: DEFAULT_ID.to_string(),
            enabled: false,
            previous_cycle: None,
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
    fn enable_captures_then_locks_and_sets_day() {
        let mut tx = ScriptedTransport::new().reply_with(
            "gamerule doDaylightCycle",
            "Gamerule doDaylightCycle is currently set to: true",
        );
        let state = DaylockKind.create(&mut tx, json!({"enabled": true})).unwrap();
        assert_eq!(
            tx.sent(),
            &[
                "gamerule doDaylightCycle",
                "gamerule doDaylightCycle false",
                "time set day",
            ]
        );
        assert_eq!(state["id"], "default");
        assert_eq!(state["previous_cycle"], "true");
    }

    #[test]
    fn disable_reenables_the_cycle() {
        let mut tx = ScriptedTransport::new();
        DaylockKind.create(&mut tx, json!({"enabled": false})).unwrap();
        assert_eq!(
            tx.sent(),
            &["gamerule doDaylightCycle", "gamerule doDaylightCycle true"]
        );
    }

    #[test]
    fn remove_restores_the_captured_cycle() {
        let mut tx = ScriptedTransport::new();
        let state = json!({"id": "default", "enabled": true, "previous_cycle": "true"});
        assert!(DaylockKind.remove(&mut tx, state).is_empty());
        assert_eq!(tx.sent(), &["gamerule doDaylightCycle true"]);
    }

    #[test]
    fn remove_without_snapshot_writes_nothing() {
        let mut tx = ScriptedTransport::new();
        let state = json!({"id": "default", "enabled": true});
        assert!(DaylockKind.remove(&mut tx, state).is_empty());
        assert!(tx.sent().is_empty());
    }

    #[test]
    fn import_accepts_only_the_singleton_identity() {
        assert!(DaylockKind.import("default").is_ok());
        assert!(DaylockKind.import("daylock-1").is_err());
    }
}
