//! Team lifecycle.
//!
//! Creation is `team add` followed by one modify command per declared
//! option. If an option command fails mid-create the team is removed
//! again so nothing is persisted. Updates only send the display name
//! when it changed, then re-apply the declared options.

use serde_json::Value;
use world_commands::{team_add, team_display, team_modify, team_remove};
use world_model::{Attr, TeamAttrs, TeamState};

use crate::error::{Error, Result, Warning};
use crate::registry::Lifecycle;
use crate::resources::{decode_attrs, decode_state, exec, try_undo};
use crate::transport::CommandExecutor;

pub struct TeamKind;

fn trimmed(attr: &Attr<String>) -> Option<String> {
    attr.get()
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
}

/// Display name falls back to the team name itself.
fn display_of(name: &str, attrs: &TeamAttrs) -> String {
    trimmed(&attrs.display_name).unwrap_or_else(|| name.to_string())
}

fn option_commands(name: &str, attrs: &TeamAttrs) -> Vec<(String, &'static str)> {
    let mut commands = Vec::new();
    if let Some(color) = trimmed(&attrs.color) {
        commands.push((
            team_modify(name, "color", &color.to_ascii_lowercase()),
            "setting color",
        ));
    }
    if let Some(value) = attrs.friendly_fire.get() {
        commands.push((
            team_modify(name, "friendlyFire", &value.to_string()),
            "setting friendlyFire",
        ));
    }
    if let Some(value) = attrs.see_friendly_invisibles.get() {
        commands.push((
            team_modify(name, "seeFriendlyInvisibles", &value.to_string()),
            "setting seeFriendlyInvisibles",
        ));
    }
    if let Some(visibility) = trimmed(&attrs.nametag_visibility) {
        commands.push((
            team_modify(name, "nametagVisibility", &visibility),
            "setting nametagVisibility",
        ));
    }
    if let Some(rule) = trimmed(&attrs.collision_rule) {
        commands.push((
            team_modify(name, "collisionRule", &rule),
            "setting collisionRule",
        ));
    }
    commands
}

fn validated_name(attrs: &TeamAttrs) -> Result<String> {
    let name = attrs.name.trim().to_string();
    if name.is_empty() {
        return Err(Error::validation("team name cannot be empty or whitespace"));
    }
    Ok(name)
}

fn state_of(name: String, attrs: &TeamAttrs) -> TeamState {
    TeamState {
        id: name.clone(),
        name,
        display_name: trimmed(&attrs.display_name),
        color: trimmed(&attrs.color),
        friendly_fire: attrs.friendly_fire.get().copied(),
        see_friendly_invisibles: attrs.see_friendly_invisibles.get().copied(),
        nametag_visibility: trimmed(&attrs.nametag_visibility),
        collision_rule: trimmed(&attrs.collision_rule),
    }
}

impl Lifecycle for TeamKind {
    fn kind(&self) -> &'static str {
        "team"
    }

    fn create(&self, tx: &mut dyn CommandExecutor, attrs: Value) -> Result<Value> {
        let attrs: TeamAttrs = decode_attrs(attrs)?;
        let name = validated_name(&attrs)?;
        let display = display_of(&name, &attrs);
        exec(tx, &team_add(&name, Some(&display)), "creating team")?;
        for (command, context) in option_commands(&name, &attrs) {
            if let Err(err) = exec(tx, &command, context) {
                // the team exists but the declared options do not all
                // hold; take it down again so nothing is persisted
                try_undo(tx, &team_remove(&name), "removing partially created team");
                return Err(err);
            }
        }
        Ok(serde_json::to_value(state_of(name, &attrs))?)
    }

    fn update(&self, tx: &mut dyn CommandExecutor, prior: Value, attrs: Value) -> Result<Value> {
        let prior: TeamState = serde_json::from_value(prior)?;
        let attrs: TeamAttrs = decode_attrs(attrs)?;
        let name = validated_name(&attrs)?;
        let declared = trimmed(&attrs.display_name);
        if declared != prior.display_name {
            let display = display_of(&name, &attrs);
            exec(tx, &team_display(&name, &display), "setting displayName")?;
        }
        for (command, context) in option_commands(&name, &attrs) {
            exec(tx, &command, context)?;
        }
        Ok(serde_json::to_value(state_of(name, &attrs))?)
    }

    fn remove(&self, tx: &mut dyn CommandExecutor, state: Value) -> Vec<Warning> {
        let state: TeamState = match decode_state(state, "removing team") {
            Ok(state) => state,
            Err(warning) => return vec![warning],
        };
        try_undo(tx, &team_remove(&state.name), "removing team")
            .into_iter()
            .collect()
    }

    fn import(&self, id: &str) -> Result<Value> {
        let name = id.trim();
        if name.is_empty() {
            return Err(Error::validation("team name cannot be empty or whitespace"));
        }
        let state = TeamState {
            id: name.to_string(),
            name: name.to_string(),
            display_name: None,
            color: None,
            friendly_fire: None,
            see_friendly_invisibles: None,
            nametag_visibility: None,
            collision_rule: None,
        };
        Ok(serde_json::to_value(state)?)
    }
}
