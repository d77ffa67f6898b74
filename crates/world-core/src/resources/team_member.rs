//! Team membership lifecycle.
//!
//! A membership names its target in exactly one way: a player name, a
//! raw selector string, or the name token of a summoned entity. The
//! identity is `team|kind|value` and parsing fails closed on an
//! unknown kind.

use serde_json::Value;
use world_commands::{entity_selector, team_join, team_leave};
use world_ident::{membership, parse_membership};
use world_model::{Attr, MemberKind, TeamMemberAttrs, TeamMemberState};

use crate::error::{Error, Result, Warning};
use crate::registry::Lifecycle;
use crate::resources::{decode_attrs, decode_state, exec, try_undo};
use crate::transport::CommandExecutor;

pub struct TeamMemberKind;

fn present(attr: &Attr<String>) -> Option<String> {
    attr.get()
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
}

/// The single declared target, or a validation error when zero or more
/// than one is set.
fn target_of(attrs: &TeamMemberAttrs) -> Result<(MemberKind, String)> {
    let candidates = [
        (MemberKind::Player, present(&attrs.player)),
        (MemberKind::Selector, present(&attrs.selector)),
        (MemberKind::Entity, present(&attrs.entity_id)),
    ];
    let mut found = None;
    for (kind, value) in candidates {
        if let Some(value) = value {
            if found.is_some() {
                return Err(Error::validation(
                    "exactly one of player, selector and entity_id must be set",
                ));
            }
            found = Some((kind, value));
        }
    }
    found.ok_or_else(|| {
        Error::validation("exactly one of player, selector and entity_id must be set")
    })
}

/// What the join/leave commands actually address for a given target.
fn selector_for(kind: MemberKind, value: &str) -> String {
    match kind {
        MemberKind::Player | MemberKind::Selector => value.to_string(),
        MemberKind::Entity => entity_selector(value),
    }
}

fn state_of(id: String, team: String, kind: MemberKind, value: String) -> TeamMemberState {
    let mut state = TeamMemberState {
        id,
        team,
        player: None,
        selector: None,
        entity_id: None,
    };
    match kind {
        MemberKind::Player => state.player = Some(value),
        MemberKind::Selector => state.selector = Some(value),
        MemberKind::Entity => state.entity_id = Some(value),
    }
    state
}

fn target_from_state(state: &TeamMemberState) -> Option<(MemberKind, String)> {
    if let Some(player) = &state.player {
        return Some((MemberKind::Player, player.clone()));
    }
    if let Some(selector) = &state.selector {
        return Some((MemberKind::Selector, selector.clone()));
    }
    state
        .entity_id
        .as_ref()
        .map(|token| (MemberKind::Entity, token.clone()))
}

impl Lifecycle for TeamMemberKind {
    fn kind(&self) -> &'static str {
        "team_member"
    }

    fn create(&self, tx: &mut dyn CommandExecutor, attrs: Value) -> Result<Value> {
        let attrs: TeamMemberAttrs = decode_attrs(attrs)?;
        let team = attrs.team.trim().to_string();
        if team.is_empty() {
            return Err(Error::validation("team cannot be empty or whitespace"));
        }
        let (kind, value) = target_of(&attrs)?;
        exec(
            tx,
            &team_join(&team, &selector_for(kind, &value)),
            "joining team",
        )?;
        let id = membership(&team, kind, &value);
        Ok(serde_json::to_value(state_of(id, team, kind, value))?)
    }

    fn update(&self, _tx: &mut dyn CommandExecutor, prior: Value, attrs: Value) -> Result<Value> {
        let prior: TeamMemberState = serde_json::from_value(prior)?;
        let attrs: TeamMemberAttrs = decode_attrs(attrs)?;
        let team = attrs.team.trim().to_string();
        let (kind, value) = target_of(&attrs)?;
        Ok(serde_json::to_value(state_of(prior.id, team, kind, value))?)
    }

    fn remove(&self, tx: &mut dyn CommandExecutor, state: Value) -> Vec<Warning> {
        let state: TeamMemberState = match decode_state(state, "removing team member") {
            Ok(state) => state,
            Err(warning) => return vec![warning],
        };
        let target = target_from_state(&state).or_else(|| {
            parse_membership(&state.id)
                .ok()
                .map(|(_, kind, value)| (kind, value))
        });
        let Some((kind, value)) = target else {
            return Vec::new();
        };
        try_undo(
            tx,
            &team_leave(&selector_for(kind, &value)),
            "removing team member",
        )
        .into_iter()
        .collect()
    }

    fn import(&self, id: &str) -> Result<Value> {
        let (team, kind, value) = parse_membership(id)?;
        Ok(serde_json::to_value(state_of(
            id.to_string(),
            team,
            kind,
            value,
        ))?)
    }
}
