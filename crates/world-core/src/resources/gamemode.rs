//! Game mode lifecycle, for the server default or one player.
//!
//! The prior mode is read best-effort before every write: the server
//! default via a bare `defaultgamemode` query, a player's mode via a
//! data query on `playerGameType`. Removal replays the snapshot, or
//! does nothing when none was captured.

use serde_json::Value;
use world_commands::{
    default_gamemode, default_gamemode_query, player_gamemode, player_gamemode_query,
};
use world_ident::{mode_target, parse_mode_target};
use world_model::{GameMode, GamemodeAttrs, GamemodeState};

use crate::error::{Error, Result, Warning};
use crate::registry::Lifecycle;
use crate::resources::{decode_attrs, decode_state, exec};
use crate::snapshot;
use crate::transport::CommandExecutor;

pub struct GamemodeKind;

fn validated_mode(mode: &str) -> Result<GameMode> {
    mode.parse::<GameMode>().map_err(Error::from)
}

fn player_of(attrs: &GamemodeAttrs) -> Option<String> {
    attrs
        .player
        .get()
        .map(|p| p.trim().to_string())
        .filter(|p| !p.is_empty())
}

fn capture_prior(tx: &mut dyn CommandExecutor, player: Option<&str>) -> Option<String> {
    let mode = match player {
        None => snapshot::capture(tx, &default_gamemode_query(), snapshot::parse_mode_reply),
        Some(player) => snapshot::capture(
            tx,
            &player_gamemode_query(player),
            snapshot::parse_ordinal_reply,
        ),
    };
    mode.map(|m| m.as_str().to_string())
}

fn write_mode(
    tx: &mut dyn CommandExecutor,
    mode: GameMode,
    player: Option<&str>,
    context: &str,
) -> Result<()> {
    let command = match player {
        None => default_gamemode(mode),
        Some(player) => player_gamemode(mode, player),
    };
    exec(tx, &command, context)?;
    Ok(())
}

impl Lifecycle for GamemodeKind {
    fn kind(&self) -> &'static str {
        "gamemode"
    }

    fn create(&self, tx: &mut dyn CommandExecutor, attrs: Value) -> Result<Value> {
        let attrs: GamemodeAttrs = decode_attrs(attrs)?;
        let mode = validated_mode(&attrs.mode)?;
        let player = player_of(&attrs);
        let previous = capture_prior(tx, player.as_deref());
        write_mode(tx, mode, player.as_deref(), "setting gamemode")?;
        let state = GamemodeState {
            id: mode_target(player.as_deref()),
            mode: mode.as_str().to_string(),
            player,
            previous_mode: previous,
        };
        Ok(serde_json::to_value(state)?)
    }

    fn update(&self, tx: &mut dyn CommandExecutor, prior: Value, attrs: Value) -> Result<Value> {
        let prior: GamemodeState = serde_json::from_value(prior)?;
        let attrs: GamemodeAttrs = decode_attrs(attrs)?;
        let mode = validated_mode(&attrs.mode)?;
        let player = player_of(&attrs);
        let previous = capture_prior(tx, player.as_deref()).or(prior.previous_mode);
        write_mode(tx, mode, player.as_deref(), "setting gamemode")?;
        let state = GamemodeState {
            id: prior.id,
            mode: mode.as_str().to_string(),
            player,
            previous_mode: previous,
        };
        Ok(serde_json::to_value(state)?)
    }

    fn remove(&self, tx: &mut dyn CommandExecutor, state: Value) -> Vec<Warning> {
        let state: GamemodeState = match decode_state(state, "restoring gamemode") {
            Ok(state) => state,
            Err(warning) => return vec![warning],
        };
        let Some(previous) = state.previous_mode else {
            return Vec::new();
        };
        let Ok(mode) = previous.parse::<GameMode>() else {
            return vec![Warning::new(
                "restoring gamemode",
                format!("stored previous mode {previous:?} is not a known mode"),
            )];
        };
        let command = match state.player.as_deref() {
            None => default_gamemode(mode),
            Some(player) => player_gamemode(mode, player),
        };
        snapshot::restore(tx, &command, "restoring gamemode")
            .into_iter()
            .collect()
    }

    fn import(&self, id: &str) -> Result<Value> {
        let player = parse_mode_target(id)?;
        let state = GamemodeState {
            id: id.to_string(),
            mode: String::new(),
            player,
            previous_mode: None,
        };
        Ok(serde_json::to_value(state)?)
    }
}
