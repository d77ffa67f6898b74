//! Built-in lifecycle controllers, one module per object kind.

mod bed;
mod block;
mod chest;
mod daylock;
mod entity;
mod fill;
mod gamemode;
mod gamerule;
mod op;
mod sheep;
mod stairs;
mod team;
mod team_member;
mod zombie;

pub use bed::BedKind;
pub use block::BlockKind;
pub use chest::ChestKind;
pub use daylock::DaylockKind;
pub use entity::EntityKind;
pub use fill::FillKind;
pub use gamemode::GamemodeKind;
pub use gamerule::GameruleKind;
pub use op::OpKind;
pub use sheep::SheepKind;
pub use stairs::StairsKind;
pub use team::TeamKind;
pub use team_member::TeamMemberKind;
pub use zombie::ZombieKind;

use tracing::warn;

use crate::error::{Error, Result, Warning};
use crate::transport::{CommandExecutor, TransportError};

/// Decode a declared-attribute payload. A payload that does not fit the
/// kind's schema is a validation failure, caught before any command.
pub(crate) fn decode_attrs<T: serde::de::DeserializeOwned>(
    attrs: serde_json::Value,
) -> Result<T> {
    serde_json::from_value(attrs).map_err(|err| Error::validation(err.to_string()))
}

/// Execute one command, wrapping failure with the operation context.
pub(crate) fn exec(
    tx: &mut dyn CommandExecutor,
    command: &str,
    context: &str,
) -> Result<String> {
    tx.execute(command)
        .map_err(|source: TransportError| Error::transport(context, source))
}

/// Execute a removal command, demoting failure to a warning.
pub(crate) fn try_undo(
    tx: &mut dyn CommandExecutor,
    command: &str,
    context: &str,
) -> Option<Warning> {
    match tx.execute(command) {
        Ok(_) => None,
        Err(err) => {
            warn!(command, error = %err, "removal command failed");
            Some(Warning::new(context, err))
        }
    }
}

/// Decode persisted state during removal; a corrupt record becomes a
/// warning rather than a hard failure.
pub(crate) fn decode_state<T: serde::de::DeserializeOwned>(
    state: serde_json::Value,
    context: &str,
) -> std::result::Result<T, Warning> {
    serde_json::from_value(state).map_err(|err| Warning::new(context, err))
}
