//! Best-effort prior-value snapshots for global settings.
//!
//! The remote side has no transactional read-then-write, so a snapshot
//! is only ever advisory: a failed or unparseable read yields "no
//! snapshot" and the write proceeds. Captures happen at creation and
//! again before every update write, so the stored value always reflects
//! the state immediately prior to the most recent write.

use tracing::{debug, warn};
use world_model::GameMode;

use crate::error::Warning;
use crate::transport::CommandExecutor;

/// Run a read command and parse its reply. Any failure means no
/// snapshot, never an error.
pub fn capture<T>(
    tx: &mut dyn CommandExecutor,
    command: &str,
    parse: impl FnOnce(&str) -> Option<T>,
) -> Option<T> {
    match tx.execute(command) {
        Ok(reply) => parse(&reply),
        Err(error) => {
            debug!(command, %error, "snapshot read failed, proceeding without prior value");
            None
        }
    }
}

/// Issue a restore command at removal. Failure is a warning, never a
/// hard error, so removal can complete.
pub fn restore(tx: &mut dyn CommandExecutor, command: &str, context: &str) -> Option<Warning> {
    match tx.execute(command) {
        Ok(_) => None,
        Err(error) => {
            warn!(command, %error, "restore command failed");
            Some(Warning::new(context, error))
        }
    }
}

/// Extract the value portion of a rule query reply, e.g.
/// `Gamerule keepInventory is currently set to: false` yields `false`.
pub fn parse_rule_reply(reply: &str) -> Option<String> {
    let value = reply.rsplit(':').next()?.trim();
    if value.is_empty() || value.contains(' ') {
        return None;
    }
    Some(value.to_string())
}

/// Normalize a rule value to `true`/`false`, rejecting anything else.
pub fn parse_bool_value(value: &str) -> Option<String> {
    match value.trim().to_ascii_lowercase().as_str() {
        "true" => Some("true".to_string()),
        "false" => Some("false".to_string()),
        _ => None,
    }
}

/// Scan a reply for a recognizable game mode word, e.g.
/// `The default game mode is Survival`.
pub fn parse_mode_reply(reply: &str) -> Option<GameMode> {
    reply
        .split(|c: char| !c.is_ascii_alphabetic())
        .find_map(|word| word.parse::<GameMode>().ok())
}

/// Parse the trailing integer of a data query reply as a mode ordinal,
/// e.g. `Alex has the following entity data: 0`.
pub fn parse_ordinal_reply(reply: &str) -> Option<GameMode> {
    let last = reply.trim().rsplit([' ', ':']).next()?;
    GameMode::from_ordinal(last.trim().parse().ok()?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rstest::rstest;
    use crate::world_test_utils::ScriptedTransport;

    #[test]
    fn capture_swallows_transport_failure() {
        let mut tx = ScriptedTransport::new().fail_on("gamerule keepInventory", "down");
        let got = capture(&mut tx, "gamerule keepInventory", parse_rule_reply);
        assert_eq!(got, None);
    }

    #[test]
    fn capture_parses_scripted_reply() {
        let mut tx = ScriptedTransport::new().reply_with(
            "gamerule keepInventory",
            "Gamerule keepInventory is currently set to: false",
        );
        let got = capture(&mut tx, "gamerule keepInventory", parse_rule_reply);
        assert_eq!(got.as_deref(), Some("false"));
    }

    #[test]
    fn restore_demotes_failure_to_warning() {
        let mut tx = ScriptedTransport::new().fail_on("gamerule keepInventory false", "down");
        let warning = restore(&mut tx, "gamerule keepInventory false", "restoring keepInventory");
        assert!(warning.is_some());
        let mut tx = ScriptedTransport::new();
        assert_eq!(restore(&mut tx, "gamerule keepInventory false", "ctx"), None);
    }

    #[rstest]
    #[case("Gamerule doDaylightCycle is currently set to: true", Some("true"))]
    #[case("Gamerule randomTickSpeed is currently set to: 3", Some("3"))]
    #[case("", None)]
    #[case("Unknown or incomplete command", None)]
    fn rule_reply_parsing(#[case] reply: &str, #[case] want: Option<&str>) {
        assert_eq!(parse_rule_reply(reply).as_deref(), want);
    }

    #[rstest]
    #[case("true", Some("true"))]
    #[case(" False ", Some("false"))]
    #[case("7", None)]
    fn bool_normalization(#[case] value: &str, #[case] want: Option<&str>) {
        assert_eq!(parse_bool_value(value).as_deref(), want);
    }

    #[rstest]
    #[case("The default game mode is Survival", Some(GameMode::Survival))]
    #[case("The default game mode is Creative", Some(GameMode::Creative))]
    #[case("Unknown or incomplete command", None)]
    fn mode_reply_parsing(#[case] reply: &str, #[case] want: Option<GameMode>) {
        assert_eq!(parse_mode_reply(reply), want);
    }

    #[rstest]
    #[case("Alex has the following entity data: 0", Some(GameMode::Survival))]
    #[case("Alex has the following entity data: 3", Some(GameMode::Spectator))]
    #[case("No entity was found", None)]
    fn ordinal_reply_parsing(#[case] reply: &str, #[case] want: Option<GameMode>) {
        assert_eq!(parse_ordinal_reply(reply), want);
    }
}
