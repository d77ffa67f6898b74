//! Name-based identifier grammars: team membership, game mode
//! targets, the singleton identifier, and entity name tokens.

use uuid::Uuid;
use world_model::MemberKind;

use crate::error::{Error, Result};

/// Identifier for objects with exactly one instance per server.
pub const DEFAULT_ID: &str = "default";

/// `<team>|<kind>|<value>`
pub fn membership(team: &str, kind: MemberKind, value: &str) -> String {
    format!("{}|{}|{}", team, kind.as_str(), value)
}

/// Parse `<team>|<kind>|<value>`. An unrecognized kind fails closed
/// rather than being treated as a player name.
pub fn parse_membership(id: &str) -> Result<(String, MemberKind, String)> {
    let bad = || Error::BadMembership { id: id.to_string() };
    let parts: Vec<&str> = id.split('|').collect();
    let [team, kind, value] = parts[..] else {
        return Err(bad());
    };
    if team.is_empty() || value.is_empty() {
        return Err(bad());
    }
    let kind: MemberKind = kind.parse()?;
    Ok((team.to_string(), kind, value.to_string()))
}

/// `default` for the server default, `player:<name>` for a player.
pub fn mode_target(player: Option<&str>) -> String {
    match player {
        Some(player) => format!("player:{}", player),
        None => DEFAULT_ID.to_string(),
    }
}

/// Parse a mode target; `Ok(None)` is the server default.
pub fn parse_mode_target(id: &str) -> Result<Option<String>> {
    if id == DEFAULT_ID {
        return Ok(None);
    }
    match id.split_once(':') {
        Some(("player", name)) if !name.is_empty() => Ok(Some(name.to_string())),
        _ => Err(Error::BadModeTarget { id: id.to_string() }),
    }
}

/// Fresh random token used as an entity's CustomName. The token is the
/// only durable handle on the entity.
pub fn entity_token() -> String {
    Uuid::new_v4().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    #[test]
    fn membership_round_trip() {
        let id = membership("blue", MemberKind::Player, "Steve");
        assert_eq!(id, "blue|player|Steve");
        let (team, kind, value) = parse_membership(&id).unwrap();
        assert_eq!(team, "blue");
        assert_eq!(kind, MemberKind::Player);
        assert_eq!(value, "Steve");
    }

    #[rstest]
    #[case("blue|bogus|Steve")]
    #[case("blue|Player|Steve")]
    #[case("blue|player")]
    #[case("blue|player|Steve|extra")]
    #[case("|player|Steve")]
    #[case("blue|player|")]
    fn membership_fails_closed(#[case] id: &str) {
        assert!(parse_membership(id).is_err());
    }

    #[test]
    fn mode_target_round_trip() {
        assert_eq!(mode_target(None), "default");
        assert_eq!(mode_target(Some("Alex")), "player:Alex");
        assert_eq!(parse_mode_target("default").unwrap(), None);
        assert_eq!(
            parse_mode_target("player:Alex").unwrap(),
            Some("Alex".to_string())
        );
    }

    #[rstest]
    #[case("Alex")]
    #[case("player:")]
    #[case("operator:Alex")]
    fn mode_target_rejects_malformed(#[case] id: &str) {
        assert!(parse_mode_target(id).is_err());
    }

    #[test]
    fn entity_tokens_are_unique() {
        assert_ne!(entity_token(), entity_token());
    }
}
