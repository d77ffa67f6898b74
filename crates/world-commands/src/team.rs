//! Team management command builders.

/// `team add <name> {"text":"<display>"}`; the display argument is a
/// JSON text component.
pub fn team_add(name: &str, display: Option<&str>) -> String {
    match display {
        Some(display) => format!(r#"team add {} {{"text":"{}"}}"#, name, display),
        None => format!("team add {}", name),
    }
}

/// `team modify <name> displayName {"text":"<display>"}`
pub fn team_display(name: &str, display: &str) -> String {
    format!(r#"team modify {} displayName {{"text":"{}"}}"#, name, display)
}

pub fn team_remove(name: &str) -> String {
    format!("team remove {}", name)
}

/// `team modify <name> <option> <value>`; options such as color,
/// friendlyFire, seeFriendlyInvisibles take their value verbatim.
pub fn team_modify(name: &str, option: &str, value: &str) -> String {
    format!("team modify {} {} {}", name, option, value)
}

pub fn team_join(team: &str, member: &str) -> String {
    format!("team join {} {}", team, member)
}

pub fn team_leave(member: &str) -> String {
    format!("team leave {}", member)
}

/// Selector targeting a summoned entity by its name token.
pub fn entity_selector(token: &str) -> String {
    format!("@e[name={},limit=1]", token)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn add_with_and_without_display() {
        assert_eq!(
            team_add("red", Some("Red Team")),
            r#"team add red {"text":"Red Team"}"#
        );
        assert_eq!(team_add("red", None), "team add red");
    }

    #[test]
    fn modify_join_leave_remove() {
        assert_eq!(team_modify("red", "color", "red"), "team modify red color red");
        assert_eq!(
            team_modify("red", "friendlyFire", "false"),
            "team modify red friendlyFire false"
        );
        assert_eq!(
            team_display("red", "Red Team"),
            r#"team modify red displayName {"text":"Red Team"}"#
        );
        assert_eq!(team_join("red", "Steve"), "team join red Steve");
        assert_eq!(team_leave("Steve"), "team leave Steve");
        assert_eq!(team_remove("red"), "team remove red");
    }

    #[test]
    fn entity_selector_limits_to_one() {
        assert_eq!(entity_selector("tok"), "@e[name=tok,limit=1]");
    }
}
