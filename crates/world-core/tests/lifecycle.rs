//! End-to-end lifecycle scenarios run through the kind registry with a
//! scripted transport.

use pretty_assertions::assert_eq;
use rstest::rstest;
use serde_json::{json, Value};
use world_core::{Error, KindRegistry};
use world_test_utils::ScriptedTransport;

fn registry() -> KindRegistry {
    KindRegistry::with_builtins()
}

#[test]
fn double_chest_part_two_failure_compensates_and_persists_nothing() {
    let registry = registry();
    let chest = registry.get("chest").unwrap();
    let mut tx = ScriptedTransport::new().fail_on("type=right", "occupied");

    let err = chest
        .create(
            &mut tx,
            json!({"position": {"x": 11, "y": 64, "z": 11}, "size": "double"}),
        )
        .unwrap_err();

    assert!(err.to_string().contains("right half"));
    let clears: Vec<_> = tx
        .sent()
        .iter()
        .map(String::as_str)
        .filter(|c| c.contains("minecraft:air"))
        .collect();
    assert_eq!(clears, vec!["setblock 11 64 11 minecraft:air"]);
}

#[rstest]
#[case("gamerule", json!({"id": "keepInventory", "name": "keepInventory", "value": "true"}))]
#[case("gamemode", json!({"id": "default", "mode": "creative"}))]
#[case("daylock", json!({"id": "default", "enabled": true}))]
fn settings_removal_without_snapshot_writes_nothing(#[case] kind: &str, #[case] state: Value) {
    let registry = registry();
    let mut tx = ScriptedTransport::new();
    let warnings = registry.get(kind).unwrap().remove(&mut tx, state);
    assert!(warnings.is_empty());
    assert!(tx.sent().is_empty());
}

#[test]
fn boolean_setting_round_trip_restores_the_observed_value() {
    let registry = registry();
    let gamerule = registry.get("gamerule").unwrap();
    let mut tx = ScriptedTransport::new().reply_with(
        "gamerule keepInventory",
        "Gamerule keepInventory is currently set to: false",
    );

    let state = gamerule
        .create(&mut tx, json!({"name": "keepInventory", "value": "true"}))
        .unwrap();
    assert_eq!(
        tx.sent(),
        &["gamerule keepInventory", "gamerule keepInventory true"]
    );

    // the restore must not be matched by the scripted reply needle
    let mut tx = ScriptedTransport::new();
    assert!(gamerule.remove(&mut tx, state).is_empty());
    assert_eq!(tx.sent(), &["gamerule keepInventory false"]);
}

#[test]
fn membership_requires_exactly_one_target() {
    let registry = registry();
    let member = registry.get("team_member").unwrap();
    let mut tx = ScriptedTransport::new();

    let ok = member
        .create(&mut tx, json!({"team": "blue", "player": "Steve"}))
        .unwrap();
    assert_eq!(ok["id"], "blue|player|Steve");

    for attrs in [
        json!({"team": "blue"}),
        json!({"team": "blue", "player": "Steve", "entity_id": "tok"}),
    ] {
        let mut tx = ScriptedTransport::new();
        let err = member.create(&mut tx, attrs).unwrap_err();
        assert!(matches!(err, Error::Validation { .. }));
        assert!(tx.sent().is_empty());
    }
}

#[rstest]
#[case::chest_size(
    "chest",
    json!({"position": {"x": 0.0, "y": 64.0, "z": 0.0}, "material": "minecraft:chest", "size": "triple"})
)]
#[case::bed_direction(
    "bed",
    json!({"position": {"x": 0.0, "y": 64.0, "z": 0.0}, "material": "minecraft:red_bed", "direction": "up"})
)]
fn malformed_attributes_fail_validation_before_any_command(
    #[case] kind: &str,
    #[case] attrs: Value,
) {
    let registry = registry();
    let controller = registry.get(kind).unwrap();
    let mut tx = ScriptedTransport::new();

    let err = controller.create(&mut tx, attrs).unwrap_err();
    assert!(matches!(err, Error::Validation { .. }));
    assert!(tx.sent().is_empty());
}

#[test]
fn membership_import_round_trips_and_fails_closed() {
    let registry = registry();
    let member = registry.get("team_member").unwrap();

    let state = member.import("blue|player|Steve").unwrap();
    assert_eq!(state["team"], "blue");
    assert_eq!(state["player"], "Steve");

    let err = member.import("blue|bogus|Steve").unwrap_err();
    assert!(matches!(err, Error::Validation { .. }));
}

#[test]
fn update_twice_with_identical_attributes_is_idempotent() {
    let registry = registry();
    let stairs = registry.get("stairs").unwrap();
    let attrs = json!({
        "material": "minecraft:oak_stairs",
        "position": {"x": 4, "y": 70, "z": 4},
        "facing": "north",
        "half": "bottom",
        "shape": "straight",
    });

    let mut tx = ScriptedTransport::new();
    let created = stairs.create(&mut tx, attrs.clone()).unwrap();
    let first = stairs.update(&mut tx, created.clone(), attrs.clone()).unwrap();
    let second = stairs.update(&mut tx, first.clone(), attrs).unwrap();

    assert_eq!(created, first);
    assert_eq!(first, second);
    assert_eq!(tx.sent()[1], tx.sent()[2]);
}

#[rstest]
#[case("block", "block-10-64--3")]
#[case("stairs", "stairs-1-2-3")]
#[case("chest", "chest--11-64-11")]
#[case("bed", "bed-7-64-7-south")]
#[case("fill", "minecraft:stone|-1,60,-1->4,65,4")]
#[case("team", "red")]
#[case("team_member", "blue|selector|@a")]
#[case("op", "Steve")]
#[case("gamerule", "keepInventory")]
#[case("gamemode", "player:Alex")]
#[case("daylock", "default")]
fn import_preserves_the_identity(#[case] kind: &str, #[case] id: &str) {
    let registry = registry();
    let state = registry.get(kind).unwrap().import(id).unwrap();
    assert_eq!(state["id"], id);
}

#[test]
fn refresh_echoes_persisted_state_unchanged() {
    let registry = registry();
    for kind in ["block", "chest", "team", "gamerule", "daylock"] {
        let state = json!({"id": "whatever", "untouched": [1, 2, 3]});
        let echoed = registry.get(kind).unwrap().refresh(state.clone()).unwrap();
        assert_eq!(echoed, state);
    }
}

#[test]
fn imported_state_is_sufficient_for_removal() {
    let registry = registry();
    let bed = registry.get("bed").unwrap();
    let mut tx = ScriptedTransport::new();

    let state = bed.import("bed-7-64-7-north").unwrap();
    assert!(bed.remove(&mut tx, state).is_empty());
    assert_eq!(
        tx.sent(),
        &[
            "setblock 7 64 6 minecraft:air",
            "setblock 7 64 7 minecraft:air",
        ]
    );
}
