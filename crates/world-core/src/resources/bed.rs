//! Bed lifecycle.
//!
//! The declared position is the foot; the head sits one block in the
//! facing direction. Creation places foot then head and clears the foot
//! if the head placement fails.

use serde_json::Value;
use world_commands::{bed_block, clear_block, set_block, BedPart};
use world_ident::{parse_positional_with_suffix, positional_with_suffix};
use world_model::{BedAttrs, BedState, Direction, Position};

use crate::composite::{apply_all, apply_forward, undo_all, PlannedCommand};
use crate::error::{Result, Warning};
use crate::registry::Lifecycle;
use crate::resources::{decode_attrs, decode_state};
use crate::transport::CommandExecutor;

const KIND: &str = "bed";

pub struct BedKind;

fn plan(material: &str, foot: &Position, direction: Direction, occupied: bool) -> Vec<PlannedCommand> {
    let (dx, dz) = direction.step();
    let head = foot.offset(dx, dz);
    vec![
        PlannedCommand::new(
            "foot",
            set_block(foot, &bed_block(material, direction, BedPart::Foot, occupied)),
            clear_block(foot),
        ),
        PlannedCommand::new(
            "head",
            set_block(&head, &bed_block(material, direction, BedPart::Head, occupied)),
            clear_block(&head),
        ),
    ]
}

fn state_of(id: String, attrs: BedAttrs) -> BedState {
    BedState {
        id,
        occupied: attrs.occupied.resolve(false),
        material: Some(attrs.material),
        position: attrs.position,
        direction: attrs.direction,
    }
}

impl Lifecycle for BedKind {
    fn kind(&self) -> &'static str {
        KIND
    }

    fn create(&self, tx: &mut dyn CommandExecutor, attrs: Value) -> Result<Value> {
        let attrs: BedAttrs = decode_attrs(attrs)?;
        let parts = plan(
            &attrs.material,
            &attrs.position,
            attrs.direction,
            attrs.occupied.resolve(false),
        );
        apply_all(tx, &parts, "placing bed")?;
        let id = positional_with_suffix(KIND, &attrs.position, attrs.direction.as_str());
        Ok(serde_json::to_value(state_of(id, attrs))?)
    }

    fn update(&self, tx: &mut dyn CommandExecutor, prior: Value, attrs: Value) -> Result<Value> {
        let prior: BedState = serde_json::from_value(prior)?;
        let attrs: BedAttrs = decode_attrs(attrs)?;
        let parts = plan(
            &attrs.material,
            &attrs.position,
            attrs.direction,
            attrs.occupied.resolve(false),
        );
        apply_forward(tx, &parts, "updating bed")?;
        Ok(serde_json::to_value(state_of(prior.id, attrs))?)
    }

    fn remove(&self, tx: &mut dyn CommandExecutor, state: Value) -> Vec<Warning> {
        let state: BedState = match decode_state(state, "removing bed") {
            Ok(state) => state,
            Err(warning) => return vec![warning],
        };
        // material is unknown for imported beds; the undo commands only
        // need positions, so plan with a placeholder
        let material = state.material.as_deref().unwrap_or("minecraft:red_bed");
        let parts = plan(material, &state.position, state.direction, state.occupied);
        undo_all(tx, &parts, "removing bed")
    }

    fn import(&self, id: &str) -> Result<Value> {
        let (position, suffix) = parse_positional_with_suffix(KIND, id)?;
        let direction: Direction = suffix.parse()?;
        let state = BedState {
            id: id.to_string(),
            material: None,
            position,
            direction,
            occupied: false,
        };
        Ok(serde_json::to_value(state)?)
    }
}
