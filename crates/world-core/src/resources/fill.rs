//! Filled region lifecycle.

use serde_json::Value;
use world_commands::{clear_region, fill_region};
use world_ident::{parse_region, region as region_id};
use world_model::{FillAttrs, FillState, Region};

use crate::error::{Result, Warning};
use crate::registry::Lifecycle;
use crate::resources::{decode_attrs, decode_state, exec, try_undo};
use crate::transport::CommandExecutor;

pub struct FillKind;

fn apply(tx: &mut dyn CommandExecutor, attrs: FillAttrs, context: &str) -> Result<Value> {
    let region = Region::new(attrs.start, attrs.end);
    exec(tx, &fill_region(&region, &attrs.material), context)?;
    let state = FillState {
        id: region_id(&attrs.material, &region),
        material: attrs.material,
        region,
    };
    Ok(serde_json::to_value(state)?)
}

impl Lifecycle for FillKind {
    fn kind(&self) -> &'static str {
        "fill"
    }

    fn create(&self, tx: &mut dyn CommandExecutor, attrs: Value) -> Result<Value> {
        let attrs: FillAttrs = decode_attrs(attrs)?;
        apply(tx, attrs, "filling region")
    }

    fn update(&self, tx: &mut dyn CommandExecutor, _prior: Value, attrs: Value) -> Result<Value> {
        // the identity embeds material and corners, so it is recomputed
        // alongside the refill
        let attrs: FillAttrs = decode_attrs(attrs)?;
        apply(tx, attrs, "updating filled region")
    }

    fn remove(&self, tx: &mut dyn CommandExecutor, state: Value) -> Vec<Warning> {
        let state: FillState = match decode_state(state, "removing filled region") {
            Ok(state) => state,
            Err(warning) => return vec![warning],
        };
        try_undo(tx, &clear_region(&state.region), "removing filled region")
            .into_iter()
            .collect()
    }

    fn import(&self, id: &str) -> Result<Value> {
        let (material, region) = parse_region(id)?;
        let state = FillState {
            id: id.to_string(),
            material,
            region,
        };
        Ok(serde_json::to_value(state)?)
    }
}
