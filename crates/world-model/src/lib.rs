//! Shared attribute and persisted-state types for worldctl.
//!
//! This crate is the schema layer underneath the lifecycle controllers:
//!
//! - **Attribute containers**: [`Attr`] is the three-state wrapper
//!   (unset / schema default / explicitly declared) every optional
//!   attribute arrives in. Controllers resolve it to a concrete value
//!   once, at the start of a lifecycle call.
//! - **World values**: [`Position`] (with the truncate-toward-zero block
//!   coordinate policy), [`Region`], and the closed enumerations for
//!   facings, modes, sizes and colors.
//! - **Records**: per-kind declared-attribute structs (deserialized from
//!   the host payload) and persisted-state structs (the flat record the
//!   host stores between reconciliation passes).
//!
//! Nothing in this crate performs I/O or knows about the command grammar.

pub mod attr;
pub mod block;
pub mod entity;
pub mod error;
pub mod position;
pub mod server;
pub mod values;

pub use attr::Attr;
pub use block::{
    BedAttrs, BedState, BlockAttrs, BlockState, ChestAttrs, ChestState, FillAttrs, FillState,
    StairsAttrs, StairsState,
};
pub use entity::{EntityAttrs, EntityState, SheepAttrs, SheepState, ZombieAttrs, ZombieState};
pub use error::{Error, Result};
pub use position::{Position, Region};
pub use server::{
    DaylockAttrs, DaylockState, GamemodeAttrs, GamemodeState, GameruleAttrs, GameruleState,
    OpAttrs, OpState, TeamAttrs, TeamMemberAttrs, TeamMemberState, TeamState,
};
pub use values::{ChestSize, Direction, GameMode, MemberKind, StairHalf, StairShape, WoolColor};
