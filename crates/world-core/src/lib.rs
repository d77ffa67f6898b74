//! Declarative reconciliation core for a remote world reachable only
//! through fire-and-forget text commands.
//!
//! The host hands each lifecycle call the desired attributes or the
//! previously persisted state; controllers derive identities, format
//! commands, and run them over the [`transport::CommandExecutor`]
//! boundary. There are no remote reads for managed objects: refresh
//! echoes persisted state, and the only reads are best-effort snapshot
//! captures for global settings.

// Unit tests use the scripted transport from `world-test-utils`, but that
// crate links against the separately compiled `world-core` rlib, whose
// `CommandExecutor` is a distinct trait from the one in the unit-test
// build (the usual dev-dependency-cycle duplication). Compile the helper
// source directly into the test build instead, with `extern crate self`
// so its `use world_core::...` imports resolve here.
#[cfg(test)]
extern crate self as world_core;

#[cfg(test)]
#[path = "../../world-test-utils/src/lib.rs"]
mod world_test_utils;

pub mod composite;
pub mod error;
pub mod registry;
pub mod resources;
pub mod snapshot;
pub mod transport;

pub use composite::PlannedCommand;
pub use error::{Error, Result, Warning};
pub use registry::{KindRegistry, Lifecycle};
pub use transport::{CommandExecutor, ConnectionConfig, RconClient, TransportError};
