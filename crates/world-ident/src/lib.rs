//! Identifier synthesis and parsing for world objects.
//!
//! Every managed object is addressed by a string identifier derived
//! from its defining attributes (or, for summoned entities, a random
//! token). Identifiers are the only state the system can rely on when
//! an object is imported, so each grammar here parses back exactly
//! what it synthesizes.

mod error;
mod naming;
mod spatial;

pub use error::{Error, Result};
pub use naming::{
    entity_token, membership, mode_target, parse_membership, parse_mode_target, DEFAULT_ID,
};
pub use spatial::{
    parse_positional, parse_positional_with_suffix, parse_region, positional,
    positional_with_suffix, region,
};
