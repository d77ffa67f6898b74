//! Identifier parsing errors.

use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    #[error("identifier {id:?} does not start with {prefix:?}")]
    WrongPrefix { prefix: &'static str, id: String },

    #[error("identifier {id:?} has malformed coordinates")]
    BadCoordinates { id: String },

    #[error("identifier {id:?} is missing a direction suffix")]
    MissingDirection { id: String },

    #[error("identifier {id:?} is not of the form <material>|x,y,z->x,y,z")]
    BadRegion { id: String },

    #[error("identifier {id:?} is not of the form <team>|<kind>|<value>")]
    BadMembership { id: String },

    #[error("identifier {id:?} is not \"default\" or \"player:<name>\"")]
    BadModeTarget { id: String },

    #[error(transparent)]
    Model(#[from] world_model::Error),
}
