//! Error and warning types shared by every lifecycle controller.

use std::fmt;

use thiserror::Error;

use crate::transport::TransportError;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    /// Rejected before any remote command was issued.
    #[error("validation failed: {message}")]
    Validation { message: String },

    /// A remote command failed. The transport error is surfaced
    /// verbatim; `context` names the operation and, for composite
    /// operations, the part that failed.
    #[error("{context}: {source}")]
    Transport {
        context: String,
        #[source]
        source: TransportError,
    },

    #[error(transparent)]
    State(#[from] serde_json::Error),
}

impl Error {
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation {
            message: message.into(),
        }
    }

    pub fn transport(context: impl Into<String>, source: TransportError) -> Self {
        Self::Transport {
            context: context.into(),
            source,
        }
    }
}

impl From<world_ident::Error> for Error {
    fn from(err: world_ident::Error) -> Self {
        Self::validation(err.to_string())
    }
}

impl From<world_model::Error> for Error {
    fn from(err: world_model::Error) -> Self {
        Self::validation(err.to_string())
    }
}

/// A non-fatal outcome. Compensation and removal failures are demoted
/// to warnings so the object can still be considered gone.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Warning {
    pub context: String,
    pub message: String,
}

impl Warning {
    pub fn new(context: impl Into<String>, message: impl fmt::Display) -> Self {
        Self {
            context: context.into(),
            message: message.to_string(),
        }
    }
}

impl fmt::Display for Warning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.context, self.message)
    }
}
