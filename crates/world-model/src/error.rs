//! Error types for world-model

/// Result type for world-model operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur when parsing enumerated attribute values
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("unknown direction {value:?}, expected one of north, south, east, west")]
    UnknownDirection { value: String },

    #[error("unknown game mode {value:?}, expected one of survival, creative, adventure, spectator")]
    UnknownGameMode { value: String },

    #[error("unknown membership kind {value:?}, expected one of player, selector, entity")]
    UnknownMemberKind { value: String },

    #[error("unknown wool color {value:?}")]
    UnknownWoolColor { value: String },

    #[error("unknown chest size {value:?}, expected single or double")]
    UnknownChestSize { value: String },
}
