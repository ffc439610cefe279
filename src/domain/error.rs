//! Domain-level errors (no external dependencies)

use thiserror::Error;

use crate::domain::RoomId;

/// Domain errors represent violations while building the room tree.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    #[error("allocation failed while copying a room name of {len} bytes")]
    Allocation { len: usize },

    #[error("unknown room: {0:?}")]
    UnknownRoom(RoomId),

    #[error("{side} path of '{parent}' is already taken by '{existing}'")]
    SlotOccupied {
        parent: String,
        side: Side,
        existing: String,
    },

    #[error("room '{child}' already belongs to '{parent}'")]
    AlreadyAttached { child: String, parent: String },

    #[error("root room '{0}' cannot be attached below another room")]
    RootAttached(String),

    #[error("cycle detected: '{child}' is an ancestor of '{parent}'")]
    CycleDetected { parent: String, child: String },
}

/// Which child slot of a room an operation refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Side {
    Left,
    Right,
}

impl std::fmt::Display for Side {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Side::Left => write!(f, "left"),
            Side::Right => write!(f, "right"),
        }
    }
}

/// Result type for domain operations.
pub type DomainResult<T> = Result<T, DomainError>;
