//! Domain layer: the room tree and the values it is built from
//!
//! This layer is independent of external concerns (no I/O, no CLI, no config loading).

pub mod builder;
pub mod entities;
pub mod error;
pub mod tree;

pub use builder::MansionBuilder;
pub use entities::{Command, Language};
pub use error::{DomainError, DomainResult, Side};
pub use tree::{Room, RoomId, RoomTree};
