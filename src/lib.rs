//! Detective Quest: explore a mansion laid out as a binary tree of rooms.
//!
//! The [`domain`] layer owns the room tree, the [`application`] layer runs
//! exploration sessions over it, and [`cli`] wires both to the terminal.

pub mod application;
pub mod cli;
pub mod config;
pub mod domain;
pub mod exitcode;
pub mod tree_traits;
pub mod util;

pub use application::{explore, ExplorationReport, ExploreOptions, Termination, VisitLog};
pub use domain::{DomainError, Language, MansionBuilder, RoomId, RoomTree, Side};
