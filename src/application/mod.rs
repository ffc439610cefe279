//! Application layer: exploration sessions over a room tree

pub mod error;
pub mod error_ext;
pub mod explore;
pub mod narration;
pub mod visit_log;

pub use error::{ApplicationError, ApplicationResult};
pub use error_ext::IoResultExt;
pub use explore::{explore, ExplorationReport, ExploreOptions, ExploreState, Explorer, Termination};
pub use narration::Narrator;
pub use visit_log::{Visit, VisitLog, DEFAULT_CAPACITY};
