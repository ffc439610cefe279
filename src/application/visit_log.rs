use tracing::instrument;

use crate::application::{ApplicationError, ApplicationResult};
use crate::domain::RoomId;

/// Default number of rooms one session may record.
pub const DEFAULT_CAPACITY: usize = 100;

/// One entry of the visit log.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Visit {
    pub room: RoomId,
    pub name: String,
}

/// Ordered, append-only record of the rooms entered in one session.
///
/// Appending past `capacity` fails with [`ApplicationError::VisitLogFull`]
/// and leaves the log untouched.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VisitLog {
    visits: Vec<Visit>,
    capacity: usize,
}

impl Default for VisitLog {
    fn default() -> Self {
        Self::with_capacity(DEFAULT_CAPACITY)
    }
}

impl VisitLog {
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            visits: Vec::new(),
            capacity,
        }
    }

    #[instrument(level = "trace", skip(self))]
    pub fn record(&mut self, room: RoomId, name: &str) -> ApplicationResult<()> {
        if self.is_full() {
            return Err(ApplicationError::VisitLogFull {
                capacity: self.capacity,
            });
        }
        self.visits.push(Visit {
            room,
            name: name.to_string(),
        });
        Ok(())
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn len(&self) -> usize {
        self.visits.len()
    }

    pub fn is_empty(&self) -> bool {
        self.visits.is_empty()
    }

    pub fn is_full(&self) -> bool {
        self.visits.len() >= self.capacity
    }

    pub fn visits(&self) -> &[Visit] {
        &self.visits
    }

    pub fn rooms(&self) -> Vec<RoomId> {
        self.visits.iter().map(|v| v.room).collect()
    }

    pub fn names(&self) -> Vec<&str> {
        self.visits.iter().map(|v| v.name.as_str()).collect()
    }

    /// Entries paired with their 1-based position.
    pub fn numbered(&self) -> impl Iterator<Item = (usize, &str)> {
        self.visits
            .iter()
            .enumerate()
            .map(|(i, v)| (i + 1, v.name.as_str()))
    }
}
