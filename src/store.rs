use crate::error::Result;
use crate::model::{Alumni, Event, MentorshipRequest, WallOfFameEntry};

/// Supplier of record sequences, one call per entity type.
///
/// The embedded fixture implements this; a real backend could satisfy the
/// same contract without touching the filter or view logic.
pub trait DataSource {
    fn load_alumni(&self) -> Result<Vec<Alumni>>;
    fn load_events(&self) -> Result<Vec<Event>>;
    fn load_wall_of_fame(&self) -> Result<Vec<WallOfFameEntry>>;
    fn load_mentorship_requests(&self) -> Result<Vec<MentorshipRequest>>;
}

/// An ordered, read-only sequence of records for one entity type, fixed at
/// load time. Views never re-sort it; the load order is the display order.
#[derive(Debug, Clone)]
pub struct RecordStore<T> {
    records: Vec<T>,
}

impl<T> RecordStore<T> {
    pub fn new(records: Vec<T>) -> Self {
        Self { records }
    }

    pub fn records(&self) -> &[T] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.records.iter()
    }
}

impl RecordStore<Alumni> {
    /// Resolve an alumni id to its record. Dangling references are expected
    /// and yield `None`.
    pub fn resolve(&self, id: &str) -> Option<&Alumni> {
        self.records.iter().find(|a| a.id == id)
    }
}
