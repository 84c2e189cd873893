//! The point store seam between the filter and the persistence layer.
//!
//! A store either hands the filter every candidate in bulk, or narrows
//! the scan itself when it can evaluate the bounding box natively. The
//! filter's contract is identical either way; only where the cheap
//! rectangle check executes differs. The exact haversine predicate is
//! always applied in-process on whatever the store returns.

use crate::types::bounds::BoundingBox;
use crate::types::record::Record;

/// Supplies candidate records for radius searches.
pub trait PointStore {
    /// Returns every stored record.
    fn fetch_all(&self) -> Vec<Record>;

    /// Returns the records whose location falls inside `bounds`.
    ///
    /// The default implementation scans `fetch_all`; a store backed by
    /// an indexed database would push the rectangle down into its
    /// query instead. Records without a location are omitted either
    /// way since they can never match a radius search.
    fn fetch_within_bounds(&self, bounds: &BoundingBox) -> Vec<Record> {
        self.fetch_all()
            .into_iter()
            .filter(|record| match record.location {
                Some(ref location) => bounds.contains(location),
                None => false,
            })
            .collect()
    }
}

/// An in-memory point store, used by tests and by the process-wide
/// store state.
#[derive(Debug, Default)]
pub struct MemoryStore {
    records: Vec<Record>,
}

impl MemoryStore {
    /// Creates a store over the given records.
    pub fn new(records: Vec<Record>) -> MemoryStore {
        MemoryStore { records }
    }

    /// Adds a record to the store.
    pub fn insert(&mut self, record: Record) {
        self.records.push(record);
    }

    /// Borrows the stored records. Callers that only need to scan can
    /// iterate this slice instead of paying for a `fetch_all` clone.
    pub fn records(&self) -> &[Record] {
        &self.records
    }

    /// Number of stored records.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

impl PointStore for MemoryStore {
    fn fetch_all(&self) -> Vec<Record> {
        self.records.clone()
    }

    // Overrides the default full-store clone: only the records inside
    // the box are cloned.
    fn fetch_within_bounds(&self, bounds: &BoundingBox) -> Vec<Record> {
        self.records
            .iter()
            .filter(|record| match record.location {
                Some(ref location) => bounds.contains(location),
                None => false,
            })
            .cloned()
            .collect()
    }
}

//------------------------------------------------------------------
// Unit Tests
//------------------------------------------------------------------
