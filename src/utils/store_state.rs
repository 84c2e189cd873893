//! Stores the process-wide point store state.
//!
//! The surrounding service initializes the store once at startup from
//! its persistence layer, then serves radius queries from it. The
//! filter itself stays a pure function; this module only wires it to
//! the shared record set.

use once_cell::sync::OnceCell;
use ordered_float::OrderedFloat;

use crate::error::{Error, Result};
use crate::filter;
use crate::store::{MemoryStore, PointStore};
use crate::types::bounds::BoundingBox;
use crate::types::location::Location;
use crate::types::record::Record;

/// Query struct for finding records near a location.
#[derive(Debug, Copy, Clone)]
pub struct RadiusQuery {
    ///location
    pub location: Location,
    ///radius in kilometers
    pub radius_km: f64,
    ///max number of records to return
    pub capacity: i32,
}

/// Process-wide record store for radius queries
pub static STORE: OnceCell<MemoryStore> = OnceCell::new();

/// SF central location
pub static SAN_FRANCISCO: Location = Location {
    latitude: OrderedFloat(37.7749),
    longitude: OrderedFloat(-122.4194),
};

/// Checks if the store has been initialized.
pub fn is_store_initialized() -> bool {
    STORE.get().is_some()
}

/// Initializes the store with records from the persistence layer.
/// Can only succeed once per process.
pub fn init_store_from_records(records: Vec<Record>) -> Result<()> {
    info!("initializing point store with {} records", records.len());
    STORE
        .set(MemoryStore::new(records))
        .map_err(|_| Error::StoreAlreadyInitialized)
}

/// Gets a record by its uid.
pub fn get_record_by_id(uid: &str) -> Result<Record> {
    debug!("uid: {}", uid);
    let store = STORE.get().ok_or(Error::StoreNotInitialized)?;
    store
        .records()
        .iter()
        .find(|record| record.uid == uid)
        .cloned()
        .ok_or_else(|| Error::not_found(format!("record {}", uid)))
}

/// Returns up to `query.capacity` stored records within the requested
/// radius of the query location, in store order.
///
/// The bounding-box fetch narrows the candidate scan; the exact
/// haversine predicate runs in [`filter::find_within_radius`].
pub fn get_records_within_radius(query: &RadiusQuery) -> Result<Vec<Record>> {
    info!("finding records near {:?}", query);
    let store = STORE.get().ok_or(Error::StoreNotInitialized)?;

    let bounds = BoundingBox::from_center_radius(&query.location, query.radius_km);
    let candidates = store.fetch_within_bounds(&bounds);
    debug!("{} candidates inside bounding box", candidates.len());

    let mut matches: Vec<Record> =
        filter::find_within_radius(&query.location, query.radius_km, &candidates)?
            .into_iter()
            .cloned()
            .collect();
    if query.capacity >= 0 {
        matches.truncate(query.capacity as usize);
    }
    Ok(matches)
}

//------------------------------------------------------------------
// Unit Tests
//------------------------------------------------------------------

#[cfg(test)]
mod store_state_tests {
    use super::*;

    // The store is a write-once process global, so the whole lifecycle
    // lives in one test to keep parallel test threads from racing the
    // initialization.
    #[test]
    fn test_store_lifecycle() {
        assert!(!is_store_initialized());
        assert!(matches!(
            get_record_by_id("oakland"),
            Err(Error::StoreNotInitialized)
        ));

        init_store_from_records(vec![
            Record::new("oakland", Location::new(37.8044, -122.2712)),
            Record::new("san_jose", Location::new(37.3382, -121.8863)),
            Record::new("new_york", Location::new(40.7128, -74.0060)),
            Record::without_location("ungeocoded"),
        ])
        .unwrap();
        assert!(is_store_initialized());
        assert!(matches!(
            init_store_from_records(vec![]),
            Err(Error::StoreAlreadyInitialized)
        ));

        let record = get_record_by_id("oakland").unwrap();
        assert_eq!(record.uid, "oakland");
        assert!(matches!(
            get_record_by_id("missing"),
            Err(Error::NotFound(_))
        ));

        // Oakland and San Jose are within 75 km of SF; New York is not.
        let query = RadiusQuery {
            location: SAN_FRANCISCO,
            radius_km: 75.0,
            capacity: 10,
        };
        let matches = get_records_within_radius(&query).unwrap();
        let uids: Vec<&str> = matches.iter().map(|r| r.uid.as_str()).collect();
        assert_eq!(uids, vec!["oakland", "san_jose"]);

        // Capacity caps the result in store order.
        let capped = get_records_within_radius(&RadiusQuery {
            capacity: 1,
            ..query
        })
        .unwrap();
        assert_eq!(capped.len(), 1);
        assert_eq!(capped[0].uid, "oakland");

        // Invalid query coordinates surface as InvalidArgument.
        let bad = RadiusQuery {
            location: Location::new(95.0, 0.0),
            radius_km: 10.0,
            capacity: 10,
        };
        assert!(matches!(
            get_records_within_radius(&bad),
            Err(Error::InvalidArgument(_))
        ));
    }
}
