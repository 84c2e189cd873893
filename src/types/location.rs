//! Struct definitions and implementations for [`Location`].
//!
//! A `Location` carries no identity; it is only a computation input or
//! an attribute of a record.

use ordered_float::OrderedFloat;
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// A [`Location`] represents the geographic position of an object as a
/// latitude/longitude pair in degrees.
///
/// Double-precision floats are used so that distance computations keep
/// sub-meter accuracy; [`OrderedFloat`] makes locations hashable and
/// totally ordered, which lets them serve as map keys.
#[derive(Debug, PartialEq, Hash, Eq, Copy, Clone, Serialize, Deserialize)]
pub struct Location {
    /// The latitude of the location, in degrees, within [-90, 90].
    pub latitude: OrderedFloat<f64>,

    /// The longitude of the location, in degrees, within [-180, 180].
    pub longitude: OrderedFloat<f64>,
}

impl Location {
    /// Creates a location from raw degree values.
    pub fn new(latitude: f64, longitude: f64) -> Location {
        Location {
            latitude: OrderedFloat(latitude),
            longitude: OrderedFloat(longitude),
        }
    }

    /// Checks that both coordinates are within their valid degree
    /// ranges.
    pub fn is_valid(&self) -> bool {
        (-90.0..=90.0).contains(&self.latitude.into_inner())
            && (-180.0..=180.0).contains(&self.longitude.into_inner())
    }

    /// Validates the location, returning [`Error::InvalidArgument`]
    /// naming the offending coordinate if it is out of range.
    pub fn validate(&self) -> Result<()> {
        let lat = self.latitude.into_inner();
        let lon = self.longitude.into_inner();
        if !(-90.0..=90.0).contains(&lat) {
            return Err(Error::invalid_argument(format!(
                "latitude {} out of range [-90, 90]",
                lat
            )));
        }
        if !(-180.0..=180.0).contains(&lon) {
            return Err(Error::invalid_argument(format!(
                "longitude {} out of range [-180, 180]",
                lon
            )));
        }
        Ok(())
    }
}

//------------------------------------------------------------------
// Unit Tests
//------------------------------------------------------------------

#[cfg(test)]
mod location_tests {
    use super::*;

    #[test]
    fn test_valid_ranges() {
        assert!(Location::new(40.7128, -74.0060).is_valid());
        assert!(Location::new(90.0, 180.0).is_valid());
        assert!(Location::new(-90.0, -180.0).is_valid());
        assert!(Location::new(0.0, 0.0).is_valid());
    }

    #[test]
    fn test_invalid_latitude() {
        let location = Location::new(95.0, 0.0);
        assert!(!location.is_valid());
        assert!(matches!(
            location.validate(),
            Err(Error::InvalidArgument(_))
        ));
    }

    #[test]
    fn test_invalid_longitude() {
        let location = Location::new(0.0, -180.5);
        assert!(!location.is_valid());
        assert!(matches!(
            location.validate(),
            Err(Error::InvalidArgument(_))
        ));
    }
}
