//! Definition of the [`BoundingBox`] type.
//!
//! A bounding box is a cheap rectangular pre-filter derived from a
//! center point and a radius. It always encloses the full radius disk,
//! so rejecting a candidate outside the box can never drop a record
//! the exact haversine predicate would have included.

use serde::{Deserialize, Serialize};

use super::location::Location;
use crate::utils::haversine::EARTH_RADIUS_KM;

/// Degrees of slack added to every box edge. A candidate sitting at
/// exactly `radius_km` can land 1 ulp outside an unpadded edge while
/// the haversine predicate would still include it; the padding keeps
/// the superset guarantee robust to that rounding. Roughly 0.1 mm on
/// the ground.
const EDGE_PADDING_DEG: f64 = 1e-9;

/// A latitude/longitude rectangle, in degrees.
#[derive(Debug, Copy, Clone, PartialEq, Serialize, Deserialize)]
pub struct BoundingBox {
    pub min_latitude: f64,
    pub max_latitude: f64,
    pub min_longitude: f64,
    pub max_longitude: f64,
}

impl BoundingBox {
    /// Derives the box enclosing the disk of `radius_km` around
    /// `center`.
    ///
    /// The latitude band is clamped at the poles. The longitude band is
    /// widened by the cosine of the most extreme latitude in the band;
    /// when the band touches a pole, or the widened span covers the
    /// whole globe, the box degenerates to the full [-180, 180]
    /// longitude range. No antimeridian wraparound is attempted, so a
    /// box near the dateline also degenerates to the full range rather
    /// than splitting in two.
    pub fn from_center_radius(center: &Location, radius_km: f64) -> BoundingBox {
        let center_lat = center.latitude.into_inner();
        let center_lon = center.longitude.into_inner();

        let lat_delta = (radius_km / EARTH_RADIUS_KM).to_degrees() + EDGE_PADDING_DEG;
        let min_latitude = (center_lat - lat_delta).max(-90.0);
        let max_latitude = (center_lat + lat_delta).min(90.0);

        // Widest parallel inside the band has the smallest cosine.
        let extreme_lat = if min_latitude.abs() > max_latitude.abs() {
            min_latitude
        } else {
            max_latitude
        };
        let cos_lat = extreme_lat.to_radians().cos();

        let touches_pole = min_latitude <= -90.0 || max_latitude >= 90.0;
        let lon_delta = if cos_lat > f64::EPSILON {
            (radius_km / (EARTH_RADIUS_KM * cos_lat)).to_degrees() + EDGE_PADDING_DEG
        } else {
            180.0
        };

        if touches_pole || lon_delta >= 180.0 || (center_lon - lon_delta) < -180.0
            || (center_lon + lon_delta) > 180.0
        {
            BoundingBox {
                min_latitude,
                max_latitude,
                min_longitude: -180.0,
                max_longitude: 180.0,
            }
        } else {
            BoundingBox {
                min_latitude,
                max_latitude,
                min_longitude: center_lon - lon_delta,
                max_longitude: center_lon + lon_delta,
            }
        }
    }

    /// Checks whether a location falls inside the box.
    pub fn contains(&self, location: &Location) -> bool {
        let lat = location.latitude.into_inner();
        let lon = location.longitude.into_inner();
        lat >= self.min_latitude
            && lat <= self.max_latitude
            && lon >= self.min_longitude
            && lon <= self.max_longitude
    }
}

//------------------------------------------------------------------
// Unit Tests
//------------------------------------------------------------------
