//! Helper function for computing the great-circle distance between two
//! locations with the haversine formula.

use crate::types::location::Location;

/// Mean Earth radius in kilometers.
///
/// Kept as a named constant so callers and tests can assert on it
/// directly; the persistence layer embeds the same value when the
/// distance predicate is pushed down into a native query.
pub const EARTH_RADIUS_KM: f64 = 6371.0;

/// Computes the great-circle distance between two locations in
/// kilometers.
///
/// ```text
/// a = sin²(Δlat/2) + cos(lat1)·cos(lat2)·sin²(Δlon/2)
/// d = 2 · R · asin(√a)
/// ```
///
/// Standard trigonometric formula only: no wraparound correction at
/// the antimeridian or the poles.
pub fn distance(from: &Location, to: &Location) -> f64 {
    let from_lat = from.latitude.into_inner().to_radians();
    let to_lat = to.latitude.into_inner().to_radians();
    let delta_lat = to_lat - from_lat;
    let delta_lon =
        (to.longitude.into_inner() - from.longitude.into_inner()).to_radians();

    let a = (delta_lat / 2.0).sin().powi(2)
        + from_lat.cos() * to_lat.cos() * (delta_lon / 2.0).sin().powi(2);

    // Floating-point rounding can push `a` a hair past 1.0 for
    // near-antipodal points, which would make sqrt/asin return NaN.
    2.0 * EARTH_RADIUS_KM * a.clamp(0.0, 1.0).sqrt().asin()
}

//------------------------------------------------------------------
// Unit Tests
//------------------------------------------------------------------
