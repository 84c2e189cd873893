//! Helper functions for generating records scattered around a
//! location, used by demos and tests that need a populated store.

use rand::Rng;
use uuid::Uuid;

use crate::error::Result;
use crate::types::location::Location;
use crate::types::record::Record;
use crate::utils::haversine::EARTH_RADIUS_KM;

/// Generates `capacity` records uniformly scattered over the disk of
/// `radius_km` around `center`.
///
/// Each record gets a random v4 UUID as its uid. The offsets use a
/// small-angle approximation that is accurate for the radii a radius
/// search realistically uses; latitudes are clamped to the valid range
/// rather than wrapped over the poles.
///
/// # Errors
/// [`Error`](crate::error::Error)`::InvalidArgument` if the center is
/// out of range.
pub fn generate_records_near(
    center: &Location,
    radius_km: f64,
    capacity: i32,
) -> Result<Vec<Record>> {
    center.validate()?;
    let mut rng = rand::thread_rng();
    let mut records = Vec::with_capacity(capacity.max(0) as usize);

    let center_lat = center.latitude.into_inner();
    let center_lon = center.longitude.into_inner();
    let cos_lat = center_lat.to_radians().cos().max(f64::EPSILON);

    for _ in 0..capacity {
        // sqrt keeps the points uniform over the disk area instead of
        // clustering at the center.
        let distance_km = radius_km * rng.gen::<f64>().sqrt();
        let bearing = rng.gen::<f64>() * std::f64::consts::TAU;

        let lat_offset = (distance_km / EARTH_RADIUS_KM).to_degrees() * bearing.cos();
        let lon_offset =
            (distance_km / (EARTH_RADIUS_KM * cos_lat)).to_degrees() * bearing.sin();

        let latitude = (center_lat + lat_offset).clamp(-90.0, 90.0);
        let longitude = (center_lon + lon_offset).clamp(-180.0, 180.0);

        records.push(Record::new(
            Uuid::new_v4().to_string(),
            Location::new(latitude, longitude),
        ));
    }
    debug!(
        "generated {} records within ~{} km of {:?}",
        records.len(),
        radius_km,
        center
    );
    Ok(records)
}

//------------------------------------------------------------------
// Unit Tests
//------------------------------------------------------------------
