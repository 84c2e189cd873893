//! The core of the spatial radius filter.
//!
//! Given a center location and a radius in kilometers, the filter keeps
//! the candidates whose great-circle distance to the center is within
//! the radius. Candidates are consumed in a single pass so a store may
//! stream them lazily, and the input ordering is preserved in the
//! result. The filter never sorts by distance and never deduplicates.

use crate::error::{Error, Result};
use crate::types::bounds::BoundingBox;
use crate::types::location::Location;
use crate::types::record::AsRecord;
use crate::utils::haversine;

/// Returns the candidates within `radius_km` of `center`, preserving
/// input order.
///
/// The exact haversine distance is the inclusion predicate; a bounding
/// box derived from the radius rejects obviously-distant candidates
/// before the trigonometry, which cannot change the included set
/// because the box encloses the whole radius disk.
///
/// Candidates without a location are skipped. Candidates whose stored
/// location is out of range are skipped with a warning; malformed data
/// must not abort the whole query.
///
/// # Arguments
/// * `center` - The center of the search disk.
/// * `radius_km` - The search radius in kilometers, >= 0.
/// * `candidates` - Any single-pass sequence of record-like items.
///
/// # Errors
/// [`Error::InvalidArgument`] if the center coordinates are out of
/// range or the radius is negative (or NaN).
///
/// # Time Complexity
/// *O*(*n*) over the candidate count.
pub fn find_within_radius<'a, R, I>(
    center: &Location,
    radius_km: f64,
    candidates: I,
) -> Result<Vec<&'a R>>
where
    R: AsRecord + 'a,
    I: IntoIterator<Item = &'a R>,
{
    center.validate()?;
    if !(radius_km >= 0.0) {
        return Err(Error::invalid_argument(format!(
            "radius {} must be a non-negative number of kilometers",
            radius_km
        )));
    }

    let bounds = BoundingBox::from_center_radius(center, radius_km);
    debug!("radius search: center {:?}, radius {} km", center, radius_km);

    let mut matches = Vec::new();
    for candidate in candidates {
        let record = candidate.as_record();
        let location = match record.location {
            Some(ref location) => location,
            None => {
                debug!("skipping record {}: no location", record.uid);
                continue;
            }
        };
        if !location.is_valid() {
            warn!(
                "skipping record {}: stored location {:?} out of range",
                record.uid, location
            );
            continue;
        }
        if !bounds.contains(location) {
            continue;
        }
        if haversine::distance(center, location) <= radius_km {
            matches.push(candidate);
        }
    }
    debug!("radius search matched {} records", matches.len());
    Ok(matches)
}

//------------------------------------------------------------------
// Unit Tests
//------------------------------------------------------------------
