use crate::components::wrappers::{Latitude, Longitude, Miles};

/// Nautical miles per degree of arc, converted to statute miles.
const STATUTE_MILES_PER_DEGREE: f64 = 60.0 * 1.1515;

/// Great-circle distance between two points by the spherical law of cosines, truncated toward
/// zero to whole statute miles.
#[must_use]
#[inline]
pub fn great_circle_miles(
    from: (Latitude, Longitude),
    to: (Latitude, Longitude),
) -> Miles {
    let (Latitude(lat1), Longitude(lon1)) = from;
    let (Latitude(lat2), Longitude(lon2)) = to;
    let phi1 = lat1.to_radians();
    let phi2 = lat2.to_radians();
    let theta = (lon1 - lon2).to_radians();

    // Rounding can push the cosine just past 1.0 for coincident points.
    let cosine = (phi1.sin() * phi2.sin() + phi1.cos() * phi2.cos() * theta.cos()).clamp(-1.0, 1.0);
    let miles = cosine.acos().to_degrees() * STATUTE_MILES_PER_DEGREE;

    Miles(truncate_miles(miles))
}

#[allow(clippy::cast_possible_truncation)]
#[allow(clippy::cast_sign_loss)]
#[allow(clippy::as_conversions)]
fn truncate_miles(miles: f64) -> u32 {
    // Half the earth's circumference is about 12,436 miles so this always fits in a u32.
    miles.abs().trunc() as u32
}
