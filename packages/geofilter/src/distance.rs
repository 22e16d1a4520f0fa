//! Great-circle distance between two coordinates.

use ulat_ph_report_models::Coordinate;

/// Mean Earth radius in kilometers.
const EARTH_RADIUS_KM: f64 = 6371.0;

/// Returns the Haversine distance between `a` and `b` in kilometers.
///
/// Symmetric, zero for identical points, and non-negative and finite
/// for any coordinates in valid degree ranges. Degrees outside those
/// ranges are not rejected; they produce a mathematically valid but
/// meaningless result, matching the upstream geocoding contract.
#[must_use]
pub fn distance_km(a: Coordinate, b: Coordinate) -> f64 {
    let d_lat = (b.latitude - a.latitude).to_radians();
    let d_lon = (b.longitude - a.longitude).to_radians();

    let h = (d_lat / 2.0).sin().powi(2)
        + a.latitude.to_radians().cos() * b.latitude.to_radians().cos() * (d_lon / 2.0).sin().powi(2);

    2.0 * EARTH_RADIUS_KM * h.sqrt().atan2((1.0 - h).sqrt())
}
