#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions, clippy::cargo_common_metadata)]

//! Decides which reports are near a reference point and whether a
//! place name lies inside the fixed service region.
//!
//! All functions here are pure. Absent or malformed input degrades to
//! an empty result or `false`; nothing in this crate returns an error.

pub mod distance;
pub mod region;

use ulat_ph_report_models::{Coordinate, ReportSummary};

pub use distance::distance_km;
pub use region::is_within_service_region;

/// Radius used by the report feed when the caller does not override it.
pub const DEFAULT_RADIUS_KM: f64 = 1.0;

/// Keeps every candidate within `radius_km` of `reference`, inclusive:
/// a report at exactly `radius_km` is kept.
///
/// The filter is stable — candidates come out in the order they went
/// in, so a list pre-sorted by sighting count stays sorted. A missing
/// reference yields an empty result (fail closed), not an error.
#[must_use]
pub fn filter_nearby(
    reference: Option<Coordinate>,
    candidates: &[ReportSummary],
    radius_km: f64,
) -> Vec<ReportSummary> {
    let Some(reference) = reference else {
        log::debug!("no reference coordinate; returning empty report set");
        return Vec::new();
    };

    candidates
        .iter()
        .filter(|report| distance_km(reference, report.coordinate()) <= radius_km)
        .cloned()
        .collect()
}
