//! Report feed assembly.
//!
//! After every successful fetch the full report list is sorted by
//! sighting count and filtered down to the reports near the user's
//! location. The first nearby report becomes the selected one shown
//! on the map.

use serde::{Deserialize, Serialize};
use ulat_ph_geofilter::filter_nearby;
use ulat_ph_report_models::{Coordinate, ReportSummary};

/// Sorts reports by descending sighting count.
///
/// The sort is stable: reports with equal counts keep their fetch
/// order. Filtering later preserves this order, so the feed stays
/// sorted end to end.
#[must_use]
pub fn order_by_sightings(mut reports: Vec<ReportSummary>) -> Vec<ReportSummary> {
    reports.sort_by(|a, b| b.sightings.count.cmp(&a.sightings.count));
    reports
}

/// The reports shown for one location, plus the initially selected one.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FeedView {
    /// Nearby reports, ordered by descending sighting count.
    pub reports: Vec<ReportSummary>,
    /// ID of the report selected by default (the top one), if any.
    pub selected: Option<i64>,
}

impl FeedView {
    /// Assembles the feed for a reference location.
    ///
    /// Sorts the full list by sightings, keeps the reports within
    /// `radius_km`, and selects the first survivor. With no reference
    /// location the feed is empty and nothing is selected.
    #[must_use]
    pub fn assemble(
        all_reports: Vec<ReportSummary>,
        reference: Option<Coordinate>,
        radius_km: f64,
    ) -> Self {
        let ordered = order_by_sightings(all_reports);
        let reports = filter_nearby(reference, &ordered, radius_km);
        let selected = reports.first().map(|report| report.id);

        Self { reports, selected }
    }
}

#[cfg(test)]
mod tests {
    use chrono::Utc;
    use ulat_ph_geofilter::DEFAULT_RADIUS_KM;
    use ulat_ph_report_models::{IssueKind, Tally};

    use super::*;

    fn report_at(id: i64, latitude: f64, longitude: f64, sightings: u64) -> ReportSummary {
        ReportSummary {
            id,
            issue_kind: IssueKind::Pothole,
            custom_issue: None,
            latitude,
            longitude,
            sightings: Tally { count: sightings },
            resolved: Tally::default(),
            image_url: None,
            description: None,
            reported_at: Utc::now(),
        }
    }

    #[test]
    fn orders_by_sightings_descending() {
        let reports = vec![
            report_at(1, 14.5995, 120.9842, 2),
            report_at(2, 14.5995, 120.9842, 7),
            report_at(3, 14.5995, 120.9842, 4),
        ];

        let ordered = order_by_sightings(reports);
        let ids: Vec<i64> = ordered.iter().map(|r| r.id).collect();
        assert_eq!(ids, vec![2, 3, 1]);
    }

    #[test]
    fn equal_counts_keep_fetch_order() {
        let reports = vec![
            report_at(1, 14.5995, 120.9842, 3),
            report_at(2, 14.5995, 120.9842, 3),
            report_at(3, 14.5995, 120.9842, 3),
        ];

        let ordered = order_by_sightings(reports);
        let ids: Vec<i64> = ordered.iter().map(|r| r.id).collect();
        assert_eq!(ids, vec![1, 2, 3]);
    }

    #[test]
    fn assembles_sorted_nearby_feed_with_selection() {
        let reference = Coordinate::new(14.5995, 120.9842);
        let reports = vec![
            report_at(1, 14.5996, 120.9842, 1),
            // Quezon City, outside the 1 km radius
            report_at(2, 14.6091, 121.0223, 50),
            report_at(3, 14.5994, 120.9843, 8),
        ];

        let feed = FeedView::assemble(reports, Some(reference), DEFAULT_RADIUS_KM);
        let ids: Vec<i64> = feed.reports.iter().map(|r| r.id).collect();
        assert_eq!(ids, vec![3, 1]);
        assert_eq!(feed.selected, Some(3));
    }

    #[test]
    fn empty_feed_selects_nothing() {
        let feed = FeedView::assemble(
            vec![report_at(1, 14.5995, 120.9842, 1)],
            None,
            DEFAULT_RADIUS_KM,
        );
        assert!(feed.reports.is_empty());
        assert_eq!(feed.selected, None);
    }
}
