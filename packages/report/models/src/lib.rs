#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions, clippy::cargo_common_metadata)]

//! Report, coordinate, and issue taxonomy types for Ulat PH.
//!
//! These types mirror the backend's JSON contract. Reports are treated
//! as immutable snapshots for the duration of one filter pass; updates
//! replace the value rather than mutating it in place.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use strum_macros::{AsRefStr, Display, EnumString};

/// A latitude/longitude pair in decimal degrees.
///
/// Values are passed through from the geolocation/geocoding services
/// uninterpreted; out-of-range degrees are not rejected here.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Coordinate {
    /// Latitude in degrees (nominally -90 to 90).
    pub latitude: f64,
    /// Longitude in degrees (nominally -180 to 180).
    pub longitude: f64,
}

impl Coordinate {
    /// Creates a coordinate from raw degrees.
    #[must_use]
    pub const fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
        }
    }
}

/// The kinds of civic issues a report can describe.
///
/// `Custom` issues carry their free-text label separately in
/// [`ReportSummary::custom_issue`].
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Serialize,
    Deserialize,
    Display,
    EnumString,
    AsRefStr,
)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE")]
pub enum IssueKind {
    /// Road surface damage (lubak)
    Pothole,
    /// Street lighting outage (sirang ilaw ng poste)
    BrokenStreetlight,
    /// User-described issue not covered by the fixed kinds
    Custom,
}

impl IssueKind {
    /// Returns the English display name shown in the report list.
    #[must_use]
    pub const fn display_name(self) -> &'static str {
        match self {
            Self::Pothole => "Pothole",
            Self::BrokenStreetlight => "Broken Streetlight",
            Self::Custom => "Custom Issue",
        }
    }

    /// Returns all variants of this enum.
    #[must_use]
    pub const fn all() -> &'static [Self] {
        &[Self::Pothole, Self::BrokenStreetlight, Self::Custom]
    }
}

/// A non-negative counter as serialized by the backend (`{"count": n}`).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Tally {
    /// Number of recorded clicks.
    pub count: u64,
}

impl Tally {
    /// Returns a tally with one more click recorded.
    #[must_use]
    pub const fn incremented(self) -> Self {
        Self {
            count: self.count + 1,
        }
    }
}

/// A community-submitted report as returned by the backend.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReportSummary {
    /// Unique report ID.
    pub id: i64,
    /// Issue kind from the fixed taxonomy.
    pub issue_kind: IssueKind,
    /// Free-text label, present when `issue_kind` is [`IssueKind::Custom`].
    pub custom_issue: Option<String>,
    /// Latitude in degrees.
    pub latitude: f64,
    /// Longitude in degrees.
    pub longitude: f64,
    /// How many users marked this issue as seen.
    pub sightings: Tally,
    /// How many users marked this issue as resolved.
    pub resolved: Tally,
    /// URL of the uploaded photo, if any.
    pub image_url: Option<String>,
    /// Short free-text description.
    pub description: Option<String>,
    /// When the report was submitted.
    pub reported_at: DateTime<Utc>,
}

impl ReportSummary {
    /// Returns the report's coordinate.
    #[must_use]
    pub const fn coordinate(&self) -> Coordinate {
        Coordinate::new(self.latitude, self.longitude)
    }

    /// Returns the label shown for this report: the custom text for
    /// custom issues, the canonical name otherwise.
    #[must_use]
    pub fn issue_label(&self) -> &str {
        if self.issue_kind == IssueKind::Custom {
            if let Some(label) = self.custom_issue.as_deref() {
                return label;
            }
        }
        self.issue_kind.display_name()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn report(kind: IssueKind, custom: Option<&str>) -> ReportSummary {
        ReportSummary {
            id: 1,
            issue_kind: kind,
            custom_issue: custom.map(str::to_string),
            latitude: 14.5995,
            longitude: 120.9842,
            sightings: Tally { count: 3 },
            resolved: Tally::default(),
            image_url: None,
            description: Some("test".to_string()),
            reported_at: Utc::now(),
        }
    }

    #[test]
    fn issue_label_prefers_custom_text() {
        let r = report(IssueKind::Custom, Some("Flooded underpass"));
        assert_eq!(r.issue_label(), "Flooded underpass");
    }

    #[test]
    fn issue_label_falls_back_for_fixed_kinds() {
        let r = report(IssueKind::Pothole, None);
        assert_eq!(r.issue_label(), "Pothole");

        let r = report(IssueKind::BrokenStreetlight, None);
        assert_eq!(r.issue_label(), "Broken Streetlight");
    }

    #[test]
    fn issue_label_handles_missing_custom_text() {
        let r = report(IssueKind::Custom, None);
        assert_eq!(r.issue_label(), "Custom Issue");
    }

    #[test]
    fn tally_increment() {
        let t = Tally { count: 0 };
        assert_eq!(t.incremented().count, 1);
        assert_eq!(t.incremented().incremented().count, 2);
    }

    #[test]
    fn issue_kind_serializes_screaming_snake() {
        let json = serde_json::to_string(&IssueKind::BrokenStreetlight).unwrap();
        assert_eq!(json, "\"BROKEN_STREETLIGHT\"");
    }

    #[test]
    fn report_round_trips_through_json() {
        let r = report(IssueKind::Pothole, None);
        let json = serde_json::to_string(&r).unwrap();
        let back: ReportSummary = serde_json::from_str(&json).unwrap();
        assert_eq!(back, r);
    }
}
