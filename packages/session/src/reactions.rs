//! Seen/resolved reaction bookkeeping.
//!
//! Each user may react to a report once per kind. The reaction history
//! is threaded explicitly by the caller; recording a reaction returns
//! replacement snapshots instead of mutating shared state.

use std::collections::BTreeSet;

use ulat_ph_report_models::ReportSummary;

/// The two ways a user can react to a report.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum ReactionKind {
    /// "I saw this issue too."
    Sighting,
    /// "This issue has been fixed."
    Resolved,
}

/// Which (report, kind) pairs this user has already clicked.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UserReactions {
    clicked: BTreeSet<(i64, ReactionKind)>,
}

impl UserReactions {
    /// Creates an empty reaction history.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns `true` if this user already reacted to the report with
    /// the given kind.
    #[must_use]
    pub fn has_reacted(&self, report_id: i64, kind: ReactionKind) -> bool {
        self.clicked.contains(&(report_id, kind))
    }
}

/// Result of [`record_reaction`]: the (possibly updated) report and
/// history, plus whether the reaction was applied.
#[derive(Debug, Clone, PartialEq)]
pub struct ReactionOutcome {
    /// The report snapshot after the reaction.
    pub report: ReportSummary,
    /// The reaction history after the reaction.
    pub reactions: UserReactions,
    /// `false` if the user had already reacted and nothing changed.
    pub applied: bool,
}

/// Records a reaction, incrementing the matching tally on first click.
///
/// A repeat click of the same kind on the same report is a no-op: the
/// inputs come back unchanged with `applied` set to `false`.
#[must_use]
pub fn record_reaction(
    report: ReportSummary,
    reactions: UserReactions,
    kind: ReactionKind,
) -> ReactionOutcome {
    if reactions.has_reacted(report.id, kind) {
        return ReactionOutcome {
            report,
            reactions,
            applied: false,
        };
    }

    let mut report = report;
    match kind {
        ReactionKind::Sighting => report.sightings = report.sightings.incremented(),
        ReactionKind::Resolved => report.resolved = report.resolved.incremented(),
    }

    let mut reactions = reactions;
    reactions.clicked.insert((report.id, kind));

    ReactionOutcome {
        report,
        reactions,
        applied: true,
    }
}

#[cfg(test)]
mod tests {
    use chrono::Utc;
    use ulat_ph_report_models::{IssueKind, Tally};

    use super::*;

    fn report(id: i64) -> ReportSummary {
        ReportSummary {
            id,
            issue_kind: IssueKind::BrokenStreetlight,
            custom_issue: None,
            latitude: 14.5995,
            longitude: 120.9842,
            sightings: Tally { count: 2 },
            resolved: Tally::default(),
            image_url: None,
            description: None,
            reported_at: Utc::now(),
        }
    }

    #[test]
    fn first_sighting_increments_and_records() {
        let outcome = record_reaction(report(7), UserReactions::new(), ReactionKind::Sighting);
        assert!(outcome.applied);
        assert_eq!(outcome.report.sightings.count, 3);
        assert_eq!(outcome.report.resolved.count, 0);
        assert!(outcome.reactions.has_reacted(7, ReactionKind::Sighting));
    }

    #[test]
    fn repeat_reaction_is_a_no_op() {
        let first = record_reaction(report(7), UserReactions::new(), ReactionKind::Sighting);
        let second = record_reaction(first.report.clone(), first.reactions.clone(), ReactionKind::Sighting);

        assert!(!second.applied);
        assert_eq!(second.report, first.report);
        assert_eq!(second.reactions, first.reactions);
    }

    #[test]
    fn kinds_are_tracked_independently() {
        let first = record_reaction(report(7), UserReactions::new(), ReactionKind::Sighting);
        let second = record_reaction(first.report, first.reactions, ReactionKind::Resolved);

        assert!(second.applied);
        assert_eq!(second.report.sightings.count, 3);
        assert_eq!(second.report.resolved.count, 1);
    }

    #[test]
    fn reports_are_tracked_independently() {
        let first = record_reaction(report(7), UserReactions::new(), ReactionKind::Sighting);
        let second = record_reaction(report(8), first.reactions, ReactionKind::Sighting);

        assert!(second.applied);
        assert_eq!(second.report.sightings.count, 3);
    }
}
