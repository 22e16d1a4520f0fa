//! Report draft validation — the submission gate.
//!
//! The same profanity check runs on every keystroke (callers invoke
//! [`ProfanityDictionary::check`] on [`ReportDraft::combined_text`])
//! and once more here as the final gate before the draft is sent to
//! the backend.

use thiserror::Error;
use ulat_ph_moderation::ProfanityDictionary;
use ulat_ph_report_models::IssueKind;

/// An in-progress report, as held by the composition form.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ReportDraft {
    /// Selected issue kind, if the user has picked one.
    pub issue_kind: Option<IssueKind>,
    /// Free-text label for custom issues.
    pub custom_issue: String,
    /// Short description of the issue.
    pub description: String,
    /// Reference to an uploaded photo, if any.
    pub image_url: Option<String>,
}

/// Reasons a draft is rejected at submission.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum SubmissionError {
    /// No issue kind was selected.
    #[error("no issue type selected")]
    MissingIssueKind,

    /// A custom issue needs its free-text label.
    #[error("custom issue label is empty")]
    EmptyCustomIssue,

    /// The description is required.
    #[error("description is empty")]
    EmptyDescription,

    /// The combined label and description failed the profanity gate.
    #[error("text contains profanity")]
    ProfanityDetected,
}

impl ReportDraft {
    /// Returns the text the profanity gate sees: the issue label
    /// followed by the description.
    #[must_use]
    pub fn combined_text(&self) -> String {
        let label = match self.issue_kind {
            Some(IssueKind::Custom) => self.custom_issue.as_str(),
            Some(kind) => kind.display_name(),
            None => "",
        };
        format!("{label} {}", self.description)
    }

    /// Validates the draft for submission.
    ///
    /// # Errors
    ///
    /// Returns the first failure among: no issue kind selected, empty
    /// custom label on a custom issue, empty description, profanity in
    /// the combined text.
    pub fn validate(&self, dictionary: &ProfanityDictionary) -> Result<(), SubmissionError> {
        let Some(kind) = self.issue_kind else {
            return Err(SubmissionError::MissingIssueKind);
        };

        if kind == IssueKind::Custom && self.custom_issue.trim().is_empty() {
            return Err(SubmissionError::EmptyCustomIssue);
        }

        if self.description.trim().is_empty() {
            return Err(SubmissionError::EmptyDescription);
        }

        if dictionary.check(&self.combined_text()) {
            return Err(SubmissionError::ProfanityDetected);
        }

        Ok(())
    }
}
