#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions, clippy::cargo_common_metadata)]

//! Pure client-session logic for Ulat PH.
//!
//! Everything here is expressed as explicit parameters and return
//! values — there is no ambient storage. Callers hold the session
//! state (user profile, reaction history, current feed) and replace it
//! with the values these functions return. That keeps every operation
//! deterministic and testable without a browser or a backend.

pub mod feed;
pub mod profile;
pub mod reactions;
pub mod submission;

pub use feed::{FeedView, order_by_sightings};
pub use profile::{RegistrationError, UserProfile, register};
pub use reactions::{ReactionKind, ReactionOutcome, UserReactions, record_reaction};
pub use submission::{ReportDraft, SubmissionError};
