#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions, clippy::cargo_common_metadata)]

//! Text normalization and profanity gating for report submissions.
//!
//! The same normalization pipeline is applied to dictionary entries at
//! build time and to user text at check time, so that "b1tch" and
//! "bitch" produce the same normalized form and match the same entry.
//!
//! The gate is Latin-script-oriented: characters outside the basic and
//! extended Latin ranges are stripped during normalization, so text in
//! other scripts passes vacuously. This is a submission filter for a
//! Filipino/English audience, not a general multilingual moderator.

pub mod dictionary;
pub mod leet;
pub mod normalize;
pub mod wordlist;

pub use dictionary::ProfanityDictionary;
pub use normalize::normalize;
