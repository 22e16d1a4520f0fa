//! Canonical text normalization for the profanity gate.
//!
//! Applied identically to dictionary entries at build time and to user
//! text at check time, so obfuscated spellings land on the same
//! normalized form as the entry they imitate.

use std::sync::LazyLock;

use regex::Regex;

use crate::leet;

/// Matches every character that is neither a letter (ASCII lowercase
/// plus the extended Latin accented ranges) nor whitespace. Each match
/// is replaced with a single space.
static STRIP_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"[^a-z\x{00C0}-\x{024F}\x{1E00}-\x{1EFF}\s]").expect("valid regex")
});

/// Normalizes user text for dictionary matching.
///
/// The pipeline, in order:
/// 1. Lowercase
/// 2. Leet substitution per character (`0`→`o`, `1`→`i`, `$`→`s`, …)
/// 3. Strip non-letter, non-whitespace characters to a single space
/// 4. Collapse runs of 3+ identical characters down to 2
/// 5. Trim
///
/// Run collapsing leaves doubled characters alone so legitimate words
/// like "hello" survive, and applies to spaces as well as letters.
#[must_use]
pub fn normalize(input: &str) -> String {
    let lowered = input.to_lowercase();
    let substituted: String = lowered.chars().map(leet::substitute).collect();
    let stripped = STRIP_RE.replace_all(&substituted, " ");
    collapse_runs(&stripped).trim().to_string()
}

/// Collapses any run of 3 or more identical consecutive characters
/// down to 2.
fn collapse_runs(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    let mut prev = None;
    let mut run = 0_usize;

    for c in input.chars() {
        if prev == Some(c) {
            run += 1;
        } else {
            prev = Some(c);
            run = 1;
        }
        if run <= 2 {
            out.push(c);
        }
    }

    out
}
