//! Leet-speak character substitution.
//!
//! Maps digits and symbols to the visually similar letter so that
//! "b1tch" and "b!tch" normalize to the same form as "bitch".
//! Substitution is per-character and context-free — no lookahead, no
//! word-boundary awareness.

/// Substitutes a single character if it is a known leet form.
///
/// Returns the character unchanged otherwise.
#[must_use]
pub const fn substitute(c: char) -> char {
    match c {
        '0' => 'o',
        '1' => 'i',
        '2' => 'z',
        '3' => 'e',
        '4' => 'a',
        '5' => 's',
        '6' | '9' => 'g',
        '7' => 't',
        '8' => 'b',
        '@' => 'a',
        '$' | '§' => 's',
        '!' => 'i',
        '€' => 'e',
        '£' => 'l',
        '¥' => 'y',
        _ => c,
    }
}
