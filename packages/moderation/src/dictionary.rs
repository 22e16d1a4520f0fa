//! Profanity dictionary construction and matching.
//!
//! The dictionary is built once at startup and is immutable afterward;
//! a rebuild is equivalent to a restart. Construction order matters:
//! base list, then supplementary list, then allowlist removal — the
//! allowlist is applied last so an entry from the second denylist
//! cannot re-block a permitted term.
//!
//! Matching is whole-word against the normalized token stream.
//! Single-word entries match individual tokens; multi-word entries
//! match consecutive token windows. "class" therefore never matches
//! the "ass" entry — the trade-off is that embedded spellings like
//! "assassin" are not caught either.

use std::collections::HashSet;

use crate::normalize::normalize;
use crate::wordlist;

/// An immutable denylist built from the base and supplementary word
/// tables minus the allowlist.
///
/// `check` and `clean` are methods on the built value, so the
/// dictionary cannot be consulted before it is constructed.
#[derive(Debug, Clone)]
pub struct ProfanityDictionary {
    words: HashSet<String>,
    phrases: Vec<Vec<String>>,
}

impl ProfanityDictionary {
    /// Builds the dictionary from the static word tables.
    ///
    /// Every entry is passed through [`normalize`] so table spellings
    /// and user text land on the same canonical form. Entries that
    /// normalize to nothing are skipped.
    #[must_use]
    pub fn build() -> Self {
        let mut words: HashSet<String> = HashSet::new();
        let mut phrases: Vec<Vec<String>> = Vec::new();

        for entry in wordlist::BASE_ENGLISH.iter().chain(wordlist::FILIPINO) {
            let mut tokens = entry_tokens(entry);
            match tokens.len() {
                0 => {}
                1 => {
                    words.insert(tokens.remove(0));
                }
                _ => {
                    if !phrases.contains(&tokens) {
                        phrases.push(tokens);
                    }
                }
            }
        }

        // Allowlist last: exact entry removal, words and phrases alike.
        for entry in wordlist::ALLOWLIST {
            let tokens = entry_tokens(entry);
            match tokens.len() {
                0 => {}
                1 => {
                    words.remove(&tokens[0]);
                }
                _ => {
                    phrases.retain(|phrase| *phrase != tokens);
                }
            }
        }

        log::info!(
            "built profanity dictionary: {} words, {} phrases",
            words.len(),
            phrases.len()
        );

        Self { words, phrases }
    }

    /// Returns `true` if the normalized text contains any denylisted
    /// word or phrase.
    #[must_use]
    pub fn check(&self, raw: &str) -> bool {
        let normalized = normalize(raw);
        let tokens: Vec<&str> = normalized.split_whitespace().collect();
        if tokens.is_empty() {
            return false;
        }

        if tokens.iter().any(|token| self.words.contains(*token)) {
            return true;
        }

        self.phrases
            .iter()
            .any(|phrase| phrase_occurs(&tokens, phrase))
    }

    /// Returns the normalized text with every matched word or phrase
    /// token masked by `*` of equal length.
    ///
    /// Whitespace is collapsed to single spaces in the output. The
    /// submission flow rejects instead of cleaning; this is the
    /// companion operation for moderation/edit-suggestion surfaces.
    #[must_use]
    pub fn clean(&self, raw: &str) -> String {
        let normalized = normalize(raw);
        let tokens: Vec<&str> = normalized.split_whitespace().collect();
        let mut masked = vec![false; tokens.len()];

        for (idx, token) in tokens.iter().enumerate() {
            if self.words.contains(*token) {
                masked[idx] = true;
            }
        }

        for phrase in &self.phrases {
            if phrase.len() > tokens.len() {
                continue;
            }
            for start in 0..=tokens.len() - phrase.len() {
                let window = &tokens[start..start + phrase.len()];
                if window
                    .iter()
                    .zip(phrase)
                    .all(|(token, word)| *token == word.as_str())
                {
                    for flag in &mut masked[start..start + phrase.len()] {
                        *flag = true;
                    }
                }
            }
        }

        tokens
            .iter()
            .zip(&masked)
            .map(|(token, is_masked)| {
                if *is_masked {
                    "*".repeat(token.chars().count())
                } else {
                    (*token).to_string()
                }
            })
            .collect::<Vec<_>>()
            .join(" ")
    }

    /// Number of single-word entries in the built dictionary.
    #[must_use]
    pub fn word_count(&self) -> usize {
        self.words.len()
    }

    /// Number of phrase entries in the built dictionary.
    #[must_use]
    pub fn phrase_count(&self) -> usize {
        self.phrases.len()
    }
}

/// Normalizes a table entry and splits it into tokens.
fn entry_tokens(entry: &str) -> Vec<String> {
    normalize(entry)
        .split_whitespace()
        .map(str::to_string)
        .collect()
}

/// Returns `true` if `phrase` occurs as a consecutive token window.
fn phrase_occurs(tokens: &[&str], phrase: &[String]) -> bool {
    if phrase.is_empty() || phrase.len() > tokens.len() {
        return false;
    }
    tokens.windows(phrase.len()).any(|window| {
        window
            .iter()
            .zip(phrase)
            .all(|(token, word)| *token == word.as_str())
    })
}
