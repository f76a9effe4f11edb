//! Normalization of raw player input into a [`Guess`].

use crate::settings::WORD_SIZE;
use std::fmt;

/// Up to [`WORD_SIZE`] uppercase ASCII letters.
///
/// Only [`sanitize`] builds one, so the invariant holds for every value.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct Guess(String);

impl Guess {
    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn as_bytes(&self) -> &[u8] {
        self.0.as_bytes()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// True once the guess holds a full word and may be submitted.
    pub fn is_complete(&self) -> bool {
        self.0.len() == WORD_SIZE
    }
}

impl fmt::Display for Guess {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for Guess {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// Strip non-letters, upper-case, and keep the first [`WORD_SIZE`] letters.
///
/// Never rejects: a short or empty result is still a valid (incomplete) guess.
#[must_use]
pub fn sanitize(raw: &str) -> Guess {
    Guess(
        raw.chars()
            .filter(char::is_ascii_alphabetic)
            .map(|c| c.to_ascii_uppercase())
            .take(WORD_SIZE)
            .collect(),
    )
}
