//! Per-letter scoring of a guess against the secret word.
//!
//! Scoring runs in two passes over a letter tally built from the secret:
//! exact-position matches first, then out-of-place matches. A letter that
//! occurs `k` times in the secret is credited at most `k` times in total.

use crate::sanitizer::Guess;
use crate::settings::WORD_SIZE;
use std::fmt;

const ALPHABET_SIZE: usize = 26;

/// Feedback for a single letter position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LetterFeedback {
    /// Letter is in the secret at this position.
    Correct,
    /// Letter is in the secret, but elsewhere.
    Almost,
    /// Letter does not contribute a match.
    Incorrect,
}

impl LetterFeedback {
    pub fn to_char(self) -> char {
        match self {
            Self::Correct => '🟩',
            Self::Almost => '🟨',
            Self::Incorrect => '⬛',
        }
    }
}

/// Feedback for a whole guess, position-aligned with the guessed letters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Feedback(pub [LetterFeedback; WORD_SIZE]);

impl Feedback {
    pub const ALL_CORRECT: Self = Self([LetterFeedback::Correct; WORD_SIZE]);

    /// Every letter is [`LetterFeedback::Correct`].
    pub fn is_win(&self) -> bool {
        *self == Self::ALL_CORRECT
    }

    pub fn iter(&self) -> impl Iterator<Item = LetterFeedback> + '_ {
        self.0.iter().copied()
    }

    pub fn to_emoji_string(&self) -> String {
        self.iter().map(LetterFeedback::to_char).collect()
    }
}

impl std::ops::Index<usize> for Feedback {
    type Output = LetterFeedback;

    fn index(&self, index: usize) -> &Self::Output {
        &self.0[index]
    }
}

impl fmt::Display for Feedback {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_emoji_string())
    }
}

/// The answer for one game.
///
/// The configured text is kept as given for display. Letters are compared
/// ASCII case-insensitively, so a lowercase secret is still winnable.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SecretWord {
    text: String,
    letters: Vec<u8>,
}

impl SecretWord {
    pub fn new(word: impl Into<String>) -> Self {
        let text = word.into();
        // One slot per character; anything outside A-Z becomes 0, which no guess contains.
        let letters = text
            .chars()
            .map(|c| {
                if c.is_ascii_alphabetic() {
                    c.to_ascii_uppercase() as u8
                } else {
                    0
                }
            })
            .collect();
        Self { text, letters }
    }

    pub fn as_str(&self) -> &str {
        &self.text
    }

    fn letter_at(&self, index: usize) -> Option<u8> {
        self.letters.get(index).copied()
    }

    /// Multiset of the secret's letters. Anything outside A-Z is ignored.
    fn tally(&self) -> [u8; ALPHABET_SIZE] {
        let mut remaining = [0u8; ALPHABET_SIZE];
        for &b in &self.letters {
            if let Some(idx) = letter_index(b) {
                remaining[idx] = remaining[idx].saturating_add(1);
            }
        }
        remaining
    }
}

impl fmt::Display for SecretWord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}

fn letter_index(b: u8) -> Option<usize> {
    b.is_ascii_uppercase().then(|| (b - b'A') as usize)
}

/// Score `guess` against `secret`.
///
/// Returns `None` unless the guess holds exactly [`WORD_SIZE`] letters.
#[must_use]
pub fn evaluate(secret: &SecretWord, guess: &Guess) -> Option<Feedback> {
    if !guess.is_complete() {
        return None;
    }
    let guess_bytes = guess.as_bytes();
    let mut feedback = [LetterFeedback::Incorrect; WORD_SIZE];
    let mut remaining = secret.tally();

    // Exact matches claim their letter before anything else can.
    for (i, &g) in guess_bytes.iter().enumerate() {
        if secret.letter_at(i) == Some(g) {
            feedback[i] = LetterFeedback::Correct;
            if let Some(idx) = letter_index(g) {
                remaining[idx] = remaining[idx].saturating_sub(1);
            }
        }
    }

    for (i, &g) in guess_bytes.iter().enumerate() {
        if feedback[i] == LetterFeedback::Correct {
            continue;
        }
        if let Some(idx) = letter_index(g)
            && remaining[idx] > 0
        {
            feedback[i] = LetterFeedback::Almost;
            remaining[idx] -= 1;
        }
    }

    Some(Feedback(feedback))
}

#[cfg(test)]
mod tests {
    use super::LetterFeedback::{Almost, Correct, Incorrect};
    use super::*;
    use crate::sanitizer::sanitize;

    fn score(secret: &str, guess: &str) -> [LetterFeedback; WORD_SIZE] {
        evaluate(&SecretWord::new(secret), &sanitize(guess))
            .expect("complete guess")
            .0
    }

    #[test]
    fn test_all_correct() {
        let feedback = evaluate(&SecretWord::new("CRANE"), &sanitize("CRANE")).unwrap();
        assert!(feedback.is_win());
        assert_eq!(feedback, Feedback::ALL_CORRECT);
    }

    #[test]
    fn test_world_wrong() {
        assert_eq!(
            score("WORLD", "WRONG"),
            [Correct, Almost, Almost, Incorrect, Incorrect]
        );
    }

    #[test]
    fn test_all_incorrect() {
        assert_eq!(score("DREAM", "QUICK"), [Incorrect; WORD_SIZE]);
    }

    #[test]
    fn test_duplicate_letters_in_guess() {
        // CREEP has two Es, both claimed by exact matches.
        assert_eq!(
            score("CREEP", "SPEED"),
            [Incorrect, Almost, Correct, Correct, Incorrect]
        );
    }

    #[test]
    fn test_duplicate_guess_limited_by_secret() {
        // Only one L in WORLD, so only the first guessed L is credited.
        assert_eq!(
            score("WORLD", "LLAMA"),
            [Almost, Incorrect, Incorrect, Incorrect, Incorrect]
        );
        assert_eq!(
            score("PLANT", "HELLO"),
            [Incorrect, Incorrect, Almost, Incorrect, Incorrect]
        );
    }

    #[test]
    fn test_exact_match_not_starved_by_earlier_letter() {
        // The S at position 4 is exact and must not lose its credit to the S at 0.
        assert_eq!(
            score("CROSS", "SASSY"),
            [Almost, Incorrect, Incorrect, Correct, Incorrect]
        );
    }

    #[test]
    fn test_duplicate_letters_in_secret() {
        assert_eq!(score("TESTS", "TESTS"), [Correct; WORD_SIZE]);
        assert_eq!(
            score("TESTS", "STATE"),
            [Almost, Almost, Incorrect, Correct, Almost]
        );
    }

    #[test]
    fn test_lowercase_secret_compares_case_insensitively() {
        assert_eq!(score("tests", "TESTS"), [Correct; WORD_SIZE]);
    }

    #[test]
    fn test_non_ascii_secret_keeps_positions_aligned() {
        assert_eq!(
            score("ÉCRAN", "ECRAN"),
            [Incorrect, Correct, Correct, Correct, Correct]
        );
        assert_eq!(
            score("CAFÉS", "CAFES"),
            [Correct, Correct, Correct, Incorrect, Correct]
        );
    }

    #[test]
    fn test_short_secret_still_scores() {
        assert_eq!(
            score("FLY", "FLYER"),
            [Correct, Correct, Correct, Incorrect, Incorrect]
        );
    }

    #[test]
    fn test_incomplete_guess_is_not_scored() {
        assert_eq!(evaluate(&SecretWord::new("CRANE"), &sanitize("CRAN")), None);
        assert_eq!(evaluate(&SecretWord::new("CRANE"), &sanitize("")), None);
    }

    #[test]
    fn test_emoji_rendering() {
        let feedback = Feedback([Correct, Almost, Almost, Incorrect, Incorrect]);
        assert_eq!(feedback.to_string(), "🟩🟨🟨⬛⬛");
        assert_eq!(feedback[1], Almost);
    }
}
