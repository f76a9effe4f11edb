//! Advisory checks on the configured secret word.
//!
//! A bad secret is an operator mistake. It is reported through a
//! [`Diagnostics`] sink and never stops the game from starting.

use crate::settings::WORD_SIZE;
use crate::wordbank::Dictionary;
use thiserror::Error;

/// One configuration rule the secret word breaks.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Violation {
    #[error("expected {expected} letters, got {actual}", expected = WORD_SIZE)]
    Length { actual: usize },
    #[error("must contain only uppercase letters A-Z")]
    Case,
    #[error("not in the dictionary")]
    UnknownWord,
}

/// Where configuration warnings go.
pub trait Diagnostics {
    fn warn(&self, message: &str);
}

/// Forwards warnings to the `log` facade.
#[derive(Debug, Clone, Copy, Default)]
pub struct LogDiagnostics;

impl Diagnostics for LogDiagnostics {
    fn warn(&self, message: &str) {
        log::warn!(target: "wordle_game::validator", "{message}");
    }
}

/// Every rule `word` breaks, in a fixed order. Empty when the word is fine.
pub fn validate(word: &str, dictionary: &impl Dictionary) -> Vec<Violation> {
    let mut violations = Vec::new();

    let actual = word.chars().count();
    if actual != WORD_SIZE {
        violations.push(Violation::Length { actual });
    }
    if !word.chars().all(|c| c.is_ascii_uppercase()) {
        violations.push(Violation::Case);
    }
    if !dictionary.contains(&word.to_uppercase()) {
        violations.push(Violation::UnknownWord);
    }

    violations
}

/// [`validate`], then emit a single warning listing every violation found.
pub fn validate_secret_word(
    word: &str,
    dictionary: &impl Dictionary,
    diagnostics: &impl Diagnostics,
) -> Vec<Violation> {
    let violations = validate(word, dictionary);
    if !violations.is_empty() {
        let reasons: Vec<String> = violations.iter().map(ToString::to_string).collect();
        diagnostics.warn(&format!(
            "secret word {word:?} is misconfigured: {}",
            reasons.join("; ")
        ));
    }
    violations
}
