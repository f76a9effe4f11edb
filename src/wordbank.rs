use chrono::NaiveDate;
use std::collections::HashSet;
use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::{Path, PathBuf};

use crate::settings::WORD_SIZE;

pub const EMBEDDED_WORDBANK: &str = include_str!("resources/wordbank.txt");

const WORDBANK_DIR: &str = "wordle-game";
const WORDBANK_FILE: &str = "wordbank.txt";

/// Day zero for [`WordBank::word_of_the_day`].
const FIRST_PUZZLE_DATE: (i32, u32, u32) = (2021, 6, 19);

/// Case-insensitive membership test over valid words.
pub trait Dictionary {
    fn contains(&self, word: &str) -> bool;
}

impl<D: Dictionary + ?Sized> Dictionary for &D {
    fn contains(&self, word: &str) -> bool {
        (**self).contains(word)
    }
}

/// Upper-cased five-letter words, in load order, with a hash index for lookups.
#[derive(Debug, Clone, Default)]
pub struct WordBank {
    words: Vec<String>,
    index: HashSet<String>,
}

impl WordBank {
    /// Keep only alphabetic entries of [`WORD_SIZE`] letters; duplicates are dropped.
    pub fn from_words<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut bank = Self::default();
        for word in words {
            bank.insert(word.as_ref());
        }
        bank
    }

    fn insert(&mut self, raw: &str) {
        let word = raw.trim().to_uppercase();
        if is_valid_word(&word) && self.index.insert(word.clone()) {
            self.words.push(word);
        }
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    pub fn words(&self) -> &[String] {
        &self.words
    }

    /// Deterministic daily pick: days elapsed since the first puzzle, modulo the list length.
    pub fn word_of_the_day(&self, date: NaiveDate) -> Option<&str> {
        if self.words.is_empty() {
            return None;
        }
        let (y, m, d) = FIRST_PUZZLE_DATE;
        let epoch = NaiveDate::from_ymd_opt(y, m, d)?;
        let days = date.signed_duration_since(epoch).num_days();
        let len = i64::try_from(self.words.len()).ok()?;
        let idx = usize::try_from(days.rem_euclid(len)).ok()?;
        self.words.get(idx).map(String::as_str)
    }
}

impl Dictionary for WordBank {
    fn contains(&self, word: &str) -> bool {
        self.index.contains(&word.to_uppercase())
    }
}

fn is_valid_word(word: &str) -> bool {
    word.len() == WORD_SIZE && word.chars().all(|c| c.is_ascii_alphabetic())
}

pub fn load_wordbank_from_str(data: &str) -> WordBank {
    WordBank::from_words(data.lines())
}

pub fn load_wordbank_from_file<P: AsRef<Path>>(path: P) -> io::Result<WordBank> {
    let file = File::open(path)?;
    let reader = BufReader::new(file);
    let mut bank = WordBank::default();
    for line in reader.lines() {
        bank.insert(&line?);
    }
    Ok(bank)
}

/// Per-user word list override, e.g. `~/.config/wordle-game/wordbank.txt`.
pub fn user_wordbank_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join(WORDBANK_DIR).join(WORDBANK_FILE))
}
