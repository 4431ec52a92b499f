//! The 1024-word mnemonic dictionary
//!
//! The dictionary is supplied by the caller, either as a list of words or
//! as text with one word per line. It is validated once and never mutated,
//! so a single instance can be shared freely across threads.

use std::collections::HashMap;

use crate::error::{Error, Result};

/// Number of words in the dictionary (one per 10-bit value)
pub const WORDLIST_SIZE: usize = 1024;

/// Bidirectional index ↔ word lookup table
#[derive(Debug, Clone)]
pub struct Wordlist {
    words: Vec<String>,
    indices: HashMap<String, u16>,
}

impl Wordlist {
    /// Builds a dictionary from exactly 1024 distinct words
    ///
    /// Words are normalized to lowercase.
    ///
    /// # Errors
    /// Returns an error on a wrong word count, an empty word, whitespace
    /// inside a word or a duplicate
    pub fn new<I, S>(words: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let words: Vec<String> = words
            .into_iter()
            .map(|word| word.as_ref().trim().to_lowercase())
            .collect();

        if words.len() != WORDLIST_SIZE {
            return Err(Error::invalid(
                "wordlist",
                format!("expected {WORDLIST_SIZE} words, got {}", words.len()),
            ));
        }

        let mut indices = HashMap::with_capacity(WORDLIST_SIZE);
        for (index, word) in words.iter().enumerate() {
            if word.is_empty() || word.chars().any(char::is_whitespace) {
                return Err(Error::invalid(
                    "wordlist",
                    format!("entry {index} is not a single word"),
                ));
            }
            #[allow(
                clippy::cast_possible_truncation,
                reason = "index < WORDLIST_SIZE (1024) fits in u16"
            )]
            let index_u16 = index as u16;
            if indices.insert(word.clone(), index_u16).is_some() {
                return Err(Error::invalid(
                    "wordlist",
                    format!("duplicate word '{word}'"),
                ));
            }
        }

        Ok(Self { words, indices })
    }

    /// Parses a dictionary from text, one word per line
    ///
    /// Blank lines are ignored.
    ///
    /// # Errors
    /// Same conditions as [`Wordlist::new`]
    pub fn parse(text: &str) -> Result<Self> {
        Self::new(text.lines().filter(|line| !line.trim().is_empty()))
    }

    /// Word for a 10-bit value
    ///
    /// # Errors
    /// Returns an error if `index` is not below 1024
    pub fn word(&self, index: u16) -> Result<&str> {
        self.words
            .get(usize::from(index))
            .map(String::as_str)
            .ok_or_else(|| {
                Error::out_of_range(
                    "index",
                    format!("word index {index} out of range (must be 0-1023)"),
                )
            })
    }

    /// 10-bit value of a word (case-insensitive)
    ///
    /// # Errors
    /// Returns [`Error::UnknownWord`] if the word is not in the dictionary
    pub fn index_of(&self, word: &str) -> Result<u16> {
        self.indices
            .get(word.to_lowercase().as_str())
            .copied()
            .ok_or_else(|| Error::UnknownWord(word.to_string()))
    }

    /// Iterates over the words in index order
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.words.iter().map(String::as_str)
    }
}

#[cfg(test)]
pub(crate) fn test_wordlist() -> Wordlist {
    // Distinct letters-only words so lookups behave like a real dictionary
    let words = (0..WORDLIST_SIZE).map(|i| {
        let letters = |n: usize| char::from(b'a' + u8::try_from(n % 26).unwrap_or(0));
        format!("{}{}{}", letters(i / 676), letters(i / 26), letters(i))
    });
    Wordlist::new(words).expect("synthetic wordlist is valid")
}
