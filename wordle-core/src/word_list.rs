use std::collections::HashSet;

use anyhow::{Result, anyhow};
use rand::Rng;
use tracing::debug;

/// Normalized set of valid words. Tokens are uppercased on ingestion and
/// every membership test normalizes its input, so comparisons are always
/// case-insensitive. No alphabetic validation happens here: a malformed
/// token of the wrong length simply never matches a submitted guess,
/// because guesses are length-checked before membership.
#[derive(Debug, Clone)]
pub struct WordList {
    words: Vec<String>,
    index: HashSet<String>,
}

impl WordList {
    /// Build a word list from whitespace/newline-delimited tokens.
    /// Empty tokens are discarded.
    pub fn from_source(source: &str) -> Self {
        let words: Vec<String> = source
            .split_whitespace()
            .map(|token| token.to_uppercase())
            .collect();
        let index = words.iter().cloned().collect();
        debug!("loaded word list with {} entries", words.len());
        Self { words, index }
    }

    /// Case-normalized membership test.
    pub fn contains(&self, word: &str) -> bool {
        self.index.contains(&word.to_uppercase())
    }

    /// Draw a target word uniformly at random. Fails on an empty list.
    pub fn random_word(&self, rng: &mut impl Rng) -> Result<&str> {
        if self.words.is_empty() {
            return Err(anyhow!("word list is empty"));
        }
        let index = rng.random_range(0..self.words.len());
        Ok(&self.words[index])
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}
