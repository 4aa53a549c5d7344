//! Sensitive-word filter.
//!
//! From every position of the text, walk the trie as far as the text
//! allows and remember the longest stored word ending along the way.
//! Matching is ASCII case-insensitive; every masked character becomes `*`.

use crate::alphabet::Lowercase;
use crate::error::TrieError;
use crate::trie::{Trie, TrieConfig};

use super::capacity_for;

/// A fixed set of words to detect or mask in text.
#[derive(Debug, Clone)]
pub struct WordFilter {
    trie: Trie<Lowercase>,
    distinct: usize,
}

impl WordFilter {
    /// Build a filter from `words`. Empty words are ignored; words must be
    /// ASCII letters (case is folded).
    pub fn new<S: AsRef<str>>(words: &[S]) -> Result<Self, TrieError> {
        let words: Vec<String> = words
            .iter()
            .map(|w| w.as_ref().to_ascii_lowercase())
            .filter(|w| !w.is_empty())
            .collect();
        let mut trie = Trie::with_config(TrieConfig::with_capacity(capacity_for(&words)))?;
        let mut distinct = 0;
        for w in &words {
            if !trie.contains(w) {
                distinct += 1;
            }
            trie.insert(w)?;
        }
        Ok(Self { trie, distinct })
    }

    /// Number of distinct words in the filter.
    pub fn len(&self) -> usize {
        self.distinct
    }

    /// Check if the filter holds no words.
    pub fn is_empty(&self) -> bool {
        self.trie.is_empty()
    }

    /// Length in bytes of the longest word starting at `text[start..]`.
    fn longest_match(&self, text: &[u8], start: usize) -> usize {
        let mut cursor = self.trie.cursor();
        let mut longest = 0;
        for (i, &b) in text[start..].iter().enumerate() {
            match cursor.step(b.to_ascii_lowercase()) {
                Some(next) => cursor = next,
                None => break,
            }
            if cursor.end() > 0 {
                longest = i + 1;
            }
        }
        longest
    }

    /// Check if any word occurs in `text`.
    pub fn contains_match(&self, text: &str) -> bool {
        let bytes = text.as_bytes();
        (0..bytes.len()).any(|i| self.longest_match(bytes, i) > 0)
    }

    /// Byte ranges of the longest match at each position where one starts.
    pub fn find_matches(&self, text: &str) -> Vec<std::ops::Range<usize>> {
        let bytes = text.as_bytes();
        (0..bytes.len())
            .filter_map(|i| match self.longest_match(bytes, i) {
                0 => None,
                n => Some(i..i + n),
            })
            .collect()
    }

    /// Copy of `text` with every character covered by a match replaced by `*`.
    ///
    /// Overlapping matches are all masked.
    pub fn censor(&self, text: &str) -> String {
        let mut masked = vec![false; text.len()];
        for range in self.find_matches(text) {
            masked[range].fill(true);
        }
        // Matches only cover ASCII letters, so they never split a character.
        text.char_indices()
            .map(|(i, ch)| if masked[i] { '*' } else { ch })
            .collect()
    }
}
