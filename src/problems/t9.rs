//! T9 predictive text.
//!
//! The dictionary is a trie where a word's frequency is its multiplicity, so
//! the popularity of a prefix is just its pass count. After each key press
//! the predictor proposes the most popular prefix spelled by the digits so
//! far (ties go to the alphabetically smaller one).

use crate::alphabet::Lowercase;
use crate::arena::MAX_CAPACITY;
use crate::error::TrieError;
use crate::trie::{Cursor, Trie, TrieConfig};

use super::capacity_for;

/// Letters on each phone key; `0` and `1` carry none.
const KEYPAD: [&[u8]; 10] = [
    b"", b"", b"abc", b"def", b"ghi", b"jkl", b"mno", b"pqrs", b"tuv", b"wxyz",
];

fn letters(digit: u8) -> &'static [u8] {
    match digit {
        b'0'..=b'9' => KEYPAD[(digit - b'0') as usize],
        _ => &[],
    }
}

/// Frequency-weighted T9 dictionary.
#[derive(Debug, Clone)]
pub struct T9 {
    trie: Trie<Lowercase>,
}

impl T9 {
    /// Empty dictionary with room for `max_letters` letters across all
    /// distinct words it will ever learn.
    pub fn with_capacity(max_letters: usize) -> Result<Self, TrieError> {
        let capacity = max_letters.checked_add(1).ok_or(TrieError::CapacityTooLarge {
            requested: max_letters,
            max: MAX_CAPACITY,
        })?;
        Ok(Self {
            trie: Trie::with_config(TrieConfig::with_capacity(capacity))?,
        })
    }

    /// Build from `(word, frequency)` pairs. Words are lowercase ASCII.
    ///
    /// The arena is sized to fit exactly this dictionary, so learning a new
    /// word later may fail; use [`T9::with_capacity`] to leave room.
    pub fn new<S: AsRef<str>>(dictionary: &[(S, usize)]) -> Result<Self, TrieError> {
        let total = capacity_for(dictionary.iter().map(|(w, _)| w.as_ref())) - 1;
        let mut t9 = Self::with_capacity(total)?;
        for (word, times) in dictionary {
            t9.learn(word.as_ref(), *times)?;
        }
        Ok(t9)
    }

    /// Record `times` more uses of `word`.
    ///
    /// Fails with [`TrieError::CapacityExhausted`] when `word` needs more
    /// new letters than the dictionary has room for; nothing is recorded then.
    pub fn learn(&mut self, word: &str, times: usize) -> Result<(), TrieError> {
        self.trie.insert_many(word, times)
    }

    /// Recorded uses of `word`.
    pub fn frequency(&self, word: &str) -> usize {
        self.trie.search(word)
    }

    /// Best guess after each key press of `digits`.
    ///
    /// Entry `i` is the most popular prefix of length `i + 1` spelled by
    /// `digits[..=i]`, or `None` when no dictionary word fits (the user has
    /// to type it manually). Once an entry is `None`, all later ones are too.
    pub fn predict(&self, digits: &str) -> Vec<Option<String>> {
        let mut frontier: Vec<(Cursor<'_, Lowercase>, String)> =
            vec![(self.trie.cursor(), String::new())];
        let mut out = Vec::with_capacity(digits.len());

        for digit in digits.bytes() {
            let mut next = Vec::new();
            for (cursor, prefix) in &frontier {
                for &letter in letters(digit) {
                    if let Some(child) = cursor.step(letter) {
                        let mut p = prefix.clone();
                        p.push(char::from(letter));
                        next.push((child, p));
                    }
                }
            }
            frontier = next;

            let best = frontier
                .iter()
                .max_by(|(a, pa), (b, pb)| a.pass().cmp(&b.pass()).then_with(|| pb.cmp(pa)))
                .map(|(_, p)| p.clone());
            out.push(best);
        }
        out
    }
}
