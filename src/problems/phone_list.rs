//! Phone list consistency.
//!
//! A list is consistent when no number is a prefix of another (dialing the
//! shorter one would make the longer unreachable). Duplicates count as a
//! conflict.

use crate::alphabet::Digits;
use crate::error::TrieError;
use crate::trie::{Trie, TrieConfig};

use super::capacity_for;

/// Reusable checker: one arena serves every dataset, cleared in between.
#[derive(Debug, Clone)]
pub struct PhoneList {
    trie: Trie<Digits>,
}

impl PhoneList {
    /// Checker for datasets with at most `max_digits` digits in total.
    pub fn with_capacity(max_digits: usize) -> Result<Self, TrieError> {
        let trie = Trie::with_config(TrieConfig::with_capacity(max_digits + 1))?;
        Ok(Self { trie })
    }

    /// Check one dataset.
    ///
    /// Numbers must consist of ASCII digits only; anything else is reported
    /// as [`TrieError::InvalidSymbol`].
    pub fn is_consistent<S: AsRef<str>>(&mut self, numbers: &[S]) -> Result<bool, TrieError> {
        self.trie.clear();
        for number in numbers {
            let number = number.as_ref().as_bytes();
            if self.conflicts(number) {
                tracing::trace!(number = %String::from_utf8_lossy(number), "prefix conflict");
                return Ok(false);
            }
            self.trie.insert(number)?;
        }
        Ok(true)
    }

    /// Whether `number` conflicts with a number inserted earlier.
    fn conflicts(&self, number: &[u8]) -> bool {
        let mut cursor = self.trie.cursor();
        for &digit in number {
            // An earlier number ends on our path: it prefixes us.
            if cursor.end() > 0 {
                return true;
            }
            match cursor.step(digit) {
                Some(next) => cursor = next,
                None => return false,
            }
        }
        // Our whole path already exists: we prefix (or equal) an earlier number.
        cursor.pass() > 0
    }
}

/// Check a single dataset with an arena sized to fit it.
pub fn is_consistent<S: AsRef<str>>(numbers: &[S]) -> Result<bool, TrieError> {
    let digits = capacity_for(numbers.iter().map(|n| n.as_ref())) - 1;
    PhoneList::with_capacity(digits)?.is_consistent(numbers)
}
