//! Maximum XOR queries.
//!
//! Every value is stored as its 32 bits, most significant first. To find
//! the partner maximizing `v ^ x`, walk down from the root preferring at
//! each level the branch holding the opposite of `v`'s bit.

use crate::alphabet::Binary;
use crate::arena::MAX_CAPACITY;
use crate::error::TrieError;
use crate::trie::{Trie, TrieConfig};

/// Depth of every key.
pub const BITS: usize = u32::BITS as usize;

/// A multiset of `u32` supporting best-XOR-partner queries.
///
/// Removed values give their nodes back through the free list, so the
/// capacity only has to cover the values alive at the same time.
#[derive(Debug, Clone)]
pub struct XorSet {
    trie: Trie<Binary>,
}

impl XorSet {
    /// Set holding up to `max_live` values at once.
    ///
    /// Each value may need `BITS` nodes, so `max_live` is bounded by
    /// [`MAX_CAPACITY`] / `BITS`; larger requests are
    /// [`TrieError::CapacityTooLarge`].
    pub fn with_capacity(max_live: usize) -> Result<Self, TrieError> {
        let capacity = BITS
            .checked_mul(max_live)
            .and_then(|n| n.checked_add(1))
            .ok_or(TrieError::CapacityTooLarge {
                requested: usize::MAX,
                max: MAX_CAPACITY,
            })?;
        let config = TrieConfig::with_capacity(capacity).reclaim_severed(true);
        Ok(Self {
            trie: Trie::with_config(config)?,
        })
    }

    /// Add one instance of `value`.
    pub fn insert(&mut self, value: u32) -> Result<(), TrieError> {
        self.trie.insert(Binary::key(value, BITS))
    }

    /// Remove one instance of `value`; `false` if it was not present.
    pub fn remove(&mut self, value: u32) -> bool {
        self.trie.delete(Binary::key(value, BITS))
    }

    /// Number of instances of `value`.
    pub fn count(&self, value: u32) -> usize {
        self.trie.search(Binary::key(value, BITS))
    }

    /// Number of stored values, duplicates included.
    pub fn len(&self) -> usize {
        self.trie.len()
    }

    /// Check if the set is empty.
    pub fn is_empty(&self) -> bool {
        self.trie.is_empty()
    }

    /// Largest `value ^ x` over the stored `x`, or `None` if the set is empty.
    pub fn max_xor(&self, value: u32) -> Option<u32> {
        if self.trie.is_empty() {
            return None;
        }
        let mut cursor = self.trie.cursor();
        let mut best = 0u32;
        for i in (0..BITS).rev() {
            let bit = ((value >> i) & 1) as usize;
            match cursor.step_slot(bit ^ 1) {
                Some(next) => {
                    best |= 1 << i;
                    cursor = next;
                }
                // Every live node below the root leads to a full-depth key.
                None => cursor = cursor.step_slot(bit)?,
            }
        }
        Some(best)
    }
}

/// Largest `a ^ b` over all pairs `a`, `b` taken from distinct positions of
/// `values`; `0` when there are fewer than two values.
pub fn max_pair_xor(values: &[u32]) -> Result<u32, TrieError> {
    let mut set = XorSet::with_capacity(values.len())?;
    let mut best = 0;
    for &v in values {
        if let Some(x) = set.max_xor(v) {
            best = best.max(x);
        }
        set.insert(v)?;
    }
    Ok(best)
}
