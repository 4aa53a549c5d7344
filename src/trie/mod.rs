//! The counting trie engine.
//!
//! Each node records how many live keys pass through it (`pass`) and how
//! many end on it (`end`). Keys may be inserted many times; every insertion
//! is counted and removed independently.
//!
//! Deletion walks the key's path decrementing `pass`. When a node's `pass`
//! drops to zero the edge into it is cut and the walk stops there: the
//! detached nodes stay in the arena as garbage until the next
//! [`Trie::clear`], unless [`TrieConfig::reclaim_severed`] recycles them
//! right away.

mod cursor;

pub use cursor::Cursor;

use std::fmt;
use std::marker::PhantomData;

use smallvec::SmallVec;

use crate::alphabet::{Alphabet, Lowercase};
use crate::arena::{Handle, NodeArena};
use crate::error::TrieError;

/// Slot indices of one key; keys up to 32 symbols stay on the stack.
type Slots = SmallVec<[usize; 32]>;

// =============================================================================
// Configuration
// =============================================================================

/// Configuration for a [`Trie`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TrieConfig {
    /// Maximum number of nodes, root included.
    ///
    /// Size it to at least `1 + ` the total length of all keys inserted
    /// between clears.
    pub capacity: usize,
    /// Recycle severed subtrees through a free list on delete.
    ///
    /// Off by default: delete then costs O(key length) and detached nodes
    /// wait for the next clear. Turning it on bounds memory under heavy
    /// churn at the price of walking each severed subtree once.
    pub reclaim_severed: bool,
}

impl Default for TrieConfig {
    fn default() -> Self {
        Self {
            capacity: 1024,
            reclaim_severed: false,
        }
    }
}

impl TrieConfig {
    /// Default configuration with the given node capacity.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            capacity,
            ..Self::default()
        }
    }

    /// Enable or disable free-list reclamation of severed subtrees.
    pub fn reclaim_severed(mut self, on: bool) -> Self {
        self.reclaim_severed = on;
        self
    }
}

/// Snapshot of arena usage.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TrieStats {
    /// Total node capacity.
    pub capacity: usize,
    /// Nodes holding data, root and detached garbage included.
    pub nodes_in_use: usize,
    /// Recycled nodes waiting on the free list.
    pub free_nodes: usize,
    /// Nodes that can still be allocated.
    pub available: usize,
    /// Live insertions (the root's pass count).
    pub live_keys: usize,
}

// =============================================================================
// Trie
// =============================================================================

/// A multiplicity-aware prefix tree over the fixed alphabet `A`.
///
/// Mutating operations take `&mut self`; share a trie across threads only
/// behind your own lock.
///
/// ```rust
/// use tally_trie::{Lowercase, Trie};
///
/// let mut t: Trie<Lowercase> = Trie::new(32);
/// t.insert("apple")?;
/// t.insert("app")?;
/// t.insert("apple")?;
///
/// assert_eq!(t.search("apple"), 2);
/// assert_eq!(t.prefix_count("app"), 3);
///
/// assert!(t.delete("apple"));
/// assert_eq!(t.prefix_count("app"), 2);
/// # Ok::<(), tally_trie::TrieError>(())
/// ```
pub struct Trie<A: Alphabet = Lowercase> {
    arena: NodeArena,
    config: TrieConfig,
    _alphabet: PhantomData<fn() -> A>,
}

impl<A: Alphabet> Clone for Trie<A> {
    fn clone(&self) -> Self {
        Self {
            arena: self.arena.clone(),
            config: self.config.clone(),
            _alphabet: PhantomData,
        }
    }
}

impl<A: Alphabet> fmt::Debug for Trie<A> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Trie")
            .field("alphabet", &A::NAME)
            .field("stats", &self.stats())
            .finish()
    }
}

impl<A: Alphabet> Default for Trie<A> {
    fn default() -> Self {
        Self::new(TrieConfig::default().capacity)
    }
}

impl<A: Alphabet> Trie<A> {
    /// Build an empty trie with room for `capacity` nodes (root included).
    ///
    /// # Panics
    /// Panics if `capacity` is zero or larger than
    /// [`MAX_CAPACITY`](crate::arena::MAX_CAPACITY). Use
    /// [`Trie::with_config`] to handle that as an error.
    pub fn new(capacity: usize) -> Self {
        match Self::with_config(TrieConfig::with_capacity(capacity)) {
            Ok(t) => t,
            Err(e) => panic!("invalid trie capacity: {e}"),
        }
    }

    /// Build an empty trie from `config`.
    pub fn with_config(config: TrieConfig) -> Result<Self, TrieError> {
        let arena = NodeArena::new(config.capacity, A::WIDTH)?;
        tracing::debug!(
            alphabet = A::NAME,
            capacity = config.capacity,
            reclaim_severed = config.reclaim_severed,
            "built trie arena"
        );
        Ok(Self {
            arena,
            config,
            _alphabet: PhantomData,
        })
    }

    /// Active configuration.
    pub fn config(&self) -> &TrieConfig {
        &self.config
    }

    fn slots(key: &[u8]) -> Result<Slots, TrieError> {
        key.iter()
            .enumerate()
            .map(|(position, &byte)| {
                A::slot(byte).ok_or(TrieError::InvalidSymbol {
                    byte,
                    position,
                    alphabet: A::NAME,
                })
            })
            .collect()
    }

    /// Follow `slots` from the root.
    fn walk(&self, slots: &[usize]) -> Option<Handle> {
        slots.iter().try_fold(Handle::ROOT, |node, &slot| {
            let child = self.arena.child(node, slot);
            (!child.is_null()).then_some(child)
        })
    }

    /// Follow `key` from the root; bytes outside the alphabet break the path.
    fn locate(&self, key: &[u8]) -> Option<Handle> {
        key.iter().try_fold(Handle::ROOT, |node, &byte| {
            let child = self.arena.child(node, A::slot(byte)?);
            (!child.is_null()).then_some(child)
        })
    }

    /// Insert one instance of `key`.
    ///
    /// Fails without modifying the trie if `key` contains a byte outside the
    /// alphabet, or if the arena cannot fit the nodes the key needs.
    pub fn insert(&mut self, key: impl AsRef<[u8]>) -> Result<(), TrieError> {
        self.insert_many(key, 1)
    }

    /// Insert `times` instances of `key` in one walk.
    ///
    /// Equivalent to calling [`Trie::insert`] `times` times, at the cost of a
    /// single insertion. `times == 0` only validates the key.
    pub fn insert_many(&mut self, key: impl AsRef<[u8]>, times: usize) -> Result<(), TrieError> {
        let slots = Self::slots(key.as_ref())?;
        if times == 0 {
            return Ok(());
        }

        // Count the nodes this key still needs before touching any counter.
        let mut node = Handle::ROOT;
        let mut matched = 0;
        for &slot in &slots {
            let child = self.arena.child(node, slot);
            if child.is_null() {
                break;
            }
            node = child;
            matched += 1;
        }
        let required = slots.len() - matched;
        let available = self.arena.available();
        if required > available {
            tracing::warn!(
                capacity = self.arena.capacity(),
                required,
                available,
                "trie arena exhausted"
            );
            return Err(TrieError::CapacityExhausted {
                capacity: self.arena.capacity(),
                required,
                available,
            });
        }

        let mut node = Handle::ROOT;
        self.arena.add_pass(node, times);
        for &slot in &slots {
            let mut child = self.arena.child(node, slot);
            if child.is_null() {
                child = self.arena.allocate()?;
                self.arena.set_child(node, slot, child);
            }
            self.arena.add_pass(child, times);
            node = child;
        }
        self.arena.add_end(node, times);
        Ok(())
    }

    /// Number of live instances of exactly `key`.
    pub fn search(&self, key: impl AsRef<[u8]>) -> usize {
        self.locate(key.as_ref()).map_or(0, |h| self.arena.end(h))
    }

    /// Check if at least one instance of `key` is stored.
    pub fn contains(&self, key: impl AsRef<[u8]>) -> bool {
        self.search(key) > 0
    }

    /// Number of live instances of keys starting with `prefix`, keys equal
    /// to `prefix` included.
    pub fn prefix_count(&self, prefix: impl AsRef<[u8]>) -> usize {
        self.locate(prefix.as_ref()).map_or(0, |h| self.arena.pass(h))
    }

    /// Remove one instance of `key`.
    ///
    /// Returns `false`, and changes nothing, if `key` is not stored.
    pub fn delete(&mut self, key: impl AsRef<[u8]>) -> bool {
        let Ok(slots) = Self::slots(key.as_ref()) else {
            return false;
        };
        match self.walk(&slots) {
            Some(h) if self.arena.end(h) > 0 => {}
            _ => return false,
        }

        let mut node = Handle::ROOT;
        self.arena.dec_pass(node);
        for &slot in &slots {
            let child = self.arena.child(node, slot);
            if self.arena.dec_pass(child) == 0 {
                // Nothing below `child` is live any more.
                self.arena.set_child(node, slot, Handle::NULL);
                if self.config.reclaim_severed {
                    let recycled = self.arena.reclaim(child);
                    tracing::trace!(recycled, "reclaimed severed subtree");
                }
                return true;
            }
            node = child;
        }
        self.arena.dec_end(node);
        true
    }

    /// Drop every key and reset the arena for reuse.
    ///
    /// Runs in time proportional to the nodes allocated since the last
    /// clear; the backing storage is kept.
    pub fn clear(&mut self) {
        let reset = self.arena.clear();
        tracing::debug!(alphabet = A::NAME, reset, "cleared trie arena");
    }

    /// Number of live insertions.
    pub fn len(&self) -> usize {
        self.arena.pass(Handle::ROOT)
    }

    /// Check if no keys are stored.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Total node capacity, root included.
    pub fn capacity(&self) -> usize {
        self.arena.capacity()
    }

    /// Nodes currently holding data, root included.
    pub fn nodes_in_use(&self) -> usize {
        self.arena.in_use()
    }

    /// Arena usage snapshot.
    pub fn stats(&self) -> TrieStats {
        TrieStats {
            capacity: self.arena.capacity(),
            nodes_in_use: self.arena.in_use(),
            free_nodes: self.arena.free_len(),
            available: self.arena.available(),
            live_keys: self.len(),
        }
    }

    /// Cursor positioned at the root.
    pub fn cursor(&self) -> Cursor<'_, A> {
        Cursor::root(self)
    }

    /// Every live key starting with `prefix`, with its multiplicity.
    ///
    /// Keys come out in slot order (lexicographic for the built-in
    /// alphabets), spelled with the alphabet's canonical bytes.
    pub fn keys_with_prefix(&self, prefix: impl AsRef<[u8]>) -> Vec<(Vec<u8>, usize)> {
        let prefix = prefix.as_ref();
        let mut out = Vec::new();
        let Some(start) = self.locate(prefix) else {
            return out;
        };

        // `locate` succeeded, so every prefix byte has a slot.
        let mut key: Vec<u8> = prefix.iter().filter_map(|&b| A::slot(b).map(A::byte)).collect();
        let base = key.len();

        // (node, depth, byte on the edge into node)
        let mut stack: SmallVec<[(Handle, usize, u8); 32]> = SmallVec::new();
        stack.push((start, base, 0));
        while let Some((node, depth, byte)) = stack.pop() {
            if depth > base {
                key.truncate(depth - 1);
                key.push(byte);
            }
            let end = self.arena.end(node);
            if end > 0 {
                out.push((key.clone(), end));
            }
            for (slot, &child) in self.arena.children(node).iter().enumerate().rev() {
                if !child.is_null() {
                    stack.push((child, depth + 1, A::byte(slot)));
                }
            }
        }
        out
    }
}
