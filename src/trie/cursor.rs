//! Read-only traversal handle.

use crate::alphabet::Alphabet;
use crate::arena::Handle;

use super::Trie;

/// A position in a [`Trie`], borrowed from it.
///
/// Cursors let callers drive their own traversal policy (greedy bit choice,
/// longest match, multi-branch expansion) one symbol at a time while the
/// engine keeps ownership of the nodes.
pub struct Cursor<'a, A: Alphabet> {
    trie: &'a Trie<A>,
    node: Handle,
    depth: usize,
}

// Manual impls: derives would require `A: Clone`.
impl<A: Alphabet> Clone for Cursor<'_, A> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<A: Alphabet> Copy for Cursor<'_, A> {}

impl<A: Alphabet> std::fmt::Debug for Cursor<'_, A> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Cursor")
            .field("node", &self.node)
            .field("depth", &self.depth)
            .finish()
    }
}

impl<'a, A: Alphabet> Cursor<'a, A> {
    pub(super) fn root(trie: &'a Trie<A>) -> Self {
        Self {
            trie,
            node: Handle::ROOT,
            depth: 0,
        }
    }

    /// Follow the edge labelled `byte`.
    ///
    /// Returns `None` if the edge is absent or the byte is outside the alphabet.
    #[inline]
    pub fn step(self, byte: u8) -> Option<Self> {
        A::slot(byte).and_then(|slot| self.step_slot(slot))
    }

    /// Follow the edge at `slot`.
    ///
    /// # Panics
    /// Panics if `slot >= A::WIDTH`.
    #[inline]
    pub fn step_slot(self, slot: usize) -> Option<Self> {
        assert!(slot < A::WIDTH, "slot {slot} outside {} alphabet", A::NAME);
        let child = self.trie.arena.child(self.node, slot);
        (!child.is_null()).then(|| Self {
            trie: self.trie,
            node: child,
            depth: self.depth + 1,
        })
    }

    /// Follow every byte of `key` in turn.
    pub fn walk(self, key: &[u8]) -> Option<Self> {
        key.iter().try_fold(self, |c, &b| c.step(b))
    }

    /// Live keys routed through this node.
    #[inline]
    pub fn pass(&self) -> usize {
        self.trie.arena.pass(self.node)
    }

    /// Live keys ending exactly here.
    #[inline]
    pub fn end(&self) -> usize {
        self.trie.arena.end(self.node)
    }

    /// Number of symbols consumed from the root.
    #[inline]
    pub fn depth(&self) -> usize {
        self.depth
    }

    /// Arena handle of the current node.
    #[inline]
    pub fn handle(&self) -> Handle {
        self.node
    }
}

#[cfg(test)]
mod tests {
    use crate::{Binary, Lowercase, Trie};

    #[test]
    fn test_step_and_counters() {
        let mut t: Trie<Lowercase> = Trie::new(16);
        t.insert("to").unwrap();
        t.insert("tea").unwrap();

        let c = t.cursor();
        assert_eq!(c.pass(), 2);
        let tc = c.step(b't').unwrap();
        assert_eq!(tc.depth(), 1);
        assert_eq!(tc.pass(), 2);
        assert_eq!(tc.end(), 0);
        assert_eq!(tc.step(b'o').unwrap().end(), 1);
        assert!(tc.step(b'x').is_none());
        assert!(tc.step(b'T').is_none());
        assert_eq!(c.walk(b"tea").map(|c| c.end()), Some(1));
        assert!(c.walk(b"team").is_none());
    }

    #[test]
    fn test_step_slot_binary() {
        let mut t: Trie<Binary> = Trie::new(8);
        t.insert([1u8, 0]).unwrap();
        let c = t.cursor();
        assert!(c.step_slot(0).is_none());
        let one = c.step_slot(1).unwrap();
        assert_eq!(one.step_slot(0).unwrap().end(), 1);
    }

    #[test]
    #[should_panic]
    fn test_step_slot_out_of_range() {
        let t: Trie<Binary> = Trie::new(2);
        let _ = t.cursor().step_slot(2);
    }
}
