//! Fixed-capacity node arena.
//!
//! All node storage is allocated once, up front, and nodes are referenced
//! by 32-bit [`Handle`]s rather than pointers:
//! - handle `0` is the null handle ("no child")
//! - handle `1` is the root, which always exists
//! - fresh handles are carved off sequentially by a bump cursor
//!
//! Individual nodes are not freed on their own. [`NodeArena::clear`] resets
//! every node handed out since the last clear and rewinds the cursor, so the
//! same backing storage serves the next dataset. Optionally, whole severed
//! subtrees can be recycled through a free list with [`NodeArena::reclaim`].

mod branch;

pub use branch::BranchTable;

use smallvec::SmallVec;

use crate::error::TrieError;

/// Largest supported node capacity (handles are `u32`, `0` is reserved).
pub const MAX_CAPACITY: usize = (u32::MAX - 1) as usize;

/// Index of a node inside a [`NodeArena`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[repr(transparent)]
pub struct Handle(u32);

impl Handle {
    /// The absent node.
    pub const NULL: Handle = Handle(0);
    /// The permanent root.
    pub const ROOT: Handle = Handle(1);

    /// Wrap a raw index.
    #[inline]
    pub const fn from_raw(raw: u32) -> Self {
        Self(raw)
    }

    /// Check if this is the null handle.
    #[inline]
    pub fn is_null(self) -> bool {
        self.0 == 0
    }

    /// Raw index.
    #[inline]
    pub fn as_u32(self) -> u32 {
        self.0
    }

    #[inline]
    pub(crate) fn as_usize(self) -> usize {
        self.0 as usize
    }
}

/// Pre-allocated node storage: a [`BranchTable`] plus `pass`/`end` counters.
#[derive(Debug, Clone)]
pub struct NodeArena {
    branches: BranchTable,
    pass: Vec<usize>,
    end: Vec<usize>,
    capacity: usize,
    /// Last handle handed out by the bump allocator.
    cursor: u32,
    free: Vec<Handle>,
}

impl NodeArena {
    /// Build an arena holding up to `capacity` nodes (root included), each
    /// with `width` child slots.
    pub fn new(capacity: usize, width: usize) -> Result<Self, TrieError> {
        if capacity == 0 {
            return Err(TrieError::ZeroCapacity);
        }
        if capacity > MAX_CAPACITY {
            return Err(TrieError::CapacityTooLarge {
                requested: capacity,
                max: MAX_CAPACITY,
            });
        }

        // Row 0 backs the null handle.
        let rows = capacity + 1;
        Ok(Self {
            branches: BranchTable::new(rows, width),
            pass: vec![0; rows],
            end: vec![0; rows],
            capacity,
            cursor: Handle::ROOT.0,
            free: Vec::new(),
        })
    }

    /// Total node capacity, root included.
    #[inline]
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Child slots per node.
    #[inline]
    pub fn width(&self) -> usize {
        self.branches.width()
    }

    /// Nodes currently holding trie data (root included, free list excluded).
    #[inline]
    pub fn in_use(&self) -> usize {
        self.cursor as usize - self.free.len()
    }

    /// Handles waiting on the free list.
    #[inline]
    pub fn free_len(&self) -> usize {
        self.free.len()
    }

    /// Nodes that can still be allocated before the next clear.
    #[inline]
    pub fn available(&self) -> usize {
        self.free.len() + (self.capacity - self.cursor as usize)
    }

    /// Hand out a zeroed node.
    ///
    /// Recycled handles are preferred over fresh ones.
    pub fn allocate(&mut self) -> Result<Handle, TrieError> {
        if let Some(h) = self.free.pop() {
            return Ok(h);
        }
        if self.cursor as usize >= self.capacity {
            return Err(TrieError::CapacityExhausted {
                capacity: self.capacity,
                required: 1,
                available: 0,
            });
        }
        self.cursor += 1;
        Ok(Handle(self.cursor))
    }

    /// Child of `node` at `slot`, or [`Handle::NULL`].
    #[inline]
    pub fn child(&self, node: Handle, slot: usize) -> Handle {
        self.branches.get(node, slot)
    }

    /// Wire (or, with [`Handle::NULL`], sever) the edge at `node`'s `slot`.
    #[inline]
    pub(crate) fn set_child(&mut self, node: Handle, slot: usize, child: Handle) {
        self.branches.set(node, slot, child);
    }

    /// All child slots of `node`, in slot order.
    #[inline]
    pub fn children(&self, node: Handle) -> &[Handle] {
        self.branches.row(node)
    }

    /// Live keys routed through `node`.
    #[inline]
    pub fn pass(&self, node: Handle) -> usize {
        self.pass[node.as_usize()]
    }

    /// Live keys ending at `node`.
    #[inline]
    pub fn end(&self, node: Handle) -> usize {
        self.end[node.as_usize()]
    }

    /// Add `n` to `node`'s pass count.
    #[inline]
    pub(crate) fn add_pass(&mut self, node: Handle, n: usize) {
        self.pass[node.as_usize()] += n;
    }

    /// Add `n` to `node`'s end count.
    #[inline]
    pub(crate) fn add_end(&mut self, node: Handle, n: usize) {
        self.end[node.as_usize()] += n;
    }

    /// Decrement `pass` and return the new value.
    #[inline]
    pub(crate) fn dec_pass(&mut self, node: Handle) -> usize {
        let p = &mut self.pass[node.as_usize()];
        debug_assert!(*p > 0, "pass underflow at {node:?}");
        *p -= 1;
        *p
    }

    /// Decrement `end`.
    #[inline]
    pub(crate) fn dec_end(&mut self, node: Handle) {
        let e = &mut self.end[node.as_usize()];
        debug_assert!(*e > 0, "end underflow at {node:?}");
        *e -= 1;
    }

    #[inline]
    fn reset(&mut self, node: Handle) {
        self.branches.reset_row(node);
        self.pass[node.as_usize()] = 0;
        self.end[node.as_usize()] = 0;
    }

    /// Reset every node handed out since the last clear and rewind the cursor.
    ///
    /// Cost is proportional to the cursor, not to the capacity. Returns the
    /// number of rows reset.
    pub fn clear(&mut self) -> usize {
        let used = self.cursor;
        for raw in Handle::ROOT.0..=used {
            self.reset(Handle(raw));
        }
        self.cursor = Handle::ROOT.0;
        self.free.clear();
        used as usize
    }

    /// Zero the subtree rooted at `top` and push its handles onto the free list.
    ///
    /// `top` must already be detached from its parent. Returns the number of
    /// nodes recycled.
    pub fn reclaim(&mut self, top: Handle) -> usize {
        debug_assert!(!top.is_null() && top != Handle::ROOT);

        let mut stack: SmallVec<[Handle; 32]> = SmallVec::new();
        stack.push(top);
        let mut n = 0;
        while let Some(node) = stack.pop() {
            stack.extend(self.branches.row(node).iter().copied().filter(|h| !h.is_null()));
            self.reset(node);
            self.free.push(node);
            n += 1;
        }
        n
    }
}
