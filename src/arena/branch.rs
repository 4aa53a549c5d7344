//! Branching table: one fixed-width row of child handles per node.
//!
//! Rows live back to back in a single `Vec`, so the children of handle `h`
//! occupy `h * width .. (h + 1) * width`. Row 0 belongs to the null handle
//! and is never written.

use super::Handle;

/// Contiguous table of child handles, `width` slots per node.
#[derive(Debug, Clone)]
pub struct BranchTable {
    slots: Vec<Handle>,
    width: usize,
}

impl BranchTable {
    /// Allocate `rows` all-absent rows of `width` slots each.
    pub fn new(rows: usize, width: usize) -> Self {
        debug_assert!(width > 0);
        Self {
            slots: vec![Handle::NULL; rows * width],
            width,
        }
    }

    /// Slots per row.
    #[inline]
    pub fn width(&self) -> usize {
        self.width
    }

    #[inline]
    fn index(&self, node: Handle, slot: usize) -> usize {
        debug_assert!(slot < self.width, "slot {slot} out of range");
        node.as_usize() * self.width + slot
    }

    /// Child of `node` at `slot`, or [`Handle::NULL`].
    #[inline]
    pub fn get(&self, node: Handle, slot: usize) -> Handle {
        self.slots[self.index(node, slot)]
    }

    /// Point `node`'s `slot` at `child` (or sever it with [`Handle::NULL`]).
    #[inline]
    pub fn set(&mut self, node: Handle, slot: usize, child: Handle) {
        let i = self.index(node, slot);
        self.slots[i] = child;
    }

    /// The whole row of `node`.
    #[inline]
    pub fn row(&self, node: Handle) -> &[Handle] {
        let start = node.as_usize() * self.width;
        &self.slots[start..start + self.width]
    }

    /// Mark every slot of `node` absent.
    #[inline]
    pub fn reset_row(&mut self, node: Handle) {
        let start = node.as_usize() * self.width;
        self.slots[start..start + self.width].fill(Handle::NULL);
    }
}
