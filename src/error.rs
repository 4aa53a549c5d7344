//! Error type shared by the arena and the trie engine.

/// Errors reported by [`Trie`](crate::Trie) construction and insertion.
///
/// Searching or deleting keys that are not stored is never an error; those
/// operations simply report zero or do nothing.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum TrieError {
    /// The arena must hold at least the root node.
    #[error("capacity must be at least 1 (the root node)")]
    ZeroCapacity,

    /// Node handles are 32-bit, so the arena cannot grow past `u32::MAX - 1` nodes.
    #[error("capacity {requested} exceeds the maximum of {max} nodes")]
    CapacityTooLarge {
        /// Capacity asked for.
        requested: usize,
        /// Largest supported capacity.
        max: usize,
    },

    /// The key needs more fresh nodes than the arena has left.
    ///
    /// This is a sizing fault on the caller's side: the arena must be built
    /// with room for one node per key byte inserted between clears.
    #[error("arena exhausted: key needs {required} new nodes but only {available} of {capacity} remain")]
    CapacityExhausted {
        /// Total node capacity of the arena.
        capacity: usize,
        /// Nodes the rejected key would have allocated.
        required: usize,
        /// Nodes still available.
        available: usize,
    },

    /// A key byte has no slot in the trie's alphabet.
    #[error("byte {byte:#04x} at position {position} is not in the {alphabet} alphabet")]
    InvalidSymbol {
        /// Offending byte.
        byte: u8,
        /// Index of the byte within the key.
        position: usize,
        /// Name of the alphabet that rejected it.
        alphabet: &'static str,
    },
}
