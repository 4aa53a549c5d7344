//! # tally-trie
//!
//! An arena-backed prefix tree over small fixed alphabets, with counted
//! insertion and deletion.
//!
//! - **Fixed arena**: every node lives in storage sized once at build time
//!   and addressed by a 32-bit handle; no per-node allocation.
//! - **Counting**: each node tracks how many keys pass through it and how
//!   many end on it, so the same key can be stored many times and removed
//!   one instance at a time.
//! - **Bulk reset**: [`Trie::clear`] wipes only the nodes actually used and
//!   keeps the storage for the next dataset.
//!
//! ## Example
//!
//! ```rust
//! use tally_trie::{Digits, Trie};
//!
//! let mut t: Trie<Digits> = Trie::new(64);
//! t.insert("911")?;
//! t.insert("97625999")?;
//! t.insert("91125426")?;
//!
//! assert_eq!(t.prefix_count("911"), 2);
//! assert_eq!(t.search("911"), 1);
//!
//! t.clear();
//! assert!(t.is_empty());
//! # Ok::<(), tally_trie::TrieError>(())
//! ```
//!
//! ## Problems
//!
//! The [`problems`] module holds classic exercises built on the engine:
//! phone-list prefix conflicts, maximum XOR queries, sensitive-word
//! filtering and T9 prediction.

#![deny(unsafe_code)]

pub mod alphabet;
pub mod arena;
pub mod error;
pub mod problems;
pub mod trie;

pub use alphabet::{Alphabet, Binary, Digits, Lowercase};
pub use error::TrieError;
pub use trie::{Cursor, Trie, TrieConfig, TrieStats};

#[cfg(test)]
mod proptests;
