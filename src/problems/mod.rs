//! Classic exercises built on the counting trie.
//!
//! Each problem owns a [`Trie`](crate::Trie) over the alphabet that fits its
//! keys and drives it through the public API only:
//! - [`phone_list`]: reject phone lists where one number prefixes another
//!   (10-ary, reuses one arena across datasets via `clear`)
//! - [`max_xor`]: best XOR partner queries over a set of `u32` (2-ary,
//!   32-level fixed-depth keys, severed subtrees recycled)
//! - [`word_filter`]: mask sensitive words in free text (26-ary,
//!   longest match from every position)
//! - [`t9`]: T9 predictive text where word frequency is key multiplicity

pub mod max_xor;
pub mod phone_list;
pub mod t9;
pub mod word_filter;

pub use max_xor::{max_pair_xor, XorSet};
pub use phone_list::{is_consistent, PhoneList};
pub use t9::T9;
pub use word_filter::WordFilter;

/// Arena size for storing `keys` once each: one node per byte plus the root.
pub(crate) fn capacity_for<S: AsRef<[u8]>>(keys: impl IntoIterator<Item = S>) -> usize {
    1 + keys.into_iter().map(|k| k.as_ref().len()).sum::<usize>()
}
