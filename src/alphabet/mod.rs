//! Fixed alphabets and their byte-to-slot mappings.
//!
//! Every trie node carries one child slot per alphabet symbol, so the
//! alphabet decides the branching width of the whole arena:
//! - [`Lowercase`]: `a`..=`z`, 26 slots (dictionary and prefix problems)
//! - [`Digits`]: `0`..=`9`, 10 slots (phone numbers)
//! - [`Binary`]: `0`/`1`, 2 slots (fixed-depth bit keys for XOR queries)

/// A small, enumerable alphabet.
///
/// `slot` and `byte` must be inverse on `0..WIDTH`: for every slot `s`,
/// `slot(byte(s)) == Some(s)`.
pub trait Alphabet {
    /// Number of child slots per node.
    const WIDTH: usize;

    /// Human-readable name, used in error messages.
    const NAME: &'static str;

    /// Slot index for `byte`, or `None` if the byte is outside the alphabet.
    fn slot(byte: u8) -> Option<usize>;

    /// Canonical byte for `slot`.
    fn byte(slot: usize) -> u8;
}

/// ASCII lowercase letters.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Lowercase;

impl Alphabet for Lowercase {
    const WIDTH: usize = 26;
    const NAME: &'static str = "lowercase";

    #[inline]
    fn slot(byte: u8) -> Option<usize> {
        byte.is_ascii_lowercase().then(|| (byte - b'a') as usize)
    }

    #[inline]
    fn byte(slot: usize) -> u8 {
        debug_assert!(slot < Self::WIDTH);
        b'a' + slot as u8
    }
}

/// ASCII decimal digits.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Digits;

impl Alphabet for Digits {
    const WIDTH: usize = 10;
    const NAME: &'static str = "digit";

    #[inline]
    fn slot(byte: u8) -> Option<usize> {
        byte.is_ascii_digit().then(|| (byte - b'0') as usize)
    }

    #[inline]
    fn byte(slot: usize) -> u8 {
        debug_assert!(slot < Self::WIDTH);
        b'0' + slot as u8
    }
}

/// Binary digits.
///
/// Accepts raw bit values (`0`, `1`) as well as ASCII (`b'0'`, `b'1'`), so
/// both `[1, 0, 1]` and `b"101"` spell the same key. Keys are rendered back
/// as ASCII.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Binary;

impl Binary {
    /// Big-endian bit key of `value`, `bits` symbols long (most significant first).
    ///
    /// # Panics
    /// Panics if `bits > 32`.
    pub fn key(value: u32, bits: usize) -> Vec<u8> {
        assert!(bits <= 32, "a u32 has at most 32 bits");
        (0..bits).rev().map(|i| ((value >> i) & 1) as u8).collect()
    }
}

impl Alphabet for Binary {
    const WIDTH: usize = 2;
    const NAME: &'static str = "binary";

    #[inline]
    fn slot(byte: u8) -> Option<usize> {
        match byte {
            0 | b'0' => Some(0),
            1 | b'1' => Some(1),
            _ => None,
        }
    }

    #[inline]
    fn byte(slot: usize) -> u8 {
        debug_assert!(slot < Self::WIDTH);
        b'0' + slot as u8
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_inverse<A: Alphabet>() {
        for s in 0..A::WIDTH {
            assert_eq!(A::slot(A::byte(s)), Some(s), "{} slot {s}", A::NAME);
        }
    }

    #[test]
    fn test_slot_byte_inverse() {
        assert_inverse::<Lowercase>();
        assert_inverse::<Digits>();
        assert_inverse::<Binary>();
    }

    #[test]
    fn test_rejects_foreign_bytes() {
        assert_eq!(Lowercase::slot(b'A'), None);
        assert_eq!(Lowercase::slot(b'{'), None);
        assert_eq!(Digits::slot(b'a'), None);
        assert_eq!(Binary::slot(2), None);
        assert_eq!(Binary::slot(b'2'), None);
    }

    #[test]
    fn test_binary_accepts_raw_and_ascii() {
        assert_eq!(Binary::slot(1), Binary::slot(b'1'));
        assert_eq!(Binary::slot(0), Binary::slot(b'0'));
    }

    #[test]
    fn test_binary_key() {
        assert_eq!(Binary::key(5, 4), vec![0, 1, 0, 1]);
        assert_eq!(Binary::key(u32::MAX, 32), vec![1; 32]);
        assert!(Binary::key(7, 0).is_empty());
    }
}
