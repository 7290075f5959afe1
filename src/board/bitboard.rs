//! Bitboard implementation for fast disc counting

use super::{Pos, TOTAL_CELLS};

const _: () = assert!(TOTAL_CELLS <= 64);

/// Bitboard representation of a set of cells
/// A single u64 covers the 64 cells, bit index = `Pos::to_index`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Bitboard {
    bits: u64,
}

impl Bitboard {
    /// Create empty bitboard
    pub const fn new() -> Self {
        Self { bits: 0 }
    }

    /// Build from raw bits
    pub const fn from_bits(bits: u64) -> Self {
        Self { bits }
    }

    /// Raw bits
    #[inline]
    pub const fn bits(self) -> u64 {
        self.bits
    }

    /// Set a bit at position
    #[inline]
    pub fn set(&mut self, pos: Pos) {
        self.bits |= 1u64 << pos.to_index();
    }

    /// Clear a bit at position
    #[inline]
    pub fn clear(&mut self, pos: Pos) {
        self.bits &= !(1u64 << pos.to_index());
    }

    /// Check if bit is set at position
    #[inline]
    pub fn get(&self, pos: Pos) -> bool {
        (self.bits >> pos.to_index()) & 1 == 1
    }

    /// Count total set bits (popcount)
    #[inline]
    pub fn count(&self) -> u32 {
        self.bits.count_ones()
    }

    /// Check if empty
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.bits == 0
    }

    #[inline]
    pub fn union(self, other: Bitboard) -> Bitboard {
        Bitboard::from_bits(self.bits | other.bits)
    }

    #[inline]
    pub fn difference(self, other: Bitboard) -> Bitboard {
        Bitboard::from_bits(self.bits & !other.bits)
    }

    /// Iterate over set bit positions in row-major order
    pub fn iter_ones(&self) -> BitboardIter {
        BitboardIter { current_word: self.bits }
    }
}

/// Iterator over set bits in a Bitboard
pub struct BitboardIter {
    current_word: u64,
}

impl Iterator for BitboardIter {
    type Item = Pos;

    fn next(&mut self) -> Option<Self::Item> {
        if self.current_word == 0 {
            return None;
        }

        // Get position of lowest set bit
        let idx = self.current_word.trailing_zeros() as usize;

        // Clear the bit we just found
        self.current_word &= self.current_word - 1;

        Some(Pos::from_index(idx))
    }
}

impl FromIterator<Pos> for Bitboard {
    fn from_iter<I: IntoIterator<Item = Pos>>(iter: I) -> Self {
        let mut bb = Bitboard::new();
        for pos in iter {
            bb.set(pos);
        }
        bb
    }
}
