use crate::consts::{MAX_MAP_AREA, MAX_MAP_SIZE};
use crate::errors::FinderError;
use crate::geometry::map_location::MapLocation;
use log::{debug, trace};
use more_asserts::debug_assert_lt;
use num_traits::{PrimInt, Unsigned};
use std::fmt::{Display, Formatter};

/// Set of marked cells of a `max_side` x `max_side` map with one bit per cell, packed into words of type `W`.
///
/// Cell `(x, y)` is stored in bit `x * max_side + y`. With `b` bits per word, bit `i` is bit `i % b` of word `i / b`.
/// Bits past the last cell are always zero.
///
/// Coordinates outside of `[0, max_side)` are rejected with `FinderError::OutOfBounds` and never touch the storage.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct VisitationSet<W = u32> {
    max_side: u8,
    words: Vec<W>,
}

impl VisitationSet {
    /// Creates an empty set on `u32` words.
    pub fn new(max_side: usize) -> Result<Self, FinderError> {
        Self::with_side(max_side)
    }
}

impl<W> VisitationSet<W>
where
    W: PrimInt + Unsigned,
{
    pub fn with_side(max_side: usize) -> Result<Self, FinderError> {
        if max_side == 0 || max_side > MAX_MAP_SIZE as usize {
            return Err(FinderError::InvalidSide(max_side));
        }
        let words = vec![W::zero(); (max_side * max_side).div_ceil(Self::word_bits())];
        debug!(
            "Created a {}x{} visitation set in {} {}-bit words.",
            max_side,
            max_side,
            words.len(),
            Self::word_bits()
        );
        Ok(VisitationSet {
            max_side: max_side as u8,
            words,
        })
    }

    #[inline]
    pub fn max_side(&self) -> u8 {
        self.max_side
    }

    #[inline]
    pub fn area(&self) -> usize {
        (self.max_side as usize) * (self.max_side as usize)
    }

    /// Unmarks all cells without reallocating the storage.
    pub fn reset(&mut self) {
        self.words.fill(W::zero());
        trace!("Reset the {}x{} visitation set.", self.max_side, self.max_side);
    }

    /// Marks the cell. Marking it again has no effect.
    pub fn add(&mut self, x: i32, y: i32) -> Result<(), FinderError> {
        let index = self.index(x, y)?;
        self.set_bit(index);
        Ok(())
    }

    pub fn check(&self, x: i32, y: i32) -> Result<bool, FinderError> {
        let index = self.index(x, y)?;
        Ok(self.get_bit(index))
    }

    /// Marks the cell and returns whether it was not marked before.
    pub fn insert(&mut self, x: i32, y: i32) -> Result<bool, FinderError> {
        let index = self.index(x, y)?;
        let was_marked = self.get_bit(index);
        self.set_bit(index);
        Ok(!was_marked)
    }

    /// Unmarks the cell and returns whether it was marked before.
    pub fn remove(&mut self, x: i32, y: i32) -> Result<bool, FinderError> {
        let index = self.index(x, y)?;
        let was_marked = self.get_bit(index);
        let (word, mask) = Self::word_and_mask(index);
        self.words[word] = self.words[word] & !mask;
        Ok(was_marked)
    }

    #[inline]
    pub fn add_location(&mut self, loc: MapLocation) -> Result<(), FinderError> {
        self.add(loc.x() as i32, loc.y() as i32)
    }

    #[inline]
    pub fn check_location(&self, loc: MapLocation) -> Result<bool, FinderError> {
        self.check(loc.x() as i32, loc.y() as i32)
    }

    /// Number of marked cells.
    pub fn len(&self) -> usize {
        self.words.iter().map(|&word| word.count_ones() as usize).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.words.iter().all(|&word| word == W::zero())
    }

    /// Marked cells in the order of their bit indices, i.e., by `x`, then by `y`.
    pub fn iter(&self) -> impl Iterator<Item = MapLocation> + '_ {
        let bits = Self::word_bits();
        let side = self.max_side as usize;
        self.words
            .iter()
            .enumerate()
            .flat_map(move |(word_index, &word)| {
                let mut rest = word;
                std::iter::from_fn(move || {
                    if rest == W::zero() {
                        None
                    } else {
                        let offset = rest.trailing_zeros() as usize;
                        // Clears the lowest set bit.
                        rest = rest & (rest - W::one());
                        Some(word_index * bits + offset)
                    }
                })
            })
            // Padding bits are never set, so every index is below `max_side * max_side`.
            .map(move |index| unsafe { MapLocation::unchecked_new((index / side) as u8, (index % side) as u8) })
    }

    #[inline]
    fn word_bits() -> usize {
        W::zero().count_zeros() as usize
    }

    #[inline]
    fn index(&self, x: i32, y: i32) -> Result<usize, FinderError> {
        let side = self.max_side as i32;
        if 0 <= x && x < side && 0 <= y && y < side {
            Ok((x as usize) * (self.max_side as usize) + (y as usize))
        } else {
            Err(FinderError::OutOfBounds {
                x,
                y,
                max_side: self.max_side,
            })
        }
    }

    #[inline]
    fn word_and_mask(index: usize) -> (usize, W) {
        let bits = Self::word_bits();
        (index / bits, W::one() << (index % bits))
    }

    #[inline]
    fn get_bit(&self, index: usize) -> bool {
        debug_assert_lt!(index, self.area());
        let (word, mask) = Self::word_and_mask(index);
        self.words[word] & mask != W::zero()
    }

    #[inline]
    fn set_bit(&mut self, index: usize) {
        debug_assert_lt!(index, self.area());
        let (word, mask) = Self::word_and_mask(index);
        self.words[word] = self.words[word] | mask;
    }
}

impl<W> Default for VisitationSet<W>
where
    W: PrimInt + Unsigned,
{
    /// An empty set covering the largest map.
    fn default() -> Self {
        VisitationSet {
            max_side: MAX_MAP_SIZE,
            words: vec![W::zero(); MAX_MAP_AREA.div_ceil(Self::word_bits())],
        }
    }
}

impl<W> Display for VisitationSet<W>
where
    W: PrimInt + Unsigned,
{
    /// Draws the map with north up, `#` for marked cells and `.` for the rest.
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let side = self.max_side as usize;
        for y in (0..side).rev() {
            for x in 0..side {
                let c = if self.get_bit(x * side + y) { '#' } else { '.' };
                write!(f, "{}", c)?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
