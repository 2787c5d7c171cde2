// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! A shrinkable two-dimensional field.
//!
//! One contiguous, row-major buffer whose physical stride is fixed at
//! construction.  The *live* width and height start out equal to the
//! allocation and only ever go down, one column or row at a time, as
//! seams are carved out.  Positions at or beyond the live dimensions
//! are never handed out again.

use crate::error::{CarveError, CarveResult};
use std::ops::{Index, IndexMut};

/// An addressable two-dimensional field holding either pixels (the
/// grid being carved) or plain `u32`s (an energy map).
#[derive(Debug, Clone)]
pub struct TwoDimensionalMap<P: Default + Copy> {
    width: u32,
    height: u32,
    stride: usize,
    data: Vec<P>,
}

impl<P: Default + Copy> TwoDimensionalMap<P> {
    /// Allocate a map with every cell set to `P::default()`.  This is
    /// all-or-nothing: either the whole buffer exists or an error is
    /// returned.
    pub fn new(width: u32, height: u32) -> CarveResult<Self> {
        if width == 0 || height == 0 {
            return Err(CarveError::EmptyGrid { width, height });
        }
        let failed = || CarveError::AllocationFailure { width, height };
        let size = (width as usize)
            .checked_mul(height as usize)
            .ok_or_else(failed)?;
        let mut data = Vec::new();
        data.try_reserve_exact(size).map_err(|_| failed())?;
        data.resize(size, P::default());
        Ok(TwoDimensionalMap {
            width,
            height,
            stride: width as usize,
            data,
        })
    }

    // Absolutely, the number one name of this game is keep the index
    // math in a singular location and never, ever mess with it.  Note
    // that the stride is the *allocated* width, not the live one.
    fn get_index(&self, x: u32, y: u32) -> usize {
        (y as usize) * self.stride + (x as usize)
    }

    fn check_bounds(&self, x: u32, y: u32) {
        assert!(
            x < self.width && y < self.height,
            "({}, {}) is outside the live {}x{} area",
            x,
            y,
            self.width,
            self.height
        );
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn dimensions(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    /// Get the value at a single address, if it is inside the live area.
    pub fn get(&self, x: u32, y: u32) -> Option<&P> {
        if x < self.width && y < self.height {
            Some(&self.data[self.get_index(x, y)])
        } else {
            None
        }
    }

    /// The live part of one row.
    pub fn row(&self, y: u32) -> &[P] {
        self.check_bounds(0, y);
        let start = self.get_index(0, y);
        &self.data[start..start + self.width as usize]
    }

    /// Every live value, row by row.
    pub fn values(&self) -> impl Iterator<Item = &P> + '_ {
        (0..self.height).flat_map(move |y| self.row(y).iter())
    }

    /// Drop the value at `(x, y)` by sliding the rest of row `y` one
    /// column to the left.  The live width is *not* changed; call
    /// `shrink_width` once every row has been shifted.
    pub(crate) fn close_row_gap(&mut self, x: u32, y: u32) {
        self.check_bounds(x, y);
        let start = self.get_index(x, y);
        let end = self.get_index(self.width - 1, y);
        self.data.copy_within(start + 1..=end, start);
    }

    /// Drop the value at `(x, y)` by sliding the rest of column `x` one
    /// row up.  The live height is *not* changed; see `shrink_height`.
    pub(crate) fn close_column_gap(&mut self, x: u32, y: u32) {
        self.check_bounds(x, y);
        for row in y..self.height - 1 {
            let (to, from) = (self.get_index(x, row), self.get_index(x, row + 1));
            self.data[to] = self.data[from];
        }
    }

    pub(crate) fn shrink_width(&mut self) {
        debug_assert!(self.width > 1);
        self.width -= 1;
    }

    pub(crate) fn shrink_height(&mut self) {
        debug_assert!(self.height > 1);
        self.height -= 1;
    }
}

impl<P: Default + Copy + PartialEq> PartialEq for TwoDimensionalMap<P> {
    /// Two maps are equal when their live areas are; whatever is left
    /// over past the live edge does not count.
    fn eq(&self, other: &Self) -> bool {
        self.dimensions() == other.dimensions() && self.values().eq(other.values())
    }
}

impl<P: Default + Copy + Eq> Eq for TwoDimensionalMap<P> {}

impl<P: Default + Copy> Index<(u32, u32)> for TwoDimensionalMap<P> {
    type Output = P;

    /// A convenience addressing mode for getting values.
    fn index(&self, (x, y): (u32, u32)) -> &P {
        self.check_bounds(x, y);
        let index = self.get_index(x, y);
        &self.data[index]
    }
}

impl<P: Default + Copy> IndexMut<(u32, u32)> for TwoDimensionalMap<P> {
    /// A convenience addressing mode for setting values.
    fn index_mut(&mut self, (x, y): (u32, u32)) -> &mut P {
        self.check_bounds(x, y);
        let index = self.get_index(x, y);
        &mut self.data[index]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn counting_map(width: u32, height: u32) -> TwoDimensionalMap<u32> {
        let mut map = TwoDimensionalMap::new(width, height).unwrap();
        for y in 0..height {
            for x in 0..width {
                map[(x, y)] = y * 10 + x;
            }
        }
        map
    }

    #[test]
    fn new_map_is_default_filled() {
        let map: TwoDimensionalMap<u32> = TwoDimensionalMap::new(3, 2).unwrap();
        assert_eq!(map.dimensions(), (3, 2));
        assert!(map.values().all(|v| *v == 0));
        assert_eq!(map.values().count(), 6);
    }

    #[test]
    fn zero_dimensions_are_refused() {
        assert!(matches!(
            TwoDimensionalMap::<u32>::new(0, 4),
            Err(CarveError::EmptyGrid { width: 0, height: 4 })
        ));
        assert!(matches!(
            TwoDimensionalMap::<u32>::new(4, 0),
            Err(CarveError::EmptyGrid { .. })
        ));
    }

    #[test]
    fn impossible_allocation_is_reported() {
        assert!(matches!(
            TwoDimensionalMap::<u64>::new(u32::MAX, u32::MAX),
            Err(CarveError::AllocationFailure { .. })
        ));
    }

    #[test]
    fn closing_a_row_gap_touches_only_that_row() {
        let mut map = counting_map(4, 2);
        map.close_row_gap(1, 0);
        map.shrink_width();
        assert_eq!(map.row(0), &[0, 2, 3]);
        assert_eq!(map.row(1), &[10, 11, 12]);
    }

    #[test]
    fn closing_a_column_gap_touches_only_that_column() {
        let mut map = counting_map(2, 3);
        map.close_column_gap(0, 0);
        map.shrink_height();
        assert_eq!(map.row(0), &[10, 1]);
        assert_eq!(map.row(1), &[20, 11]);
    }

    #[test]
    fn positions_past_the_live_edge_are_inaccessible() {
        let mut map = counting_map(3, 3);
        map.close_row_gap(2, 0);
        map.close_row_gap(2, 1);
        map.close_row_gap(2, 2);
        map.shrink_width();
        assert_eq!(map.get(2, 0), None);
        assert_eq!(map.get(1, 2), Some(&21));
    }

    #[test]
    #[should_panic]
    fn indexing_past_the_live_edge_panics() {
        let mut map = counting_map(3, 3);
        map.shrink_height();
        let _ = map[(0, 2)];
    }

    #[test]
    fn equality_ignores_the_dead_area() {
        let mut shrunk = counting_map(3, 1);
        shrunk.close_row_gap(2, 0);
        shrunk.shrink_width();
        let mut fresh = TwoDimensionalMap::new(2, 1).unwrap();
        fresh[(0, 0)] = 0;
        fresh[(1, 0)] = 1;
        assert_eq!(shrunk, fresh);
    }
}
