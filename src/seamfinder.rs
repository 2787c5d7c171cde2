// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Pick the cheapest seam.
//!
//! Trace one seam from every position along the starting edge and keep
//! the one with the lowest total energy.  Only the best seam so far is
//! held on to; every loser is dropped as soon as it has been compared.
//! On a tie the earlier start (lower column or row) wins.
//!
//! Each call costs one trace per start, so carving a W×H image all the
//! way down is O(W·H·(W+H)).  Nothing is cached between calls.

use crate::pixelgrid::PixelGrid;
use crate::seamtracer::{trace_horizontal_seam, trace_vertical_seam, TracedSeam};

/// This trait defines how we will return seams from a grid.  It's a
/// primitive interface, just enough to make room for other seam
/// selection strategies later.
pub trait SeamFinder {
    /// Request a horizontal seam: one row index per column.
    fn find_horizontal_seam(&self) -> Vec<u32>;

    /// Request a vertical seam: one column index per row.
    fn find_vertical_seam(&self) -> Vec<u32>;
}

fn cheapest<F>(starts: u32, trace: F) -> TracedSeam
where
    F: Fn(u32) -> TracedSeam,
{
    (1..starts).fold(trace(0), |best, start| {
        let candidate = trace(start);
        if candidate.energy < best.energy {
            candidate
        } else {
            best
        }
    })
}

/// The cheapest top-to-bottom seam, with its energy.
pub fn min_vertical_seam(grid: &PixelGrid) -> TracedSeam {
    cheapest(grid.width(), |column| trace_vertical_seam(grid, column))
}

/// The cheapest left-to-right seam, with its energy.
pub fn min_horizontal_seam(grid: &PixelGrid) -> TracedSeam {
    cheapest(grid.height(), |row| trace_horizontal_seam(grid, row))
}

/// The column to remove from each row.
pub fn find_min_vertical_seam(grid: &PixelGrid) -> Vec<u32> {
    min_vertical_seam(grid).seam
}

/// The row to remove from each column.
pub fn find_min_horizontal_seam(grid: &PixelGrid) -> Vec<u32> {
    min_horizontal_seam(grid).seam
}

/// The greedy seam engine: just a simple grid reference holder.
pub struct GreedySeamFinder<'a> {
    grid: &'a PixelGrid,
}

impl<'a> GreedySeamFinder<'a> {
    /// Takes a reference to a grid, and holds onto it.
    pub fn new(grid: &'a PixelGrid) -> Self {
        GreedySeamFinder { grid }
    }
}

impl<'a> SeamFinder for GreedySeamFinder<'a> {
    fn find_horizontal_seam(&self) -> Vec<u32> {
        find_min_horizontal_seam(self.grid)
    }

    fn find_vertical_seam(&self) -> Vec<u32> {
        find_min_vertical_seam(self.grid)
    }
}
