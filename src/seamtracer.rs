// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Trace a single seam from a fixed starting point.
//!
//! This is a greedy walk, not the usual cumulative-minimum dynamic
//! program: from the current position, look at the three cells of the
//! next row (or column) that touch it, step onto the cheapest, and
//! never look back.  One forward pass, no backtracking.
//!
//! Unlike the energy function, which wraps around the borders, the
//! walk treats the grid as flat.  A candidate that would step off the
//! edge is given `EDGE_SENTINEL` and so is never chosen.  Changing
//! either of those two policies changes which seams get carved.

use crate::energy::energy;
use crate::pixelgrid::PixelGrid;

/// The stand-in energy of a step that would leave the grid.  It is far
/// above the largest energy a pixel can have (2 * 3 * 255²).
pub const EDGE_SENTINEL: u32 = 1_147_483_647;

/// A seam and the sum of the energies of the pixels along it.
///
/// For a vertical seam, `seam[y]` is the column removed from row `y`;
/// for a horizontal seam, `seam[x]` is the row removed from column `x`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TracedSeam {
    pub seam: Vec<u32>,
    pub energy: u64,
}

// The three candidates for the next step.  `ahead` is straight on;
// `forward` and `back` are one step up or down the index, in the order
// ties are broken between them.
struct Candidates {
    ahead: u32,
    forward: u32,
    back: u32,
}

impl Candidates {
    // Ahead wins every tie; forward wins a tie against back.
    fn choose(&self) -> Step {
        if self.ahead <= self.forward && self.ahead <= self.back {
            Step::Ahead(self.ahead)
        } else if self.forward <= self.ahead && self.forward <= self.back {
            Step::Forward(self.forward)
        } else {
            Step::Back(self.back)
        }
    }
}

enum Step {
    Ahead(u32),
    Forward(u32),
    Back(u32),
}

/// Walk a top-to-bottom seam that starts at `start_column` in row 0.
///
/// Ties prefer staying in the same column, then moving right, then
/// moving left.
pub fn trace_vertical_seam(grid: &PixelGrid, start_column: u32) -> TracedSeam {
    let (width, height) = grid.dimensions();
    let mut column = start_column;
    let mut total = u64::from(energy(grid, column, 0));
    let mut seam = Vec::with_capacity(height as usize);
    seam.push(column);

    for y in 1..height {
        let step = Candidates {
            ahead: energy(grid, column, y),
            forward: if column + 1 < width {
                energy(grid, column + 1, y)
            } else {
                EDGE_SENTINEL
            },
            back: if column > 0 {
                energy(grid, column - 1, y)
            } else {
                EDGE_SENTINEL
            },
        }
        .choose();

        let chosen = match step {
            Step::Ahead(e) => e,
            Step::Forward(e) => {
                column += 1;
                e
            }
            Step::Back(e) => {
                column -= 1;
                e
            }
        };
        total += u64::from(chosen);
        seam.push(column);
    }

    TracedSeam { seam, energy: total }
}

/// Walk a left-to-right seam that starts at `start_row` in column 0.
///
/// Ties prefer staying in the same row, then moving up, then moving
/// down.  That is the mirror image of the vertical walk's preference
/// order, not a copy of it.
pub fn trace_horizontal_seam(grid: &PixelGrid, start_row: u32) -> TracedSeam {
    let (width, height) = grid.dimensions();
    let mut row = start_row;
    let mut total = u64::from(energy(grid, 0, row));
    let mut seam = Vec::with_capacity(width as usize);
    seam.push(row);

    for x in 1..width {
        let step = Candidates {
            ahead: energy(grid, x, row),
            forward: if row > 0 {
                energy(grid, x, row - 1)
            } else {
                EDGE_SENTINEL
            },
            back: if row + 1 < height {
                energy(grid, x, row + 1)
            } else {
                EDGE_SENTINEL
            },
        }
        .choose();

        let chosen = match step {
            Step::Ahead(e) => e,
            Step::Forward(e) => {
                row -= 1;
                e
            }
            Step::Back(e) => {
                row += 1;
                e
            }
        };
        total += u64::from(chosen);
        seam.push(row);
    }

    TracedSeam { seam, energy: total }
}
