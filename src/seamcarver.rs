// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Seamcarve - The main loop
//!
//! Seam removal, plus the loop that alternates between finding and
//! removing seams until the grid reaches its target size.

use crate::error::{CarveError, CarveResult};
use crate::pixelgrid::PixelGrid;
use crate::seamfinder::{GreedySeamFinder, SeamFinder};
use log::{debug, info, trace};

// A seam is only good for the grid it was found on.  Anything with the
// wrong length or an index past the live edge came from somewhere
// else, and nothing gets moved.
fn check_seam(seam: &[u32], length: u32, limit: u32, grid: &PixelGrid) -> CarveResult<()> {
    if seam.len() != length as usize || seam.iter().any(|&i| i >= limit) {
        return Err(CarveError::StaleSeam {
            length: seam.len(),
            width: grid.width(),
            height: grid.height(),
        });
    }
    Ok(())
}

/// Delete one pixel from every row, at the column the seam names for
/// that row, by sliding the rest of the row left.  The grid is one
/// column narrower afterwards.
///
/// The seam must have been found on this grid as it is now.
pub fn remove_vertical_seam(grid: &mut PixelGrid, seam: &[u32]) -> CarveResult<()> {
    let (width, height) = grid.dimensions();
    if width < 2 {
        return Err(CarveError::EmptyGrid { width: width - 1, height });
    }
    check_seam(seam, height, width, grid)?;
    for (y, &x) in seam.iter().enumerate() {
        grid.close_row_gap(x, y as u32);
    }
    grid.shrink_width();
    Ok(())
}

/// Delete one pixel from every column, at the row the seam names for
/// that column, by sliding the rest of the column up.  The grid is one
/// row shorter afterwards.
///
/// The seam must have been found on this grid as it is now.
pub fn remove_horizontal_seam(grid: &mut PixelGrid, seam: &[u32]) -> CarveResult<()> {
    let (width, height) = grid.dimensions();
    if height < 2 {
        return Err(CarveError::EmptyGrid { width, height: height - 1 });
    }
    check_seam(seam, width, height, grid)?;
    for (x, &y) in seam.iter().enumerate() {
        grid.close_column_gap(x as u32, y);
    }
    grid.shrink_height();
    Ok(())
}

/// Which dimension a single carving step takes a pixel off.
#[derive(Debug, PartialEq, Eq, Copy, Clone)]
pub enum Carve {
    /// Remove a vertical seam.
    Width,
    /// Remove a horizontal seam.
    Height,
}

/// Holds the grid being carved.  The grid is borrowed exclusively for
/// as long as the carver lives; after every completed step it is a
/// valid, slightly smaller grid.
pub struct SeamCarver<'a> {
    grid: &'a mut PixelGrid,
}

impl<'a> SeamCarver<'a> {
    /// Creates a new SeamCarver with a grid to be carved.
    pub fn new(grid: &'a mut PixelGrid) -> Self {
        Self { grid }
    }

    /// Find a fresh seam on the grid as it is now and remove it.
    pub fn carve_once(&mut self, direction: Carve) -> CarveResult<()> {
        let finder = GreedySeamFinder::new(self.grid);
        match direction {
            Carve::Width => {
                let seam = finder.find_vertical_seam();
                trace!("vertical seam {:?}", seam);
                remove_vertical_seam(self.grid, &seam)
            }
            Carve::Height => {
                let seam = finder.find_horizontal_seam();
                trace!("horizontal seam {:?}", seam);
                remove_horizontal_seam(self.grid, &seam)
            }
        }
    }

    // This is absurdly inefficient, as every pixel energy along every
    // candidate seam is recalculated for every step.  Only the pixels
    // next to the last seam actually changed.

    /// Repeatedly carve seams out of the grid until it is
    /// `target_width` by `target_height`.  Each pass takes off one
    /// column (if the width is still too large) and then one row (if
    /// the height is).
    pub fn carve(&mut self, target_width: u32, target_height: u32) -> CarveResult<()> {
        let (width, height) = self.grid.dimensions();
        if target_width == 0 || target_height == 0 || target_width > width || target_height > height {
            return Err(CarveError::InvalidTarget {
                width,
                height,
                target_width,
                target_height,
            });
        }

        info!(
            "carving {}x{} down to {}x{}",
            width, height, target_width, target_height
        );
        while self.grid.width() > target_width || self.grid.height() > target_height {
            if self.grid.width() > target_width {
                self.carve_once(Carve::Width)?;
                debug!("W: {}, {}", self.grid.width(), self.grid.height());
            }
            if self.grid.height() > target_height {
                self.carve_once(Carve::Height)?;
                debug!("H: {}, {}", self.grid.width(), self.grid.height());
            }
        }
        info!("carved to {}x{}", self.grid.width(), self.grid.height());
        Ok(())
    }
}
