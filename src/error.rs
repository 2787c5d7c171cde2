// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Everything that can go wrong while building, carving, or moving a
//! pixel grid in or out of an image file.

use thiserror::Error;

/// The single error type of the crate.
#[derive(Error, Debug)]
pub enum CarveError {
    /// The grid buffer could not be obtained.  No partial grid exists.
    #[error("cannot allocate a {width}x{height} pixel grid")]
    AllocationFailure { width: u32, height: u32 },

    /// Grids must be at least one pixel in each direction.
    #[error("a pixel grid must be at least 1x1, got {width}x{height}")]
    EmptyGrid { width: u32, height: u32 },

    /// The image file disagrees with the dimensions we were told to expect.
    #[error("image is {actual_width}x{actual_height}, expected {expected_width}x{expected_height}")]
    DimensionMismatch {
        expected_width: u32,
        expected_height: u32,
        actual_width: u32,
        actual_height: u32,
    },

    /// Carving only ever shrinks, and never to nothing.
    #[error("cannot carve a {width}x{height} image to {target_width}x{target_height}")]
    InvalidTarget {
        width: u32,
        height: u32,
        target_width: u32,
        target_height: u32,
    },

    /// A seam computed against some other (larger) grid.
    #[error("seam of length {length} does not fit the current {width}x{height} grid")]
    StaleSeam { length: usize, width: u32, height: u32 },

    #[error(transparent)]
    Image(#[from] image::ImageError),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

pub type CarveResult<T> = Result<T, CarveError>;
