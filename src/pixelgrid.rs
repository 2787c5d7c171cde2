// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! The image being carved: a shrinkable grid of 8-bit RGB pixels.

use crate::twodmap::TwoDimensionalMap;

/// One 8-bit RGB pixel.  The default pixel is black.
#[derive(Default, Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct Pixel {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Pixel {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Pixel { r, g, b }
    }

    pub fn channels(&self) -> [u8; 3] {
        [self.r, self.g, self.b]
    }
}

impl From<[u8; 3]> for Pixel {
    fn from([r, g, b]: [u8; 3]) -> Self {
        Pixel { r, g, b }
    }
}

/// The grid is owned by whoever is carving it and only ever shrinks.
/// `PixelGrid::new(width, height)` gives a black grid.
pub type PixelGrid = TwoDimensionalMap<Pixel>;
