// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Calculate the energy of a pixel
//!
//! The energy of a pixel is the squared RGB gradient across it, taken
//! from its four axis neighbours:
//!
//! ```text
//!        |Δx|² = (Δrx)²+(Δgx)²+(Δbx)²
//!        |Δy|² = (Δry)²+(Δgy)²+(Δby)²
//!       e(x,y) = |Δx|²+|Δy|²
//! ```
//!
//! The grid is treated as a torus here: the left neighbour of column 0
//! is the last column, the neighbour below the last row is row 0, and
//! so on.  On a grid one pixel wide (or tall) the neighbour in that
//! direction is the pixel itself.

use crate::cq;
use crate::pixelgrid::{Pixel, PixelGrid};
use crate::twodmap::TwoDimensionalMap;
use crate::error::CarveResult;
use itertools::iproduct;

/// A whole-grid snapshot of pixel energies.
pub type EnergyMap = TwoDimensionalMap<u32>;

/// (Pixel, Pixel) -> Energy
///
/// The squared distance between two colours, channel by channel.
#[inline]
pub fn energy_of_pair(p1: &Pixel, p2: &Pixel) -> u32 {
    p1.channels()
        .iter()
        .zip(p2.channels().iter())
        .map(|(&c1, &c2)| {
            let d = i32::from(c1) - i32::from(c2);
            (d * d) as u32
        })
        .sum()
}

/// The energy of the pixel at `(x, y)`, wrapping around the borders.
pub fn energy(grid: &PixelGrid, x: u32, y: u32) -> u32 {
    let (width, height) = grid.dimensions();
    let (mw, mh) = (width - 1, height - 1);

    let (left, right, up, down) = (
        grid[(cq!(x == 0, mw, x - 1), y)],
        grid[(cq!(x >= mw, 0, x + 1), y)],
        grid[(x, cq!(y == 0, mh, y - 1))],
        grid[(x, cq!(y >= mh, 0, y + 1))],
    );
    energy_of_pair(&right, &left) + energy_of_pair(&up, &down)
}

/// Compute the energy of every live pixel in the grid.
pub fn calculate_energy(grid: &PixelGrid) -> CarveResult<EnergyMap> {
    let (width, height) = grid.dimensions();
    let mut emap = EnergyMap::new(width, height)?;
    for (y, x) in iproduct!(0..height, 0..width) {
        emap[(x, y)] = energy(grid, x, y);
    }
    Ok(emap)
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;

    pub(crate) fn grey_grid(width: u32, height: u32, levels: &[u8]) -> PixelGrid {
        assert_eq!(levels.len(), (width * height) as usize);
        let mut grid = PixelGrid::new(width, height).unwrap();
        for (y, x) in iproduct!(0..height, 0..width) {
            let v = levels[(y * width + x) as usize];
            grid[(x, y)] = Pixel::new(v, v, v);
        }
        grid
    }

    pub(crate) fn colour_grid(width: u32, height: u32, pixels: &[[u8; 3]]) -> PixelGrid {
        assert_eq!(pixels.len(), (width * height) as usize);
        let mut grid = PixelGrid::new(width, height).unwrap();
        for (y, x) in iproduct!(0..height, 0..width) {
            grid[(x, y)] = Pixel::from(pixels[(y * width + x) as usize]);
        }
        grid
    }

    pub(crate) const IMAGE_DATA: [u8; 20] =
        [9, 9, 0, 9, 9, 9, 1, 9, 8, 9, 9, 9, 9, 9, 0, 9, 9, 9, 0, 9];
    const IMAGE_ENERGY: [u32; 20] = [
        0, 435, 0, 435, 0, 192, 0, 390, 0, 246, 243, 192, 0, 435, 0, 0, 0, 486, 0, 486,
    ];

    const COLOUR_DATA: [[u8; 3]; 12] = [
        [255, 101, 51],
        [255, 101, 153],
        [255, 101, 255],
        [255, 153, 51],
        [255, 153, 153],
        [255, 153, 255],
        [255, 203, 51],
        [255, 204, 153],
        [255, 205, 255],
        [255, 255, 51],
        [255, 255, 153],
        [255, 255, 255],
    ];
    const COLOUR_ENERGY: [u32; 12] = [
        20808, 52020, 20808, 20808, 52225, 21220, 20809, 52024, 20809, 20808, 52225, 21220,
    ];

    #[test]
    fn pair_energy_sums_squared_channel_differences() {
        let a = Pixel::new(10, 20, 30);
        let b = Pixel::new(13, 16, 30);
        assert_eq!(energy_of_pair(&a, &b), 9 + 16);
        assert_eq!(energy_of_pair(&b, &a), 25);
        assert_eq!(energy_of_pair(&a, &a), 0);
    }

    #[test]
    fn energy_generator_works() {
        let grid = grey_grid(5, 4, &IMAGE_DATA);
        let emap = calculate_energy(&grid).unwrap();
        assert_eq!(emap.values().copied().collect::<Vec<_>>(), IMAGE_ENERGY);
    }

    #[test]
    fn energy_uses_every_channel() {
        let grid = colour_grid(3, 4, &COLOUR_DATA);
        let emap = calculate_energy(&grid).unwrap();
        assert_eq!(emap.values().copied().collect::<Vec<_>>(), COLOUR_ENERGY);
    }

    #[test]
    fn single_pixel_has_no_energy() {
        let mut grid = PixelGrid::new(1, 1).unwrap();
        grid[(0, 0)] = Pixel::new(200, 13, 77);
        assert_eq!(energy(&grid, 0, 0), 0);
    }

    #[test]
    fn one_pixel_wide_grid_wraps_onto_itself() {
        let grid = colour_grid(1, 3, &[[10, 20, 30], [40, 50, 60], [70, 80, 90]]);
        let energies: Vec<u32> = (0..3).map(|y| energy(&grid, 0, y)).collect();
        assert_eq!(energies, [2700, 10800, 2700]);
    }

    #[test]
    fn one_pixel_tall_grid_wraps_onto_itself() {
        let grid = colour_grid(3, 1, &[[10, 20, 30], [40, 50, 60], [70, 80, 95]]);
        let energies: Vec<u32> = (0..3).map(|x| energy(&grid, x, 0)).collect();
        assert_eq!(energies, [3025, 11425, 2700]);
    }
}
