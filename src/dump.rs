// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Render a grid's energy as a greyscale picture, brightest where the
//! energy is highest.  Handy for seeing why a seam went where it did.

use crate::energy::calculate_energy;
use crate::error::CarveResult;
use crate::pixelgrid::PixelGrid;
use image::{GrayImage, Luma};
use itertools::iproduct;
use num_traits::clamp;

/// Scale every energy against the grid's maximum into `0..=255`.  A
/// grid with no energy anywhere renders black.
pub fn energy_to_image(grid: &PixelGrid) -> CarveResult<GrayImage> {
    let energy = calculate_energy(grid)?;
    let (width, height) = energy.dimensions();
    let factor = u64::from(energy.values().copied().max().unwrap_or(0)).max(1);

    let mut out = GrayImage::new(width, height);
    for (y, x) in iproduct!(0..height, 0..width) {
        let scaled = clamp(u64::from(energy[(x, y)]) * 255 / factor, 0, 255);
        out.put_pixel(x, y, Luma([scaled as u8]));
    }
    Ok(out)
}
