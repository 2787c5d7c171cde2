// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Getting grids in and out of image files.
//!
//! The decoding and encoding is all ImageRS; this module only moves
//! pixels between its buffers and ours.  Pixmaps (`.ppm`, `.pnm`) are
//! written as plain-text P3 files with a maximum value of 255.

use crate::error::{CarveError, CarveResult};
use crate::pixelgrid::{Pixel, PixelGrid};
use image::codecs::pnm::{PnmEncoder, PnmSubtype, SampleEncoding};
use image::{ColorType, ImageEncoder, Rgb, RgbImage};
use itertools::iproduct;
use log::debug;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

/// Copy an 8-bit RGB image into a fresh grid of the same size.
pub fn grid_from_image(image: &RgbImage) -> CarveResult<PixelGrid> {
    let (width, height) = image.dimensions();
    let mut grid = PixelGrid::new(width, height)?;
    for (y, x) in iproduct!(0..height, 0..width) {
        grid[(x, y)] = Pixel::from(image.get_pixel(x, y).0);
    }
    Ok(grid)
}

/// Copy the live area of a grid into an 8-bit RGB image.
pub fn grid_to_image(grid: &PixelGrid) -> RgbImage {
    let (width, height) = grid.dimensions();
    RgbImage::from_fn(width, height, |x, y| Rgb(grid[(x, y)].channels()))
}

/// Decode any image ImageRS can read and convert it to 8-bit RGB.
pub fn load_grid<P: AsRef<Path>>(path: P) -> CarveResult<PixelGrid> {
    let path = path.as_ref();
    let image = image::open(path)?.to_rgb8();
    debug!(
        "loaded {} ({}x{})",
        path.display(),
        image.width(),
        image.height()
    );
    grid_from_image(&image)
}

/// Refuse a grid that is not the size the caller said it would be.
pub fn check_dimensions(grid: &PixelGrid, width: u32, height: u32) -> CarveResult<()> {
    let (actual_width, actual_height) = grid.dimensions();
    if (actual_width, actual_height) != (width, height) {
        return Err(CarveError::DimensionMismatch {
            expected_width: width,
            expected_height: height,
            actual_width,
            actual_height,
        });
    }
    Ok(())
}

fn is_pixmap(path: &Path) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .map(|e| e.eq_ignore_ascii_case("ppm") || e.eq_ignore_ascii_case("pnm"))
        .unwrap_or(false)
}

/// Write the grid's live area to `out` as a plain-text P3 pixmap.
pub fn write_ascii_pixmap<W: Write>(grid: &PixelGrid, out: W) -> CarveResult<()> {
    let image = grid_to_image(grid);
    PnmEncoder::new(out)
        .with_subtype(PnmSubtype::Pixmap(SampleEncoding::Ascii))
        .write_image(image.as_raw(), image.width(), image.height(), ColorType::Rgb8)?;
    Ok(())
}

/// Encode the grid to `path`, picking the format from the extension.
pub fn export_grid<P: AsRef<Path>>(grid: &PixelGrid, path: P) -> CarveResult<()> {
    let path = path.as_ref();
    if is_pixmap(path) {
        let mut out = BufWriter::new(File::create(path)?);
        write_ascii_pixmap(grid, &mut out)?;
        out.flush()?;
    } else {
        grid_to_image(grid).save(path)?;
    }
    debug!(
        "wrote {} ({}x{})",
        path.display(),
        grid.width(),
        grid.height()
    );
    Ok(())
}

/// Where a carved image goes by default: next to the input, named
/// `carved<W>X<H>.<input file name>`.
pub fn carved_file_name<P: AsRef<Path>>(input: P, width: u32, height: u32) -> PathBuf {
    let input = input.as_ref();
    let name = input
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default();
    input.with_file_name(format!("carved{}X{}.{}", width, height, name))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::energy::tests::colour_grid;
    use crate::seamcarver::SeamCarver;
    use tempfile::tempdir;

    const SMALL: [[u8; 3]; 6] = [
        [255, 0, 0],
        [0, 255, 0],
        [0, 0, 255],
        [12, 34, 56],
        [78, 90, 123],
        [200, 201, 202],
    ];

    #[test]
    fn pixmaps_are_written_as_plain_text() {
        let grid = colour_grid(3, 2, &SMALL);
        let mut out = Vec::new();
        write_ascii_pixmap(&grid, &mut out).unwrap();
        let text = String::from_utf8(out).unwrap();
        let mut tokens = text.split_whitespace();
        assert_eq!(tokens.next(), Some("P3"));
        let numbers: Vec<u32> = tokens.map(|t| t.parse().unwrap()).collect();
        assert_eq!(&numbers[..3], &[3, 2, 255]);
        assert_eq!(&numbers[3..6], &[255, 0, 0]);
        assert_eq!(&numbers[numbers.len() - 3..], &[200, 201, 202]);
    }

    #[test]
    fn carved_grid_survives_a_pixmap_round_trip() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("small.ppm");
        let mut grid = colour_grid(3, 2, &SMALL);
        SeamCarver::new(&mut grid).carve(2, 2).unwrap();
        export_grid(&grid, &path).unwrap();
        assert_eq!(load_grid(&path).unwrap(), grid);
    }

    #[test]
    fn grid_survives_a_png_round_trip() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("small.png");
        let grid = colour_grid(3, 2, &SMALL);
        export_grid(&grid, &path).unwrap();
        assert_eq!(load_grid(&path).unwrap(), grid);
    }

    #[test]
    fn declared_dimensions_must_match() {
        let grid = colour_grid(3, 2, &SMALL);
        assert!(check_dimensions(&grid, 3, 2).is_ok());
        assert!(matches!(
            check_dimensions(&grid, 2, 3),
            Err(CarveError::DimensionMismatch {
                expected_width: 2,
                actual_width: 3,
                ..
            })
        ));
    }

    #[test]
    fn missing_files_are_errors() {
        let dir = tempdir().unwrap();
        assert!(load_grid(dir.path().join("nope.ppm")).is_err());
    }

    #[test]
    fn carved_names_sit_next_to_the_input() {
        assert_eq!(
            carved_file_name("pics/tower.ppm", 40, 30),
            PathBuf::from("pics/carved40X30.tower.ppm")
        );
        assert_eq!(
            carved_file_name("tower.ppm", 5, 7),
            PathBuf::from("carved5X7.tower.ppm")
        );
    }
}
