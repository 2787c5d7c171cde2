// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Greedy seam carving.
//!
//! Shrink an RGB image one pixel-wide seam at a time, always taking
//! out the seam whose pixels carry the least energy.
//!
//! ```no_run
//! use ppmseam::{load_grid, export_grid, SeamCarver};
//!
//! let mut grid = load_grid("tower.ppm")?;
//! SeamCarver::new(&mut grid).carve(200, 150)?;
//! export_grid(&grid, "carved200X150.tower.ppm")?;
//! # Ok::<(), ppmseam::CarveError>(())
//! ```

#[macro_use]
mod ternary;

pub mod codec;
pub mod dump;
pub mod energy;
pub mod error;
pub mod pixelgrid;
pub mod seamcarver;
pub mod seamfinder;
pub mod seamtracer;
pub mod twodmap;

pub use codec::{carved_file_name, check_dimensions, export_grid, load_grid};
pub use dump::energy_to_image;
pub use energy::{calculate_energy, energy, EnergyMap};
pub use error::{CarveError, CarveResult};
pub use pixelgrid::{Pixel, PixelGrid};
pub use seamcarver::{remove_horizontal_seam, remove_vertical_seam, Carve, SeamCarver};
pub use seamfinder::{find_min_horizontal_seam, find_min_vertical_seam, GreedySeamFinder, SeamFinder};
pub use seamtracer::{trace_horizontal_seam, trace_vertical_seam, TracedSeam, EDGE_SENTINEL};
