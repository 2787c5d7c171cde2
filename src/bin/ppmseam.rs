// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

use ppmseam::{
    carved_file_name, check_dimensions, energy_to_image, export_grid, load_grid, CarveError,
    SeamCarver,
};
use std::path::PathBuf;
use std::process;

extern crate clap;

use clap::{App, Arg, ArgMatches};
use log::{info, LevelFilter};

/// Everything the command line can ask for.
struct CarveRequest {
    input: PathBuf,
    target_width: u32,
    target_height: u32,
    declared: Option<(u32, u32)>,
    output: PathBuf,
    energy_map: Option<PathBuf>,
}

fn positive(value: String) -> Result<(), String> {
    match value.parse::<u32>() {
        Ok(n) if n > 0 => Ok(()),
        Ok(_) => Err(format!("must be greater than 0, got {}", value)),
        Err(_) => Err(format!("{} is not a positive integer", value)),
    }
}

// Validators have already run, so every number parses.
fn number(matches: &ArgMatches, name: &str) -> Option<u32> {
    matches.value_of(name).and_then(|v| v.parse().ok())
}

fn request(matches: &ArgMatches) -> CarveRequest {
    let input = PathBuf::from(matches.value_of("image").unwrap_or_default());
    let target_width = number(matches, "target_width").unwrap_or(1);
    let target_height = number(matches, "target_height").unwrap_or(1);
    let declared = match (number(matches, "width"), number(matches, "height")) {
        (Some(w), Some(h)) => Some((w, h)),
        _ => None,
    };
    let output = matches
        .value_of("output")
        .map(PathBuf::from)
        .unwrap_or_else(|| carved_file_name(&input, target_width, target_height));
    CarveRequest {
        input,
        target_width,
        target_height,
        declared,
        output,
        energy_map: matches.value_of("energy_map").map(PathBuf::from),
    }
}

fn run(req: &CarveRequest) -> Result<(), CarveError> {
    let mut grid = load_grid(&req.input)?;
    if let Some((width, height)) = req.declared {
        check_dimensions(&grid, width, height)?;
    }
    SeamCarver::new(&mut grid).carve(req.target_width, req.target_height)?;
    export_grid(&grid, &req.output)?;
    info!("wrote {}", req.output.display());
    if let Some(path) = &req.energy_map {
        energy_to_image(&grid)?.save(path)?;
        info!("wrote energy map {}", path.display());
    }
    Ok(())
}

fn main() {
    let matches = App::new("ppmseam")
        .version("0.1.0")
        .author("Elf M. Sternberg <elf.sternberg@gmail.com>")
        .about("Greedy seam carving for RGB pixmaps")
        .arg(
            Arg::with_name("image")
                .help("The image to carve")
                .required(true)
                .index(1),
        )
        .arg(
            Arg::with_name("target_width")
                .help("Width to carve down to")
                .required(true)
                .validator(positive)
                .index(2),
        )
        .arg(
            Arg::with_name("target_height")
                .help("Height to carve down to")
                .required(true)
                .validator(positive)
                .index(3),
        )
        .arg(
            Arg::with_name("width")
                .long("width")
                .takes_value(true)
                .requires("height")
                .validator(positive)
                .help("Expected width of the image; refuse files of any other size"),
        )
        .arg(
            Arg::with_name("height")
                .long("height")
                .takes_value(true)
                .requires("width")
                .validator(positive)
                .help("Expected height of the image; refuse files of any other size"),
        )
        .arg(
            Arg::with_name("output")
                .short("o")
                .long("output")
                .takes_value(true)
                .value_name("FILE")
                .help("Where to write the result (default: carved<W>X<H>.<image>)"),
        )
        .arg(
            Arg::with_name("energy_map")
                .long("energy-map")
                .takes_value(true)
                .value_name("FILE")
                .help("Also write the carved image's energy as a greyscale picture"),
        )
        .arg(
            Arg::with_name("verbose")
                .short("v")
                .multiple(true)
                .help("More logging; repeat for more"),
        )
        .get_matches();

    let level = match matches.occurrences_of("verbose") {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        2 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    };
    env_logger::Builder::new()
        .filter_level(level)
        .parse_default_env()
        .init();

    let req = request(&matches);
    if let Err(err) = run(&req) {
        eprintln!("Error: {}", err);
        process::exit(1);
    }
}
