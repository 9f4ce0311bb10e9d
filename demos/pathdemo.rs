//! Terminal demonstration of the waygrid pathfinder.
//!
//! Loads an obstacle map (a file path argument, or a built-in 20x20 map),
//! routes across it and draws the result: walls red, path cells cyan,
//! start green, end blue. Run with `RUST_LOG=debug` to watch the searches.

use std::collections::HashSet;
use std::error::Error;

use crossterm::style::Stylize;
use waygrid_core::{ObstacleGrid, ObstacleMap, Point};
use waygrid_paths::{DEFAULT_CELL_SIZE, Pathfinder, RandomCost, SearchOutcome, Unit};

const DEFAULT_MAP: &str = include_str!("data/map.txt");

fn main() -> Result<(), Box<dyn Error>> {
    env_logger::init();

    let map = match std::env::args().nth(1) {
        Some(path) => ObstacleMap::parse(&std::fs::read_to_string(path)?)?,
        None => ObstacleMap::parse(DEFAULT_MAP)?,
    };

    let mut finder = Pathfinder::new(&map, RandomCost::seeded(42), DEFAULT_CELL_SIZE);
    let far = (map.width() - 2) as f32;
    finder.set_start(1.0, 1.0, Unit::Cells);
    report(finder.set_end(far, far, Unit::Cells), &finder);
    render(&finder);

    // The same engine driven in pixel units, as a mouse-driven host would.
    let px = (finder.width() / 2) as f32 * finder.cell_size();
    report(finder.set_end(px, px, Unit::Pixels), &finder);
    render(&finder);

    Ok(())
}

fn report(outcome: SearchOutcome, finder: &Pathfinder) {
    match outcome {
        SearchOutcome::Found => println!("path of {} cells:", finder.path().len()),
        SearchOutcome::NoPath => println!("no path exists:"),
        SearchOutcome::InvalidPosition => println!("endpoints outside the map:"),
    }
}

fn render(finder: &Pathfinder) {
    let on_path: HashSet<Point> = finder.path().iter().copied().collect();
    for y in 0..finder.width() {
        for x in 0..finder.width() {
            let p = Point::new(x, y);
            let glyph = if finder.start() == Some(p) {
                "S".green().bold()
            } else if finder.end() == Some(p) {
                "E".blue().bold()
            } else if finder.is_obstacle(p) {
                "#".red()
            } else if on_path.contains(&p) {
                "o".cyan()
            } else {
                ".".dark_grey()
            };
            print!("{glyph}");
        }
        println!();
    }
    println!();
}
