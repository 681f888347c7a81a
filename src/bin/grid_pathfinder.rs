use clap::Parser;
use rand::rngs::SmallRng;
use rand::SeedableRng;
use statespace_solver::grid::{
    a_star_annealed_with, Grid, DEFAULT_COOLING_RATE, DEFAULT_INITIAL_TEMPERATURE, DEFAULT_SEED,
};
use statespace_solver::utils::grid_from_str_array;
use std::fs;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[clap(author, version, about, long_about = None)]
struct Args {
    /// Initial temperature for the annealing acceptance test
    #[clap(long, default_value_t = DEFAULT_INITIAL_TEMPERATURE)]
    temperature: f64,

    /// Multiplicative cooling rate applied once per expansion
    #[clap(long, default_value_t = DEFAULT_COOLING_RATE)]
    cooling_rate: f64,

    /// Seed for the acceptance-test random generator
    #[clap(long, default_value_t = DEFAULT_SEED)]
    seed: u64,

    /// Path to the grid file (one digit row per line, 0 = passable)
    grid_file: PathBuf,

    /// Start row
    start_row: usize,

    /// Start column
    start_col: usize,

    /// Goal row
    goal_row: usize,

    /// Goal column
    goal_col: usize,
}

fn read_grid_file(path: &PathBuf) -> Result<Grid, String> {
    let content = fs::read_to_string(path).map_err(|e| format!("Failed to read file: {}", e))?;

    let lines: Vec<&str> = content
        .lines()
        .map(|s| s.trim())
        .filter(|s| !s.is_empty())
        .collect();

    grid_from_str_array(&lines).map_err(|e| format!("Invalid grid format: {}", e))
}

fn main() {
    let args = Args::parse();

    let grid = read_grid_file(&args.grid_file)
        .expect(&format!("Failed to load grid from {}", args.grid_file.display()));
    let start = (args.start_row, args.start_col);
    let goal = (args.goal_row, args.goal_col);

    println!("Loaded grid from {}:\n{}\n", args.grid_file.display(), grid);
    println!(
        "Searching {:?} -> {:?} (temperature {}, cooling rate {}, seed {})...\n",
        start, goal, args.temperature, args.cooling_rate, args.seed
    );

    let mut rng = SmallRng::seed_from_u64(args.seed);
    match a_star_annealed_with(
        &grid,
        start,
        goal,
        args.temperature,
        args.cooling_rate,
        &mut rng,
    ) {
        Some(path) => {
            println!("Path found ({} cells):", path.len());
            for (row, col) in &path {
                println!("  ({}, {})", row, col);
            }
        }
        None => println!("No path found."),
    }
}
