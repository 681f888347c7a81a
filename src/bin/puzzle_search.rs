use clap::Parser;
use statespace_solver::puzzle::{is_solvable, PuzzleState};
use statespace_solver::search::{
    breadth_first, depth_first, iterative_deepening, uniform_cost, Solution,
};
use statespace_solver::utils::tiles_from_str;
use std::rc::Rc;

#[derive(Parser, Debug)]
#[clap(author, version, about, long_about = None)]
struct Args {
    /// Strategy to run: bfs, dfs, ids, ucs, or all
    #[clap(short, long, default_value = "all")]
    algorithm: String,

    /// Initial configuration, nine digits in row-major order (0 = blank)
    initial: String,

    /// Goal configuration, nine digits in row-major order (0 = blank)
    goal: String,
}

fn print_outcome(name: &str, outcome: Option<Solution>) {
    match outcome {
        Some(solution) => {
            println!("{}: solution found (cost {})", name, solution.cost);
            println!("State sequence ({} states):", solution.path.len());
            for state in &solution.path {
                println!("{}\n", state);
            }
        }
        None => println!("{}: no solution\n", name),
    }
}

fn main() {
    let args = Args::parse();

    let initial_tiles =
        tiles_from_str(&args.initial).expect("Failed to parse initial configuration");
    let goal_tiles = tiles_from_str(&args.goal).expect("Failed to parse goal configuration");
    let initial = Rc::new(PuzzleState::new(initial_tiles));
    let goal = PuzzleState::new(goal_tiles);

    if !is_solvable(&initial) {
        println!("Initial state is not solvable.");
        return;
    }
    if !is_solvable(&goal) {
        println!("Goal state is not solvable.");
        return;
    }

    match args.algorithm.as_str() {
        "bfs" => print_outcome("Breadth-First Search", breadth_first(&initial, &goal)),
        "dfs" => print_outcome("Depth-First Search", depth_first(&initial, &goal)),
        "ids" => print_outcome("Iterative Deepening", iterative_deepening(&initial, &goal)),
        "ucs" => print_outcome("Uniform Cost Search", uniform_cost(&initial, &goal)),
        "all" => {
            print_outcome("Breadth-First Search", breadth_first(&initial, &goal));
            print_outcome("Depth-First Search", depth_first(&initial, &goal));
            print_outcome("Iterative Deepening", iterative_deepening(&initial, &goal));
            print_outcome("Uniform Cost Search", uniform_cost(&initial, &goal));
        }
        other => {
            eprintln!(
                "Unknown algorithm '{}'. Expected bfs, dfs, ids, ucs, or all.",
                other
            );
            std::process::exit(1);
        }
    }
}
