//! # State-Space Search Solver Library
//!
//! This library provides classic search strategies over two toy domains:
//! the 8-puzzle sliding tile game and grid pathfinding, together with a
//! small adjacency-list graph used by the traversal demos.
//!
//! It is used by three binaries:
//! - `puzzle_search`: checks solvability of a start/goal pair and runs one
//!   or all of the puzzle strategies, printing the state sequence.
//! - `grid_pathfinder`: runs the simulated-annealing A* variant over a
//!   grid loaded from a file.
//! - `graph_traversal`: prints BFS and DFS visit orders for a demo graph.
//!
//! ## Modules
//! - `puzzle`: 8-puzzle state representation (`PuzzleState`), the blank-move
//!   successor generator, and the inversion-parity solvability test.
//! - `search`: breadth-first, depth-first, iterative-deepening, and
//!   uniform-cost strategies sharing the `PuzzleState` contract, plus
//!   parent-chain path reconstruction.
//! - `grid`: grid pathfinding domain (`Grid`), the Manhattan heuristic, and
//!   A* with a stochastic acceptance step.
//! - `graph`: adjacency-list graph and breadth-/depth-first visit orders.
//! - `utils`: parsing of puzzle and grid configurations from strings.

pub mod graph;
pub mod grid;
pub mod puzzle;
pub mod search;
pub mod utils;

// Items from sub-modules, if public, should be accessed via their full
// path, e.g. `statespace_solver::search::breadth_first()`. This keeps the
// top-level library namespace cleaner.
