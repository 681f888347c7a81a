//! Grid pathfinding with a simulated-annealing A* variant.
//!
//! The domain is a rectangular grid of passability flags; a state is a
//! `(row, col)` cell. Costs live outside the cells, in `g_score`/`f_score`
//! maps keyed by cell, and predecessors in a separate parent map. Before a
//! neighbor is adopted the search runs a stochastic acceptance test whose
//! probability decays with a cooling temperature, so the frontier can skip
//! cells plain A* would take.

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};
use std::cmp::Ordering;
use std::collections::{BinaryHeap, HashMap, HashSet};
use std::fmt;

/// A grid coordinate as `(row, col)`.
pub type Cell = (usize, usize);

/// Default starting temperature for the acceptance test.
pub const DEFAULT_INITIAL_TEMPERATURE: f64 = 1000.0;

/// Default multiplicative decay applied to the temperature once per
/// expansion.
pub const DEFAULT_COOLING_RATE: f64 = 0.99;

/// Seed used by `a_star_annealed` so that repeated runs stay reproducible.
pub const DEFAULT_SEED: u64 = 1729;

/// A rectangular grid of passability flags: `0` is passable, anything else
/// is blocked.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Grid {
    cells: Vec<Vec<u8>>,
}

impl Grid {
    /// Creates a grid from a matrix of passability flags.
    ///
    /// # Arguments
    /// * `cells`: row-major flags; every row must have the same length.
    ///
    /// # Returns
    /// * `Ok(Grid)` when the matrix is non-empty and rectangular.
    /// * `Err(String)` describing the first offending row otherwise.
    pub fn new(cells: Vec<Vec<u8>>) -> Result<Self, String> {
        if cells.is_empty() || cells[0].is_empty() {
            return Err("Grid must have at least one row and one column".to_string());
        }
        let width = cells[0].len();
        for (r, row) in cells.iter().enumerate() {
            if row.len() != width {
                return Err(format!(
                    "Row {} has {} cells (expected {})",
                    r,
                    row.len(),
                    width
                ));
            }
        }
        Ok(Grid { cells })
    }

    /// Number of rows.
    pub fn rows(&self) -> usize {
        self.cells.len()
    }

    /// Number of columns.
    pub fn cols(&self) -> usize {
        self.cells[0].len()
    }

    /// Whether `cell` is inside the grid and carries a passable flag.
    pub fn is_passable(&self, cell: Cell) -> bool {
        cell.0 < self.rows() && cell.1 < self.cols() && self.cells[cell.0][cell.1] == 0
    }

    /// In-bounds, passable cells one unit step away from `cell`, in the
    /// order up, down, left, right.
    pub fn neighbors(&self, cell: Cell) -> Vec<Cell> {
        let dr = [-1isize, 1, 0, 0];
        let dc = [0isize, 0, -1, 1];
        let mut neighbors = Vec::new();

        for i in 0..4 {
            let nr = cell.0 as isize + dr[i];
            let nc = cell.1 as isize + dc[i];
            if nr < 0 || nc < 0 {
                continue;
            }
            let candidate = (nr as usize, nc as usize);
            if self.is_passable(candidate) {
                neighbors.push(candidate);
            }
        }

        neighbors
    }
}

impl fmt::Display for Grid {
    /// Renders passable cells as `.` and blocked cells as `#`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (r, row) in self.cells.iter().enumerate() {
            for &flag in row {
                write!(f, "{}", if flag == 0 { '.' } else { '#' })?;
            }
            if r + 1 < self.cells.len() {
                writeln!(f)?;
            }
        }
        Ok(())
    }
}

/// Manhattan distance between two cells.
pub fn manhattan(a: Cell, b: Cell) -> u32 {
    (a.0.abs_diff(b.0) + a.1.abs_diff(b.1)) as u32
}

// Acceptance test for a candidate step. A negative delta is accepted
// outright (unreachable with the Manhattan delta used by the search, where
// every step scores 1); otherwise acceptance probability is
// exp(-delta / temperature), approaching certainty at high temperatures.
fn anneal_accept(delta: f64, temperature: f64, rng: &mut impl Rng) -> bool {
    if delta < 0.0 {
        return true;
    }
    let probability = (-delta / temperature).exp();
    rng.gen::<f64>() < probability
}

// Frontier entry, min-ordered on (f, seq); the cell does not participate.
struct OpenEntry {
    f: u32,
    seq: u64,
    cell: Cell,
}

impl OpenEntry {
    fn key(&self) -> (u32, u64) {
        (self.f, self.seq)
    }
}

impl PartialEq for OpenEntry {
    fn eq(&self, other: &Self) -> bool {
        self.key() == other.key()
    }
}

impl Eq for OpenEntry {}

impl PartialOrd for OpenEntry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for OpenEntry {
    fn cmp(&self, other: &Self) -> Ordering {
        other.key().cmp(&self.key())
    }
}

fn reconstruct_path(came_from: &HashMap<Cell, Cell>, terminal: Cell) -> Vec<Cell> {
    let mut path = vec![terminal];
    let mut current = terminal;
    while let Some(&previous) = came_from.get(&current) {
        current = previous;
        path.push(current);
    }
    path.reverse();
    path
}

/// A* from `start` to `goal` with the default annealing schedule and a
/// fixed internal seed, so calls with the same inputs always return the
/// same path.
///
/// # Returns
/// The cell sequence from `start` to `goal` inclusive, or `None` when the
/// frontier empties without reaching the goal.
pub fn a_star_annealed(grid: &Grid, start: Cell, goal: Cell) -> Option<Vec<Cell>> {
    let mut rng = SmallRng::seed_from_u64(DEFAULT_SEED);
    a_star_annealed_with(
        grid,
        start,
        goal,
        DEFAULT_INITIAL_TEMPERATURE,
        DEFAULT_COOLING_RATE,
        &mut rng,
    )
}

/// A* from `start` to `goal` with a caller-supplied annealing schedule and
/// random generator.
///
/// Maintains `g_score` (best known cost from the start) and `f_score`
/// (`g` plus the Manhattan estimate to the goal) maps plus an `f`-ordered
/// frontier. Each neighbor of an expanded cell must pass the acceptance
/// test before its scores and parent are recorded and it is pushed; the
/// temperature is multiplied by `cooling_rate` after every expansion,
/// whether or not anything was accepted. Passing a generator seeded the
/// same way twice reproduces the run exactly.
pub fn a_star_annealed_with(
    grid: &Grid,
    start: Cell,
    goal: Cell,
    initial_temperature: f64,
    cooling_rate: f64,
    rng: &mut impl Rng,
) -> Option<Vec<Cell>> {
    let mut open = BinaryHeap::new();
    let mut closed: HashSet<Cell> = HashSet::new();
    let mut g_score: HashMap<Cell, u32> = HashMap::new();
    let mut f_score: HashMap<Cell, u32> = HashMap::new();
    let mut came_from: HashMap<Cell, Cell> = HashMap::new();
    let mut temperature = initial_temperature;
    let mut seq: u64 = 0;

    g_score.insert(start, 0);
    f_score.insert(start, manhattan(start, goal));
    open.push(OpenEntry {
        f: 0,
        seq,
        cell: start,
    });

    while let Some(entry) = open.pop() {
        let current = entry.cell;
        if current == goal {
            return Some(reconstruct_path(&came_from, current));
        }
        closed.insert(current);

        for neighbor in grid.neighbors(current) {
            if closed.contains(&neighbor) {
                continue;
            }
            let tentative = g_score[&current] + 1;
            let delta = f64::from(manhattan(current, neighbor));
            if anneal_accept(delta, temperature, rng) {
                g_score.insert(neighbor, tentative);
                f_score.insert(neighbor, tentative + manhattan(neighbor, goal));
                came_from.insert(neighbor, current);
                seq += 1;
                open.push(OpenEntry {
                    f: f_score[&neighbor],
                    seq,
                    cell: neighbor,
                });
            }
        }

        temperature *= cooling_rate;
    }

    None
}
