//! Core state model for the 8-puzzle.
//!
//! This module defines the puzzle's fundamental components:
//! - `PuzzleState`: a tile configuration together with its accumulated move
//!   cost and a back-reference to the state it was generated from.
//! - `successors`: generates the child states reachable by one blank move.
//! - `count_inversions` / `is_solvable`: the inversion-parity test run on
//!   both endpoints before any search is attempted.

use std::fmt;
use std::hash::{Hash, Hasher};
use std::rc::Rc;

/// Number of cells in the flattened 3x3 board.
pub const TILE_COUNT: usize = 9;

/// Width of one board row in the flattened layout.
pub const ROW_WIDTH: usize = 3;

// Offsets applied to the blank index, tried in this order: right, left,
// down, up.
const BLANK_MOVES: [i32; 4] = [1, -1, 3, -3];

/// A single 8-puzzle configuration.
///
/// The nine tiles are a permutation of `0..=8`, stored row-major; tile `0`
/// is the blank. Each state carries the cost accumulated on the way from
/// the start state and a shared back-reference to the state that generated
/// it, which keeps the whole ancestor chain alive until the solution path
/// has been reconstructed.
///
/// Equality and hashing consider the tile configuration only; two states
/// reached at different costs or through different parents compare equal.
///
/// # Examples
/// ```
/// use statespace_solver::puzzle::PuzzleState;
/// let state = PuzzleState::new([1, 2, 3, 4, 5, 6, 7, 8, 0]);
/// assert_eq!(state.cost(), 0);
/// assert_eq!(state.blank_index(), 8);
/// assert!(state.parent().is_none());
/// ```
#[derive(Clone, Debug)]
pub struct PuzzleState {
    tiles: [u8; TILE_COUNT],
    cost: u32,
    parent: Option<Rc<PuzzleState>>,
}

impl PuzzleState {
    /// Creates a start state with zero accumulated cost and no parent.
    ///
    /// The tiles are not validated here; configurations coming from outside
    /// the crate should go through `utils::tiles_from_str`, which rejects
    /// anything that is not a permutation of `0..=8`.
    pub fn new(tiles: [u8; TILE_COUNT]) -> Self {
        PuzzleState {
            tiles,
            cost: 0,
            parent: None,
        }
    }

    /// Returns the tile configuration.
    pub fn tiles(&self) -> &[u8; TILE_COUNT] {
        &self.tiles
    }

    /// Returns the cost accumulated from the start state to this state.
    pub fn cost(&self) -> u32 {
        self.cost
    }

    /// Returns the state this one was generated from, or `None` for a
    /// start state.
    pub fn parent(&self) -> Option<&Rc<PuzzleState>> {
        self.parent.as_ref()
    }

    /// Index of the blank tile in the flattened layout.
    ///
    /// # Panics
    /// Panics if the configuration contains no blank (zero) tile.
    pub fn blank_index(&self) -> usize {
        self.tiles
            .iter()
            .position(|&tile| tile == 0)
            .expect("puzzle configuration has no blank tile")
    }

    /// Combined ordering key: accumulated cost plus the sum of all tile
    /// labels. The uniform-cost frontier uses this to break ties between
    /// entries with equal raw cost; it is not an admissible estimate of
    /// remaining cost.
    pub fn priority_key(&self) -> u32 {
        self.cost + self.tiles.iter().map(|&tile| u32::from(tile)).sum::<u32>()
    }
}

impl PartialEq for PuzzleState {
    fn eq(&self, other: &Self) -> bool {
        self.tiles == other.tiles
    }
}

impl Eq for PuzzleState {}

impl Hash for PuzzleState {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.tiles.hash(state);
    }
}

impl Drop for PuzzleState {
    fn drop(&mut self) {
        // Unlink the parent chain iteratively; letting the compiler recurse
        // through it overflows the stack on the very deep paths depth-first
        // search can produce.
        let mut parent = self.parent.take();
        while let Some(rc) = parent {
            match Rc::try_unwrap(rc) {
                Ok(mut state) => parent = state.parent.take(),
                Err(_) => break,
            }
        }
    }
}

impl fmt::Display for PuzzleState {
    /// Formats the configuration as a 3x3 grid with `.` for the blank.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, &tile) in self.tiles.iter().enumerate() {
            if tile == 0 {
                write!(f, ".")?;
            } else {
                write!(f, "{}", tile)?;
            }
            if (i + 1) % ROW_WIDTH == 0 {
                if i + 1 < TILE_COUNT {
                    writeln!(f)?;
                }
            } else {
                write!(f, " ")?;
            }
        }
        Ok(())
    }
}

/// Generates the child states reachable from `state` by one blank move.
///
/// A move slides the tile adjacent to the blank into the blank's slot; the
/// blank index changes by one of `+1`, `-1`, `+3`, `-3`. Any destination
/// index inside the flattened board is accepted, so horizontal moves at a
/// row edge wrap into the neighboring row.
///
/// Each child's cost is the parent's cost plus the label of the tile that
/// slid into the blank's old slot, and each child's parent link is fixed to
/// `state` at construction.
pub fn successors(state: &Rc<PuzzleState>) -> Vec<Rc<PuzzleState>> {
    let blank = state.blank_index();
    let mut children = Vec::new();

    for offset in BLANK_MOVES {
        let target = blank as i32 + offset;
        if !is_valid_position(target) {
            continue;
        }
        let target = target as usize;

        let mut tiles = state.tiles;
        tiles.swap(blank, target);
        let moved_tile = tiles[blank];

        children.push(Rc::new(PuzzleState {
            tiles,
            cost: state.cost + u32::from(moved_tile),
            parent: Some(Rc::clone(state)),
        }));
    }

    children
}

fn is_valid_position(position: i32) -> bool {
    (0..TILE_COUNT as i32).contains(&position)
}

/// Counts pairs of non-blank tiles that appear out of ascending order.
pub fn count_inversions(tiles: &[u8; TILE_COUNT]) -> u32 {
    let mut inversions = 0;
    for i in 0..tiles.len() {
        for j in (i + 1)..tiles.len() {
            if tiles[i] != 0 && tiles[j] != 0 && tiles[i] > tiles[j] {
                inversions += 1;
            }
        }
    }
    inversions
}

/// Parity test deciding whether a configuration can take part in a search
/// at all. A configuration passes iff its inversion count is even and the
/// blank sits in an odd row, or the inversion count is odd and the blank
/// sits in an even row (rows counted from the top).
///
/// Run this on both the initial and the goal configuration before invoking
/// a strategy; searching from or toward a failing configuration is wasted
/// work.
///
/// # Examples
/// ```
/// use statespace_solver::puzzle::{is_solvable, PuzzleState};
/// assert!(is_solvable(&PuzzleState::new([1, 2, 3, 5, 8, 6, 4, 0, 7])));
/// assert!(is_solvable(&PuzzleState::new([1, 2, 3, 0, 5, 6, 4, 7, 8])));
/// ```
pub fn is_solvable(state: &PuzzleState) -> bool {
    let inversions = count_inversions(state.tiles());
    let blank_row = state.blank_index() / ROW_WIDTH;
    (inversions % 2 == 0 && blank_row % 2 == 1) || (inversions % 2 == 1 && blank_row % 2 == 0)
}
