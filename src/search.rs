//! Search strategies over the 8-puzzle state space.
//!
//! All strategies share the `PuzzleState` successor contract and differ
//! only in frontier discipline: FIFO for breadth-first, LIFO for
//! depth-first, a recursive depth budget for depth-limited/iterative
//! deepening, and a cost-ordered priority queue for uniform-cost. Each one
//! returns `None` when the frontier is exhausted without reaching the goal.

use crate::puzzle::{successors, PuzzleState};
use std::cmp::Ordering;
use std::collections::{BinaryHeap, HashSet, VecDeque};
use std::rc::Rc;

/// Hard ceiling on the depth tried by `iterative_deepening`. Goals farther
/// than this many moves are reported as unsolved.
pub const MAX_DEEPENING_DEPTH: u32 = 11;

/// A solved search: the total accumulated cost and the full state sequence
/// from the start to the goal, inclusive.
#[derive(Clone, Debug)]
pub struct Solution {
    pub cost: u32,
    pub path: Vec<Rc<PuzzleState>>,
}

/// Walks parent links from `terminal` back to the start state and returns
/// the states in start-to-goal order.
pub fn extract_path(terminal: &Rc<PuzzleState>) -> Vec<Rc<PuzzleState>> {
    let mut path = Vec::new();
    let mut current = Some(Rc::clone(terminal));
    while let Some(state) = current {
        current = state.parent().map(Rc::clone);
        path.push(state);
    }
    path.reverse();
    path
}

/// Breadth-first search with a FIFO frontier.
///
/// States are marked explored when enqueued, the initial state included, so
/// no configuration enters the frontier twice. Finds a path with the fewest
/// moves; with the tile-label cost accounting that is not necessarily the
/// cheapest path.
pub fn breadth_first(initial: &Rc<PuzzleState>, goal: &PuzzleState) -> Option<Solution> {
    let mut frontier = VecDeque::new();
    let mut explored = HashSet::new();

    frontier.push_back(Rc::clone(initial));
    explored.insert(*initial.tiles());

    while let Some(current) = frontier.pop_front() {
        if *current == *goal {
            return Some(Solution {
                cost: current.cost(),
                path: extract_path(&current),
            });
        }
        for neighbor in successors(&current) {
            if explored.contains(neighbor.tiles()) {
                continue;
            }
            explored.insert(*neighbor.tiles());
            frontier.push_back(neighbor);
        }
    }

    None
}

/// Depth-first search with a LIFO frontier; otherwise the same control
/// structure as `breadth_first`. The returned path can be arbitrarily
/// longer than the shortest one.
pub fn depth_first(initial: &Rc<PuzzleState>, goal: &PuzzleState) -> Option<Solution> {
    let mut frontier = Vec::new();
    let mut explored = HashSet::new();

    frontier.push(Rc::clone(initial));
    explored.insert(*initial.tiles());

    while let Some(current) = frontier.pop() {
        if *current == *goal {
            return Some(Solution {
                cost: current.cost(),
                path: extract_path(&current),
            });
        }
        for neighbor in successors(&current) {
            if explored.contains(neighbor.tiles()) {
                continue;
            }
            explored.insert(*neighbor.tiles());
            frontier.push(neighbor);
        }
    }

    None
}

/// Depth-limited search: succeeds only when the remaining budget is exactly
/// zero at the goal, so a call with depth `d` finds paths of exactly `d`
/// moves. Carries no explored set; revisits are possible but bounded by the
/// budget.
pub fn depth_limited(current: &Rc<PuzzleState>, goal: &PuzzleState, depth: u32) -> Option<Solution> {
    if depth == 0 {
        if current.as_ref() == goal {
            return Some(Solution {
                cost: current.cost(),
                path: vec![Rc::clone(current)],
            });
        }
        return None;
    }

    for neighbor in successors(current) {
        if let Some(mut solution) = depth_limited(&neighbor, goal, depth - 1) {
            solution.path.insert(0, Rc::clone(current));
            return Some(solution);
        }
    }

    None
}

/// Iterative deepening: runs `depth_limited` with budgets 0, 1, 2, ... up
/// to `MAX_DEEPENING_DEPTH` inclusive and returns the first success. The
/// ceiling is a hard cutoff, not adaptive; deeper goals report `None`.
pub fn iterative_deepening(initial: &Rc<PuzzleState>, goal: &PuzzleState) -> Option<Solution> {
    for depth in 0..=MAX_DEEPENING_DEPTH {
        if let Some(solution) = depth_limited(initial, goal, depth) {
            return Some(solution);
        }
    }
    None
}

// Frontier entry for uniform-cost search. Min-ordered on raw accumulated
// cost, then the combined cost-plus-tile-sum key, then insertion sequence,
// so pops are fully deterministic; the carried state does not participate
// in the ordering.
struct QueueEntry {
    cost: u32,
    tie: u32,
    seq: u64,
    state: Rc<PuzzleState>,
}

impl QueueEntry {
    fn key(&self) -> (u32, u32, u64) {
        (self.cost, self.tie, self.seq)
    }
}

impl PartialEq for QueueEntry {
    fn eq(&self, other: &Self) -> bool {
        self.key() == other.key()
    }
}

impl Eq for QueueEntry {}

impl PartialOrd for QueueEntry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for QueueEntry {
    fn cmp(&self, other: &Self) -> Ordering {
        other.key().cmp(&self.key())
    }
}

/// Uniform-cost search: the frontier pops the entry with the smallest
/// accumulated cost at insertion time.
///
/// States are marked explored when pushed, matching the breadth- and
/// depth-first discipline. Textbook uniform-cost marks on pop; marking on
/// push can commit to the first path found to a configuration even when a
/// cheaper one is discovered later, so results are not guaranteed optimal.
pub fn uniform_cost(initial: &Rc<PuzzleState>, goal: &PuzzleState) -> Option<Solution> {
    let mut frontier = BinaryHeap::new();
    let mut explored = HashSet::new();
    let mut seq: u64 = 0;

    frontier.push(QueueEntry {
        cost: initial.cost(),
        tie: initial.priority_key(),
        seq,
        state: Rc::clone(initial),
    });
    explored.insert(*initial.tiles());

    while let Some(entry) = frontier.pop() {
        let current = entry.state;
        if *current == *goal {
            return Some(Solution {
                cost: current.cost(),
                path: extract_path(&current),
            });
        }
        for neighbor in successors(&current) {
            if explored.contains(neighbor.tiles()) {
                continue;
            }
            explored.insert(*neighbor.tiles());
            seq += 1;
            frontier.push(QueueEntry {
                cost: neighbor.cost(),
                tie: neighbor.priority_key(),
                seq,
                state: neighbor,
            });
        }
    }

    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::tiles_from_str;

    fn state(s: &str) -> Rc<PuzzleState> {
        Rc::new(PuzzleState::new(tiles_from_str(s).unwrap()))
    }

    fn goal(s: &str) -> PuzzleState {
        PuzzleState::new(tiles_from_str(s).unwrap())
    }

    // Every consecutive pair must differ by one legal blank move: the blank
    // index shifts by 1 or 3, the displaced tile lands in the old blank
    // slot, and every other cell is untouched.
    fn assert_legal_steps(path: &[Rc<PuzzleState>]) {
        for pair in path.windows(2) {
            let before = pair[0].tiles();
            let after = pair[1].tiles();
            let blank_before = pair[0].blank_index();
            let blank_after = pair[1].blank_index();

            let offset = blank_after as i32 - blank_before as i32;
            assert!(
                offset.abs() == 1 || offset.abs() == 3,
                "blank jumped from {} to {}",
                blank_before,
                blank_after
            );
            assert_eq!(after[blank_before], before[blank_after]);
            for i in 0..before.len() {
                if i != blank_before && i != blank_after {
                    assert_eq!(before[i], after[i], "cell {} changed", i);
                }
            }
        }
    }

    fn assert_cost_matches_steps(solution: &Solution) {
        let mut total = 0;
        for pair in solution.path.windows(2) {
            let blank_before = pair[0].blank_index();
            total += u32::from(pair[1].tiles()[blank_before]);
        }
        assert_eq!(solution.cost, total);
    }

    // Two blank moves away from 123586407: up (tile 8) then left (tile 5).
    const START: &str = "123586407";
    const TWO_MOVE_GOAL: &str = "123056487";

    #[test]
    fn test_bfs_start_equals_goal() {
        let initial = state(START);
        let solution = breadth_first(&initial, &goal(START)).unwrap();
        assert_eq!(solution.cost, 0);
        assert_eq!(solution.path.len(), 1);
        assert_eq!(*solution.path[0], *initial);
    }

    #[test]
    fn test_bfs_finds_shortest_move_count() {
        let initial = state(START);
        let target = goal(TWO_MOVE_GOAL);
        let solution = breadth_first(&initial, &target).unwrap();
        assert_eq!(solution.path.len(), 3);
        assert_eq!(solution.cost, 13);
        assert_eq!(*solution.path[0], *initial);
        assert_eq!(*solution.path[2], target);
        assert_legal_steps(&solution.path);
        assert_cost_matches_steps(&solution);
    }

    #[test]
    fn test_bfs_exhausts_on_disconnected_goal() {
        // Swapping two tiles while leaving the blank in place flips the
        // configuration into the other half of the state space; no move
        // sequence connects the two.
        let initial = state(START);
        assert!(breadth_first(&initial, &goal("213586407")).is_none());
    }

    #[test]
    fn test_bfs_solvable_endpoints_can_still_be_disconnected() {
        // Both endpoints pass the solvability gate, but they sit on
        // opposite sides of the move invariant (permutation parity plus
        // blank-index parity), so the search exhausts the frontier.
        let initial = state(START);
        assert!(breadth_first(&initial, &goal("123056478")).is_none());
    }

    #[test]
    fn test_dfs_path_is_valid_end_to_end() {
        let initial = state(START);
        let target = goal(TWO_MOVE_GOAL);
        let solution = depth_first(&initial, &target).unwrap();
        assert_eq!(**solution.path.first().unwrap(), *initial);
        assert_eq!(**solution.path.last().unwrap(), target);
        assert_legal_steps(&solution.path);
        assert_cost_matches_steps(&solution);
    }

    #[test]
    fn test_depth_limited_requires_exact_depth() {
        let initial = state(START);
        let target = goal(TWO_MOVE_GOAL);
        assert!(depth_limited(&initial, &target, 0).is_none());
        assert!(depth_limited(&initial, &target, 1).is_none());
        let solution = depth_limited(&initial, &target, 2).unwrap();
        assert_eq!(solution.path.len(), 3);
        assert_eq!(solution.cost, 13);
    }

    #[test]
    fn test_iterative_deepening_finds_minimum_moves() {
        let initial = state(START);
        let target = goal(TWO_MOVE_GOAL);
        let solution = iterative_deepening(&initial, &target).unwrap();
        assert_eq!(solution.path.len(), 3);
        assert_eq!(*solution.path[0], *initial);
        assert_eq!(*solution.path[2], target);
        assert_legal_steps(&solution.path);
    }

    #[test]
    fn test_iterative_deepening_never_beats_dfs_on_length() {
        let initial = state(START);
        let target = goal(TWO_MOVE_GOAL);
        let ids = iterative_deepening(&initial, &target).unwrap();
        let dfs = depth_first(&initial, &target).unwrap();
        assert!(ids.path.len() <= dfs.path.len());
    }

    #[test]
    fn test_iterative_deepening_respects_ceiling() {
        // Unreachable goal: every depth up to the ceiling is tried and
        // fails, then the search gives up.
        let initial = state(START);
        assert!(iterative_deepening(&initial, &goal("213586407")).is_none());
    }

    #[test]
    fn test_ucs_cost_equals_step_sum() {
        let initial = state(START);
        let target = goal(TWO_MOVE_GOAL);
        let solution = uniform_cost(&initial, &target).unwrap();
        assert_eq!(**solution.path.first().unwrap(), *initial);
        assert_eq!(**solution.path.last().unwrap(), target);
        assert_legal_steps(&solution.path);
        assert_cost_matches_steps(&solution);
        assert_eq!(solution.cost, solution.path.last().unwrap().cost());
    }

    #[test]
    fn test_ucs_orders_frontier_by_cost() {
        let cheap = state(START);
        let mut heap = BinaryHeap::new();
        heap.push(QueueEntry {
            cost: 9,
            tie: 45,
            seq: 0,
            state: Rc::clone(&cheap),
        });
        heap.push(QueueEntry {
            cost: 4,
            tie: 40,
            seq: 1,
            state: Rc::clone(&cheap),
        });
        heap.push(QueueEntry {
            cost: 4,
            tie: 38,
            seq: 2,
            state: Rc::clone(&cheap),
        });
        let popped: Vec<(u32, u32)> = std::iter::from_fn(|| heap.pop())
            .map(|entry| (entry.cost, entry.tie))
            .collect();
        assert_eq!(popped, vec![(4, 38), (4, 40), (9, 45)]);
    }

    #[test]
    fn test_extract_path_walks_parents_in_order() {
        let root = state(START);
        let child = successors(&root).into_iter().next().unwrap();
        let grandchild = successors(&child).into_iter().next().unwrap();
        let path = extract_path(&grandchild);
        assert_eq!(path.len(), 3);
        assert!(Rc::ptr_eq(&path[0], &root));
        assert!(Rc::ptr_eq(&path[1], &child));
        assert!(Rc::ptr_eq(&path[2], &grandchild));
    }
}
