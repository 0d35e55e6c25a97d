//! Cost and heuristic strategies used to parameterize the graph search.
//!
//! The generic search in `solver` never hardcodes an algorithm: it is
//! handed a `CostPolicy` (the `g` component of `f = g + h`) and a
//! `Heuristic` (the `h` component) as values. Substituting them realizes
//! breadth-first, greedy best-first, A* and depth-first orderings from one
//! control loop.

use crate::engine::{PuzzleState, GRID_WIDTH};
use crate::solver::Node;

/// Path-cost component `g` of the evaluation function `f = g + h`.
pub trait CostPolicy {
    fn g(&self, node: &Node) -> f64;
}

/// Goal-distance estimate `h` of the evaluation function `f = g + h`.
///
/// An admissible implementation never overestimates the true remaining
/// cost, which makes the graph search and `ida_star` return optimal
/// solutions.
pub trait Heuristic {
    fn h(&self, state: &PuzzleState) -> f64;
}

/// Accumulated path cost. Paired with `ZeroHeuristic` this turns the graph
/// search into breadth-first search; paired with an admissible distance
/// estimate it yields A*.
pub struct UnitCost;

impl CostPolicy for UnitCost {
    fn g(&self, node: &Node) -> f64 {
        node.g
    }
}

/// Ignores path cost entirely. With a distance heuristic this produces
/// greedy best-first search.
pub struct ZeroCost;

impl CostPolicy for ZeroCost {
    fn g(&self, _node: &Node) -> f64 {
        0.0
    }
}

/// Negated depth: deeper nodes order first, so the frontier behaves like a
/// stack and the graph search degenerates to depth-first exploration. Only
/// meaningful together with a depth cutoff.
pub struct NegativeDepth;

impl CostPolicy for NegativeDepth {
    fn g(&self, node: &Node) -> f64 {
        -f64::from(node.depth)
    }
}

/// Estimates every state at zero.
pub struct ZeroHeuristic;

impl Heuristic for ZeroHeuristic {
    fn h(&self, _state: &PuzzleState) -> f64 {
        0.0
    }
}

/// Sum of per-tile Manhattan distances to the goal cell, blank excluded.
/// Admissible and consistent: one move changes a single tile's term by
/// exactly one.
pub struct ManhattanDistance;

impl Heuristic for ManhattanDistance {
    fn h(&self, state: &PuzzleState) -> f64 {
        f64::from(manhattan_distance(state))
    }
}

/// Sum of per-tile straight-line distances to the goal cell, blank
/// excluded. Admissible (never above the Manhattan estimate) but less
/// informed, so it grows larger search trees.
pub struct EuclideanDistance;

impl Heuristic for EuclideanDistance {
    fn h(&self, state: &PuzzleState) -> f64 {
        euclidean_distance(state)
    }
}

/// Manhattan distance of `state` to the canonical goal.
///
/// The goal places tile `t` at cell index `t`, so goal coordinates come
/// straight from the tile value.
pub fn manhattan_distance(state: &PuzzleState) -> u32 {
    let mut total = 0u32;
    for (cell, &tile) in state.tiles().iter().enumerate() {
        if tile == 0 {
            continue;
        }
        let goal = tile as usize;
        let row_delta = (cell / GRID_WIDTH) as i32 - (goal / GRID_WIDTH) as i32;
        let col_delta = (cell % GRID_WIDTH) as i32 - (goal % GRID_WIDTH) as i32;
        total += row_delta.unsigned_abs() + col_delta.unsigned_abs();
    }
    total
}

/// Euclidean distance of `state` to the canonical goal.
pub fn euclidean_distance(state: &PuzzleState) -> f64 {
    let mut total = 0.0f64;
    for (cell, &tile) in state.tiles().iter().enumerate() {
        if tile == 0 {
            continue;
        }
        let goal = tile as usize;
        let row_delta = (cell / GRID_WIDTH) as f64 - (goal / GRID_WIDTH) as f64;
        let col_delta = (cell % GRID_WIDTH) as f64 - (goal % GRID_WIDTH) as f64;
        total += (row_delta * row_delta + col_delta * col_delta).sqrt();
    }
    total
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::PuzzleState;
    use crate::solver::{graph_search, Node};
    use crate::utils::state_from_str;

    fn node_at(state: PuzzleState, g: f64, depth: u32) -> Node {
        Node {
            state,
            g,
            depth,
            parent: None,
            mv: None,
        }
    }

    #[test]
    fn test_distances_are_zero_at_goal() {
        let goal = PuzzleState::goal();
        assert_eq!(manhattan_distance(&goal), 0);
        assert_eq!(euclidean_distance(&goal), 0.0);
    }

    #[test]
    fn test_manhattan_known_values() {
        // Only tile 1 is displaced, by one column.
        assert_eq!(manhattan_distance(&state_from_str("102345678").unwrap()), 1);
        // Every tile sits one cell before its goal slot: 1+1+3+1+1+3+1+1.
        assert_eq!(
            manhattan_distance(&state_from_str("123456780").unwrap()),
            12
        );
    }

    #[test]
    fn test_euclidean_never_exceeds_manhattan() {
        for seed in 0..8 {
            let state = PuzzleState::scrambled(20, seed);
            let euclidean = euclidean_distance(&state);
            let manhattan = f64::from(manhattan_distance(&state));
            assert!(
                euclidean <= manhattan + 1e-9,
                "euclidean {} above manhattan {} for {}",
                euclidean,
                manhattan,
                state.encode()
            );
        }
    }

    #[test]
    fn test_manhattan_is_admissible_on_shallow_instances() {
        for (steps, seed) in [(2, 11), (4, 12), (6, 13), (8, 14)] {
            let state = PuzzleState::scrambled(steps, seed);
            let optimal = graph_search(&state, &UnitCost, &ZeroHeuristic, None).cost;
            assert!(
                f64::from(manhattan_distance(&state)) <= optimal,
                "manhattan must not overestimate for {}",
                state.encode()
            );
        }
    }

    #[test]
    fn test_cost_policies() {
        let node = node_at(PuzzleState::goal(), 7.0, 7);
        assert_eq!(UnitCost.g(&node), 7.0);
        assert_eq!(ZeroCost.g(&node), 0.0);
        assert_eq!(NegativeDepth.g(&node), -7.0);
    }

    #[test]
    fn test_zero_heuristic() {
        assert_eq!(ZeroHeuristic.h(&PuzzleState::scrambled(10, 3)), 0.0);
    }
}
