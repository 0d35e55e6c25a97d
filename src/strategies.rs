//! Named search strategy configurations.
//!
//! Each `Algorithm` binds one solve entry point to its cost/heuristic
//! parameters, so harness code can select a strategy by name without
//! knowing the wiring.

use crate::engine::PuzzleState;
use crate::heuristics::{
    EuclideanDistance, ManhattanDistance, NegativeDepth, UnitCost, ZeroCost, ZeroHeuristic,
};
use crate::solver::{
    dfs_backtracking, graph_search, ida_star, iterative_deepening, SearchResult,
};
use std::fmt;
use std::str::FromStr;

/// Depth bound handed to the depth-limited strategies when the caller does
/// not supply one.
pub const DEFAULT_DEPTH_LIMIT: u32 = 20;

/// The selectable search strategies.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Algorithm {
    /// Breadth-first search: unit cost, zero heuristic.
    Bfs,
    /// Depth-first graph search: negated-depth cost with a depth cutoff.
    DfsGraph,
    /// Depth-limited backtracking search, no explored set.
    DfsBacktracking,
    /// Iterative deepening over the backtracking search.
    IterativeDeepening,
    /// Greedy best-first search ordered by Manhattan distance alone.
    GreedyManhattan,
    /// A* with the Manhattan distance heuristic.
    AStarManhattan,
    /// A* with the Euclidean distance heuristic.
    AStarEuclidean,
    /// IDA* with the Manhattan distance heuristic.
    IdaStarManhattan,
}

impl Algorithm {
    pub const ALL: [Algorithm; 8] = [
        Algorithm::Bfs,
        Algorithm::DfsGraph,
        Algorithm::DfsBacktracking,
        Algorithm::IterativeDeepening,
        Algorithm::GreedyManhattan,
        Algorithm::AStarManhattan,
        Algorithm::AStarEuclidean,
        Algorithm::IdaStarManhattan,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Algorithm::Bfs => "bfs",
            Algorithm::DfsGraph => "dfs_graph",
            Algorithm::DfsBacktracking => "dfs_backtracking",
            Algorithm::IterativeDeepening => "iterative_deepening",
            Algorithm::GreedyManhattan => "greedy_manhattan",
            Algorithm::AStarManhattan => "a_star_manhattan",
            Algorithm::AStarEuclidean => "a_star_euclidean",
            Algorithm::IdaStarManhattan => "ida_star_manhattan",
        }
    }

    /// Runs the strategy against `initial` with its canonical parameters.
    pub fn run(self, initial: &PuzzleState) -> SearchResult {
        self.run_with_depth(initial, DEFAULT_DEPTH_LIMIT)
    }

    /// Like [`Algorithm::run`] with an explicit bound for the depth-limited
    /// strategies; the unbounded strategies ignore it.
    pub fn run_with_depth(self, initial: &PuzzleState, depth_limit: u32) -> SearchResult {
        match self {
            Algorithm::Bfs => graph_search(initial, &UnitCost, &ZeroHeuristic, None),
            Algorithm::DfsGraph => {
                graph_search(initial, &NegativeDepth, &ZeroHeuristic, Some(depth_limit))
            }
            Algorithm::DfsBacktracking => dfs_backtracking(initial, depth_limit),
            Algorithm::IterativeDeepening => iterative_deepening(initial),
            Algorithm::GreedyManhattan => {
                graph_search(initial, &ZeroCost, &ManhattanDistance, None)
            }
            Algorithm::AStarManhattan => {
                graph_search(initial, &UnitCost, &ManhattanDistance, None)
            }
            Algorithm::AStarEuclidean => {
                graph_search(initial, &UnitCost, &EuclideanDistance, None)
            }
            Algorithm::IdaStarManhattan => ida_star(initial, &ManhattanDistance),
        }
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Algorithm {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Algorithm::ALL
            .iter()
            .copied()
            .find(|algorithm| algorithm.name() == s)
            .ok_or_else(|| {
                let names: Vec<&str> = Algorithm::ALL.iter().map(|a| a.name()).collect();
                format!("unknown algorithm '{}', expected one of: {}", s, names.join(", "))
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_names_round_trip() {
        for algorithm in Algorithm::ALL {
            assert_eq!(algorithm.name().parse::<Algorithm>(), Ok(algorithm));
        }
    }

    #[test]
    fn test_unknown_name_is_rejected() {
        let err = "simulated_annealing".parse::<Algorithm>().unwrap_err();
        assert!(err.contains("unknown algorithm"));
    }

    #[test]
    fn test_optimal_strategies_agree() {
        let initial = PuzzleState::scrambled(8, 6);
        let optimal = Algorithm::Bfs.run(&initial).cost;
        for algorithm in [
            Algorithm::AStarManhattan,
            Algorithm::AStarEuclidean,
            Algorithm::IterativeDeepening,
            Algorithm::IdaStarManhattan,
        ] {
            let result = algorithm.run(&initial);
            assert!(result.solved, "{} must solve", algorithm);
            assert_eq!(result.cost, optimal, "{} must be optimal", algorithm);
        }
    }

    #[test]
    fn test_bounded_strategies_respect_depth() {
        let initial = PuzzleState::scrambled(4, 9);
        let result = Algorithm::DfsBacktracking.run_with_depth(&initial, 4);
        assert!(result.solved);
        assert!(result.moves.len() <= 4);

        let result = Algorithm::DfsBacktracking.run_with_depth(&initial, 1);
        assert!(!result.solved, "a one-move bound cannot reach this goal");
    }
}
