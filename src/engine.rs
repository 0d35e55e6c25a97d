//! Core state model for the 8-puzzle.
//!
//! This module defines the puzzle's fundamental components:
//! - `PuzzleState`: an immutable 3x3 arrangement of the tiles 0-8, where 0
//!   denotes the blank cell.
//! - `Move`: the four sliding directions, expressed as the direction the
//!   tile adjacent to the blank travels into the blank's cell.
//!
//! It also hosts the inversion-parity solvability check and a seeded
//! scrambler for producing reproducible solvable instances.

use crate::utils::InvalidStateError;
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};
use std::fmt;

/// Width (and height) of the puzzle grid.
pub const GRID_WIDTH: usize = 3;

/// Number of cells on the board, blank included.
pub const CELL_COUNT: usize = GRID_WIDTH * GRID_WIDTH;

const GOAL_TILES: [u8; CELL_COUNT] = [0, 1, 2, 3, 4, 5, 6, 7, 8];

/// One sliding move: the tile adjacent to the blank travels in this
/// direction, into the blank's cell. The blank moves the opposite way.
///
/// A move is legal only while the sliding tile exists, i.e. the blank does
/// not leave the board.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Move {
    /// The tile below the blank slides up.
    Up,
    /// The tile above the blank slides down.
    Down,
    /// The tile right of the blank slides left.
    Left,
    /// The tile left of the blank slides right.
    Right,
}

impl Move {
    /// All moves, in the fixed expansion order shared by every search so
    /// that node counts and tie-breaks reproduce across runs.
    pub const ALL: [Move; 4] = [Move::Up, Move::Down, Move::Left, Move::Right];

    /// The move that undoes this one.
    pub fn inverse(self) -> Move {
        match self {
            Move::Up => Move::Down,
            Move::Down => Move::Up,
            Move::Left => Move::Right,
            Move::Right => Move::Left,
        }
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Move::Up => "up",
            Move::Down => "down",
            Move::Left => "left",
            Move::Right => "right",
        };
        write!(f, "{}", name)
    }
}

/// An immutable 8-puzzle configuration.
///
/// Tiles are stored row-major; the value 0 is the blank. Every
/// `PuzzleState` holds a permutation of 0..=8, enforced at construction.
/// Equality and hashing are structural, which makes states usable as
/// deduplication keys in the searches.
///
/// # Examples
/// ```
/// use eight_puzzle_solver::engine::PuzzleState;
///
/// let goal = PuzzleState::goal();
/// assert_eq!(goal.encode(), "012345678");
/// assert!(goal.is_goal());
/// assert!(goal.is_solvable());
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub struct PuzzleState {
    tiles: [u8; CELL_COUNT],
    blank: u8,
}

impl PuzzleState {
    /// The canonical goal configuration: blank first, then 1..8 ascending.
    pub fn goal() -> Self {
        PuzzleState {
            tiles: GOAL_TILES,
            blank: 0,
        }
    }

    /// Builds a state from a row-major tile array, validating that it is a
    /// permutation of 0..=8.
    pub fn from_tiles(tiles: [u8; CELL_COUNT]) -> Result<Self, InvalidStateError> {
        let mut seen = [false; CELL_COUNT];
        for &tile in &tiles {
            if tile as usize >= CELL_COUNT {
                return Err(InvalidStateError::OutOfRange(tile));
            }
            if seen[tile as usize] {
                return Err(InvalidStateError::Duplicate(tile));
            }
            seen[tile as usize] = true;
        }
        // All nine values are distinct and below nine, so 0 is present.
        let blank = tiles
            .iter()
            .position(|&t| t == 0)
            .expect("permutation contains the blank") as u8;
        Ok(PuzzleState { tiles, blank })
    }

    /// Returns the row-major tile array.
    pub fn tiles(&self) -> &[u8; CELL_COUNT] {
        &self.tiles
    }

    /// (row, column) of the blank cell.
    pub fn blank_cell(&self) -> (usize, usize) {
        (
            self.blank as usize / GRID_WIDTH,
            self.blank as usize % GRID_WIDTH,
        )
    }

    /// Whether this state is the canonical goal.
    pub fn is_goal(&self) -> bool {
        self.tiles == GOAL_TILES
    }

    /// Applies a move, returning the successor state, or `None` if the move
    /// is illegal from this configuration.
    pub fn apply(&self, mv: Move) -> Option<PuzzleState> {
        let (row, col) = self.blank_cell();
        // Cell of the tile that slides; the blank ends up there.
        let (tile_row, tile_col) = match mv {
            Move::Up => (row + 1, col),
            Move::Down => (row.checked_sub(1)?, col),
            Move::Left => (row, col + 1),
            Move::Right => (row, col.checked_sub(1)?),
        };
        if tile_row >= GRID_WIDTH || tile_col >= GRID_WIDTH {
            return None;
        }
        let from = tile_row * GRID_WIDTH + tile_col;
        let mut tiles = self.tiles;
        tiles.swap(self.blank as usize, from);
        Some(PuzzleState {
            tiles,
            blank: from as u8,
        })
    }

    /// Legal successors in the fixed order up, down, left, right.
    ///
    /// A corner blank yields 2 successors, an edge blank 3, the center 4.
    pub fn neighbors(&self) -> Vec<(Move, PuzzleState)> {
        Move::ALL
            .iter()
            .filter_map(|&mv| self.apply(mv).map(|next| (mv, next)))
            .collect()
    }

    /// Decides whether this configuration can reach the goal.
    ///
    /// Counts inversions among the non-blank tiles read row-major; on an
    /// odd-width grid the configuration is solvable iff the count is even,
    /// matching the parity of the canonical goal.
    pub fn is_solvable(&self) -> bool {
        let mut inversions = 0usize;
        for i in 0..CELL_COUNT {
            for j in (i + 1)..CELL_COUNT {
                if self.tiles[i] != 0 && self.tiles[j] != 0 && self.tiles[i] > self.tiles[j] {
                    inversions += 1;
                }
            }
        }
        inversions % 2 == 0
    }

    /// Produces a solvable configuration by walking `steps` random moves
    /// from the goal, never undoing the previous move.
    ///
    /// The walk is driven by a `SmallRng` seeded with `seed`, so the same
    /// arguments always yield the same state. The optimal solution length
    /// of the result is at most `steps`.
    pub fn scrambled(steps: usize, seed: u64) -> Self {
        let mut rng = SmallRng::seed_from_u64(seed);
        let mut state = PuzzleState::goal();
        let mut last: Option<Move> = None;
        for _ in 0..steps {
            let candidates: Vec<(Move, PuzzleState)> = state
                .neighbors()
                .into_iter()
                .filter(|(mv, _)| last.map_or(true, |l| *mv != l.inverse()))
                .collect();
            let (mv, next) = candidates[rng.gen_range(0..candidates.len())];
            state = next;
            last = Some(mv);
        }
        state
    }

    /// The 9-character row-major encoding, e.g. `"012345678"` for the goal.
    pub fn encode(&self) -> String {
        self.tiles.iter().map(|&t| char::from(b'0' + t)).collect()
    }
}

impl fmt::Display for PuzzleState {
    /// Formats the board as a 3-line grid, the blank shown as `.`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in 0..GRID_WIDTH {
            for col in 0..GRID_WIDTH {
                if col > 0 {
                    write!(f, " ")?;
                }
                let tile = self.tiles[row * GRID_WIDTH + col];
                if tile == 0 {
                    write!(f, ".")?;
                } else {
                    write!(f, "{}", tile)?;
                }
            }
            if row < GRID_WIDTH - 1 {
                writeln!(f)?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::state_from_str;

    #[test]
    fn test_goal_layout() {
        let goal = PuzzleState::goal();
        assert_eq!(goal.encode(), "012345678");
        assert_eq!(goal.blank_cell(), (0, 0));
        assert!(goal.is_goal());
    }

    #[test]
    fn test_neighbor_counts_by_blank_position() {
        // Corner blank.
        assert_eq!(PuzzleState::goal().neighbors().len(), 2);
        // Edge blank.
        let edge = state_from_str("102345678").unwrap();
        assert_eq!(edge.neighbors().len(), 3);
        // Center blank.
        let center = state_from_str("123405678").unwrap();
        assert_eq!(center.neighbors().len(), 4);
    }

    #[test]
    fn test_neighbor_ordering_is_deterministic() {
        let center = state_from_str("123405678").unwrap();
        let moves: Vec<Move> = center.neighbors().into_iter().map(|(mv, _)| mv).collect();
        assert_eq!(moves, vec![Move::Up, Move::Down, Move::Left, Move::Right]);
    }

    #[test]
    fn test_illegal_moves_from_corner() {
        let goal = PuzzleState::goal();
        // Blank at (0,0): no tile above it or left of it.
        assert!(goal.apply(Move::Down).is_none());
        assert!(goal.apply(Move::Right).is_none());
        assert!(goal.apply(Move::Up).is_some());
        assert!(goal.apply(Move::Left).is_some());
    }

    #[test]
    fn test_apply_slides_expected_tile() {
        // Blank at (0,1); the tile to its left slides right, restoring the
        // goal.
        let state = state_from_str("102345678").unwrap();
        let next = state.apply(Move::Right).unwrap();
        assert!(next.is_goal());
    }

    #[test]
    fn test_move_inverse_round_trip() {
        let center = state_from_str("123405678").unwrap();
        for mv in Move::ALL {
            let there = center.apply(mv).expect("all moves legal from center");
            let back = there.apply(mv.inverse()).expect("inverse must be legal");
            assert_eq!(back, center, "{} then {} must round-trip", mv, mv.inverse());
        }
    }

    #[test]
    fn test_from_tiles_rejects_non_permutations() {
        assert_eq!(
            PuzzleState::from_tiles([1, 1, 2, 3, 4, 5, 6, 7, 8]),
            Err(InvalidStateError::Duplicate(1))
        );
        assert_eq!(
            PuzzleState::from_tiles([0, 1, 2, 3, 4, 5, 6, 7, 9]),
            Err(InvalidStateError::OutOfRange(9))
        );
    }

    #[test]
    fn test_solvability_corpus() {
        assert!(PuzzleState::goal().is_solvable());
        // Identity ordering of the tiles: zero inversions.
        assert!(state_from_str("123456780").unwrap().is_solvable());
        // Swapping two non-blank tiles flips parity.
        assert!(!state_from_str("213456780").unwrap().is_solvable());
        assert!(!state_from_str("021345678").unwrap().is_solvable());
    }

    #[test]
    fn test_scrambled_is_deterministic_and_solvable() {
        let a = PuzzleState::scrambled(25, 514514);
        let b = PuzzleState::scrambled(25, 514514);
        assert_eq!(a, b, "same seed must yield the same instance");
        assert!(a.is_solvable());

        let c = PuzzleState::scrambled(25, 514515);
        assert_ne!(a, c, "different seeds should yield different instances");
    }

    #[test]
    fn test_scrambled_never_returns_goal_for_short_walks() {
        // The shortest cycle in the move graph that avoids immediate undo
        // has length 12, so walks below that cannot come back around.
        for steps in 1..12 {
            assert!(!PuzzleState::scrambled(steps, 7).is_goal());
        }
    }

    #[test]
    fn test_display_grid() {
        let rendered = format!("{}", PuzzleState::goal());
        assert_eq!(rendered, ". 1 2\n3 4 5\n6 7 8");
    }
}
