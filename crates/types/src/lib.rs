//! Core types module - shared data structures and constants
//!
//! This module defines the fundamental types used throughout the application.
//! All types are pure data structures with no external dependencies, making them
//! usable in any context (rules engine, animation planning, terminal rendering).
//!
//! # Grid Dimensions
//!
//! The playfield is a fixed 4x4 grid:
//!
//! - **Rows**: indexed 0-3, top to bottom
//! - **Columns**: indexed 0-3, left to right
//!
//! # Constants
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `GRID_SIZE` | 4 | Rows and columns of the grid |
//! | `DEFAULT_ANIMATION_STEPS` | 8 | Interpolation frames per move |
//! | `ANIMATION_FRAME_MS` | 12 | Delay between animation frames |
//! | `TICK_MS` | 16 | Input poll interval (~60 FPS) |
//! | `FOUR_TILE_ODDS` | 10 | One spawn in ten is a 4, the rest are 2s |
//!
//! # Examples
//!
//! ```
//! use tui_2048_types::{Direction, GameAction, Pos, GRID_SIZE};
//!
//! assert!(Direction::Up.is_vertical());
//! assert_eq!(Direction::Left.as_str(), "left");
//!
//! // Game actions
//! let action = GameAction::Move(Direction::Up);
//! assert_ne!(action, GameAction::Restart);
//!
//! // Cell coordinates mirror the grid transforms
//! assert_eq!(Pos::new(0, 3).transpose(), Pos::new(3, 0));
//! assert_eq!(GRID_SIZE, 4);
//! ```

/// Grid size in cells (4 rows by 4 columns)
pub const GRID_SIZE: usize = 4;

/// Total number of cells on the grid
pub const CELL_COUNT: usize = GRID_SIZE * GRID_SIZE;

/// Fixed input poll interval in milliseconds (16ms ≈ 60 FPS)
pub const TICK_MS: u32 = 16;

/// Number of interpolation frames played for each move.
pub const DEFAULT_ANIMATION_STEPS: u32 = 8;

/// Delay between two animation frames in milliseconds.
pub const ANIMATION_FRAME_MS: u32 = 12;

/// A spawned tile is a 4 when a uniform draw over `0..FOUR_TILE_ODDS` lands on 0.
pub const FOUR_TILE_ODDS: u32 = 10;

/// Value of the common spawned tile.
pub const SPAWN_TILE: u32 = 2;

/// Value of the rare spawned tile.
pub const SPAWN_TILE_RARE: u32 = 4;

/// Highest tile with a dedicated color; larger tiles use the overflow color.
pub const MAX_PALETTE_TILE: u32 = 2048;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn grid_and_spawn_defaults() {
        assert_eq!(GRID_SIZE, 4);
        assert_eq!(CELL_COUNT, 16);
        assert_eq!(FOUR_TILE_ODDS, 10);
        assert_eq!(SPAWN_TILE, 2);
        assert_eq!(SPAWN_TILE_RARE, 4);
        assert!(DEFAULT_ANIMATION_STEPS > 0);
    }

    #[test]
    fn pos_transforms_are_involutions() {
        for row in 0..GRID_SIZE as u8 {
            for col in 0..GRID_SIZE as u8 {
                let p = Pos::new(row, col);
                assert_eq!(p.transpose().transpose(), p);
                assert_eq!(p.reverse_col().reverse_col(), p);
            }
        }
    }

    #[test]
    fn direction_axes() {
        let vertical: Vec<_> = Direction::ALL.into_iter().filter(|d| d.is_vertical()).collect();
        assert_eq!(vertical, vec![Direction::Up, Direction::Down]);
        let high: Vec<_> = Direction::ALL
            .into_iter()
            .filter(|d| d.is_toward_high_index())
            .collect();
        assert_eq!(high, vec![Direction::Down, Direction::Right]);
    }
}

/// The four move directions
///
/// - **Up**: tiles slide toward row 0
/// - **Down**: tiles slide toward the last row
/// - **Left**: tiles slide toward column 0
/// - **Right**: tiles slide toward the last column
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    /// All directions, in a fixed order.
    pub const ALL: [Direction; 4] = [
        Direction::Up,
        Direction::Down,
        Direction::Left,
        Direction::Right,
    ];

    /// Convert to lowercase string
    pub fn as_str(&self) -> &'static str {
        match self {
            Direction::Up => "up",
            Direction::Down => "down",
            Direction::Left => "left",
            Direction::Right => "right",
        }
    }

    /// True for moves that run along columns (solved through a transpose).
    pub fn is_vertical(&self) -> bool {
        matches!(self, Direction::Up | Direction::Down)
    }

    /// True for moves toward the high index (solved through a row reversal).
    pub fn is_toward_high_index(&self) -> bool {
        matches!(self, Direction::Down | Direction::Right)
    }
}

/// A cell coordinate on the grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Pos {
    pub row: u8,
    pub col: u8,
}

impl Pos {
    pub const fn new(row: u8, col: u8) -> Self {
        Self { row, col }
    }

    /// Swap row and column roles (mirrors a grid transpose).
    pub const fn transpose(self) -> Self {
        Self {
            row: self.col,
            col: self.row,
        }
    }

    /// Mirror the column index (mirrors reversing every row).
    pub const fn reverse_col(self) -> Self {
        Self {
            row: self.row,
            col: (GRID_SIZE as u8) - 1 - self.col,
        }
    }

    /// Row-major flat index.
    #[inline(always)]
    pub const fn index(self) -> usize {
        (self.row as usize) * GRID_SIZE + (self.col as usize)
    }
}

/// Game actions produced by the input boundary
///
/// Each action maps to one atomic request against the session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameAction {
    /// Slide all tiles in a direction
    Move(Direction),
    /// Start a new game
    Restart,
}
