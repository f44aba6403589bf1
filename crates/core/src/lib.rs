//! Core game logic module - pure, deterministic, and testable
//!
//! This module contains the rules of the sliding-tile merge puzzle and the planning
//! of move animations. It has **no dependencies** on terminal I/O, making it:
//!
//! - **Deterministic**: Same seed produces identical games
//! - **Testable**: Every move is a pure `Grid -> MoveResult` function
//! - **Portable**: Can run in any environment (terminal, GUI, headless)
//! - **Zero-allocation**: Moves and their records live on the stack
//!
//! # Module Structure
//!
//! - [`grid`]: 4x4 tile matrix with transpose / row-reverse transforms
//! - [`moves`]: compress / merge / compress primitive and the four directions
//! - [`spawn`]: random 2 (90%) or 4 (10%) tile into an empty cell
//! - [`animation`]: move records → replayable interpolation frames
//! - [`session`]: the grid owner driven once per accepted input
//! - [`config`]: animation and RNG settings, read from the environment
//!
//! # Game Rules
//!
//! - **Slide**: all tiles travel as far as possible in the chosen direction
//! - **Merge**: two equal neighbours combine into one tile of double value
//! - **Once per move**: a tile produced by a merge does not merge again in the same move
//! - **Spawn**: each move that changes the grid adds one tile
//! - **Game over**: the grid is full and no direction changes it
//!
//! # Example
//!
//! ```
//! use tui_2048_core::{GameSession, Grid};
//! use tui_2048_core::types::Direction;
//!
//! let grid = Grid::from_rows([[2, 2, 0, 0], [0; 4], [0; 4], [0; 4]]).unwrap();
//! let mut session = GameSession::from_grid(grid, 12345);
//!
//! let result = session.play(Direction::Left).unwrap();
//! assert_eq!(result.grid.row(0), [4, 0, 0, 0]);
//! assert_eq!(result.merges.len(), 1);
//!
//! // The new tile arrives once the move has been animated.
//! assert!(session.spawn_tile().is_some());
//! assert_eq!(session.grid().tiles().count(), 2);
//! ```

pub mod animation;
pub mod config;
pub mod error;
pub mod grid;
pub mod moves;
pub mod session;
pub mod snapshot;
pub mod spawn;

pub use tui_2048_types as types;

// Re-export commonly used types for convenience
pub use animation::{plan_animation, Animation, AnimationFrame, Offset};
pub use config::Config;
pub use error::{ConfigError, GridError};
pub use grid::Grid;
pub use moves::{is_game_over, legal_moves, resolve_move, Merge, Motion, MoveResult};
pub use session::GameSession;
pub use snapshot::GameSnapshot;
pub use spawn::spawn_random_tile;
