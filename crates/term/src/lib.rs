//! Terminal "game renderer" module.
//!
//! This is the render boundary of the game: it reads immutable snapshots and
//! animation frames handed to it and never touches the grid.
//! It avoids widget/layout libraries and renders into a simple framebuffer that
//! is flushed to the terminal with crossterm.
//!
//! - [`palette`]: tile value → background, text color and text size
//! - [`game_view`]: resting grid and in-between animation frames
//! - [`renderer`]: diffing flush to the real terminal

pub mod fb;
pub mod game_view;
pub mod palette;
pub mod renderer;

pub use tui_2048_core as core;
pub use tui_2048_types as types;

pub use fb::{Cell, CellStyle, FrameBuffer, Rgb};
pub use game_view::{AnchorY, GameView, Viewport};
pub use palette::{text_color, text_size, tile_color, TextSize};
pub use renderer::{encode_diff_into, encode_full_into, TerminalRenderer};
