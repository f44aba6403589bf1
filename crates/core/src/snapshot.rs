use crate::types::GRID_SIZE;

/// Read-only view of a session handed to the renderer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct GameSnapshot {
    pub grid: [[u32; GRID_SIZE]; GRID_SIZE],
    pub score: u32,
    pub game_over: bool,
    pub moves: u32,
    pub max_tile: u32,
    pub seed: u64,
}

impl Default for GameSnapshot {
    fn default() -> Self {
        Self {
            grid: [[0u32; GRID_SIZE]; GRID_SIZE],
            score: 0,
            game_over: false,
            moves: 0,
            max_tile: 0,
            seed: 0,
        }
    }
}
