//! Game session - owns the grid between moves
//!
//! The session is the only place where the grid is replaced. A move is applied in
//! two phases so the driver can animate in between:
//!
//! 1. [`GameSession::play`] resolves the move and swaps in the new grid
//! 2. [`GameSession::spawn_tile`] adds the random tile once the animation is done
//!
//! Moves that change nothing return `None` and never lead to a spawn.

use log::{debug, info};
use rand::rngs::StdRng;
use rand::{RngCore, SeedableRng};

use crate::config::Config;
use crate::grid::Grid;
use crate::moves::{is_game_over, resolve_move, MoveResult};
use crate::snapshot::GameSnapshot;
use crate::spawn::spawn_random_tile;
use crate::types::{Direction, Pos};

#[derive(Debug, Clone)]
pub struct GameSession {
    grid: Grid,
    /// Tracked for display; no rule increments it yet.
    score: u32,
    game_over: bool,
    /// Moves that changed the grid since the last reset.
    moves: u32,
    /// Set between `play` and `spawn_tile`.
    spawn_pending: bool,
    seed: u64,
    rng: StdRng,
}

impl GameSession {
    /// Start a session: empty grid plus one spawned tile.
    pub fn new(config: &Config) -> Self {
        let seed = config.seed.unwrap_or_else(|| rand::thread_rng().next_u64());
        Self::with_seed(seed)
    }

    pub fn with_seed(seed: u64) -> Self {
        let mut session = Self::from_grid(Grid::new(), seed);
        session.spawn_initial();
        session
    }

    /// Resume from an existing grid without spawning.
    pub fn from_grid(grid: Grid, seed: u64) -> Self {
        Self {
            grid,
            score: 0,
            game_over: is_game_over(&grid),
            moves: 0,
            spawn_pending: false,
            seed,
            rng: StdRng::seed_from_u64(seed),
        }
    }

    fn spawn_initial(&mut self) {
        let (grid, _) = spawn_random_tile(&self.grid, &mut self.rng);
        self.grid = grid;
        info!("new game (seed {})\n{}", self.seed, self.grid);
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn game_over(&self) -> bool {
        self.game_over
    }

    pub fn moves(&self) -> u32 {
        self.moves
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }

    pub fn spawn_pending(&self) -> bool {
        self.spawn_pending
    }

    /// Resolve a move against the current grid.
    ///
    /// On change, the grid is replaced and the result is returned for animation; the
    /// caller then calls [`spawn_tile`](Self::spawn_tile). A move that changes
    /// nothing leaves the session untouched and returns `None`.
    pub fn play(&mut self, direction: Direction) -> Option<MoveResult> {
        if self.game_over {
            return None;
        }
        if self.spawn_pending {
            // Finish the previous move before accepting a new one.
            self.spawn_tile();
        }

        let result = resolve_move(&self.grid, direction);
        debug!(
            "move {}: changed={} motions={} merges={}",
            direction.as_str(),
            result.changed,
            result.motions.len(),
            result.merges.len()
        );
        if !result.changed {
            return None;
        }

        self.grid = result.grid;
        self.moves = self.moves.wrapping_add(1);
        self.spawn_pending = true;
        self.update_game_over();
        Some(result)
    }

    /// Spawn the tile owed by the last changed move. Skipped on a full grid.
    pub fn spawn_tile(&mut self) -> Option<Pos> {
        if !self.spawn_pending {
            return None;
        }
        self.spawn_pending = false;

        let (grid, pos) = spawn_random_tile(&self.grid, &mut self.rng);
        self.grid = grid;
        if let Some(p) = pos {
            debug!("spawned {} at ({}, {})\n{}", grid.get(p), p.row, p.col, self.grid);
        }
        self.update_game_over();
        pos
    }

    /// Play a move and spawn right away (no animation in between).
    pub fn step(&mut self, direction: Direction) -> Option<MoveResult> {
        let result = self.play(direction)?;
        self.spawn_tile();
        Some(result)
    }

    /// Start a new game with the same RNG stream.
    pub fn reset(&mut self) {
        self.grid = Grid::new();
        self.score = 0;
        self.game_over = false;
        self.moves = 0;
        self.spawn_pending = false;
        self.spawn_initial();
    }

    fn update_game_over(&mut self) {
        // A pending spawn will add a tile, so the grid is not final yet.
        if self.spawn_pending {
            return;
        }
        let over = is_game_over(&self.grid);
        if over && !self.game_over {
            info!(
                "game over after {} moves, highest tile {}",
                self.moves,
                self.grid.max_tile()
            );
        }
        self.game_over = over;
    }

    pub fn snapshot_into(&self, out: &mut GameSnapshot) {
        out.grid = self.grid.rows();
        out.score = self.score;
        out.game_over = self.game_over;
        out.moves = self.moves;
        out.max_tile = self.grid.max_tile();
        out.seed = self.seed;
    }

    pub fn snapshot(&self) -> GameSnapshot {
        let mut s = GameSnapshot::default();
        self.snapshot_into(&mut s);
        s
    }
}
