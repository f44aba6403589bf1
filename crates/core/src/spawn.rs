//! Tile spawning
//!
//! After every move that changes the grid a new tile appears in a uniformly chosen
//! empty cell: a 4 one time in ten, otherwise a 2.

use rand::Rng;

use crate::grid::Grid;
use crate::types::{Pos, FOUR_TILE_ODDS, SPAWN_TILE, SPAWN_TILE_RARE};

/// Draw the value of a new tile: 4 when `0..FOUR_TILE_ODDS` lands on 0, else 2.
pub fn random_tile_value<R: Rng + ?Sized>(rng: &mut R) -> u32 {
    if rng.gen_range(0..FOUR_TILE_ODDS) == 0 {
        SPAWN_TILE_RARE
    } else {
        SPAWN_TILE
    }
}

/// Place a random tile into a random empty cell.
///
/// Returns the new grid and the cell that was filled; a full grid is returned
/// unchanged with `None`.
///
/// ```
/// use rand::{rngs::StdRng, SeedableRng};
/// use tui_2048_core::{spawn::spawn_random_tile, Grid};
///
/// let mut rng = StdRng::seed_from_u64(7);
/// let (grid, pos) = spawn_random_tile(&Grid::new(), &mut rng);
/// let pos = pos.unwrap();
/// assert!(matches!(grid.get(pos), 2 | 4));
/// assert_eq!(grid.count_empty(), 15);
/// ```
pub fn spawn_random_tile<R: Rng + ?Sized>(grid: &Grid, rng: &mut R) -> (Grid, Option<Pos>) {
    let empty = grid.empty_cells();
    if empty.is_empty() {
        return (*grid, None);
    }

    let pos = empty[rng.gen_range(0..empty.len())];
    let mut out = *grid;
    out.set(pos, random_tile_value(rng));
    (out, Some(pos))
}
