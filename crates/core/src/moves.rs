//! Move resolution - one primitive, four directions
//!
//! Every move is solved by the same "toward low index" primitive applied to each row:
//!
//! 1. **compress**: slide nonzero tiles toward column 0, keeping their order
//! 2. **merge**: one left-to-right sweep; equal neighbours combine into the left cell
//! 3. **compress** again to close the gaps left by merged tiles
//!
//! The other directions are reductions onto that primitive:
//!
//! - **Right**: reverse every row, solve Left, reverse back
//! - **Up**: transpose, solve Left, transpose back
//! - **Down**: transpose, solve Right, transpose back
//!
//! While resolving, each tile carries the column it started in, so the result also
//! reports where every tile ended up ([`Motion`]) and which tiles were absorbed
//! ([`Merge`]). Those records are mapped back through the inverse transforms, so all
//! coordinates refer to the grid the caller passed in.

use arrayvec::ArrayVec;

use crate::grid::{Grid, Row};
use crate::types::{Direction, Pos, CELL_COUNT, GRID_SIZE};

/// Maximum merges in one move (two per line).
pub const MAX_MERGES: usize = GRID_SIZE / 2 * GRID_SIZE;

/// A tile that changed cells during a move (net displacement).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Motion {
    pub from: Pos,
    pub to: Pos,
}

/// A tile that was absorbed by an equal neighbour.
///
/// Both cells are pre-move coordinates of the two tiles.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Merge {
    pub absorbed: Pos,
    pub survivor: Pos,
}

/// Outcome of resolving one move against a grid snapshot.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MoveResult {
    pub direction: Direction,
    pub grid: Grid,
    /// `false` iff `grid` equals the input grid cell for cell.
    pub changed: bool,
    /// One entry per tile whose cell changed, sorted by source cell.
    pub motions: ArrayVec<Motion, CELL_COUNT>,
    pub merges: ArrayVec<Merge, MAX_MERGES>,
}

impl MoveResult {
    /// Final cell of the tile that started at `from` (itself if it did not move).
    pub fn destination(&self, from: Pos) -> Pos {
        self.motions
            .iter()
            .find(|m| m.from == from)
            .map_or(from, |m| m.to)
    }

    /// True if the tile that started at `pos` absorbed another tile.
    pub fn is_survivor(&self, pos: Pos) -> bool {
        self.merges.iter().any(|m| m.survivor == pos)
    }

    /// True if the tile that started at `pos` was absorbed.
    pub fn is_absorbed(&self, pos: Pos) -> bool {
        self.merges.iter().any(|m| m.absorbed == pos)
    }

    /// Sum of the values created by merges in this move.
    pub fn merged_value_total(&self, before: &Grid) -> u32 {
        self.merges.iter().map(|m| before.get(m.survivor) * 2).sum()
    }
}

/// One row resolved by the Left primitive.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RowMove {
    pub values: Row,
    /// Final column of the tile that started in each column (`None` for empty cells).
    pub dest: [Option<u8>; GRID_SIZE],
    /// For absorbed tiles, the starting column of the tile that absorbed them.
    pub absorbed_into: [Option<u8>; GRID_SIZE],
}

impl RowMove {
    pub fn changed(&self, original: &Row) -> bool {
        self.values != *original
    }
}

/// A row of values where every tile remembers its starting column.
#[derive(Debug, Clone, Copy)]
struct TrackedRow {
    values: Row,
    origin: [Option<u8>; GRID_SIZE],
}

impl TrackedRow {
    fn new(values: Row) -> Self {
        let mut origin = [None; GRID_SIZE];
        for (col, &v) in values.iter().enumerate() {
            if v != 0 {
                origin[col] = Some(col as u8);
            }
        }
        Self { values, origin }
    }

    /// Slide tiles toward index 0. Each hop is written over the tile's previous
    /// entry in `dest`, so after both passes `dest` holds the net displacement.
    fn compress(&mut self, dest: &mut [Option<u8>; GRID_SIZE]) -> bool {
        let mut out = Self {
            values: [0; GRID_SIZE],
            origin: [None; GRID_SIZE],
        };
        let mut changed = false;
        let mut pos = 0;
        for col in 0..GRID_SIZE {
            if self.values[col] == 0 {
                continue;
            }
            out.values[pos] = self.values[col];
            out.origin[pos] = self.origin[col];
            if let Some(o) = self.origin[col] {
                dest[o as usize] = Some(pos as u8);
            }
            changed |= col != pos;
            pos += 1;
        }
        *self = out;
        changed
    }

    /// Single left-to-right sweep. The right tile of an equal pair is absorbed into
    /// the left one; the emptied cell stops the survivor from merging again.
    fn merge(&mut self, absorbed_into: &mut [Option<u8>; GRID_SIZE]) -> bool {
        let mut changed = false;
        for col in 0..GRID_SIZE - 1 {
            let v = self.values[col];
            if v == 0 || v != self.values[col + 1] {
                continue;
            }
            self.values[col] = v * 2;
            self.values[col + 1] = 0;
            if let (Some(survivor), Some(absorbed)) = (self.origin[col], self.origin[col + 1]) {
                absorbed_into[absorbed as usize] = Some(survivor);
            }
            self.origin[col + 1] = None;
            changed = true;
        }
        changed
    }
}

/// Resolve one row toward index 0: compress, merge, compress.
///
/// ```
/// use tui_2048_core::moves::resolve_row;
///
/// let m = resolve_row([2, 2, 2, 0]);
/// assert_eq!(m.values, [4, 2, 0, 0]);
/// assert_eq!(m.dest[2], Some(1));
/// assert_eq!(m.absorbed_into[1], Some(0));
/// ```
pub fn resolve_row(values: Row) -> RowMove {
    let mut row = TrackedRow::new(values);
    let mut dest = [None; GRID_SIZE];
    let mut absorbed_into = [None; GRID_SIZE];
    for (col, d) in dest.iter_mut().enumerate() {
        if values[col] != 0 {
            *d = Some(col as u8);
        }
    }

    row.compress(&mut dest);
    row.merge(&mut absorbed_into);
    row.compress(&mut dest);

    // Absorbed tiles travel with their survivor.
    for col in 0..GRID_SIZE {
        if let Some(survivor) = absorbed_into[col] {
            dest[col] = dest[survivor as usize];
        }
    }

    RowMove {
        values: row.values,
        dest,
        absorbed_into,
    }
}

/// Slide nonzero values toward index 0. Returns true if any tile moved.
pub fn compress_row(row: &mut Row) -> bool {
    let mut tracked = TrackedRow::new(*row);
    let changed = tracked.compress(&mut [None; GRID_SIZE]);
    *row = tracked.values;
    changed
}

/// Merge equal neighbours in one left-to-right sweep. Returns true if any merged.
pub fn merge_row(row: &mut Row) -> bool {
    let mut tracked = TrackedRow::new(*row);
    let changed = tracked.merge(&mut [None; GRID_SIZE]);
    *row = tracked.values;
    changed
}

/// Maps coordinates between the caller's grid and the Left-oriented working grid.
#[derive(Debug, Clone, Copy)]
struct Orientation {
    transposed: bool,
    reversed: bool,
}

impl Orientation {
    fn for_direction(direction: Direction) -> Self {
        Self {
            transposed: direction.is_vertical(),
            reversed: direction.is_toward_high_index(),
        }
    }

    fn apply(&self, grid: &Grid) -> Grid {
        let mut g = *grid;
        if self.transposed {
            g = g.transpose();
        }
        if self.reversed {
            g = g.reverse_rows();
        }
        g
    }

    fn undo(&self, grid: &Grid) -> Grid {
        let mut g = *grid;
        if self.reversed {
            g = g.reverse_rows();
        }
        if self.transposed {
            g = g.transpose();
        }
        g
    }

    fn undo_pos(&self, mut pos: Pos) -> Pos {
        if self.reversed {
            pos = pos.reverse_col();
        }
        if self.transposed {
            pos = pos.transpose();
        }
        pos
    }
}

/// Resolve a move without spawning. Pure: the input grid is never modified.
///
/// ```
/// use tui_2048_core::{moves::resolve_move, Grid};
/// use tui_2048_core::types::Direction;
///
/// let grid = Grid::from_rows([[2, 2, 0, 0], [0; 4], [0; 4], [0; 4]]).unwrap();
/// let result = resolve_move(&grid, Direction::Right);
/// assert!(result.changed);
/// assert_eq!(result.grid.row(0), [0, 0, 0, 4]);
/// ```
pub fn resolve_move(grid: &Grid, direction: Direction) -> MoveResult {
    let orientation = Orientation::for_direction(direction);
    let work = orientation.apply(grid);

    let mut rows = [[0u32; GRID_SIZE]; GRID_SIZE];
    let mut motions = ArrayVec::new();
    let mut merges = ArrayVec::new();

    for (r, out_row) in rows.iter_mut().enumerate() {
        let row = resolve_row(work.row(r));
        *out_row = row.values;

        for col in 0..GRID_SIZE {
            let at = |c: u8| orientation.undo_pos(Pos::new(r as u8, c));
            if let Some(d) = row.dest[col] {
                if d as usize != col {
                    motions.push(Motion {
                        from: at(col as u8),
                        to: at(d),
                    });
                }
            }
            if let Some(survivor) = row.absorbed_into[col] {
                merges.push(Merge {
                    absorbed: at(col as u8),
                    survivor: at(survivor),
                });
            }
        }
    }

    let new_grid = orientation.undo(&Grid::from_rows_unchecked(rows));
    motions.sort_unstable_by_key(|m: &Motion| m.from);
    merges.sort_unstable_by_key(|m: &Merge| m.absorbed);

    MoveResult {
        direction,
        changed: new_grid != *grid,
        grid: new_grid,
        motions,
        merges,
    }
}

/// True if moving in `direction` would change the grid.
pub fn can_move(grid: &Grid, direction: Direction) -> bool {
    resolve_move(grid, direction).changed
}

/// Directions that change the grid, in [`Direction::ALL`] order.
pub fn legal_moves(grid: &Grid) -> ArrayVec<Direction, 4> {
    Direction::ALL
        .into_iter()
        .filter(|&d| can_move(grid, d))
        .collect()
}

/// No empty cell and no direction changes the grid.
///
/// A full grid can only change through a merge, so it is enough to look for two
/// equal neighbours.
pub fn is_game_over(grid: &Grid) -> bool {
    grid.is_full() && !grid.has_adjacent_pair()
}
