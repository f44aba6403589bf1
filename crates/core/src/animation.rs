//! Animation planning - turns move records into replayable frames
//!
//! The planner is pure data in, pure data out: it never sees a renderer. Each frame
//! holds, for every pre-move cell, how far the tile that started there has travelled
//! (in cell units). Frame `t` of `K` places every moving tile at `t/K` of its total
//! displacement, so the last frame lands exactly on the destination cell. After the
//! last frame the driver redraws from the logical grid with no offsets.

use arrayvec::ArrayVec;

use crate::moves::{Merge, Motion, MoveResult, MAX_MERGES};
use crate::types::{Pos, CELL_COUNT, GRID_SIZE};

/// Visual displacement of a tile, in cells (positive = down / right).
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Offset {
    pub dy: f32,
    pub dx: f32,
}

impl Offset {
    pub const ZERO: Offset = Offset { dy: 0.0, dx: 0.0 };

    pub fn is_zero(&self) -> bool {
        self.dy == 0.0 && self.dx == 0.0
    }
}

/// One sampled step of a move animation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AnimationFrame {
    /// 1-indexed step number.
    pub step: u32,
    pub step_count: u32,
    /// Offsets indexed by the tile's pre-move cell `[row][col]`.
    pub offsets: [[Offset; GRID_SIZE]; GRID_SIZE],
    /// Pre-move cells of tiles being absorbed by a merge.
    pub absorbed: [[bool; GRID_SIZE]; GRID_SIZE],
    /// Pre-move cells of tiles that absorb another tile. Hook for a merge effect;
    /// the terminal view does not draw one.
    pub merging: [[bool; GRID_SIZE]; GRID_SIZE],
}

impl AnimationFrame {
    pub fn offset(&self, pos: Pos) -> Offset {
        self.offsets[pos.row as usize][pos.col as usize]
    }

    /// Fraction of the move completed at this frame, in `(0, 1]`.
    pub fn progress(&self) -> f32 {
        self.step as f32 / self.step_count as f32
    }

    pub fn is_last(&self) -> bool {
        self.step == self.step_count
    }
}

/// Lazily yields the frames of one move.
///
/// Holds no timing state: iterating the same plan twice produces the same frames.
#[derive(Debug, Clone)]
pub struct Animation {
    motions: ArrayVec<Motion, CELL_COUNT>,
    absorbed: [[bool; GRID_SIZE]; GRID_SIZE],
    merging: [[bool; GRID_SIZE]; GRID_SIZE],
    step_count: u32,
    next_step: u32,
}

impl Animation {
    /// Build from move records. A move produces at most one motion per cell and
    /// [`MAX_MERGES`] merges; longer slices are a caller bug.
    pub fn new(motions: &[Motion], merges: &[Merge], step_count: u32) -> Self {
        debug_assert!(
            motions.len() <= CELL_COUNT,
            "{} motions, a move has at most {}",
            motions.len(),
            CELL_COUNT
        );
        debug_assert!(
            merges.len() <= MAX_MERGES,
            "{} merges, a move has at most {}",
            merges.len(),
            MAX_MERGES
        );

        let mut absorbed = [[false; GRID_SIZE]; GRID_SIZE];
        let mut merging = [[false; GRID_SIZE]; GRID_SIZE];
        for m in merges.iter().take(MAX_MERGES) {
            absorbed[m.absorbed.row as usize][m.absorbed.col as usize] = true;
            merging[m.survivor.row as usize][m.survivor.col as usize] = true;
        }

        Self {
            motions: motions.iter().copied().take(CELL_COUNT).collect(),
            absorbed,
            merging,
            step_count,
            next_step: 1,
        }
    }

    pub fn for_move(result: &MoveResult, step_count: u32) -> Self {
        Self::new(&result.motions, &result.merges, step_count)
    }

    pub fn step_count(&self) -> u32 {
        self.step_count
    }

    /// Sample the animation at a 1-indexed step.
    pub fn frame(&self, step: u32) -> AnimationFrame {
        let t = step.min(self.step_count) as f32 / self.step_count.max(1) as f32;
        let mut offsets = [[Offset::ZERO; GRID_SIZE]; GRID_SIZE];
        for m in &self.motions {
            let dy = m.to.row as f32 - m.from.row as f32;
            let dx = m.to.col as f32 - m.from.col as f32;
            offsets[m.from.row as usize][m.from.col as usize] = Offset {
                dy: dy * t,
                dx: dx * t,
            };
        }

        AnimationFrame {
            step,
            step_count: self.step_count,
            offsets,
            absorbed: self.absorbed,
            merging: self.merging,
        }
    }

    /// Start over from the first frame.
    pub fn restart(&mut self) {
        self.next_step = 1;
    }
}

impl Iterator for Animation {
    type Item = AnimationFrame;

    fn next(&mut self) -> Option<AnimationFrame> {
        if self.next_step > self.step_count {
            return None;
        }
        let frame = self.frame(self.next_step);
        self.next_step += 1;
        Some(frame)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let left = (self.step_count + 1).saturating_sub(self.next_step) as usize;
        (left, Some(left))
    }
}

impl ExactSizeIterator for Animation {}

/// Plan every frame of a move. Produces exactly `step_count` frames.
///
/// ```
/// use tui_2048_core::animation::plan_animation;
/// use tui_2048_core::moves::Motion;
/// use tui_2048_core::types::Pos;
///
/// let motions = [Motion { from: Pos::new(0, 2), to: Pos::new(0, 0) }];
/// let frames = plan_animation(&motions, &[], 2);
/// assert_eq!(frames.len(), 2);
/// assert_eq!(frames[0].offset(Pos::new(0, 2)).dx, -1.0);
/// assert_eq!(frames[1].offset(Pos::new(0, 2)).dx, -2.0);
/// ```
pub fn plan_animation(motions: &[Motion], merges: &[Merge], step_count: u32) -> Vec<AnimationFrame> {
    Animation::new(motions, merges, step_count).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn slide() -> [Motion; 2] {
        [
            Motion {
                from: Pos::new(1, 2),
                to: Pos::new(1, 0),
            },
            Motion {
                from: Pos::new(0, 0),
                to: Pos::new(3, 0),
            },
        ]
    }

    #[test]
    fn test_frame_count_matches_step_count() {
        assert_eq!(plan_animation(&slide(), &[], 8).len(), 8);
        assert_eq!(plan_animation(&slide(), &[], 1).len(), 1);
        assert!(plan_animation(&slide(), &[], 0).is_empty());
    }

    #[test]
    fn test_linear_interpolation() {
        let frames = plan_animation(&slide(), &[], 4);
        let across: Vec<f32> = frames.iter().map(|f| f.offset(Pos::new(1, 2)).dx).collect();
        assert_eq!(across, vec![-0.5, -1.0, -1.5, -2.0]);
        let down: Vec<f32> = frames.iter().map(|f| f.offset(Pos::new(0, 0)).dy).collect();
        assert_eq!(down, vec![0.75, 1.5, 2.25, 3.0]);
    }

    #[test]
    fn test_last_frame_lands_exactly() {
        let frames = plan_animation(&slide(), &[], 7);
        let last = frames.last().unwrap();
        assert!(last.is_last());
        assert_eq!(last.offset(Pos::new(1, 2)), Offset { dy: 0.0, dx: -2.0 });
        assert_eq!(last.offset(Pos::new(0, 0)), Offset { dy: 3.0, dx: 0.0 });
    }

    #[test]
    fn test_unmoved_cells_stay_still() {
        for frame in plan_animation(&slide(), &[], 5) {
            assert!(frame.offset(Pos::new(3, 3)).is_zero());
            assert!(frame.offset(Pos::new(2, 1)).is_zero());
        }
    }

    #[test]
    fn test_replanning_is_deterministic() {
        let merges = [Merge {
            absorbed: Pos::new(1, 2),
            survivor: Pos::new(1, 1),
        }];
        let a = plan_animation(&slide(), &merges, 6);
        let b = plan_animation(&slide(), &merges, 6);
        assert_eq!(a, b);

        let mut anim = Animation::new(&slide(), &merges, 6);
        let first: Vec<_> = anim.by_ref().collect();
        anim.restart();
        let second: Vec<_> = anim.collect();
        assert_eq!(first, second);
        assert!(first[0].absorbed[1][2]);
        assert!(first[0].merging[1][1]);
    }

    #[test]
    #[cfg(debug_assertions)]
    #[should_panic(expected = "merges, a move has at most")]
    fn test_too_many_merges_is_rejected() {
        let merge = Merge {
            absorbed: Pos::new(0, 1),
            survivor: Pos::new(0, 0),
        };
        let merges = [merge; MAX_MERGES + 1];
        let _ = Animation::new(&slide(), &merges, 4);
    }

    #[test]
    #[cfg(debug_assertions)]
    #[should_panic(expected = "motions, a move has at most")]
    fn test_too_many_motions_is_rejected() {
        let motions = [slide()[0]; CELL_COUNT + 1];
        let _ = plan_animation(&motions, &[], 4);
    }

    #[test]
    fn test_exact_size() {
        let mut anim = Animation::new(&slide(), &[], 3);
        assert_eq!(anim.len(), 3);
        anim.next();
        assert_eq!(anim.len(), 2);
    }
}
