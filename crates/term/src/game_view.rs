//! GameView: maps a `core::GameSnapshot` (and animation frames) into a terminal framebuffer.
//!
//! This module is pure (no I/O). It can be unit-tested.

use crate::core::{AnimationFrame, GameSnapshot};
use crate::fb::{format_u32, CellStyle, FrameBuffer, Rgb};
use crate::palette::{self, tile_style};
use crate::types::GRID_SIZE;

/// Terminal viewport dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    pub width: u16,
    pub height: u16,
}

impl Viewport {
    pub fn new(width: u16, height: u16) -> Self {
        Self { width, height }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnchorY {
    Center,
    Top,
}

/// A lightweight terminal renderer for the 2048 grid.
pub struct GameView {
    /// Tile width in terminal columns.
    tile_w: u16,
    /// Tile height in terminal rows.
    tile_h: u16,
    /// Columns between tiles (and at the board edges).
    gap_x: u16,
    /// Rows between tiles (and at the board edges).
    gap_y: u16,
    anchor_y: AnchorY,
}

impl Default for GameView {
    fn default() -> Self {
        // 7x3 tiles with a 2x1 gap look roughly square with typical glyph aspect.
        Self {
            tile_w: 7,
            tile_h: 3,
            gap_x: 2,
            gap_y: 1,
            anchor_y: AnchorY::Center,
        }
    }
}

/// Where the board lands inside the viewport.
#[derive(Debug, Clone, Copy)]
struct Layout {
    start_x: u16,
    start_y: u16,
    board_w: u16,
    board_h: u16,
}

impl GameView {
    pub fn new(tile_w: u16, tile_h: u16) -> Self {
        Self {
            tile_w,
            tile_h,
            ..Self::default()
        }
    }

    pub fn with_gap(mut self, gap_x: u16, gap_y: u16) -> Self {
        self.gap_x = gap_x;
        self.gap_y = gap_y;
        self
    }

    pub fn with_anchor_y(mut self, anchor_y: AnchorY) -> Self {
        self.anchor_y = anchor_y;
        self
    }

    /// Board size in terminal cells (tiles plus gaps).
    pub fn board_size(&self) -> (u16, u16) {
        let n = GRID_SIZE as u16;
        (
            n * self.tile_w + (n + 1) * self.gap_x,
            n * self.tile_h + (n + 1) * self.gap_y,
        )
    }

    fn layout(&self, viewport: Viewport) -> Layout {
        let (board_w, board_h) = self.board_size();
        let start_x = viewport.width.saturating_sub(board_w) / 2;
        let start_y = match self.anchor_y {
            AnchorY::Center => viewport.height.saturating_sub(board_h) / 2,
            AnchorY::Top => 0,
        };
        Layout {
            start_x,
            start_y,
            board_w,
            board_h,
        }
    }

    /// Render the resting grid into an existing framebuffer.
    ///
    /// This is the allocation-free hot path. Callers can reuse a framebuffer
    /// across frames and only resize when the terminal size changes.
    pub fn render_into(&self, snap: &GameSnapshot, viewport: Viewport, fb: &mut FrameBuffer) {
        let layout = self.begin(snap, viewport, fb);

        for row in 0..GRID_SIZE {
            for col in 0..GRID_SIZE {
                let value = snap.grid[row][col];
                if value != 0 {
                    let (x, y) = self.tile_origin(layout, row as f32, col as f32);
                    self.draw_tile(fb, x, y, value);
                }
            }
        }

        if snap.game_over {
            self.draw_overlay_text(fb, layout, "GAME OVER");
        }
    }

    /// Render one animation frame: the pre-move tiles, each displaced by the
    /// frame's offset for its starting cell.
    ///
    /// `before` is the snapshot taken before the move was applied.
    pub fn render_frame_into(
        &self,
        before: &GameSnapshot,
        frame: &AnimationFrame,
        viewport: Viewport,
        fb: &mut FrameBuffer,
    ) {
        let layout = self.begin(before, viewport, fb);

        // Absorbed tiles first so the survivors are drawn on top of them.
        for absorbed_pass in [true, false] {
            for row in 0..GRID_SIZE {
                for col in 0..GRID_SIZE {
                    let value = before.grid[row][col];
                    if value == 0 || frame.absorbed[row][col] != absorbed_pass {
                        continue;
                    }
                    let off = frame.offsets[row][col];
                    let (x, y) = self.tile_origin(layout, row as f32 + off.dy, col as f32 + off.dx);
                    self.draw_tile(fb, x, y, value);
                }
            }
        }
    }

    /// Convenience helper that allocates a new framebuffer.
    pub fn render(&self, snap: &GameSnapshot, viewport: Viewport) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);
        self.render_into(snap, viewport, &mut fb);
        fb
    }

    pub fn render_frame(
        &self,
        before: &GameSnapshot,
        frame: &AnimationFrame,
        viewport: Viewport,
    ) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);
        self.render_frame_into(before, frame, viewport, &mut fb);
        fb
    }

    /// Clear, draw the board background, empty slots and side panel.
    fn begin(&self, snap: &GameSnapshot, viewport: Viewport, fb: &mut FrameBuffer) -> Layout {
        fb.resize(viewport.width, viewport.height);
        fb.clear(CellStyle::default().into_cell(' '));

        let layout = self.layout(viewport);
        let board = CellStyle::new(palette::TEXT_DARK, palette::BACKGROUND);
        fb.fill_rect(
            layout.start_x,
            layout.start_y,
            layout.board_w,
            layout.board_h,
            ' ',
            board,
        );

        let slot = CellStyle::new(palette::TEXT_DARK, palette::tile_color(0));
        for row in 0..GRID_SIZE {
            for col in 0..GRID_SIZE {
                let (x, y) = self.tile_origin(layout, row as f32, col as f32);
                fb.fill_rect(x, y, self.tile_w, self.tile_h, ' ', slot);
            }
        }

        self.draw_side_panel(fb, snap, viewport, layout);
        layout
    }

    /// Top-left terminal cell of a tile at a (possibly fractional) grid position.
    fn tile_origin(&self, layout: Layout, row: f32, col: f32) -> (u16, u16) {
        let pitch_x = (self.tile_w + self.gap_x) as f32;
        let pitch_y = (self.tile_h + self.gap_y) as f32;
        let x = (col * pitch_x).round().max(0.0) as u16;
        let y = (row * pitch_y).round().max(0.0) as u16;
        (
            layout.start_x + self.gap_x + x,
            layout.start_y + self.gap_y + y,
        )
    }

    fn draw_tile(&self, fb: &mut FrameBuffer, x: u16, y: u16, value: u32) {
        let style = tile_style(value);
        fb.fill_rect(x, y, self.tile_w, self.tile_h, ' ', style);

        let mut digits = [0u8; 10];
        let len = format_u32(value, &mut digits) as u16;
        let label_x = x + self.tile_w.saturating_sub(len) / 2;
        let label_y = y + self.tile_h / 2;
        fb.put_u32(label_x, label_y, value, style);
    }

    fn draw_side_panel(
        &self,
        fb: &mut FrameBuffer,
        snap: &GameSnapshot,
        viewport: Viewport,
        layout: Layout,
    ) {
        let panel_x = layout
            .start_x
            .saturating_add(layout.board_w)
            .saturating_add(2);
        if panel_x >= viewport.width {
            return;
        }
        let panel_w = viewport.width - panel_x;
        if panel_w < 12 {
            return;
        }

        let label = CellStyle::new(Rgb::new(220, 220, 220), Rgb::new(0, 0, 0)).bold();
        let value = CellStyle::new(Rgb::new(200, 200, 200), Rgb::new(0, 0, 0));
        let hint = CellStyle::new(Rgb::new(120, 120, 120), Rgb::new(0, 0, 0));

        let mut y = layout.start_y;
        fb.put_str(panel_x, y, "SCORE", label);
        y = y.saturating_add(1);
        fb.put_u32(panel_x, y, snap.score, value);
        y = y.saturating_add(2);

        fb.put_str(panel_x, y, "MOVES", label);
        y = y.saturating_add(1);
        fb.put_u32(panel_x, y, snap.moves, value);
        y = y.saturating_add(2);

        fb.put_str(panel_x, y, "BEST", label);
        y = y.saturating_add(1);
        fb.put_u32(panel_x, y, snap.max_tile, value);
        y = y.saturating_add(2);

        for line in ["arrows move", "r restart", "q quit"] {
            if y >= viewport.height {
                break;
            }
            fb.put_str(panel_x, y, line, hint);
            y = y.saturating_add(1);
        }
    }

    fn draw_overlay_text(&self, fb: &mut FrameBuffer, layout: Layout, text: &str) {
        let mid_y = layout.start_y.saturating_add(layout.board_h / 2);
        let text_w = text.chars().count() as u16;
        let x = layout
            .start_x
            .saturating_add(layout.board_w.saturating_sub(text_w) / 2);
        let style = CellStyle::new(Rgb::new(255, 255, 255), Rgb::new(0, 0, 0)).bold();
        fb.put_str(x, mid_y, text, style);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::animation::plan_animation;
    use crate::core::moves::Motion;
    use crate::types::Pos;

    #[test]
    fn board_size_counts_tiles_and_gaps() {
        let view = GameView::default();
        assert_eq!(view.board_size(), (4 * 7 + 5 * 2, 4 * 3 + 5));
        let tight = GameView::new(4, 1).with_gap(0, 0);
        assert_eq!(tight.board_size(), (16, 4));
    }

    #[test]
    fn moving_tile_is_drawn_between_cells() {
        let view = GameView::new(4, 1).with_gap(0, 0).with_anchor_y(AnchorY::Top);
        let mut before = GameSnapshot::default();
        before.grid[0][2] = 2;

        let motions = [Motion {
            from: Pos::new(0, 2),
            to: Pos::new(0, 0),
        }];
        let frames = plan_animation(&motions, &[], 2);
        let vp = Viewport::new(16, 4);

        // Halfway: the tile spans columns 4..8 (grid column 1).
        let fb = view.render_frame(&before, &frames[0], vp);
        assert_eq!(fb.get(4, 0).unwrap().style.bg, palette::tile_color(2));
        assert_eq!(fb.get(8, 0).unwrap().style.bg, palette::tile_color(0));

        // Last frame: exactly on grid column 0.
        let fb = view.render_frame(&before, &frames[1], vp);
        assert_eq!(fb.get(0, 0).unwrap().style.bg, palette::tile_color(2));
        assert_eq!(fb.get(8, 0).unwrap().style.bg, palette::tile_color(0));
    }
}
