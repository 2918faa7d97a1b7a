//! GameView: maps a snapshot into a terminal character frame
//!
//! This module is pure (no I/O). Each grid cell renders as two terminal
//! columns to compensate for glyph aspect ratio.

use crate::core::GameSnapshot;
use crate::types::{PieceKind, GRID_HEIGHT, GRID_WIDTH};

/// 24-bit color
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }
}

/// One terminal cell: a character and its foreground color
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Glyph {
    pub ch: char,
    pub fg: Rgb,
    pub bold: bool,
}

impl Default for Glyph {
    fn default() -> Self {
        Self {
            ch: ' ',
            fg: Rgb::new(200, 200, 200),
            bold: false,
        }
    }
}

/// A rendered frame: a dense row-major glyph buffer
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Frame {
    width: u16,
    height: u16,
    cells: Vec<Glyph>,
}

impl Frame {
    pub fn new(width: u16, height: u16) -> Self {
        Self {
            width,
            height,
            cells: vec![Glyph::default(); width as usize * height as usize],
        }
    }

    pub fn width(&self) -> u16 {
        self.width
    }

    pub fn height(&self) -> u16 {
        self.height
    }

    pub fn get(&self, x: u16, y: u16) -> Option<Glyph> {
        if x < self.width && y < self.height {
            Some(self.cells[y as usize * self.width as usize + x as usize])
        } else {
            None
        }
    }

    pub fn put(&mut self, x: u16, y: u16, glyph: Glyph) {
        if x < self.width && y < self.height {
            self.cells[y as usize * self.width as usize + x as usize] = glyph;
        }
    }

    pub fn put_str(&mut self, x: u16, y: u16, text: &str, fg: Rgb, bold: bool) {
        for (i, ch) in text.chars().enumerate() {
            self.put(x + i as u16, y, Glyph { ch, fg, bold });
        }
    }
}

const CELL_W: u16 = 2;
/// Playfield width in terminal columns, borders included
const FIELD_W: u16 = GRID_WIDTH as u16 * CELL_W + 2;
const FIELD_H: u16 = GRID_HEIGHT as u16 + 2;
const PANEL_W: u16 = 18;

const BORDER_FG: Rgb = Rgb::new(200, 200, 200);
const SNAKE_FG: Rgb = Rgb::new(80, 220, 100);
const SNAKE_STAR_FG: Rgb = Rgb::new(255, 215, 0);
const APPLE_FG: Rgb = Rgb::new(230, 60, 60);
const STAR_FG: Rgb = Rgb::new(255, 230, 80);
const LABEL_FG: Rgb = Rgb::new(220, 220, 220);
const VALUE_FG: Rgb = Rgb::new(180, 180, 180);

/// Renders snapshots into fixed-size frames
#[derive(Debug, Clone, Copy, Default)]
pub struct GameView;

impl GameView {
    pub fn new() -> Self {
        Self
    }

    /// Frame dimensions this view always produces
    pub fn frame_size(&self) -> (u16, u16) {
        (FIELD_W + 1 + PANEL_W, FIELD_H)
    }

    pub fn render(&self, snap: &GameSnapshot) -> Frame {
        let (w, h) = self.frame_size();
        let mut frame = Frame::new(w, h);

        draw_border(&mut frame);

        for y in 0..GRID_HEIGHT as i8 {
            for x in 0..GRID_WIDTH as i8 {
                if let Some(Some(kind)) = snap.grid.get(x, y) {
                    put_cell(&mut frame, x, y, '█', kind_color(kind), false);
                }
            }
        }

        for apple in &snap.apples {
            put_cell(&mut frame, apple.x, apple.y, '●', APPLE_FG, false);
        }
        for star in &snap.stars {
            put_cell(&mut frame, star.x, star.y, '★', STAR_FG, true);
        }

        for (x, y) in snap.current_piece.cells() {
            if y >= 0 {
                put_cell(&mut frame, x, y, '▒', kind_color(snap.current_piece.kind), false);
            }
        }

        let snake_fg = if snap.star_power_active {
            SNAKE_STAR_FG
        } else {
            SNAKE_FG
        };
        for (i, seg) in snap.snake.iter().enumerate() {
            let ch = if i == 0 { '█' } else { '▓' };
            put_cell(&mut frame, seg.x, seg.y, ch, snake_fg, i == 0);
        }

        draw_panel(&mut frame, snap);

        if snap.paused {
            draw_overlay(&mut frame, "PAUSED");
        } else if snap.game_over {
            draw_overlay(&mut frame, "GAME OVER");
        }

        frame
    }
}

fn draw_border(frame: &mut Frame) {
    let style = |ch| Glyph {
        ch,
        fg: BORDER_FG,
        bold: false,
    };
    frame.put(0, 0, style('┌'));
    frame.put(FIELD_W - 1, 0, style('┐'));
    frame.put(0, FIELD_H - 1, style('└'));
    frame.put(FIELD_W - 1, FIELD_H - 1, style('┘'));
    for x in 1..FIELD_W - 1 {
        frame.put(x, 0, style('─'));
        frame.put(x, FIELD_H - 1, style('─'));
    }
    for y in 1..FIELD_H - 1 {
        frame.put(0, y, style('│'));
        frame.put(FIELD_W - 1, y, style('│'));
    }
}

fn put_cell(frame: &mut Frame, x: i8, y: i8, ch: char, fg: Rgb, bold: bool) {
    if x < 0 || y < 0 {
        return;
    }
    let px = 1 + x as u16 * CELL_W;
    let py = 1 + y as u16;
    frame.put(px, py, Glyph { ch, fg, bold });
    frame.put(px + 1, py, Glyph { ch, fg, bold });
}

fn draw_panel(frame: &mut Frame, snap: &GameSnapshot) {
    let x = FIELD_W + 1;
    let mut y = 1;

    frame.put_str(x, y, "SCORE", LABEL_FG, true);
    frame.put_str(x + 7, y, &snap.score.to_string(), VALUE_FG, false);
    y += 2;

    frame.put_str(x, y, "LINES", LABEL_FG, true);
    frame.put_str(x + 7, y, &snap.lines_cleared.to_string(), VALUE_FG, false);
    y += 2;

    frame.put_str(x, y, "LENGTH", LABEL_FG, true);
    frame.put_str(x + 7, y, &snap.snake.len().to_string(), VALUE_FG, false);
    y += 2;

    frame.put_str(x, y, "NEXT", LABEL_FG, true);
    frame.put_str(
        x + 7,
        y,
        snap.next_piece.kind.as_str(),
        kind_color(snap.next_piece.kind),
        true,
    );
    y += 2;

    if snap.star_power_active {
        frame.put_str(x, y, "STAR!", SNAKE_STAR_FG, true);
    }
}

fn draw_overlay(frame: &mut Frame, text: &str) {
    let text_w = text.chars().count() as u16;
    let x = (FIELD_W.saturating_sub(text_w)) / 2;
    let y = FIELD_H / 2;
    frame.put_str(x, y, text, Rgb::new(255, 255, 255), true);
}

/// Piece display color, decoded from the kind's fixed hex color
fn kind_color(kind: PieceKind) -> Rgb {
    hex_to_rgb(kind.color()).unwrap_or(Rgb::new(200, 200, 200))
}

fn hex_to_rgb(hex: &str) -> Option<Rgb> {
    let hex = hex.strip_prefix('#')?;
    if hex.len() != 6 {
        return None;
    }
    let r = u8::from_str_radix(&hex[0..2], 16).ok()?;
    let g = u8::from_str_radix(&hex[2..4], 16).ok()?;
    let b = u8::from_str_radix(&hex[4..6], 16).ok()?;
    Some(Rgb::new(r, g, b))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{Apple, Game};

    fn render_new_game() -> (GameSnapshot, Frame) {
        let game = Game::new(12345, 0);
        let snap = game.snapshot();
        let frame = GameView::new().render(&snap);
        (snap, frame)
    }

    #[test]
    fn test_frame_has_fixed_size() {
        let (_, frame) = render_new_game();
        let (w, h) = GameView::new().frame_size();
        assert_eq!((frame.width(), frame.height()), (w, h));
        assert_eq!(h, GRID_HEIGHT as u16 + 2);
    }

    #[test]
    fn test_border_corners() {
        let (_, frame) = render_new_game();
        assert_eq!(frame.get(0, 0).unwrap().ch, '┌');
        assert_eq!(frame.get(FIELD_W - 1, 0).unwrap().ch, '┐');
        assert_eq!(frame.get(0, FIELD_H - 1).unwrap().ch, '└');
        assert_eq!(frame.get(FIELD_W - 1, FIELD_H - 1).unwrap().ch, '┘');
    }

    #[test]
    fn test_snake_head_rendered_at_grid_position() {
        let (snap, frame) = render_new_game();
        let head = snap.snake[0];
        let px = 1 + head.x as u16 * CELL_W;
        let py = 1 + head.y as u16;
        let glyph = frame.get(px, py).unwrap();
        assert_eq!(glyph.ch, '█');
        assert_eq!(glyph.fg, SNAKE_FG);
        assert!(glyph.bold);
    }

    #[test]
    fn test_star_power_recolors_snake() {
        let game = Game::new(12345, 0);
        let mut snap = game.snapshot();
        snap.star_power_active = true;
        let frame = GameView::new().render(&snap);

        let head = snap.snake[0];
        let glyph = frame.get(1 + head.x as u16 * CELL_W, 1 + head.y as u16).unwrap();
        assert_eq!(glyph.fg, SNAKE_STAR_FG);
    }

    #[test]
    fn test_apple_rendered() {
        let game = Game::new(12345, 0);
        let mut snap = game.snapshot();
        // Pin the apple to a cell nothing else draws over.
        snap.apples = vec![Apple { x: 2, y: 20, id: 0 }];
        let frame = GameView::new().render(&snap);

        let glyph = frame.get(1 + 2 * CELL_W, 1 + 20).unwrap();
        assert_eq!(glyph.ch, '●');
        assert_eq!(glyph.fg, APPLE_FG);
    }

    #[test]
    fn test_paused_overlay() {
        let game = Game::new(1, 0);
        let mut snap = game.snapshot();
        snap.paused = true;
        let frame = GameView::new().render(&snap);

        let y = FIELD_H / 2;
        let row: String = (0..frame.width())
            .map(|x| frame.get(x, y).unwrap().ch)
            .collect();
        assert!(row.contains("PAUSED"));
    }

    #[test]
    fn test_hex_to_rgb() {
        assert_eq!(hex_to_rgb("#00f5ff"), Some(Rgb::new(0, 0xf5, 0xff)));
        assert_eq!(hex_to_rgb("#ffffff"), Some(Rgb::new(255, 255, 255)));
        assert_eq!(hex_to_rgb("00f5ff"), None);
        assert_eq!(hex_to_rgb("#xyzxyz"), None);
    }

    #[test]
    fn test_every_kind_color_decodes() {
        for kind in PieceKind::ALL {
            assert!(hex_to_rgb(kind.color()).is_some(), "{:?}", kind);
        }
    }
}
