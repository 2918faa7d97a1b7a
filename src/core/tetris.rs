//! Tetris module - falling-piece transforms, validity, locking, line clears
//!
//! All transforms are pure: they return new `Piece` or `Grid` values and
//! never mutate their inputs. `is_valid_position` is the single source of
//! truth for movement legality and lock detection (a piece locks when
//! moving it down by one is invalid).

use crate::core::pieces::{rotated_index, shape, spawn_col, PieceShape};
use crate::core::rng::SimpleRng;
use crate::core::snake::Segment;
use crate::core::Grid;
use crate::types::{PieceKind, GRID_HEIGHT, GRID_WIDTH};

/// A falling (or previewed) tetromino
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Piece {
    pub id: u64,
    pub kind: PieceKind,
    /// Index into the kind's rotation-state list
    pub rotation: u8,
    /// Anchor position (top-left of the bounding shape)
    pub x: i8,
    pub y: i8,
}

impl Piece {
    /// Filled-cell offsets for the current rotation
    pub fn shape(&self) -> PieceShape {
        shape(self.kind, self.rotation)
    }

    /// Absolute grid positions of the four filled cells
    pub fn cells(&self) -> [(i8, i8); 4] {
        self.shape().map(|(dx, dy)| (self.x + dx, self.y + dy))
    }

    /// Fixed display color of this piece's kind
    pub fn color(&self) -> &'static str {
        self.kind.color()
    }
}

/// Tetris rule engine: piece creation needs the injected RNG and an id
/// counter; everything else lives in free functions.
#[derive(Debug, Clone)]
pub struct TetrisRules {
    next_piece_id: u64,
    rng: SimpleRng,
}

impl TetrisRules {
    pub fn new(seed: u32) -> Self {
        Self {
            next_piece_id: 0,
            rng: SimpleRng::new(seed),
        }
    }

    /// Uniform random kind, rotation 0, horizontally centered, spawn row 0
    pub fn create_random_piece(&mut self) -> Piece {
        let kind = PieceKind::ALL[self.rng.next_range(PieceKind::ALL.len() as u32) as usize];
        let id = self.next_piece_id;
        self.next_piece_id += 1;
        Piece {
            id,
            kind,
            rotation: 0,
            x: spawn_col(kind),
            y: 0,
        }
    }
}

/// Translated copy of a piece
pub fn shifted(piece: &Piece, dx: i8, dy: i8) -> Piece {
    Piece {
        x: piece.x + dx,
        y: piece.y + dy,
        ..*piece
    }
}

/// Rotated copy of a piece (circular through its rotation-state list)
pub fn rotated(piece: &Piece, clockwise: bool) -> Piece {
    Piece {
        rotation: rotated_index(piece.kind, piece.rotation, clockwise),
        ..*piece
    }
}

/// Validity check for every filled cell of the piece:
/// - horizontally out of bounds or below the floor rejects;
/// - cells above the top edge are permitted (pre-spawn overhang);
/// - locked grid cells reject;
/// - snake segments reject when `check_snake` is set.
pub fn is_valid_position(piece: &Piece, grid: &Grid, snake: &[Segment], check_snake: bool) -> bool {
    for (x, y) in piece.cells() {
        if x < 0 || x >= GRID_WIDTH as i8 || y >= GRID_HEIGHT as i8 {
            return false;
        }
        if y < 0 {
            continue;
        }
        if grid.is_occupied(x, y) {
            return false;
        }
        if check_snake && snake.iter().any(|s| s.x == x && s.y == y) {
            return false;
        }
    }
    true
}

/// New grid with the piece's cells locked in; cells above the top edge
/// are silently skipped.
pub fn place(piece: &Piece, grid: &Grid) -> Grid {
    let mut placed = *grid;
    for (x, y) in piece.cells() {
        placed.set(x, y, Some(piece.kind));
    }
    placed
}

/// Compact the grid: every full row is removed and an empty row inserted
/// at the top. Returns the compacted grid and the number of rows cleared.
pub fn clear_lines(grid: &Grid) -> (Grid, u32) {
    let mut compacted = Grid::new();
    let mut cleared = 0u32;
    let mut write_y = GRID_HEIGHT as i8 - 1;

    for read_y in (0..GRID_HEIGHT as i8).rev() {
        if grid.is_row_full(read_y as usize) {
            cleared += 1;
            continue;
        }
        for x in 0..GRID_WIDTH as i8 {
            if let Some(cell) = grid.get(x, read_y) {
                compacted.set(x, write_y, cell);
            }
        }
        write_y -= 1;
    }

    (compacted, cleared)
}

/// Game over iff the topmost row holds any locked block (checked after
/// locking and clearing, not before)
pub fn is_game_over(grid: &Grid) -> bool {
    grid.top_row_occupied()
}
