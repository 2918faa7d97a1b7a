//! Grid module - the shared playfield
//!
//! One 20x24 grid holds the locked tetromino blocks that both rule sets
//! collide against. Flat array storage, row-major. Coordinates: (x, y)
//! with x in 0..20 left to right and y in 0..24 top to bottom.
//! The grid is never resized; it is replaced by value on lock and clear.

use crate::types::{Cell, PieceKind, GRID_HEIGHT, GRID_WIDTH};

/// Total number of cells on the grid
const GRID_SIZE: usize = (GRID_WIDTH as usize) * (GRID_HEIGHT as usize);

/// The shared grid - 20 columns x 24 rows using flat array storage
#[derive(Clone, Copy, PartialEq, Eq)]
pub struct Grid {
    /// Flat array of cells, row-major order (y * WIDTH + x)
    cells: [Cell; GRID_SIZE],
}

impl std::fmt::Debug for Grid {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "Grid {}x{}", GRID_WIDTH, GRID_HEIGHT)?;
        for y in 0..GRID_HEIGHT as i8 {
            for x in 0..GRID_WIDTH as i8 {
                let ch = match self.get(x, y).flatten() {
                    Some(kind) => kind.as_str().chars().next().unwrap_or('#'),
                    None => '.',
                };
                write!(f, "{}", ch)?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

impl Grid {
    /// Create a new empty grid
    pub fn new() -> Self {
        Self {
            cells: [None; GRID_SIZE],
        }
    }

    /// Calculate flat index from (x, y) coordinates
    #[inline(always)]
    fn index(x: i8, y: i8) -> Option<usize> {
        if x < 0 || x >= GRID_WIDTH as i8 || y < 0 || y >= GRID_HEIGHT as i8 {
            return None;
        }
        Some((y as usize) * (GRID_WIDTH as usize) + (x as usize))
    }

    pub fn width(&self) -> u8 {
        GRID_WIDTH
    }

    pub fn height(&self) -> u8 {
        GRID_HEIGHT
    }

    /// Get cell at position (x, y)
    /// Returns None if out of bounds
    pub fn get(&self, x: i8, y: i8) -> Option<Cell> {
        Self::index(x, y).map(|idx| self.cells[idx])
    }

    /// Set cell at position (x, y)
    /// Returns false if out of bounds
    pub fn set(&mut self, x: i8, y: i8, cell: Cell) -> bool {
        match Self::index(x, y) {
            Some(idx) => {
                self.cells[idx] = cell;
                true
            }
            None => false,
        }
    }

    /// Check if position is within bounds and empty
    pub fn is_free(&self, x: i8, y: i8) -> bool {
        matches!(self.get(x, y), Some(None))
    }

    /// Check if position is within bounds and holds a locked block
    pub fn is_occupied(&self, x: i8, y: i8) -> bool {
        matches!(self.get(x, y), Some(Some(_)))
    }

    pub fn is_out_of_bounds(&self, x: i8, y: i8) -> bool {
        x < 0 || x >= GRID_WIDTH as i8 || y < 0 || y >= GRID_HEIGHT as i8
    }

    /// Check if a row is completely filled
    pub fn is_row_full(&self, y: usize) -> bool {
        if y >= GRID_HEIGHT as usize {
            return false;
        }
        let start = y * GRID_WIDTH as usize;
        let end = start + GRID_WIDTH as usize;
        self.cells[start..end].iter().all(|cell| cell.is_some())
    }

    /// Check if the topmost row holds any locked block (game-over condition)
    pub fn top_row_occupied(&self) -> bool {
        self.cells[..GRID_WIDTH as usize]
            .iter()
            .any(|cell| cell.is_some())
    }

    /// Count locked blocks on the grid
    pub fn occupied_count(&self) -> usize {
        self.cells.iter().filter(|cell| cell.is_some()).count()
    }

    /// Kinds of the blocks currently locked, for rendering
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// Build a grid from explicit rows, for tests and fixtures
    pub fn from_rows(rows: &[[Cell; GRID_WIDTH as usize]; GRID_HEIGHT as usize]) -> Self {
        let mut grid = Self::new();
        for (y, row) in rows.iter().enumerate() {
            for (x, cell) in row.iter().enumerate() {
                grid.cells[y * GRID_WIDTH as usize + x] = *cell;
            }
        }
        grid
    }

    /// Fill an entire row with one kind (test fixture helper)
    pub fn fill_row(&mut self, y: i8, kind: PieceKind) {
        for x in 0..GRID_WIDTH as i8 {
            self.set(x, y, Some(kind));
        }
    }
}

impl Default for Grid {
    fn default() -> Self {
        Self::new()
    }
}
