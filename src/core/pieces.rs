//! Pieces module - tetromino shape tables and rotation states
//!
//! Each kind has a fixed ordered list of rotation states (1 for O, 2 for
//! I/S/Z, 4 for T/J/L). Rotation advances circularly through the list;
//! there are no wall kicks - an invalid rotation is simply rejected by
//! the caller. Offsets are relative to the piece anchor (top-left of the
//! bounding shape).

use crate::types::{PieceKind, GRID_WIDTH};

/// Offset of a single filled cell relative to the piece anchor
pub type CellOffset = (i8, i8);

/// Shape of a piece - 4 filled-cell offsets
pub type PieceShape = [CellOffset; 4];

/// Number of rotation states for a kind
pub fn rotation_count(kind: PieceKind) -> u8 {
    match kind {
        PieceKind::O => 1,
        PieceKind::I | PieceKind::S | PieceKind::Z => 2,
        PieceKind::T | PieceKind::J | PieceKind::L => 4,
    }
}

/// Width of the bounding shape, used to center the spawn column
pub fn bounding_width(kind: PieceKind) -> u8 {
    match kind {
        PieceKind::I => 4,
        PieceKind::O => 2,
        _ => 3,
    }
}

/// Horizontally centered spawn column for a kind (spawn row is 0)
pub fn spawn_col(kind: PieceKind) -> i8 {
    ((GRID_WIDTH - bounding_width(kind)) / 2) as i8
}

/// Get the shape for a kind and rotation index
///
/// The rotation index is taken modulo the kind's rotation count, so any
/// u8 is a valid input.
pub fn shape(kind: PieceKind, rotation: u8) -> PieceShape {
    let r = rotation % rotation_count(kind);
    match kind {
        PieceKind::I => I_SHAPES[r as usize],
        PieceKind::O => O_SHAPE,
        PieceKind::T => T_SHAPES[r as usize],
        PieceKind::S => S_SHAPES[r as usize],
        PieceKind::Z => Z_SHAPES[r as usize],
        PieceKind::J => J_SHAPES[r as usize],
        PieceKind::L => L_SHAPES[r as usize],
    }
}

/// Next rotation index, circular
pub fn rotated_index(kind: PieceKind, rotation: u8, clockwise: bool) -> u8 {
    let count = rotation_count(kind);
    if clockwise {
        (rotation + 1) % count
    } else {
        (rotation + count - 1) % count
    }
}

const I_SHAPES: [PieceShape; 2] = [
    // horizontal bar on row 1
    [(0, 1), (1, 1), (2, 1), (3, 1)],
    // vertical bar on column 2
    [(2, 0), (2, 1), (2, 2), (2, 3)],
];

const O_SHAPE: PieceShape = [(0, 0), (1, 0), (0, 1), (1, 1)];

const T_SHAPES: [PieceShape; 4] = [
    [(1, 0), (0, 1), (1, 1), (2, 1)],
    [(1, 0), (1, 1), (2, 1), (1, 2)],
    [(0, 1), (1, 1), (2, 1), (1, 2)],
    [(1, 0), (0, 1), (1, 1), (1, 2)],
];

const S_SHAPES: [PieceShape; 2] = [
    [(1, 0), (2, 0), (0, 1), (1, 1)],
    [(1, 0), (1, 1), (2, 1), (2, 2)],
];

const Z_SHAPES: [PieceShape; 2] = [
    [(0, 0), (1, 0), (1, 1), (2, 1)],
    [(2, 0), (1, 1), (2, 1), (1, 2)],
];

const J_SHAPES: [PieceShape; 4] = [
    [(0, 0), (0, 1), (1, 1), (2, 1)],
    [(1, 0), (2, 0), (1, 1), (1, 2)],
    [(0, 1), (1, 1), (2, 1), (2, 2)],
    [(1, 0), (1, 1), (0, 2), (1, 2)],
];

const L_SHAPES: [PieceShape; 4] = [
    [(2, 0), (0, 1), (1, 1), (2, 1)],
    [(1, 0), (1, 1), (1, 2), (2, 2)],
    [(0, 1), (1, 1), (2, 1), (0, 2)],
    [(0, 0), (1, 0), (1, 1), (1, 2)],
];
