//! Core types shared across the application
//! This module contains pure data types with no external dependencies

/// Shared grid dimensions (both rule sets play on the same grid)
pub const GRID_WIDTH: u8 = 20;
pub const GRID_HEIGHT: u8 = 24;

/// Gameplay timing constants (in milliseconds)
pub const SNAKE_MOVE_MS: u64 = 200;
pub const TETRIS_DROP_MS: u64 = 800;
pub const STAR_POWER_MS: u64 = 8000;

/// Probability that a star spawns when an apple is consumed
pub const STAR_SPAWN_CHANCE: f32 = 0.03;

/// Initial snake length (also the baseline for apples-eaten accounting)
pub const INITIAL_SNAKE_LEN: usize = 3;

/// Scoring constants
pub const APPLE_POINTS: u32 = 100;
pub const LINE_POINTS: u32 = 1000;
pub const STAR_POINTS: u32 = 500;
pub const DESTROY_POINTS: u32 = 50;

/// Tetromino piece kinds
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PieceKind {
    I,
    O,
    T,
    S,
    Z,
    J,
    L,
}

impl PieceKind {
    /// All kinds, in spawn-selection order
    pub const ALL: [PieceKind; 7] = [
        PieceKind::I,
        PieceKind::O,
        PieceKind::T,
        PieceKind::S,
        PieceKind::Z,
        PieceKind::J,
        PieceKind::L,
    ];

    /// Fixed display color (hex tag for renderers)
    pub fn color(&self) -> &'static str {
        match self {
            PieceKind::I => "#00f5ff",
            PieceKind::O => "#ffff00",
            PieceKind::T => "#a000ff",
            PieceKind::S => "#00ff00",
            PieceKind::Z => "#ff0000",
            PieceKind::J => "#0000ff",
            PieceKind::L => "#ffa500",
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            PieceKind::I => "i",
            PieceKind::O => "o",
            PieceKind::T => "t",
            PieceKind::S => "s",
            PieceKind::Z => "z",
            PieceKind::J => "j",
            PieceKind::L => "l",
        }
    }
}

/// Cell on the shared grid (None = empty, Some = locked block of that kind)
pub type Cell = Option<PieceKind>;

/// Snake heading
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    pub fn opposite(&self) -> Self {
        match self {
            Direction::Up => Direction::Down,
            Direction::Down => Direction::Up,
            Direction::Left => Direction::Right,
            Direction::Right => Direction::Left,
        }
    }

    /// Unit step for one snake move
    pub fn offset(&self) -> (i8, i8) {
        match self {
            Direction::Up => (0, -1),
            Direction::Down => (0, 1),
            Direction::Left => (-1, 0),
            Direction::Right => (1, 0),
        }
    }
}

/// Manual tetromino actions
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PieceAction {
    MoveLeft,
    MoveRight,
    SoftDrop,
    RotateCw,
    RotateCcw,
}

/// Commands fed into the simulation, processed strictly in arrival order
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Steer(Direction),
    Piece(PieceAction),
    TogglePause,
    Reset,
}

/// Notifications emitted by the simulation (audio/UI hooks; carry no state back)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameEvent {
    AppleEaten,
    StarCollected,
    LinesCleared(u32),
    PieceDestroyed,
    PiecePlaced,
    GameOver { final_score: u32 },
}
