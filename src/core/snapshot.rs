//! Immutable state snapshot published to external collaborators
//!
//! Produced fresh after every mutation; renderers, UI panels, and audio
//! hooks only ever see a complete, consistent copy.

use crate::core::snake::{Apple, Segment, Star};
use crate::core::tetris::Piece;
use crate::core::Grid;
use crate::types::Direction;

#[derive(Debug, Clone)]
pub struct GameSnapshot {
    pub grid: Grid,
    pub snake: Vec<Segment>,
    pub direction: Direction,
    pub apples: Vec<Apple>,
    pub stars: Vec<Star>,
    pub current_piece: Piece,
    pub next_piece: Piece,
    pub score: u32,
    pub lines_cleared: u32,
    /// Difficulty stub; present but never advanced
    pub level: u32,
    pub pieces_destroyed: u32,
    pub game_over: bool,
    pub paused: bool,
    pub star_power_active: bool,
    pub star_power_end_ms: u64,
    pub last_snake_move_ms: u64,
    pub last_tetris_drop_ms: u64,
}

impl GameSnapshot {
    pub fn playable(&self) -> bool {
        !self.game_over && !self.paused
    }
}
